/// Parse the leading number of a user-entered text.
///
/// Lenient on purpose: surrounding whitespace is ignored and so is anything
/// after the longest valid prefix, so "2abc" is 2 and "1e" is 1. Accepted
/// forms are an optional sign, a decimal mantissa ("12", "1.5", ".5", "5.")
/// with an optional exponent, or "Infinity". Returns `None` when no number
/// can be read ("", "abc", "NaN", "inf").
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let (negative, rest) = if let Some(r) = s.strip_prefix('-') {
        (true, r)
    } else if let Some(r) = s.strip_prefix('+') {
        (false, r)
    } else {
        (false, s)
    };

    if rest.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let bytes = rest.as_bytes();
    let int_len = count_digits(bytes);
    let mut pos = int_len;

    let mut frac = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_len = count_digits(&bytes[pos + 1..]);
        frac = &rest[pos + 1..pos + 1 + frac_len];
        pos += 1 + frac_len;
    }

    if int_len == 0 && frac.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        let exp_sign = match bytes.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                "-"
            }
            Some(b'+') => {
                exp_pos += 1;
                ""
            }
            _ => "",
        };
        let exp_len = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_len > 0 {
            exponent = format!("e{}{}", exp_sign, &rest[exp_pos..exp_pos + exp_len]);
        }
    }

    let int = if int_len == 0 { "0" } else { &rest[..int_len] };
    let frac = if frac.is_empty() { "0" } else { frac };
    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        int,
        frac,
        exponent
    );
    normalized.parse().ok()
}

/// Parse a number, resolving anything unreadable to 0.
pub fn number_or_zero(s: &str) -> f64 {
    parse_number(s).unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
