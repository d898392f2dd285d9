use super::number::parse_number;
use super::vectors::WeightVector;

/// Report weights that will not behave like the number the user probably meant.
///
/// Flags text that does not parse (it counts as 0) and values that are not
/// finite. Returns all findings at once. Purely advisory: scoring accepts any
/// weight text regardless of what this says.
pub fn check_weights(weights: &WeightVector) -> Result<(), Vec<String>> {
    let mut findings = Vec::new();

    for (dimension, text) in weights.iter() {
        let key = dimension.settings_key();
        match parse_number(text) {
            None if text.trim().is_empty() => findings.push(format!(
                "{} ({}): empty, counts as 0",
                key, dimension
            )),
            None => findings.push(format!(
                "{} ({}): '{}' is not a number, counts as 0",
                key, dimension, text
            )),
            Some(value) if !value.is_finite() => findings.push(format!(
                "{} ({}): '{}' is not finite, scores will be infinite or NaN",
                key, dimension, text
            )),
            Some(_) => {}
        }
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(findings)
    }
}
