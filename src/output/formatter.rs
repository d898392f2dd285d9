use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::config::Settings;
use crate::scoring::{parse_number, Dimension, ScoreResult};

/// Widest dimension label ("Mood Factor")
const LABEL_WIDTH: usize = 11;
const BAR_WIDTH: usize = 10;
/// Below this terminal width the contribution bar is left out
const MIN_WIDTH_FOR_BAR: usize = 60;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Render a number the way the score is displayed everywhere.
///
/// Integral values have no fractional part ("8"), everything else uses the
/// shortest representation that round-trips ("0.30000000000000004").
/// Magnitudes from 1e21 up and below 1e-6 switch to exponent form with a
/// signed exponent ("1e+21", "1.5e-7"). Non-finite values are "Infinity",
/// "-Infinity" and "NaN".
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        "NaN".to_string()
    } else if score == f64::INFINITY {
        "Infinity".to_string()
    } else if score == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if score == 0.0 {
        // Also covers -0.0
        "0".to_string()
    } else if score.abs() >= 1e21 || score.abs() < 1e-6 {
        let text = format!("{:e}", score);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        format!("{}", score)
    }
}

/// "Result: N" line shown under every computation
pub fn format_result_line(score: f64, use_colors: bool) -> String {
    let value = format_score(score);
    if use_colors {
        format!("Result: {}", value.bold())
    } else {
        format!("Result: {}", value)
    }
}

/// Proportional bar of `width` cells for `value` relative to `max_abs`
pub fn contribution_bar(value: f64, max_abs: f64, width: usize) -> String {
    let ratio = if max_abs > 0.0 && value.is_finite() {
        (value.abs() / max_abs).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Largest finite absolute contribution, used to scale bars
pub fn max_abs_contribution(result: &ScoreResult) -> f64 {
    result
        .breakdown
        .iter()
        .map(|c| c.contribution.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max)
}

/// Format the per-dimension table followed by the result line.
/// Columns: Dimension, Input, Weight, Contribution, and a bar when there is room.
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let show_bar = get_terminal_width().map_or(true, |w| w >= MIN_WIDTH_FOR_BAR);
    let max_abs = max_abs_contribution(result);

    let header = format!(
        "{:<label$}  {:>8}  {:>8}  {:>12}",
        "Dimension",
        "Input",
        "Weight",
        "Contribution",
        label = LABEL_WIDTH
    );

    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for c in &result.breakdown {
        let mut line = format!(
            "{:<label$}  {:>8}  {:>8}  {:>12}",
            c.dimension.label(),
            format_score(c.input),
            format_weight_text(&c.weight_text),
            format_score(c.contribution),
            label = LABEL_WIDTH
        );
        if show_bar {
            let bar = contribution_bar(c.contribution, max_abs, BAR_WIDTH);
            if use_colors {
                let colored = if c.contribution < 0.0 {
                    bar.red().to_string()
                } else {
                    bar.green().to_string()
                };
                line.push_str(&format!("  {}", colored));
            } else {
                line.push_str(&format!("  {}", bar));
            }
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format_result_line(result.score, use_colors));
    lines.join("\n")
}

/// Format the configured weights, one line per dimension:
/// "weight1  Work         \"2\"  = 2"
pub fn format_weights(settings: &Settings, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let profile_line = format!("Profile: {}", settings.profile);
    lines.push(if use_colors {
        profile_line.bold().to_string()
    } else {
        profile_line
    });

    for dimension in Dimension::ALL {
        let text = settings.weight(dimension);
        let effective = match parse_number(text) {
            Some(v) => format!("= {}", format_score(v)),
            None => "= 0 (not a number)".to_string(),
        };
        let quoted = format!("{:?}", text);

        if use_colors {
            lines.push(format!(
                "{}  {:<label$}  {:<10}  {}",
                dimension.settings_key().dimmed(),
                dimension.label(),
                quoted.cyan(),
                effective,
                label = LABEL_WIDTH
            ));
        } else {
            lines.push(format!(
                "{}  {:<label$}  {:<10}  {}",
                dimension.settings_key(),
                dimension.label(),
                quoted,
                effective,
                label = LABEL_WIDTH
            ));
        }
    }

    lines.join("\n")
}

/// Format a score result as pretty JSON for scripting
pub fn format_json(result: &ScoreResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Show weight text as typed, with a marker for empty text
fn format_weight_text(text: &str) -> String {
    if text.trim().is_empty() {
        "(empty)".to_string()
    } else {
        truncate(text.trim(), 8)
    }
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}
