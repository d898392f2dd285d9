pub mod formatter;

pub use formatter::{
    contribution_bar, format_breakdown, format_json, format_result_line, format_score,
    format_weights, max_abs_contribution, should_use_colors,
};
