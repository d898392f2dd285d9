//! Centralized theme module for TUI color constants and styles

use clap::ValueEnum;
use ratatui::prelude::*;

/// Requested theme, from `--theme`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Pick from the terminal's background luminance
    #[default]
    Auto,
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Contribution bar colors
    pub bar_positive: Color,
    pub bar_negative: Color,
    pub bar_empty: Color,

    // Field list colors
    pub row_alt_bg: Color,
    pub index_color: Color,
    pub field_text: Color,
    pub field_editing: Style,

    // Styles
    pub header_style: Style,
    pub row_selected: Style,
    pub result_style: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            bar_positive: Color::Green,
            bar_negative: Color::Red,
            bar_empty: Color::DarkGray,
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            field_text: Color::White,
            field_editing: Style::new().fg(Color::Yellow).bold(),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            result_style: Style::new().fg(Color::Cyan).bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            tab_active_style: Style::new().fg(Color::Cyan).bold(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    pub fn light() -> Self {
        Self {
            bar_positive: Color::Rgb(0, 128, 0),
            bar_negative: Color::Rgb(180, 0, 0),
            bar_empty: Color::Indexed(250),
            row_alt_bg: Color::Indexed(254),
            index_color: Color::Indexed(244),
            field_text: Color::Black,
            field_editing: Style::new().fg(Color::Rgb(160, 90, 0)).bold(),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            result_style: Style::new().fg(Color::Blue).bold(),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            tab_active_style: Style::new().fg(Color::Blue).bold(),
            tab_inactive_style: Style::new().fg(Color::Indexed(246)),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(180, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Bar color for a contribution; negative terms pull the score down
    pub fn contribution_color(&self, contribution: f64) -> Color {
        if contribution < 0.0 {
            self.bar_negative
        } else {
            self.bar_positive
        }
    }
}

/// Resolve the palette to use.
///
/// `Auto` queries the terminal background; must run before the TUI takes
/// over the terminal. Falls back to dark when the terminal doesn't answer.
pub fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_themes() {
        assert_eq!(resolve_theme(Theme::Dark).title_color, Color::Cyan);
        assert_eq!(resolve_theme(Theme::Light).title_color, Color::Blue);
    }

    #[test]
    fn test_contribution_color() {
        let colors = ThemeColors::dark();
        assert_eq!(colors.contribution_color(3.0), Color::Green);
        assert_eq!(colors.contribution_color(0.0), Color::Green);
        assert_eq!(colors.contribution_color(-1.0), Color::Red);
    }
}
