use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};
use crate::output::{contribution_bar, format_score, max_abs_contribution};
use crate::scoring::{parse_number, Dimension};
use crate::tui::app::{App, InputMode, View};

const BAR_WIDTH: usize = 10;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 14 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Fields(fill) + Result(2) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Title bar
        Constraint::Length(1),  // Tab bar
        Constraint::Fill(1),    // Field table
        Constraint::Length(2),  // Result line
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    render_fields(frame, chunks[2], app);
    render_result(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "Mood Score";
    let mut spans = vec![Span::styled(left, Style::default().fg(app.theme.title_color).bold())];

    // Profile name on the right
    let profile_text = format!("profile: {}", app.settings.profile);
    let padding_len = (area.width as usize).saturating_sub(left.len() + profile_text.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(profile_text, Style::default().fg(app.theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = vec!["Score", "Weights"];
    let selected = match app.current_view {
        View::Score => 0,
        View::Weights => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive_style)
        .highlight_style(app.theme.tab_active_style.reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_fields(frame: &mut Frame, area: Rect, app: &mut App) {
    let view: &App = app;
    let selected = view.selected_dimension();
    let editing = view.input_mode == InputMode::Editing;
    let max_abs = max_abs_contribution(&view.result);

    let rows: Vec<Row> = Dimension::ALL
        .iter()
        .enumerate()
        .map(|(idx, dimension)| {
            let index = format!("{}.", idx + 1);

            let text = view.field_text(*dimension);
            let field = if editing && *dimension == selected {
                Span::styled(format!("{}|", text), view.theme.field_editing)
            } else if text.is_empty() {
                Span::styled("-", Style::default().fg(view.theme.muted))
            } else {
                Span::styled(text.to_string(), Style::default().fg(view.theme.field_text))
            };

            let detail = match view.current_view {
                View::Score => contribution_line(view, *dimension, max_abs),
                View::Weights => weight_value_line(view, *dimension),
            };

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(view.theme.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(index).style(Style::default().fg(view.theme.index_color)),
                Cell::from(dimension.label()),
                Cell::from(Line::from(field)),
                Cell::from(detail),
            ])
            .style(row_style)
        })
        .collect();

    let (field_header, detail_header) = match app.current_view {
        View::Score => ("Reading", "Contribution"),
        View::Weights => ("Weight", "Counts as"),
    };

    let widths = [
        Constraint::Length(3),   // Index: "6."
        Constraint::Length(12),  // Dimension: "Mood Factor"
        Constraint::Length(14),  // Field text
        Constraint::Fill(1),     // Detail
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Dimension", field_header, detail_header])
                .style(app.theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(app.theme.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// "x 2 = 6 ██████░░░░" for the score view
fn contribution_line(app: &App, dimension: Dimension, max_abs: f64) -> Line<'static> {
    let term = &app.result.breakdown[dimension.index()];
    let bar = contribution_bar(term.contribution, max_abs, BAR_WIDTH);

    Line::from(vec![
        Span::styled(
            format!("x {} = ", format_score(term.weight)),
            Style::default().fg(app.theme.muted),
        ),
        Span::raw(format!("{:<8} ", format_score(term.contribution))),
        Span::styled(bar, Style::default().fg(app.theme.contribution_color(term.contribution))),
    ])
}

/// Effective numeric value of a weight for the weights view
fn weight_value_line(app: &App, dimension: Dimension) -> Line<'static> {
    match parse_number(app.settings.weight(dimension)) {
        Some(v) => Line::from(Span::raw(format_score(v))),
        None => Line::from(Span::styled(
            "0 (not a number)",
            Style::default().fg(app.theme.flash_error),
        )),
    }
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::raw("Result: "),
        Span::styled(format_score(app.result.score), app.theme.result_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") {
            app.theme.flash_error
        } else {
            app.theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let saved = match app.last_saved {
            Some(at) if at.elapsed().as_secs() < 60 => format!("saved {}s ago", at.elapsed().as_secs()),
            Some(at) => format!("saved {}m ago", at.elapsed().as_secs() / 60),
            None => String::new(),
        };

        // Build hints with colored shortcut keys
        let hints: Vec<(&str, &str)> = match (app.input_mode, app.current_view) {
            (InputMode::Editing, _) => vec![
                ("type", ":edit "),
                ("Backspace", ":delete "),
                ("Enter/Esc", ":done"),
            ],
            (_, View::Score) => vec![
                ("j/k", ":nav "),
                ("Enter", ":edit "),
                ("x", ":clear "),
                ("Tab", ":weights "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            (_, View::Weights) => vec![
                ("j/k", ":nav "),
                ("Enter", ":edit "),
                ("R", ":reset "),
                ("Tab", ":score "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        if !saved.is_empty() {
            spans.push(Span::styled(saved, Style::default().fg(app.theme.muted)));
            spans.push(Span::raw("  "));
        }
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(app.theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(50, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", app.theme.popup_title))
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Move down"),
        ("k / Up        ", "Move up"),
        ("Enter / e     ", "Edit selected field"),
        ("Esc / Enter   ", "Stop editing"),
        ("Tab           ", "Toggle Score/Weights"),
        ("x             ", "Clear all readings"),
        ("R             ", "Reset weights to 1"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::theme::ThemeColors;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn test_app() -> App {
        let path = std::env::temp_dir().join("mood_score_ui_unused.yaml");
        App::new(Settings::default(), path, ThemeColors::dark(), false)
    }

    #[test]
    fn test_draw_score_view() {
        let mut app = test_app();
        app.push_char('3');

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Mood Score"));
        assert!(text.contains("Mood Factor"));
        assert!(text.contains("Result: 3"));
    }

    #[test]
    fn test_draw_weights_view() {
        let mut app = test_app();
        app.toggle_view();
        app.settings.set_weight(Dimension::Study, "abc".to_string());

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Counts as"));
        assert!(text.contains("0 (not a number)"));
    }

    #[test]
    fn test_draw_small_terminal() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        assert!(buffer_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_fixed(50, 14, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 10));
    }
}
