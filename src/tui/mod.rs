pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

/// Redraw cadence when no key arrives; bounds how late a flash message clears
const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(TICK_RATE);

    if app.verbose {
        crate::buffered_eprintln!(
            "Scoring session opened with weights from {}",
            app.settings_path.display()
        );
    }

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        app::InputMode::Normal => match key.code {
            KeyCode::Char('q') => app.should_quit = true,

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

            KeyCode::Enter | KeyCode::Char('e') => app.start_editing(),

            KeyCode::Tab => app.toggle_view(),

            KeyCode::Char('x') if app.current_view == app::View::Score => app.clear_inputs(),
            KeyCode::Char('R') if app.current_view == app::View::Weights => app.reset_weights(),

            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Editing => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.stop_editing(),
            KeyCode::Backspace => app.pop_char(),
            // Moving between fields keeps editing on
            KeyCode::Down | KeyCode::Tab => app.next_row(),
            KeyCode::Up | KeyCode::BackTab => app.previous_row(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
