use crate::config::Settings;
use crate::scoring::{Dimension, InputVector, ScoreResult, WeightedScoreCalculator, DIMENSION_COUNT};
use crate::tui::theme::ThemeColors;
use std::path::PathBuf;
use std::time::Instant;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    /// Enter today's readings and watch the score
    Score,
    /// Edit the weight of each dimension
    Weights,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    Help,
}

pub struct App {
    pub current_view: View,
    pub input_mode: InputMode,
    pub table_state: ratatui::widgets::TableState,
    /// Readings as typed, one per dimension
    pub input_texts: [String; DIMENSION_COUNT],
    pub inputs: InputVector,
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub calculator: WeightedScoreCalculator,
    pub result: ScoreResult,
    pub flash_message: Option<(String, Instant)>,
    pub last_saved: Option<Instant>,
    pub should_quit: bool,
    pub verbose: bool,
    pub theme: ThemeColors,
}

impl App {
    /// Start a scoring session with empty readings and the given settings
    pub fn new(settings: Settings, settings_path: PathBuf, theme: ThemeColors, verbose: bool) -> Self {
        let calculator = WeightedScoreCalculator::with_weights(settings.weights());
        let inputs = InputVector::default();
        let result = calculator.score(&inputs);

        let mut table_state = ratatui::widgets::TableState::default();
        table_state.select(Some(0));

        Self {
            current_view: View::Score,
            input_mode: InputMode::Normal,
            table_state,
            input_texts: Default::default(),
            inputs,
            settings,
            settings_path,
            calculator,
            result,
            flash_message: None,
            last_saved: None,
            should_quit: false,
            verbose,
            theme,
        }
    }

    pub fn selected_dimension(&self) -> Dimension {
        self.table_state
            .selected()
            .and_then(Dimension::from_index)
            .unwrap_or(Dimension::Work)
    }

    /// Text of a field in the current view
    pub fn field_text(&self, dimension: Dimension) -> &str {
        match self.current_view {
            View::Score => &self.input_texts[dimension.index()],
            View::Weights => self.settings.weight(dimension),
        }
    }

    pub fn next_row(&mut self) {
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < DIMENSION_COUNT => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let i = match self.table_state.selected() {
            Some(0) | None => DIMENSION_COUNT - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Toggle between Score and Weights views, keeping the selected row
    pub fn toggle_view(&mut self) {
        self.current_view = match self.current_view {
            View::Score => View::Weights,
            View::Weights => View::Score,
        };
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Type a character into the selected field.
    ///
    /// Reading fields only take characters that can appear in a number;
    /// weight fields take anything printable.
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let dimension = self.selected_dimension();
        match self.current_view {
            View::Score => {
                if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
                    return;
                }
                self.input_texts[dimension.index()].push(c);
                self.update_input(dimension);
            }
            View::Weights => {
                let mut text = self.settings.weight(dimension).to_string();
                text.push(c);
                self.edit_weight(dimension, text);
            }
        }
    }

    /// Delete the last character of the selected field
    pub fn pop_char(&mut self) {
        let dimension = self.selected_dimension();
        match self.current_view {
            View::Score => {
                if self.input_texts[dimension.index()].pop().is_some() {
                    self.update_input(dimension);
                }
            }
            View::Weights => {
                let mut text = self.settings.weight(dimension).to_string();
                if text.pop().is_some() {
                    self.edit_weight(dimension, text);
                }
            }
        }
    }

    /// Re-read one reading from its text and rescore
    fn update_input(&mut self, dimension: Dimension) {
        self.inputs.set_text(dimension, &self.input_texts[dimension.index()]);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = self.calculator.score(&self.inputs);
    }

    /// Store a weight edit: update settings, reconfigure, rescore and persist
    pub fn edit_weight(&mut self, dimension: Dimension, text: String) {
        self.settings.set_weight(dimension, text);
        self.calculator.configure(self.settings.weights());
        self.recompute();
        self.save_settings();
    }

    /// Empty every reading, as if the score view was opened fresh
    pub fn clear_inputs(&mut self) {
        self.input_texts = Default::default();
        self.inputs = InputVector::default();
        self.recompute();
        self.show_flash("Inputs cleared".to_string());
    }

    /// Put all weights back to "1" and persist
    pub fn reset_weights(&mut self) {
        self.settings.reset_weights();
        self.calculator.configure(self.settings.weights());
        self.recompute();
        if self.save_settings() {
            self.show_flash("Weights reset to defaults".to_string());
        }
    }

    /// Write the full settings record to disk. Failures become a flash
    /// message; the in-memory edit is kept either way.
    fn save_settings(&mut self) -> bool {
        match crate::config::save_settings(&self.settings_path, &self.settings) {
            Ok(()) => {
                self.last_saved = Some(Instant::now());
                if self.verbose {
                    crate::buffered_eprintln!("Saved settings to {}", self.settings_path.display());
                }
                true
            }
            Err(e) => {
                self.show_flash(format!("Failed to save settings: {}", e));
                false
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn test_app(name: &str) -> App {
        let path = env::temp_dir().join(format!("mood_score_app_{}.yaml", name));
        let _ = fs::remove_file(&path);
        App::new(Settings::default(), path, ThemeColors::dark(), false)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn test_new_session_starts_empty() {
        let app = test_app("new");
        assert_eq!(app.current_view, View::Score);
        assert_eq!(app.selected_dimension(), Dimension::Work);
        assert_eq!(app.inputs, InputVector::default());
        assert_eq!(app.result.score, 0.0);
        assert!(app.input_texts.iter().all(|t| t.is_empty()));
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut app = test_app("nav");
        app.previous_row();
        assert_eq!(app.selected_dimension(), Dimension::MoodFactor);
        app.next_row();
        assert_eq!(app.selected_dimension(), Dimension::Work);
        app.next_row();
        app.next_row();
        assert_eq!(app.selected_dimension(), Dimension::Study);
    }

    #[test]
    fn test_typing_reading_rescores() {
        let mut app = test_app("typing");
        app.start_editing();
        type_text(&mut app, "3");
        assert_eq!(app.result.score, 3.0);

        type_text(&mut app, "2");
        assert_eq!(app.input_texts[0], "32");
        assert_eq!(app.result.score, 32.0);

        app.next_row();
        type_text(&mut app, "1.5");
        assert_eq!(app.result.score, 33.5);
    }

    #[test]
    fn test_reading_rejects_non_numeric_chars() {
        let mut app = test_app("reject");
        type_text(&mut app, "4x!");
        assert_eq!(app.input_texts[0], "4");
        assert_eq!(app.result.score, 4.0);
    }

    #[test]
    fn test_partial_reading_counts_as_zero() {
        let mut app = test_app("partial");
        type_text(&mut app, "-");
        assert_eq!(app.input_texts[0], "-");
        assert_eq!(app.inputs.get(Dimension::Work), 0.0);
        type_text(&mut app, "2");
        assert_eq!(app.result.score, -2.0);
    }

    #[test]
    fn test_backspace_rescores() {
        let mut app = test_app("backspace");
        type_text(&mut app, "25");
        app.pop_char();
        assert_eq!(app.result.score, 2.0);
        app.pop_char();
        assert_eq!(app.result.score, 0.0);
        // Nothing left to delete
        app.pop_char();
        assert!(app.input_texts[0].is_empty());
    }

    #[test]
    fn test_weight_edit_persists_and_rescores() {
        let mut app = test_app("weight_edit");
        type_text(&mut app, "3");
        assert_eq!(app.result.score, 3.0);

        app.toggle_view();
        assert_eq!(app.current_view, View::Weights);
        assert_eq!(app.field_text(Dimension::Work), "1");

        // "1" -> "" -> "2"
        app.pop_char();
        assert_eq!(app.result.score, 0.0);
        type_text(&mut app, "2");
        assert_eq!(app.field_text(Dimension::Work), "2");
        assert_eq!(app.result.score, 6.0);

        let saved = crate::config::load_settings(&app.settings_path).unwrap();
        assert_eq!(saved.weight(Dimension::Work), "2");
        assert!(app.last_saved.is_some());

        let _ = fs::remove_file(&app.settings_path);
    }

    #[test]
    fn test_weight_accepts_any_text() {
        let mut app = test_app("weight_text");
        app.toggle_view();
        app.next_row();
        app.next_row();
        app.pop_char();
        type_text(&mut app, "abc");
        assert_eq!(app.settings.weight(Dimension::Study), "abc");

        app.toggle_view();
        for _ in 0..DIMENSION_COUNT {
            type_text(&mut app, "1");
            app.next_row();
        }
        // Study's weight is not a number and drops out
        assert_eq!(app.result.score, 5.0);

        let _ = fs::remove_file(&app.settings_path);
    }

    #[test]
    fn test_clear_inputs() {
        let mut app = test_app("clear");
        type_text(&mut app, "9");
        app.clear_inputs();
        assert_eq!(app.result.score, 0.0);
        assert!(app.input_texts[0].is_empty());
        assert!(app.flash_message.is_some());
    }

    #[test]
    fn test_reset_weights() {
        let mut app = test_app("reset");
        app.edit_weight(Dimension::Help, "7".to_string());
        app.reset_weights();
        assert_eq!(app.settings.weight(Dimension::Help), "1");

        let saved = crate::config::load_settings(&app.settings_path).unwrap();
        assert_eq!(saved.weight(Dimension::Help), "1");
        let (msg, _) = app.flash_message.clone().unwrap();
        assert_eq!(msg, "Weights reset to defaults");

        let _ = fs::remove_file(&app.settings_path);
    }

    #[test]
    fn test_failed_save_keeps_edit() {
        let blocker = env::temp_dir().join("mood_score_app_blocker");
        let _ = fs::remove_dir_all(&blocker);
        fs::write(&blocker, "not a directory").unwrap();

        let mut app = App::new(
            Settings::default(),
            blocker.join("settings.yaml"),
            ThemeColors::dark(),
            false,
        );
        app.edit_weight(Dimension::Sport, "4".to_string());

        assert_eq!(app.settings.weight(Dimension::Sport), "4");
        let (msg, _) = app.flash_message.clone().unwrap();
        assert!(msg.starts_with("Failed to save settings"));
        assert!(app.last_saved.is_none());

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_help_mode() {
        let mut app = test_app("help");
        app.show_help();
        assert_eq!(app.input_mode, InputMode::Help);
        app.dismiss_help();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
