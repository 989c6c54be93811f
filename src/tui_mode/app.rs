use crate::commands::{classify, Command};
use intcalc::calc_engine::{evaluate_traced, CalcError, EvaluationTrace, Step};
use std::time::{Duration, Instant};
use tracing::debug;

pub enum Outcome {
    Value(i64),
    Failed(CalcError),
    /// A line the host itself rejected before evaluation.
    Rejected(String),
}

pub struct HistoryEntry {
    pub input: String,
    pub outcome: Outcome,
    pub detailed_steps: Vec<Step>,
    pub detailed_mode: bool,
    pub duration: Duration,
}

pub struct App {
    pub input: String,
    pub cursor_position: usize,
    pub input_scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub item_start_indices: Vec<usize>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            input: String::new(),
            cursor_position: 0,
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            item_start_indices: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
            terminal_too_small: false,
        }
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total_chars = self.input.chars().count();
        let cursor_pos = self.cursor_position;

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        } else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos + 1 - visible_width;
        }

        if self.input_scroll > total_chars.saturating_sub(visible_width) {
            self.input_scroll = total_chars.saturating_sub(visible_width);
        }
    }

    pub fn submit(&mut self) {
        let line = self.input.clone();

        match classify(&line) {
            Command::Empty => return,
            Command::Quit => {
                self.should_quit = true;
                return;
            }
            Command::Clear => {
                self.history.clear();
                self.cursor_history = 0;
                self.history_scroll = 0;
                self.clear_input();
                return;
            }
            Command::Help => {
                self.show_help = true;
                self.help_scroll = 0;
                self.clear_input();
                return;
            }
            Command::MissingExpression => {
                self.history.push(HistoryEntry {
                    input: line.trim().to_string(),
                    outcome: Outcome::Rejected(
                        "Please enter a valid expression after 'details'".to_string(),
                    ),
                    detailed_steps: Vec::new(),
                    detailed_mode: false,
                    duration: Duration::ZERO,
                });
            }
            Command::Evaluate {
                expression,
                detailed,
            } => {
                let start_time = Instant::now();
                let mut trace = EvaluationTrace::new(detailed);
                let outcome = match evaluate_traced(expression, &mut trace) {
                    Ok(value) => Outcome::Value(value),
                    Err(e) => Outcome::Failed(e),
                };
                let duration = start_time.elapsed();
                debug!(input = expression, ?duration, "evaluated");

                self.history.push(HistoryEntry {
                    input: expression.to_string(),
                    outcome,
                    detailed_steps: trace.steps,
                    detailed_mode: detailed,
                    duration,
                });
            }
        }

        self.cursor_history = self.history.len().saturating_sub(1);
        self.clear_input();
        self.scroll_to_bottom = true;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = Self::char_index_to_byte_index(&self.input, self.cursor_position);
        self.input.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_backward(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_forward();
        }
    }

    pub fn delete_forward(&mut self) {
        let byte_idx = Self::char_index_to_byte_index(&self.input, self.cursor_position);
        if let Some(c) = self.input[byte_idx..].chars().next() {
            self.input.drain(byte_idx..byte_idx + c.len_utf8());
        }
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match direction {
            -1 => self.cursor_position = self.cursor_position.saturating_sub(1),
            1 => self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count()),
            _ => {}
        }
    }

    pub fn move_cursor_by_words(&mut self, direction: i32) {
        let input_chars: Vec<char> = self.input.chars().collect();
        let mut pos = self.cursor_position;

        if direction < 0 {
            while pos > 0 && input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }
            while pos > 0 && !input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }
        } else {
            let len = input_chars.len();
            while pos < len && !input_chars[pos].is_whitespace() {
                pos += 1;
            }
            while pos < len && input_chars[pos].is_whitespace() {
                pos += 1;
            }
        }

        self.cursor_position = pos;
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len().saturating_sub(1) {
            self.cursor_history += 1;
        }

        self.recall_selected();
    }

    pub fn scroll_history(&mut self, direction: i32) {
        let step = self.list_height.saturating_sub(1);
        if direction < 0 {
            self.cursor_history = self.cursor_history.saturating_sub(step);
        } else {
            self.cursor_history = self
                .cursor_history
                .saturating_add(step)
                .min(self.history.len().saturating_sub(1));
        }

        self.recall_selected();
    }

    fn recall_selected(&mut self) {
        match self.history.get(self.cursor_history) {
            Some(entry) => self.input = entry.input.clone(),
            None => self.input.clear(),
        }
        self.cursor_position = self.input.chars().count();
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.input_scroll = 0;
    }

    pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
        s.char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            app.insert_char(c);
        }
        app.submit();
    }

    #[test]
    fn submit_records_values_and_errors() {
        let mut app = App::new();
        type_line(&mut app, "2 + 3 * 4");
        type_line(&mut app, "5/0");

        assert_eq!(app.history.len(), 2);
        assert!(matches!(app.history[0].outcome, Outcome::Value(14)));
        assert!(matches!(
            app.history[1].outcome,
            Outcome::Failed(CalcError::DivisionByZero)
        ));
        assert!(app.input.is_empty());
        assert_eq!(app.cursor_history, 1);
        assert!(app.scroll_to_bottom);
    }

    #[test]
    fn details_keeps_steps() {
        let mut app = App::new();
        type_line(&mut app, "details (1 + 2) * 3");

        let entry = &app.history[0];
        assert_eq!(entry.input, "(1 + 2) * 3");
        assert!(entry.detailed_mode);
        assert_eq!(entry.detailed_steps.len(), 2);
        assert_eq!(entry.detailed_steps[1].result, 9);
    }

    #[test]
    fn control_words() {
        let mut app = App::new();
        type_line(&mut app, "1+1");
        type_line(&mut app, "clear");
        assert!(app.history.is_empty());

        type_line(&mut app, "help");
        assert!(app.show_help);

        type_line(&mut app, "details");
        assert!(matches!(app.history[0].outcome, Outcome::Rejected(_)));

        type_line(&mut app, "exit");
        assert!(app.should_quit);
    }

    #[test]
    fn editing_handles_multibyte_chars() {
        let mut app = App::new();
        for c in "1é2".chars() {
            app.insert_char(c);
        }
        app.move_cursor(-1);
        app.delete_backward();
        assert_eq!(app.input, "12");
        assert_eq!(app.cursor_position, 1);

        app.delete_forward();
        assert_eq!(app.input, "1");
    }

    #[test]
    fn word_movement() {
        let mut app = App::new();
        for c in "12 + 345".chars() {
            app.insert_char(c);
        }
        app.move_cursor_by_words(-1);
        assert_eq!(app.cursor_position, 5);
        app.move_cursor_by_words(-1);
        assert_eq!(app.cursor_position, 3);
        app.move_cursor_by_words(1);
        assert_eq!(app.cursor_position, 5);
    }

    #[test]
    fn history_recall() {
        let mut app = App::new();
        type_line(&mut app, "1+1");
        type_line(&mut app, "2*2");

        app.navigate_history(-1);
        assert_eq!(app.input, "1+1");
        app.navigate_history(1);
        assert_eq!(app.input, "2*2");
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn input_scroll_follows_cursor() {
        let mut app = App::new();
        for c in "1234567890".chars() {
            app.insert_char(c);
        }
        app.adjust_input_scroll(4);
        assert_eq!(app.input_scroll, 6);

        app.cursor_position = 0;
        app.adjust_input_scroll(4);
        assert_eq!(app.input_scroll, 0);
    }
}
