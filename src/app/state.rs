//! Application state definitions
//!
//! Everything the front end tracks besides the engine itself: which screen
//! is up, where the keypad cursor is, and the tape of finished calculations.

use std::collections::VecDeque;

use crate::keypad::Cursor;

/// Finished calculations kept on the tape
pub const HISTORY_LIMIT: usize = 50;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Keypad has focus
    Calculator,
    /// Help overlay is shown on top of the keypad
    Help,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Keypad selection
    pub cursor: Cursor,
    /// Status message for user feedback
    pub status_message: String,
    /// Finished calculations, newest last
    pub history: VecDeque<String>,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Calculator,
            cursor: Cursor::default(),
            status_message: "Ready".to_string(),
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            should_quit: false,
        }
    }
}

impl AppState {
    /// Append a line to the tape, dropping the oldest past the limit
    pub fn record(&mut self, line: String) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(line);
    }
}
