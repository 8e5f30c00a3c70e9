//! Keypad Calc Library
//!
//! A keypad calculator: a UI-free calculation engine plus the terminal
//! front end that drives it.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod headless;
pub mod key;
pub mod keypad;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use config::EngineConfig;
pub use engine::format::{format_result, parse_operand, ERROR_TEXT};
pub use engine::{Calculation, Engine, EngineMode, EngineState};
pub use error::CalcError;
pub use headless::{evaluate, final_display, Step};
pub use key::{Key, Operator};
