//! Error handling module for keypad-calc
//!
//! Provides centralized error types using thiserror. The calculation engine
//! itself never fails loudly; these errors cover the edges around it
//! (terminal, settings file, command-line input).

use thiserror::Error;

/// Main error type for keypad-calc
#[derive(Error, Debug)]
pub enum CalcError {
    /// IO errors (settings file, terminal, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A label that is not on the keypad
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}

/// Result type alias for keypad-calc operations
pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create an unknown key error
    pub fn unknown_key(label: impl Into<String>) -> Self {
        Self::UnknownKey(label.into())
    }
}
