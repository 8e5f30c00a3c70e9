//! Calculator engine
//!
//! Turns a stream of keypad [`Key`]s into display text. The engine holds no
//! UI state and never fails loudly: a key that cannot apply is ignored and
//! the display is left as it was.
//!
//! # State Machine
//!
//! ```text
//! Idle --operator--> AwaitingSecondOperand --'='--> Idle
//!   ^                         |
//!   +----------- AC ----------+
//! ```
//!
//! Digits, `.`, `+/-` and `%` edit the current operand in either state.
//!
//! # Invariants
//!
//! - The current operand holds at most one decimal point
//! - Typed entry stops at `max_input_len` characters, a leading `-` included;
//!   computed results are never truncated
//! - The mode is `Idle` exactly when no operator is pending
//!
//! # Failure Modes
//!
//! | Condition                         | Effect                              |
//! |-----------------------------------|-------------------------------------|
//! | Operand missing or unparsable     | Key ignored                         |
//! | Operand at length cap             | Key ignored                         |
//! | Second decimal point              | Key ignored                         |
//! | Non-finite result (÷0, overflow)  | Shows `Error`, engine back to Idle  |

pub mod format;

use std::fmt;

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::key::{Key, Operator};
use format::{ERROR_TEXT, format_result, parse_operand};

// ============================================================================
// State Types
// ============================================================================

/// Whether a binary operation is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    /// No operator pending
    Idle,
    /// An operator was chosen; the second operand is being entered
    AwaitingSecondOperand,
}

/// The engine's full mutable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Operand currently being typed (may be empty)
    pub current_operand: String,
    /// Operand captured when the operator was chosen
    pub previous_operand: String,
    /// Operator waiting for its second operand
    pub pending_operator: Option<Operator>,
    /// Exact text on the display
    pub display_text: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current_operand: String::new(),
            previous_operand: String::new(),
            pending_operator: None,
            display_text: "0".to_string(),
        }
    }
}

impl EngineState {
    /// Current mode, derived from the pending operator
    pub fn mode(&self) -> EngineMode {
        match self.pending_operator {
            Some(_) => EngineMode::AwaitingSecondOperand,
            None => EngineMode::Idle,
        }
    }

    /// Whether this is the freshly cleared state
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

/// A completed `A op B = result` calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub lhs: String,
    pub operator: Operator,
    pub rhs: String,
    /// Formatted result, or [`ERROR_TEXT`]
    pub result: String,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.operator, self.rhs, self.result)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Keypad calculator engine
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    state: EngineState,
    last_calculation: Option<Calculation>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Create an engine in the cleared state
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::default(),
            last_calculation: None,
        }
    }

    /// Settings the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the state
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Text currently on the display
    pub fn display(&self) -> &str {
        &self.state.display_text
    }

    /// Current mode
    pub fn mode(&self) -> EngineMode {
        self.state.mode()
    }

    /// Take the calculation completed by the most recent `=`, if any
    pub fn take_calculation(&mut self) -> Option<Calculation> {
        self.last_calculation.take()
    }

    /// Press a button by its exact label.
    ///
    /// Labels that are not on the keypad are ignored and the current
    /// display is returned unchanged.
    pub fn press_label(&mut self, label: &str) -> &str {
        match Key::from_label(label) {
            Some(key) => self.process(key),
            None => {
                trace!(label, "ignoring unknown key label");
                self.display()
            }
        }
    }

    /// Apply one key and return the resulting display text
    pub fn process(&mut self, key: Key) -> &str {
        debug!(key = %key, "processing key");
        match key {
            Key::Clear => self.clear(),
            Key::Digit(d) => self.push_digit(d),
            Key::Decimal => self.push_decimal(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.equals(),
        }
        self.display()
    }

    // ------------------------------------------------------------------------
    // Key handlers
    // ------------------------------------------------------------------------

    fn clear(&mut self) {
        self.state = EngineState::default();
    }

    /// Length of the current operand, sign included
    fn entry_len(&self) -> usize {
        self.state.current_operand.chars().count()
    }

    fn at_input_cap(&self) -> bool {
        let full = self.entry_len() >= self.config.max_input_len;
        if full {
            trace!("operand at input cap, key ignored");
        }
        full
    }

    fn push_digit(&mut self, digit: u8) {
        if digit > 9 || self.at_input_cap() {
            return;
        }
        let c = char::from(b'0' + digit);
        let operand = &mut self.state.current_operand;
        match operand.as_str() {
            "0" => {
                operand.clear();
                operand.push(c);
            }
            "-0" => {
                operand.truncate(1);
                operand.push(c);
            }
            _ => operand.push(c),
        }
        self.state.display_text.clone_from(operand);
    }

    fn push_decimal(&mut self) {
        if self.state.current_operand.contains('.') {
            trace!("operand already has a decimal point");
            return;
        }
        if self.at_input_cap() {
            return;
        }
        let operand = &mut self.state.current_operand;
        if operand.is_empty() {
            operand.push('0');
        }
        operand.push('.');
        self.state.display_text.clone_from(operand);
    }

    fn toggle_sign(&mut self) {
        if self.state.current_operand.is_empty() {
            return;
        }
        if !self.state.current_operand.starts_with('-') && self.at_input_cap() {
            return;
        }
        let operand = &mut self.state.current_operand;
        if operand.starts_with('-') {
            operand.remove(0);
        } else {
            operand.insert(0, '-');
        }
        self.state.display_text.clone_from(operand);
    }

    fn percent(&mut self) {
        let Some(value) = parse_operand(&self.state.current_operand) else {
            trace!("percent ignored, no operand");
            return;
        };
        match format_result(value / 100.0, self.config.fraction_digits) {
            Some(text) => {
                self.state.current_operand.clone_from(&text);
                self.state.display_text = text;
            }
            None => self.fail(),
        }
    }

    fn choose_operator(&mut self, op: Operator) {
        if self.state.current_operand.is_empty() && self.state.pending_operator.is_some() {
            // Operator pressed twice in a row: last one wins
            self.state.pending_operator = Some(op);
            return;
        }
        self.state.previous_operand = std::mem::take(&mut self.state.current_operand);
        self.state.pending_operator = Some(op);
        self.state.display_text = "0".to_string();
    }

    fn equals(&mut self) {
        let Some(op) = self.state.pending_operator else {
            trace!("equals ignored, no pending operator");
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) else {
            trace!("equals ignored, operand missing");
            return;
        };

        let value = op.apply(lhs, rhs);
        let result = format_result(value, self.config.fraction_digits);
        let calculation = Calculation {
            lhs: std::mem::take(&mut self.state.previous_operand),
            operator: op,
            rhs: std::mem::take(&mut self.state.current_operand),
            result: result.clone().unwrap_or_else(|| ERROR_TEXT.to_string()),
        };
        debug!(%calculation, "calculation complete");
        self.last_calculation = Some(calculation);

        match result {
            Some(text) => {
                self.state.pending_operator = None;
                self.state.current_operand.clone_from(&text);
                self.state.display_text = text;
            }
            None => self.fail(),
        }
    }

    /// Non-finite result: show the error text and return to Idle
    fn fail(&mut self) {
        debug!("result is not finite");
        self.state = EngineState {
            display_text: ERROR_TEXT.to_string(),
            ..EngineState::default()
        };
    }
}
