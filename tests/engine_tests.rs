//! Tests for the calculator engine
//!
//! These tests verify:
//! - The documented keypress scenarios
//! - Input limits (length cap, duplicate decimal point)
//! - Silent failure handling (missing operands, unknown labels)
//! - Division by zero and other non-finite results

use keypad_calc::{Engine, EngineConfig, EngineMode, Key, Operator};

fn run(labels: &[&str]) -> Engine {
    let mut engine = Engine::default();
    for label in labels {
        engine.press_label(label);
    }
    engine
}

fn display_after(labels: &[&str]) -> String {
    run(labels).display().to_string()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_equals_without_operator_keeps_display() {
    let engine = run(&["5", "="]);
    assert_eq!(engine.display(), "5");
    assert_eq!(engine.state().current_operand, "5");
    assert_eq!(engine.mode(), EngineMode::Idle);
}

#[test]
fn test_addition() {
    assert_eq!(display_after(&["7", "+", "3", "="]), "10");
}

#[test]
fn test_division_with_fraction() {
    assert_eq!(display_after(&["1", "0", "÷", "4", "="]), "2.5");
}

#[test]
fn test_multiply_by_zero() {
    assert_eq!(display_after(&["9", "×", "0", "="]), "0");
}

#[test]
fn test_subtraction_to_negative() {
    assert_eq!(display_after(&["3", "-", "8", "="]), "-5");
}

#[test]
fn test_toggle_sign_twice() {
    let mut engine = Engine::default();
    engine.press_label("5");
    assert_eq!(engine.press_label("+/-"), "-5");
    assert_eq!(engine.press_label("+/-"), "5");
}

#[test]
fn test_percent() {
    assert_eq!(display_after(&["4", "%"]), "0.04");
}

#[test]
fn test_percent_replaces_operand() {
    let engine = run(&["5", "0", "%", "+", "1", "="]);
    assert_eq!(engine.display(), "1.5");
}

#[test]
fn test_percent_without_operand_is_ignored() {
    let engine = run(&["%"]);
    assert!(engine.state().is_initial());
}

#[test]
fn test_divide_by_zero_displays_error() {
    let engine = run(&["8", "÷", "0", "="]);
    assert_eq!(engine.display(), "Error");
    assert_eq!(engine.mode(), EngineMode::Idle);
    assert!(engine.state().previous_operand.is_empty());
    assert!(engine.state().current_operand.is_empty());
}

#[test]
fn test_zero_divided_by_zero_displays_error() {
    assert_eq!(display_after(&["0", "÷", "0", "="]), "Error");
}

#[test]
fn test_overflow_displays_error() {
    let mut engine = Engine::default();
    for _ in 0..9 {
        engine.process(Key::Digit(9));
    }
    // 999999999^n leaves the f64 range after a few dozen multiplications
    for _ in 0..40 {
        engine.process(Key::Operator(Operator::Multiply));
        for _ in 0..9 {
            engine.process(Key::Digit(9));
        }
        engine.process(Key::Equals);
        if engine.display() == "Error" {
            break;
        }
    }
    assert_eq!(engine.display(), "Error");
}

#[test]
fn test_error_then_new_calculation() {
    let engine = run(&["8", "÷", "0", "=", "2", "+", "2", "="]);
    assert_eq!(engine.display(), "4");
}

// =============================================================================
// Input Limits
// =============================================================================

#[test]
fn test_tenth_digit_is_ignored() {
    let mut engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(engine.display(), "123456789");
    assert_eq!(engine.press_label("0"), "123456789");
    assert_eq!(engine.state().current_operand, "123456789");
}

#[test]
fn test_decimal_at_cap_is_ignored() {
    let mut engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(engine.press_label("."), "123456789");
}

#[test]
fn test_operators_still_work_at_cap() {
    let engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "+", "1", "="]);
    assert_eq!(engine.display(), "123456790");
}

#[test]
fn test_results_may_exceed_cap() {
    let engine = run(&["9", "9", "9", "9", "9", "9", "9", "9", "9", "×", "9", "="]);
    assert_eq!(engine.display(), "8999999991");
}

#[test]
fn test_sign_counts_toward_cap() {
    let engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "+/-", "9"]);
    assert_eq!(engine.display(), "-12345678");
    assert!(engine.state().current_operand.chars().count() <= 9);
}

#[test]
fn test_toggle_sign_at_cap_is_ignored() {
    let mut engine = run(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(engine.press_label("+/-"), "123456789");
    assert_eq!(engine.state().current_operand, "123456789");
}

#[test]
fn test_duplicate_decimal_is_ignored() {
    assert_eq!(display_after(&["1", ".", "2", ".", "3"]), "1.23");
}

#[test]
fn test_leading_zeros_collapse() {
    assert_eq!(display_after(&["0", "0", "0"]), "0");
    assert_eq!(display_after(&["0", "7"]), "7");
}

// =============================================================================
// Operators and State Machine
// =============================================================================

#[test]
fn test_operator_enters_awaiting_state() {
    let engine = run(&["7", "+"]);
    assert_eq!(engine.mode(), EngineMode::AwaitingSecondOperand);
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.state().previous_operand, "7");
    assert_eq!(engine.state().pending_operator, Some(Operator::Add));
}

#[test]
fn test_second_operator_overwrites_first() {
    let engine = run(&["8", "+", "÷", "2", "="]);
    assert_eq!(engine.display(), "4");
}

#[test]
fn test_equals_without_second_operand_is_ignored() {
    let engine = run(&["7", "+", "="]);
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.mode(), EngineMode::AwaitingSecondOperand);
}

#[test]
fn test_operator_first_then_equals_is_ignored() {
    let engine = run(&["+", "3", "="]);
    assert_eq!(engine.display(), "3");
}

#[test]
fn test_digits_after_result_extend_it() {
    let engine = run(&["7", "+", "3", "=", "5"]);
    assert_eq!(engine.display(), "105");
}

#[test]
fn test_repeated_equals_does_nothing() {
    let engine = run(&["7", "+", "3", "=", "="]);
    assert_eq!(engine.display(), "10");
}

#[test]
fn test_decimal_arithmetic_is_rounded() {
    assert_eq!(display_after(&["0", ".", "1", "+", "0", ".", "2", "="]), "0.3");
    assert_eq!(display_after(&["2", "÷", "3", "="]), "0.66666667");
}

#[test]
fn test_negative_operands() {
    assert_eq!(display_after(&["6", "+/-", "×", "7", "="]), "-42");
}

// =============================================================================
// Clear and Unknown Input
// =============================================================================

#[test]
fn test_clear_from_awaiting_state() {
    let mut engine = run(&["7", "+", "3"]);
    assert_eq!(engine.press_label("AC"), "0");
    assert!(engine.state().is_initial());
}

#[test]
fn test_clear_from_error() {
    let mut engine = run(&["1", "÷", "0", "="]);
    engine.press_label("AC");
    assert!(engine.state().is_initial());
}

#[test]
fn test_unknown_labels_do_not_change_state() {
    let mut engine = run(&["1", "2", "+"]);
    let before = engine.state().clone();
    for label in ["", "sqrt", "x", "*", "ac", "12", "AC "] {
        engine.press_label(label);
    }
    assert_eq!(engine.state(), &before);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_configured_fraction_digits() {
    let mut engine = Engine::new(EngineConfig {
        fraction_digits: 3,
        ..EngineConfig::default()
    });
    for label in ["2", "÷", "3", "="] {
        engine.press_label(label);
    }
    assert_eq!(engine.display(), "0.667");
}
