//! Tests for headless evaluation and settings files
//!
//! These tests verify:
//! - Label aliases accepted on the command line
//! - Unknown labels rejected before anything is evaluated
//! - Settings files written, loaded, and validated

use keypad_calc::config::EngineConfig;
use keypad_calc::{evaluate, final_display, CalcError, Key, Operator};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_command_line_aliases() {
    let display = final_display(EngineConfig::default(), &["6", "*", "7", "="]).unwrap();
    assert_eq!(display, "42");

    let display = final_display(EngineConfig::default(), &["9", "/", "3", "=", "neg"]).unwrap();
    assert_eq!(display, "-3");
}

#[test]
fn test_steps_report_each_key() {
    let steps = evaluate(EngineConfig::default(), &["4", "x", "AC"]).unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].key, Key::Operator(Operator::Multiply));
    assert_eq!(steps[1].display, "0");
    assert_eq!(steps[2].display, "0");
}

#[test]
fn test_unknown_label_reports_label() {
    let err = evaluate(EngineConfig::default(), &["1", "+", "pi"]).unwrap_err();
    assert!(matches!(&err, CalcError::UnknownKey(label) if label == "pi"));
    assert!(err.to_string().contains("pi"));
}

#[test]
fn test_cap_from_settings() {
    let config = EngineConfig {
        max_input_len: 3,
        ..EngineConfig::default()
    };
    let display = final_display(config, &["1", "2", "3", "4"]).unwrap();
    assert_eq!(display, "123");
}

#[test]
fn test_settings_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.json");
    let config = EngineConfig {
        max_input_len: 12,
        fraction_digits: 4,
    };
    config.save_to_file(&path).unwrap();
    assert_eq!(EngineConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_settings_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.json");
    fs::write(&path, r#"{ "fraction_digits": 2 }"#).unwrap();

    let config = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(config.fraction_digits, 2);
    assert_eq!(config.max_input_len, 9);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.json");
    fs::write(&path, r#"{ "max_input_len": 0 }"#).unwrap();
    assert!(EngineConfig::load_from_file(&path).is_err());

    fs::write(&path, "not json").unwrap();
    assert!(EngineConfig::load_from_file(&path).is_err());
}

#[test]
fn test_missing_settings_file_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(EngineConfig::load_from_file(dir.path().join("missing.json")).is_err());
}
