//! Type-safe keypad tokens
//!
//! Every button on the keypad is a variant of [`Key`], so an invalid button
//! cannot reach the engine. Text labels are only accepted at the edges
//! (CLI arguments, [`Key::from_label`]).

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::error::CalcError;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Subtract,
    #[strum(to_string = "×", serialize = "*", serialize = "x")]
    Multiply,
    #[strum(to_string = "÷", serialize = "/")]
    Divide,
}

impl Operator {
    /// Apply the operator with IEEE-754 `f64` semantics.
    ///
    /// Division by zero yields an infinity or NaN here; the engine decides
    /// how to display it.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit 0-9. Build with [`Key::digit`] to keep the value in range.
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operator),
    /// Apply the pending operator
    Equals,
    /// Toggle the sign of the current operand (`+/-`)
    ToggleSign,
    /// Divide the current operand by 100
    Percent,
    /// Reset everything (`AC`)
    Clear,
}

impl Key {
    /// Every key on the pad, in label order
    pub const ALL: [Key; 19] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Decimal,
        Key::Operator(Operator::Add),
        Key::Operator(Operator::Subtract),
        Key::Operator(Operator::Multiply),
        Key::Operator(Operator::Divide),
        Key::Equals,
        Key::ToggleSign,
        Key::Percent,
        Key::Clear,
    ];

    /// Build a digit key, `None` if `value > 9`
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// Build a digit key from a character
    pub fn from_char_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::digit(d as u8))
    }

    /// Exact keypad label as printed on the button
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS.get(*d as usize).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(Operator::Add) => "+",
            Self::Operator(Operator::Subtract) => "-",
            Self::Operator(Operator::Multiply) => "×",
            Self::Operator(Operator::Divide) => "÷",
            Self::Equals => "=",
            Self::ToggleSign => "+/-",
            Self::Percent => "%",
            Self::Clear => "AC",
        }
    }

    /// Match a button label exactly. Aliases are not accepted here.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.label() == label)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a label, also accepting the ASCII aliases typed on a keyboard
/// (`*`, `x`, `/`, `c`, `C`, `ac`, `neg`).
impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(key) = Self::from_label(trimmed) {
            return Ok(key);
        }
        if let Ok(op) = trimmed.parse::<Operator>() {
            return Ok(Self::Operator(op));
        }
        match trimmed {
            "c" | "C" | "ac" => Ok(Self::Clear),
            "neg" | "±" => Ok(Self::ToggleSign),
            _ => Err(CalcError::unknown_key(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_label(key.label()), Some(key));
        }
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
        assert_eq!(Key::from_char_digit('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char_digit('a'), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!("*".parse::<Key>().ok(), Some(Key::Operator(Operator::Multiply)));
        assert_eq!("x".parse::<Key>().ok(), Some(Key::Operator(Operator::Multiply)));
        assert_eq!("/".parse::<Key>().ok(), Some(Key::Operator(Operator::Divide)));
        assert_eq!("c".parse::<Key>().ok(), Some(Key::Clear));
        assert!(matches!("sqrt".parse::<Key>(), Err(CalcError::UnknownKey(_))));
    }

    #[test]
    fn test_from_label_rejects_aliases() {
        assert_eq!(Key::from_label("*"), None);
        assert_eq!(Key::from_label("ac"), None);
        assert_eq!(Key::from_label(""), None);
    }

    #[test]
    fn test_operator_display_matches_label() {
        for op in Operator::iter() {
            assert_eq!(op.to_string(), Key::Operator(op).label());
        }
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), 10.0);
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), 4.0);
        assert_eq!(Operator::Multiply.apply(7.0, 3.0), 21.0);
        assert_eq!(Operator::Divide.apply(10.0, 4.0), 2.5);
        assert!(Operator::Divide.apply(8.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }
}
