//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and layout constants used by the keypad screen.
//!
//! # Usage
//! ```rust
//! use keypad_calc::keypad::ButtonKind;
//! use keypad_calc::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let digit_style = Theme::button_style(ButtonKind::Digit, false);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::keypad::ButtonKind;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Screen background
    pub const BG_PRIMARY: Color = Color::Black;

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - used for borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for the keypad cursor
    pub const SECONDARY: Color = Color::Yellow;

    /// Error feedback
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // Keypad Colors
    // -------------------------------------------------------------------------

    /// AC, +/-, % background
    pub const KEY_FUNCTION: Color = Color::Rgb(178, 178, 178);

    /// Digit and decimal background
    pub const KEY_DIGIT: Color = Color::Rgb(102, 102, 102);

    /// Operator and equals background
    pub const KEY_OPERATOR: Color = Color::Rgb(255, 149, 0);

    /// Background of the operator waiting for its second operand
    pub const KEY_OPERATOR_PENDING: Color = Color::White;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Display readout
    pub fn display() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::BG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Display readout when showing the error text
    pub fn display_error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .bg(Colors::BG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the button under the cursor
    pub fn cursor_border() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for a keypad button.
    ///
    /// `pending` marks the operator waiting for its second operand; it is
    /// drawn inverted so the user can see which operation is in progress.
    pub fn button_style(kind: ButtonKind, pending: bool) -> Style {
        match kind {
            ButtonKind::Function => Style::default()
                .fg(Color::Black)
                .bg(Colors::KEY_FUNCTION),
            ButtonKind::Digit => Style::default()
                .fg(Colors::FG_PRIMARY)
                .bg(Colors::KEY_DIGIT),
            ButtonKind::Operator if pending => Style::default()
                .fg(Colors::KEY_OPERATOR)
                .bg(Colors::KEY_OPERATOR_PENDING)
                .add_modifier(Modifier::BOLD),
            ButtonKind::Operator => Style::default()
                .fg(Colors::FG_PRIMARY)
                .bg(Colors::KEY_OPERATOR)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Title bar height
    pub const TITLE_HEIGHT: u16 = 3;

    /// Display panel height
    pub const DISPLAY_HEIGHT: u16 = 3;

    /// Height of one keypad row
    pub const KEY_ROW_HEIGHT: u16 = 3;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 1;

    /// Keypad width; wider terminals get the history panel beside it
    pub const KEYPAD_WIDTH: u16 = 36;

    /// Minimum extra width needed to show the history panel
    pub const HISTORY_MIN_WIDTH: u16 = 24;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_operator_is_inverted() {
        let normal = Theme::button_style(ButtonKind::Operator, false);
        let pending = Theme::button_style(ButtonKind::Operator, true);
        assert_eq!(normal.bg, Some(Colors::KEY_OPERATOR));
        assert_eq!(pending.bg, Some(Colors::KEY_OPERATOR_PENDING));
        assert_eq!(pending.fg, Some(Colors::KEY_OPERATOR));
    }

    #[test]
    fn test_pending_flag_only_affects_operators() {
        assert_eq!(
            Theme::button_style(ButtonKind::Digit, true),
            Theme::button_style(ButtonKind::Digit, false)
        );
    }

    #[test]
    fn test_styles() {
        let _ = Styles::title();
        let _ = Styles::display_error();
        let _ = Styles::cursor_border();
    }
}
