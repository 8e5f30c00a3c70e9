//! Keybinding system for context-aware keyboard shortcuts
//!
//! Maps terminal key events to calculator keys and app actions. The table
//! also feeds the navigation bar and the help overlay, so what is shown is
//! always what is bound.

use crate::app::AppMode;
use crate::key::{Key, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Press a calculator key directly
    Press(Key),
    /// Press the button under the cursor
    PressSelected,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// SHIFT is ignored for character keys since terminals report `+`, `%`
    /// and friends with or without it depending on the layout.
    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        modifiers == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let press = |key: Key| KeyAction::Press(key);
        self.mode_bindings.insert(
            AppMode::Calculator,
            vec![
                Keybinding::new(KeyCode::Char('.'), press(Key::Decimal), ".", "Decimal point"),
                Keybinding::new(KeyCode::Char(','), press(Key::Decimal), ",", "Decimal point"),
                Keybinding::new(KeyCode::Char('+'), press(Key::Operator(Operator::Add)), "+", "Add"),
                Keybinding::new(
                    KeyCode::Char('-'),
                    press(Key::Operator(Operator::Subtract)),
                    "-",
                    "Subtract",
                ),
                Keybinding::new(
                    KeyCode::Char('*'),
                    press(Key::Operator(Operator::Multiply)),
                    "*",
                    "Multiply",
                ),
                Keybinding::new(
                    KeyCode::Char('x'),
                    press(Key::Operator(Operator::Multiply)),
                    "X",
                    "Multiply",
                ),
                Keybinding::new(
                    KeyCode::Char('/'),
                    press(Key::Operator(Operator::Divide)),
                    "/",
                    "Divide",
                ),
                Keybinding::new(KeyCode::Char('='), press(Key::Equals), "=", "Equals"),
                Keybinding::new(KeyCode::Char('%'), press(Key::Percent), "%", "Percent"),
                Keybinding::new(KeyCode::Char('n'), press(Key::ToggleSign), "N", "Toggle sign"),
                Keybinding::new(KeyCode::Char('c'), press(Key::Clear), "C", "All clear"),
                Keybinding::new(KeyCode::Esc, press(Key::Clear), "Esc", "All clear"),
                Keybinding::new(KeyCode::Up, KeyAction::MoveUp, "Up", "Move up"),
                Keybinding::new(KeyCode::Down, KeyAction::MoveDown, "Down", "Move down"),
                Keybinding::new(KeyCode::Left, KeyAction::MoveLeft, "Left", "Move left"),
                Keybinding::new(KeyCode::Right, KeyAction::MoveRight, "Right", "Move right"),
                Keybinding::new(KeyCode::Enter, KeyAction::PressSelected, "Enter", "Press button"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::PressSelected, "Space", "Press button"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Help,
            vec![
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
                Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "Close help"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action in the given mode.
    ///
    /// Digits are not in the table; any `0`-`9` press in calculator mode
    /// maps straight to the matching digit key.
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        if let Some(binding) = self.get_bindings(mode).into_iter().find(|b| b.matches(event)) {
            return Some(binding.action);
        }
        match (mode, event.code) {
            (AppMode::Calculator, KeyCode::Char(c)) => Key::from_char_digit(c).map(KeyAction::Press),
            _ => None,
        }
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let item = |key: &str, label: &str| NavBarItem {
            key_display: key.to_string(),
            action_label: label.to_string(),
        };
        match mode {
            AppMode::Calculator => vec![
                item("Arrows", "Move"),
                item("Enter", "Press"),
                item("Esc", "AC"),
                item("?", "Help"),
                item("Q", "Quit"),
            ],
            AppMode::Help => vec![item("Esc", "Close"), item("Q", "Quit")],
        }
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();
        let bindings = self.get_bindings(mode);

        let mut keypad_items = Vec::new();
        if *mode == AppMode::Calculator {
            keypad_items.push(("0-9".to_string(), "Digits".to_string()));
        }
        keypad_items.extend(
            bindings
                .iter()
                .filter(|b| matches!(b.action, KeyAction::Press(_)))
                .map(|b| (b.display.clone(), b.description.clone())),
        );
        if !keypad_items.is_empty() {
            sections.push(HelpSection {
                title: "Keypad".to_string(),
                items: keypad_items,
            });
        }

        let nav_items: Vec<_> = bindings
            .iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::MoveUp
                        | KeyAction::MoveDown
                        | KeyAction::MoveLeft
                        | KeyAction::MoveRight
                        | KeyAction::PressSelected
                )
            })
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !nav_items.is_empty() {
            sections.push(HelpSection {
                title: "Navigation".to_string(),
                items: nav_items,
            });
        }

        let general_items: Vec<_> = bindings
            .iter()
            .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit))
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !general_items.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_items,
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
