//! Application module
//!
//! Contains the interactive front end: the event loop, key handling, and
//! the glue between the keypad and the engine.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, HISTORY_LIMIT};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::key::Key;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    engine: Engine,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for input resolution and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(config: EngineConfig) -> Self {
        info!(?config, "Creating new App instance");
        Self {
            engine: Engine::new(config),
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    /// The calculator engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Front end state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.should_quit {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.engine, &self.keybinding_context)
            })?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        self.handle_key_event(key_event);
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle a keyboard event. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return self.state.should_quit;
        }

        let Some(action) = self
            .keybinding_context
            .resolve(&self.state.mode, &key_event)
        else {
            return self.state.should_quit;
        };

        match action {
            KeyAction::Press(key) => {
                self.state.cursor.select(key);
                self.press(key);
            }
            KeyAction::PressSelected => {
                let key = self.state.cursor.key();
                self.press(key);
            }
            KeyAction::MoveUp => self.state.cursor.up(),
            KeyAction::MoveDown => self.state.cursor.down(),
            KeyAction::MoveLeft => self.state.cursor.left(),
            KeyAction::MoveRight => self.state.cursor.right(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::Dismiss => self.state.mode = AppMode::Calculator,
            KeyAction::Quit => {
                info!("Quit requested");
                self.state.should_quit = true;
            }
        }

        self.state.should_quit
    }

    /// Press a keypad button and record any finished calculation
    pub fn press(&mut self, key: Key) {
        let shown = self.engine.process(key).to_string();
        if let Some(calculation) = self.engine.take_calculation() {
            self.state.record(calculation.to_string());
        }
        self.state.status_message = match self.engine.state().pending_operator {
            Some(op) => format!("Pressed {}  (pending {})", key, op),
            None => format!("Pressed {}", key),
        };
        debug!(key = %key, display = %shown, "key pressed");
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.mode = match self.state.mode {
            AppMode::Calculator => AppMode::Help,
            AppMode::Help => AppMode::Calculator,
        };
    }
}
