//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `display` - The readout above the keypad
//! - `buttons` - The keypad grid
//! - `history` - The tape of finished calculations

mod buttons;
mod display;
mod history;

pub use display::fit_display;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::engine::Engine;
use crate::keypad::KEYPAD_ROWS;
use crate::theme::{Styles, UiConstants};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI renderer
#[derive(Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole screen
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        engine: &Engine,
        keybinding_ctx: &KeybindingContext,
    ) {
        let [title_area, body_area, status_area, nav_area] = Layout::vertical([
            Constraint::Length(UiConstants::TITLE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
        ])
        .areas(f.area());

        self.render_title(f, title_area);

        let (calc_area, history_area) = split_body(body_area);
        let [display_area, keypad_area] = Layout::vertical([
            Constraint::Length(UiConstants::DISPLAY_HEIGHT),
            Constraint::Length(UiConstants::KEY_ROW_HEIGHT * KEYPAD_ROWS.len() as u16),
        ])
        .areas(calc_area);

        display::render_display(f, display_area, engine.display());
        buttons::render_keypad(
            f,
            keypad_area,
            state.cursor,
            engine.state().pending_operator,
        );
        if let Some(area) = history_area {
            history::render_history(f, area, &state.history);
        }

        f.render_widget(
            Paragraph::new(state.status_message.as_str()).style(Styles::text_muted()),
            status_area,
        );
        NavBar::new(keybinding_ctx.get_nav_items(&state.mode)).render(f, nav_area);

        if state.mode == AppMode::Help {
            HelpOverlay::new(keybinding_ctx).render(f, f.area());
        }
    }

    /// Render the title bar
    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("Keypad Calculator")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_active()),
            )
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title, area);
    }
}

/// Split the body into the calculator column and, when there is room, a
/// history panel to its right
fn split_body(area: Rect) -> (Rect, Option<Rect>) {
    if area.width >= UiConstants::KEYPAD_WIDTH + UiConstants::HISTORY_MIN_WIDTH {
        let [calc, history] = Layout::horizontal([
            Constraint::Length(UiConstants::KEYPAD_WIDTH),
            Constraint::Min(UiConstants::HISTORY_MIN_WIDTH),
        ])
        .areas(area);
        (calc, Some(history))
    } else {
        (area, None)
    }
}
