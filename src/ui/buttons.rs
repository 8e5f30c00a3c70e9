//! Keypad grid rendering

use crate::key::{Key, Operator};
use crate::keypad::{button_width, ButtonKind, Cursor, GRID_COLUMNS, KEYPAD_ROWS};
use crate::theme::{Styles, Theme, UiConstants};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render_keypad(
    f: &mut Frame,
    area: Rect,
    cursor: Cursor,
    pending: Option<Operator>,
) {
    let row_areas = Layout::vertical(
        KEYPAD_ROWS
            .iter()
            .map(|_| Constraint::Length(UiConstants::KEY_ROW_HEIGHT)),
    )
    .split(area);

    for (r, (row, row_area)) in KEYPAD_ROWS.iter().zip(row_areas.iter()).enumerate() {
        let cells = Layout::horizontal(
            row.iter()
                .map(|key| Constraint::Ratio(button_width(*key) as u32, GRID_COLUMNS as u32)),
        )
        .split(*row_area);

        for (c, (key, cell)) in row.iter().zip(cells.iter()).enumerate() {
            let selected = cursor.row == r && cursor.col == c;
            render_button(f, *cell, *key, selected, pending);
        }
    }
}

fn render_button(f: &mut Frame, area: Rect, key: Key, selected: bool, pending: Option<Operator>) {
    let is_pending = matches!(key, Key::Operator(op) if Some(op) == pending);
    let style = Theme::button_style(ButtonKind::of(key), is_pending);
    let border_style = if selected {
        Styles::cursor_border()
    } else {
        style
    };
    let button = Paragraph::new(key.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(button, area);
}
