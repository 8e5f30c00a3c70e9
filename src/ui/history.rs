//! Calculation tape rendering

use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::VecDeque;

/// Render the newest entries that fit, newest at the bottom
pub(super) fn render_history(f: &mut Frame, area: Rect, history: &VecDeque<String>) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = history.len().saturating_sub(visible);
    let lines: Vec<Line> = history
        .iter()
        .skip(skip)
        .map(|entry| Line::styled(entry.as_str(), Styles::text()))
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("History")
            .border_style(Styles::text_muted()),
    );
    f.render_widget(widget, area);
}
