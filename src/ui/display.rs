//! Display readout rendering

use crate::engine::format::ERROR_TEXT;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fit display text into `width` columns.
///
/// Text that is too long keeps its rightmost characters behind a leading
/// ellipsis, so the digits being typed stay visible.
pub fn fit_display(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let keep = width - 1;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("…{}", tail)
}

pub(super) fn render_display(f: &mut Frame, area: Rect, text: &str) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let style = if text == ERROR_TEXT {
        Styles::display_error()
    } else {
        Styles::display()
    };
    let widget = Paragraph::new(format!("{} ", fit_display(text, inner_width)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active()),
        )
        .alignment(Alignment::Right)
        .style(style);
    f.render_widget(widget, area);
}
