//! Hotkey bar at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

pub fn render_hotkeys(frame: &mut Frame, area: Rect, dropdown_open: bool) {
    let bindings: &[(&str, &str)] = if dropdown_open {
        &[("[↑/↓]", "pick"), ("[Enter/Esc]", "close")]
    } else {
        &[
            ("[Space]", "open"),
            ("[↑/↓]", "pick"),
            ("[Enter]", "add"),
            ("[Bksp]", "remove last"),
            ("[c]", "clear"),
            ("[n]", "numbering"),
            ("[e]", "enable/disable"),
            ("[q]", "quit"),
        ]
    };

    let mut spans = vec![];
    for (i, (key, label)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(format!(" {}", label), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
