//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `picker_row` - Select box and add trigger
//! - `dropdown` - Catalog list shown while the select box is open
//! - `strip` - Remove buttons with swap affordances between them
//! - `hotkeys` - Key binding hint bar

mod dropdown;
mod hotkeys;
mod picker_row;
mod strip;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub use dropdown::{DROPDOWN_PRIORITY, render_dropdown};
pub use hotkeys::render_hotkeys;
pub use picker_row::{DEFAULT_SELECT_WIDTH, render_picker_row};
pub use strip::{control_label, layout_strip, render_strip};

use crate::multiselect::OrderedMultiselect;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render the whole multiselect into `area`, registering its click regions.
pub fn render_multiselect<T: Clone + PartialEq>(
    frame: &mut Frame,
    area: Rect,
    widget: &OrderedMultiselect<T>,
    registry: &mut InteractionRegistry,
) {
    let has_description = !widget.description().is_empty();
    let shows_error = widget.shows_error();

    let [description_area, label_area, picker_area, error_area, _, strip_area] =
        Layout::vertical([
            Constraint::Length(u16::from(has_description)),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(u16::from(shows_error)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

    if has_description {
        let line = Line::styled(widget.description(), Style::new().fg(TEXT_DIM));
        frame.render_widget(Paragraph::new(line), description_area);
    }

    let mut label = vec![Span::styled(
        widget.label(),
        if widget.is_enabled() {
            Style::new().fg(ACCENT_LIGHT_BLUE).bold()
        } else {
            Style::new().fg(TEXT_DISABLED)
        },
    )];
    if widget.is_required_indicator_visible() {
        label.push(Span::styled(" *", Style::new().fg(ERROR_RED)));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), label_area);

    let select_area = render_picker_row(frame, picker_area, widget, registry);

    if shows_error {
        let line = Line::styled(widget.error_message(), Style::new().fg(ERROR_RED));
        frame.render_widget(Paragraph::new(line), error_area);
    }

    render_strip(frame, strip_area, widget, registry);

    // Drawn last so it covers the strip
    if widget.picker().is_open() {
        render_dropdown(frame, select_area, area, widget, registry);
    }
}

/// Truncate with an ellipsis, or pad with spaces, to exactly `width` chars.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{}{}", text, " ".repeat(width - count));
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}
