//! Picker row - select box and add trigger side by side.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::events::Action;
use crate::multiselect::OrderedMultiselect;
use crate::picker::Picker;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

use super::{InteractionRegistry, fit_to_width};

/// Select box width when none is configured
pub const DEFAULT_SELECT_WIDTH: u16 = 24;

const PLACEHOLDER: &str = "Select…";

/// Render the select box and trigger. Returns the select box area so the
/// dropdown can anchor below it.
pub fn render_picker_row<T: Clone + PartialEq>(
    frame: &mut Frame,
    area: Rect,
    widget: &OrderedMultiselect<T>,
    registry: &mut InteractionRegistry,
) -> Rect {
    let trigger_label = format!(" {} ⏎ ", widget.trigger_text());
    let trigger_width = widget
        .button_width()
        .unwrap_or(Span::raw(trigger_label.as_str()).width() as u16 + 2);
    let select_width = widget.select_width().unwrap_or(DEFAULT_SELECT_WIDTH);

    let [select_area, _, trigger_area, _] = Layout::horizontal([
        Constraint::Length(select_width),
        Constraint::Length(1),
        Constraint::Length(trigger_width),
        Constraint::Min(0),
    ])
    .areas(area);

    render_select_box(frame, select_area, widget, registry);
    render_trigger(frame, trigger_area, &trigger_label, widget, registry);

    select_area
}

fn render_select_box<T: Clone + PartialEq>(
    frame: &mut Frame,
    area: Rect,
    widget: &OrderedMultiselect<T>,
    registry: &mut InteractionRegistry,
) {
    let enabled = widget.is_enabled();
    let bracket_style = if widget.is_invalid() {
        Style::new().fg(ERROR_RED)
    } else if enabled {
        Style::new().fg(ACCENT_LIGHT_BLUE)
    } else {
        Style::new().fg(TEXT_DISABLED)
    };

    let (text, text_style) = match widget.selected_label() {
        Some(label) if enabled => (label, Style::new().fg(TEXT_WHITE)),
        Some(label) => (label, Style::new().fg(TEXT_DISABLED)),
        None => (PLACEHOLDER.to_string(), Style::new().fg(TEXT_DIM)),
    };

    // "[ " + text + " ▾]"
    let inner = area.width.saturating_sub(5) as usize;
    let arrow = if widget.picker().is_open() { "▴" } else { "▾" };

    let line = Line::from(vec![
        Span::styled("[ ", bracket_style),
        Span::styled(fit_to_width(&text, inner), text_style),
        Span::styled(format!(" {}", arrow), bracket_style),
        Span::styled("]", bracket_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if enabled {
        let bounds = ClickRegion::from(area);
        registry.register_click("select_box", bounds, Action::TogglePicker);
        if !widget.picker().is_empty() {
            registry.register(InteractiveRegion::scrollable(
                "select_box",
                bounds,
                Action::PickPrev,
                Action::PickNext,
            ));
        }
    }
}

fn render_trigger<T: Clone + PartialEq>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    widget: &OrderedMultiselect<T>,
    registry: &mut InteractionRegistry,
) {
    let style = if widget.trigger_enabled() {
        Style::new().fg(ACCENT_MINT).bold()
    } else {
        Style::new().fg(TEXT_DISABLED)
    };

    let inner = area.width.saturating_sub(2) as usize;
    let line = Line::from(vec![
        Span::styled("[", style),
        Span::styled(fit_to_width(label, inner), style),
        Span::styled("]", style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if widget.trigger_enabled() {
        registry.register_click("add_trigger", ClickRegion::from(area), Action::AddSelected);
    }
}
