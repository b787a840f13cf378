//! Strip of remove buttons and swap affordances, wrapped over several rows.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::events::Action;
use crate::multiselect::{OrderedMultiselect, StripControl};
use crate::tui::interaction::ClickRegion;
use crate::tui::theme::*;

use super::InteractionRegistry;

const SWAP_GLYPH: &str = " ⇄ ";

/// Text drawn for a control
pub fn control_label(control: &StripControl) -> String {
    match control {
        StripControl::RemoveButton { text, .. } => format!("[{}]", text),
        StripControl::SwapAffordance { .. } => SWAP_GLYPH.to_string(),
    }
}

/// Place each control left to right, wrapping at the right edge.
///
/// Controls that no longer fit vertically are dropped from the result.
pub fn layout_strip(strip: &[StripControl], area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(strip.len());
    let mut x = area.x;
    let mut y = area.y;

    for control in strip {
        let width = Span::raw(control_label(control)).width() as u16;
        if x > area.x && x + width > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        let clipped = width.min(area.right().saturating_sub(x));
        rects.push(Rect::new(x, y, clipped, 1));
        x += clipped;
    }

    rects
}

pub fn render_strip<T: Clone + PartialEq>(
    frame: &mut Frame,
    area: Rect,
    widget: &OrderedMultiselect<T>,
    registry: &mut InteractionRegistry,
) {
    if widget.strip().is_empty() {
        let hint = Line::styled("(nothing picked yet)", Style::new().fg(TEXT_DIM));
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    let enabled = widget.strip_enabled();
    let rects = layout_strip(widget.strip(), area);

    for (control, rect) in widget.strip().iter().zip(rects) {
        let (style, action) = match control {
            StripControl::RemoveButton { entry, .. } => {
                let style = if enabled {
                    Style::new().fg(TEXT_WHITE).bg(BUTTON_BG)
                } else {
                    Style::new().fg(TEXT_DISABLED)
                };
                (style, enabled.then_some(Action::RemoveEntry(*entry)))
            }
            StripControl::SwapAffordance { entry, style, .. } => {
                let interactive = enabled && style.is_interactive();
                (
                    Style::new().fg(style.color),
                    interactive.then_some(Action::SwapAt(*entry)),
                )
            }
        };

        let line = Line::from(Span::styled(control_label(control), style));
        frame.render_widget(Paragraph::new(line), rect);

        if let Some(action) = action {
            let id = match control {
                StripControl::RemoveButton { .. } => "remove_button",
                StripControl::SwapAffordance { .. } => "swap_affordance",
            };
            registry.register_click(id, ClickRegion::from(rect), action);
        }
    }
}
