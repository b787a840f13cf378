//! Dropdown list shown below the select box while it is open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::events::Action;
use crate::multiselect::OrderedMultiselect;
use crate::picker::Picker;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

use super::{InteractionRegistry, fit_to_width};

/// Dropdown regions sit above the strip they cover
pub const DROPDOWN_PRIORITY: i32 = 10;

/// Render the dropdown under `anchor`, clipped to `bounds`.
pub fn render_dropdown<T: Clone + PartialEq>(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    widget: &OrderedMultiselect<T>,
    registry: &mut InteractionRegistry,
) {
    let picker = widget.picker();
    let available = bounds.bottom().saturating_sub(anchor.bottom());
    let height = u16::try_from(picker.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(available);
    if height < 3 || anchor.width < 4 {
        return;
    }

    let popup = Rect::new(anchor.x, anchor.bottom(), anchor.width, height);
    frame.render_widget(Clear, popup);

    // Keep the selection in view
    let visible = (height - 2) as usize;
    let offset = picker
        .selected_index()
        .map(|i| i.saturating_sub(visible - 1))
        .unwrap_or(0);

    let inner_width = popup.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = vec![];

    if picker.is_empty() {
        lines.push(Line::styled(" (no items)", Style::new().fg(TEXT_DIM)));
    }

    for (row, (index, item)) in picker
        .items()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let is_selected = picker.selected_index() == Some(index);
        let cursor = if is_selected { "> " } else { "  " };
        let label = fit_to_width(&widget.item_label(item), inner_width);

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::new().fg(ACCENT_MINT)),
            Span::styled(
                label,
                if is_selected {
                    Style::new().fg(TEXT_WHITE).bold()
                } else {
                    Style::new().fg(TEXT_WHITE)
                },
            ),
        ]));

        let row_bounds = ClickRegion::new(popup.x + 1, popup.y + 1 + row as u16, popup.width - 2, 1);
        registry.register(
            InteractiveRegion::clickable("dropdown_item", row_bounds, Action::PickItem(index))
                .with_priority(DROPDOWN_PRIORITY),
        );
    }

    registry.register(
        InteractiveRegion::scrollable(
            "dropdown",
            ClickRegion::from(popup),
            Action::PickPrev,
            Action::PickNext,
        )
        .with_priority(DROPDOWN_PRIORITY),
    );
    // Swallow clicks on the border so they do not reach the strip below
    registry.register(
        InteractiveRegion::clickable("dropdown", ClickRegion::from(popup), Action::None)
            .with_priority(DROPDOWN_PRIORITY - 1),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn test_huge_catalog_fits_available_height() {
        let mut widget = OrderedMultiselect::new();
        widget.set_items(0..70_000u32);
        widget.set_item_label_generator(|n: &u32| n.to_string());
        widget.toggle_picker();

        let mut registry = InteractionRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| {
                let bounds = frame.area();
                let anchor = Rect::new(0, 0, 20, 1);
                render_dropdown(frame, anchor, bounds, &widget, &mut registry);
            })
            .unwrap();

        let rows = registry
            .regions()
            .iter()
            .filter(|r| r.id == "dropdown_item")
            .count();
        assert_eq!(rows, 9);
    }
}
