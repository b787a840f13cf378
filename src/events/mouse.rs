//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => {
            let action = app.interactions.handle_click(x, y);
            // A click anywhere else dismisses the dropdown
            if action == Action::None && app.widget.picker().is_open() {
                Action::ClosePicker
            } else {
                action
            }
        }
        _ => Action::None,
    }
}
