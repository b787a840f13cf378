//! Component-level mouse interactivity.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching region. The registry is cleared at the
//! start of every frame, so a region only ever describes what is currently
//! on screen.
//!
//! # Example
//!
//! ```ignore
//! registry.register(InteractiveRegion::clickable(
//!     "remove_button",
//!     ClickRegion::new(x, y, width, 1),
//!     Action::RemoveEntry(id),
//! ));
//!
//! let action = registry.handle_click(mouse.column, mouse.row);
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// Screen rectangle used for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first).
    /// The open dropdown uses this to capture clicks over the strip.
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// Action of the highest-priority region at (x, y) selected by `pick`.
    fn dispatch(
        &self,
        x: u16,
        y: u16,
        pick: impl Fn(&InteractiveRegion) -> Option<&Action>,
    ) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| pick(r).map(|action| (r.priority, action)))
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action.clone())
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_click.as_ref())
    }

    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_up.as_ref())
    }

    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_down.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable("strip", ClickRegion::new(0, 0, 100, 100), Action::Clear)
                .with_priority(0),
        );
        registry.register(
            InteractiveRegion::clickable(
                "dropdown",
                ClickRegion::new(20, 20, 60, 60),
                Action::PickItem(2),
            )
            .with_priority(10),
        );

        assert!(matches!(registry.handle_click(50, 50), Action::PickItem(2)));
        assert!(matches!(registry.handle_click(5, 5), Action::Clear));
        assert!(matches!(registry.handle_click(200, 200), Action::None));
    }

    #[test]
    fn test_scroll_ignores_click_only_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("button", ClickRegion::new(0, 0, 10, 1), Action::AddSelected);
        registry.register(InteractiveRegion::scrollable(
            "select",
            ClickRegion::new(0, 0, 10, 1),
            Action::PickPrev,
            Action::PickNext,
        ));

        assert!(matches!(registry.handle_click(1, 0), Action::AddSelected));
        assert!(matches!(registry.handle_scroll_up(1, 0), Action::PickPrev));
        assert!(matches!(registry.handle_scroll_down(1, 0), Action::PickNext));
    }

    #[test]
    fn test_clear_drops_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("button", ClickRegion::new(0, 0, 10, 1), Action::AddSelected);
        registry.clear();
        assert!(registry.regions().is_empty());
        assert!(matches!(registry.handle_click(1, 0), Action::None));
    }
}
