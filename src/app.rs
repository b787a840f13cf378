//! Demo host state: one multiselect plus the frame's interaction registry.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::DemoConfig;
use crate::events::Action;
use crate::log::{DiagnosticSink, NullLog};
use crate::multiselect::OrderedMultiselect;
use crate::tui::interaction::InteractionRegistry;

pub struct App {
    pub widget: OrderedMultiselect<String>,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
    /// Number of value change events seen so far
    pub changes: Rc<Cell<usize>>,
    required: bool,
    sink: Rc<dyn DiagnosticSink>,
}

impl App {
    pub fn new(config: &DemoConfig) -> Self {
        Self::with_diagnostics(config, Rc::new(NullLog))
    }

    pub fn with_diagnostics(config: &DemoConfig, sink: Rc<dyn DiagnosticSink>) -> Self {
        let mut widget: OrderedMultiselect<String> =
            OrderedMultiselect::with_select_label(config.select_label.clone());
        widget.set_diagnostic_sink(sink.clone());
        widget.set_items(config.items.iter().cloned());
        widget.set_item_label_generator(|item: &String| item.clone());
        widget.set_max_items(config.max_items);
        widget.set_numbers_left_of_text(Some(config.numbers_left_of_text));
        widget.set_button_text(config.button_text.clone());
        widget.set_select_width(config.select_width);
        widget.set_button_width(config.button_width);
        widget.set_description(config.description.clone());
        widget.set_required_indicator_visible(config.required);
        if config.required {
            widget.set_error_message("At least one item is required");
        }

        let initial: Vec<String> = config
            .initial_value
            .iter()
            .filter(|v| {
                let known = config.items.contains(v);
                if !known {
                    sink.warn(&format!("initial value {:?} is not in the catalog, skipped", v));
                }
                known
            })
            .cloned()
            .collect();
        widget.set_value(initial);

        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let listener_sink = sink.clone();
        widget.add_value_change_listener(move |event| {
            counter.set(counter.get() + 1);
            listener_sink.log(&format!(
                "value changed (from_client={}): {:?} -> {:?}",
                event.from_client, event.old_value, event.value
            ));
        });

        let mut app = Self {
            widget,
            interactions: InteractionRegistry::new(),
            should_quit: false,
            changes,
            required: config.required,
            sink,
        };
        app.validate();
        app
    }

    /// Apply one user intent to the widget.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePicker => self.widget.toggle_picker(),
            Action::ClosePicker => self.widget.close_picker(),
            Action::PickItem(index) => self.widget.select_item(Some(index)),
            Action::PickNext => self.widget.select_next(),
            Action::PickPrev => self.widget.select_prev(),
            Action::AddSelected => self.widget.add_selected(),
            Action::RemoveEntry(id) => self.widget.remove_entry(id),
            Action::SwapAt(id) => self.widget.swap_at(id),
            Action::Clear => self.widget.clear(),
            Action::ToggleEnabled => {
                let enabled = !self.widget.is_enabled();
                self.widget.set_enabled(enabled);
                self.sink.log(&format!("widget enabled: {}", enabled));
            }
            Action::ToggleNumbering => {
                let numbering = self.widget.numbering_position().toggled();
                self.widget.set_numbering_position(numbering);
            }
            Action::None => {}
        }
        self.validate();
    }

    /// Required fields are invalid while empty
    fn validate(&mut self) {
        if self.required {
            let invalid = self.widget.is_empty();
            self.widget.set_invalid(invalid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{Level, MemoryLog};

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_app_applies_config() {
        let config = DemoConfig {
            items: strings(&["a", "b", "c"]),
            max_items: Some(2),
            numbers_left_of_text: true,
            initial_value: strings(&["b", "zzz"]),
            ..Default::default()
        };
        let log = MemoryLog::new();
        let app = App::with_diagnostics(&config, Rc::new(log.clone()));

        assert_eq!(app.widget.items(), &strings(&["a", "b", "c"])[..]);
        assert_eq!(app.widget.max_items(), 2);
        assert_eq!(app.widget.value(), strings(&["b"]));
        assert_eq!(app.widget.strip()[0].text(), Some("(1) b"));
        assert_eq!(log.count(Level::Warn), 1);
    }

    #[test]
    fn test_pick_and_add_through_actions() {
        let mut app = App::new(&DemoConfig::default());
        app.apply(Action::PickItem(1));
        app.apply(Action::AddSelected);
        app.apply(Action::PickNext);
        app.apply(Action::AddSelected);

        assert_eq!(app.widget.value(), strings(&["Editor", "Reviewer"]));
        assert_eq!(app.changes.get(), 2);
    }

    #[test]
    fn test_required_flags_empty_value() {
        let config = DemoConfig {
            required: true,
            ..Default::default()
        };
        let mut app = App::new(&config);
        assert!(app.widget.is_invalid());
        assert!(app.widget.shows_error());

        app.apply(Action::PickItem(0));
        app.apply(Action::AddSelected);
        assert!(!app.widget.is_invalid());

        app.apply(Action::Clear);
        assert!(app.widget.is_invalid());
    }

    #[test]
    fn test_toggle_actions() {
        let mut app = App::new(&DemoConfig::default());
        app.apply(Action::ToggleEnabled);
        assert!(!app.widget.is_enabled());
        app.apply(Action::ToggleEnabled);
        assert!(app.widget.is_enabled());

        app.apply(Action::ToggleNumbering);
        assert!(app.widget.numbering_position().is_left());

        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
