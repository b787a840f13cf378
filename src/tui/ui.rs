use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::{render_hotkeys, render_multiselect};
use super::theme::*;
use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.interactions.clear();

    let area = frame.area();

    let [title_area, _, widget_area, value_area, hotkey_area] = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Spacing
        Constraint::Min(0),    // Widget
        Constraint::Length(1), // Current value
        Constraint::Length(1), // Hotkeys
    ])
    .areas(area);

    render_title(frame, title_area);

    let padded = Rect {
        x: widget_area.x + 2,
        width: widget_area.width.saturating_sub(4),
        ..widget_area
    };
    render_multiselect(frame, padded, &app.widget, &mut app.interactions);

    render_value_line(frame, value_area, app);
    render_hotkeys(frame, hotkey_area, app.widget.picker().is_open());
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::raw("  "),
        Span::styled("ordered", Style::new().fg(ACCENT_CORAL).bold()),
        Span::styled("-", Style::new().fg(TEXT_DIM)),
        Span::styled("multi", Style::new().fg(ACCENT_GOLD).bold()),
        Span::styled("select", Style::new().fg(ACCENT_MINT).bold()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_value_line(frame: &mut Frame, area: Rect, app: &App) {
    let value = app.widget.value().join(", ");
    let line = Line::from(vec![
        Span::styled("  value: ", Style::new().fg(TEXT_DIM)),
        Span::styled(format!("[{}]", value), Style::new().fg(TEXT_WHITE)),
        Span::styled(
            format!("  · {} change(s)", app.changes.get()),
            Style::new().fg(TEXT_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::config::DemoConfig;
    use crate::events::Action;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn region_action(app: &App, id: &str, nth: usize) -> Action {
        let region = app
            .interactions
            .regions()
            .iter()
            .filter(|r| r.id == id)
            .nth(nth)
            .unwrap_or_else(|| panic!("no region {} #{}", id, nth));
        app.interactions.handle_click(region.bounds.x, region.bounds.y)
    }

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_renders_strip_and_value() {
        let mut app = App::new(&DemoConfig::default());
        app.widget.set_value(strings(&["Admin", "Viewer"]));

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let text = draw(&mut terminal, &mut app);

        assert!(text.contains("Roles"));
        assert!(text.contains("[Admin (1)] ⇄ [Viewer (2)]"));
        assert!(text.contains("value: [Admin, Viewer]"));
    }

    #[test]
    fn test_click_remove_button_then_swap() {
        let mut app = App::new(&DemoConfig::default());
        app.widget.set_value(strings(&["Admin", "Editor", "Viewer"]));
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();

        draw(&mut terminal, &mut app);
        let action = region_action(&app, "swap_affordance", 0);
        app.apply(action);
        assert_eq!(app.widget.value(), strings(&["Editor", "Admin", "Viewer"]));

        // regions are rebuilt from the new strip on the next frame
        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("[Editor (1)] ⇄ [Admin (2)]"));
        let action = region_action(&app, "remove_button", 1);
        app.apply(action);
        assert_eq!(app.widget.value(), strings(&["Editor", "Viewer"]));
    }

    #[test]
    fn test_dropdown_pick_and_add() {
        let mut app = App::new(&DemoConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();

        draw(&mut terminal, &mut app);
        assert!(!app.interactions.regions().iter().any(|r| r.id == "add_trigger"));
        let action = region_action(&app, "select_box", 0);
        assert_eq!(action, Action::TogglePicker);
        app.apply(action);

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Reviewer"));
        let action = region_action(&app, "dropdown_item", 2);
        assert_eq!(action, Action::PickItem(2));
        app.apply(action);
        assert!(!app.widget.picker().is_open());

        draw(&mut terminal, &mut app);
        let action = region_action(&app, "add_trigger", 0);
        app.apply(action);
        assert_eq!(app.widget.value(), strings(&["Reviewer"]));
    }

    #[test]
    fn test_disabled_widget_registers_no_clicks() {
        let mut app = App::new(&DemoConfig::default());
        app.widget.set_value(strings(&["Admin", "Editor"]));
        app.apply(Action::ToggleEnabled);

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        draw(&mut terminal, &mut app);
        assert!(app.interactions.regions().is_empty());

        app.apply(Action::ToggleEnabled);
        draw(&mut terminal, &mut app);
        assert!(app.interactions.regions().iter().any(|r| r.id == "swap_affordance"));
    }

    #[test]
    fn test_cap_message_on_trigger() {
        let config = DemoConfig {
            max_items: Some(1),
            initial_value: strings(&["Guest"]),
            ..Default::default()
        };
        let mut app = App::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        let text = draw(&mut terminal, &mut app);
        assert!(text.contains(crate::multiselect::MAX_REACHED_TEXT));
    }
}
