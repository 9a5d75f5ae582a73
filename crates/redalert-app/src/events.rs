//! Keyboard handling for the terminal UI

use crate::app::{App, Mode, Trigger};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Build, export and show the chart behind a button
    Trigger(Trigger),
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Action::None;
    }

    if app.is_chart_open() {
        handle_chart_key(app, key);
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char('1') => return Action::Trigger(Trigger::AreaData),
        KeyCode::Char('2') => return Action::Trigger(Trigger::TopAreas),
        KeyCode::Char('3') => return Action::Trigger(Trigger::Hourly),
        _ => {}
    }
    Action::None
}

fn handle_chart_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.close_chart()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Mode::Chart(view) = &mut app.mode {
                view.scroll_up();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Mode::Chart(view) = &mut app.mode {
                view.scroll_down();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ChartView;
    use redalert_common::{AlertRecord, RawAlert};
    use redalert_config::ChartConfig;
    use redalert_graphs::{AlertDashboard, ChartKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (App, AlertDashboard) {
        let records = ["Sderot", "Ashkelon", "Ofakim"]
            .iter()
            .map(|a| AlertRecord::from_raw(&RawAlert::new("0930", *a), a.to_string()))
            .collect();
        let dash = AlertDashboard::new(records, ChartConfig::default()).unwrap();
        (App::new(&dash), dash)
    }

    #[test]
    fn test_trigger_keys() {
        let (mut app, _) = app();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('1'))), Action::Trigger(Trigger::AreaData));
        assert_eq!(handle_key(&mut app, key(KeyCode::Enter)), Action::Trigger(Trigger::AreaData));
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('2'))), Action::Trigger(Trigger::TopAreas));
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('3'))), Action::Trigger(Trigger::Hourly));
    }

    #[test]
    fn test_navigation_keys() {
        let (mut app, dash) = app();
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_area(&dash), Some("Ofakim"));
        handle_key(&mut app, key(KeyCode::End));
        assert_eq!(app.selected_area(&dash), Some("Sderot"));
        handle_key(&mut app, key(KeyCode::Home));
        assert_eq!(app.selected_area(&dash), Some("Ashkelon"));
    }

    #[test]
    fn test_quit_from_form() {
        let (mut app, _) = app();
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn test_chart_view_blocks_form() {
        let (mut app, dash) = app();
        app.open_chart(ChartView::new(ChartKind::Hourly, dash.hourly().unwrap(), None));

        assert_eq!(handle_key(&mut app, key(KeyCode::Char('2'))), Action::None);
        assert!(app.is_chart_open());

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.is_chart_open());
        assert!(app.running);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (mut app, dash) = app();
        app.open_chart(ChartView::new(ChartKind::TopAreas, dash.top_areas().unwrap(), None));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }
}
