//! Terminal setup and the form event loop

use std::io;
use std::path::Path;

use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use redalert_graphs::AlertDashboard;
use tracing::{info, warn};

use crate::app::{App, ChartView, Trigger};
use crate::events::{handle_key, Action};
use crate::export::export_chart;
use crate::ui;

/// Raw mode plus the alternate screen, undone when dropped
struct TerminalSession;

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Release builds abort on panic, so unwinding never reaches the session guard.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Run the interactive form until the user quits.
///
/// `export_dir` is where every opened chart is also saved; `None` disables
/// the PNG copy.
pub async fn run_form(dashboard: &AlertDashboard, export_dir: Option<&Path>) -> anyhow::Result<()> {
    install_panic_hook();
    let _session = TerminalSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    event_loop(&mut terminal, dashboard, export_dir).await
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &AlertDashboard,
    export_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let mut app = App::new(dashboard);
    info!("Form opened with {} areas", app.area_count);

    while app.running {
        terminal.draw(|frame| ui::draw(frame, &app, dashboard))?;

        if let Event::Key(key) = event::read()? {
            if let Action::Trigger(trigger) = handle_key(&mut app, key) {
                apply_trigger(&mut app, dashboard, trigger, export_dir).await?;
            }
        }
    }

    info!("Form closed");
    Ok(())
}

/// Build the chart behind a button, export it, and show it.
///
/// A failed export is reported in the footer; the chart still opens.
pub async fn apply_trigger(
    app: &mut App,
    dashboard: &AlertDashboard,
    trigger: Trigger,
    export_dir: Option<&Path>,
) -> redalert_common::Result<()> {
    let Some(kind) = app.chart_for(trigger, dashboard) else {
        app.status = Some("No area to show".to_string());
        return Ok(());
    };
    let series = dashboard.series(&kind)?;

    let exported = match export_dir {
        Some(dir) => match export_chart(dashboard, &kind, &series, dir).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Chart export failed: {}", e);
                None
            }
        },
        None => None,
    };
    let failed = export_dir.is_some() && exported.is_none();

    app.open_chart(ChartView::new(kind, series, exported));
    if failed {
        app.status = Some("Export failed, see log".to_string());
    }
    Ok(())
}
