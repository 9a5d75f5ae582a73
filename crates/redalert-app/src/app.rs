//! Form state for the terminal UI

use redalert_graphs::{AlertDashboard, ChartKind, ChartSeries};
use std::path::PathBuf;

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Form title
pub const FORM_TITLE: &str = "Red alert data";

/// The three form buttons, in display order
pub const TRIGGERS: [Trigger; 3] = [Trigger::AreaData, Trigger::TopAreas, Trigger::Hourly];

/// A form button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    AreaData,
    TopAreas,
    Hourly,
}

impl Trigger {
    pub fn key(&self) -> char {
        match self {
            Trigger::AreaData => '1',
            Trigger::TopAreas => '2',
            Trigger::Hourly => '3',
        }
    }

    pub fn caption(&self, top_areas: usize) -> String {
        match self {
            Trigger::AreaData => "Show area data".to_string(),
            Trigger::TopAreas => {
                format!("Show number of alerts by {} most alerted areas", top_areas)
            }
            Trigger::Hourly => "Show number of alerts by hours".to_string(),
        }
    }
}

/// A chart opened from the form
#[derive(Debug, Clone)]
pub struct ChartView {
    pub kind: ChartKind,
    pub series: ChartSeries,
    /// Where the PNG copy was written, if exported
    pub exported: Option<PathBuf>,
    /// First visible bar
    pub offset: usize,
}

impl ChartView {
    pub fn new(kind: ChartKind, series: ChartSeries, exported: Option<PathBuf>) -> Self {
        Self {
            kind,
            series,
            exported,
            offset: 0,
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset + 1 < self.series.bars.len() {
            self.offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}

/// Form is idle, or a chart view is shown on top of it
#[derive(Debug, Clone, Default)]
pub enum Mode {
    #[default]
    Form,
    Chart(ChartView),
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    pub running: bool,
    pub mode: Mode,
    /// Index into the dashboard's area list
    pub selected: usize,
    pub area_count: usize,
    /// Last error or export notice shown in the footer
    pub status: Option<String>,
}

impl App {
    pub fn new(dashboard: &AlertDashboard) -> Self {
        Self {
            running: true,
            mode: Mode::Form,
            selected: 0,
            area_count: dashboard.areas().len(),
            status: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_chart_open(&self) -> bool {
        matches!(self.mode, Mode::Chart(_))
    }

    pub fn open_chart(&mut self, view: ChartView) {
        self.status = view
            .exported
            .as_ref()
            .map(|path| format!("Saved {}", path.display()));
        self.mode = Mode::Chart(view);
    }

    pub fn close_chart(&mut self) {
        self.mode = Mode::Form;
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(PAGE_SIZE as isize));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.area_count.saturating_sub(1);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.area_count == 0 {
            return;
        }
        let last = self.area_count - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Currently selected area label
    pub fn selected_area<'a>(&self, dashboard: &'a AlertDashboard) -> Option<&'a str> {
        dashboard.areas().get(self.selected).map(String::as_str)
    }

    /// Chart requested by a button, `None` when the selector is empty
    pub fn chart_for(&self, trigger: Trigger, dashboard: &AlertDashboard) -> Option<ChartKind> {
        match trigger {
            Trigger::AreaData => self
                .selected_area(dashboard)
                .map(|area| ChartKind::AreaHours(area.to_string())),
            Trigger::TopAreas => Some(ChartKind::TopAreas),
            Trigger::Hourly => Some(ChartKind::Hourly),
        }
    }
}
