//! UI rendering for the terminal form and chart view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use redalert_graphs::{visual_order, AlertDashboard};

use crate::app::{App, ChartView, Mode, FORM_TITLE, TRIGGERS};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App, dashboard: &AlertDashboard) {
    match &app.mode {
        Mode::Form => draw_form(frame, app, dashboard),
        Mode::Chart(view) => draw_chart(frame, app, view),
    }
}

fn draw_form(frame: &mut Frame, app: &App, dashboard: &AlertDashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, dashboard, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_selector(frame, app, dashboard, main[0]);
    draw_buttons(frame, dashboard, main[1]);
    draw_footer(frame, app, chunks[2], "↑↓ PgUp PgDn Home End select · 1/Enter 2 3 show · q quit");
}

fn draw_header(frame: &mut Frame, dashboard: &AlertDashboard, area: Rect) {
    let summary = format!(
        " {} records in {} areas",
        dashboard.records().len(),
        dashboard.areas().len()
    );
    let header = Paragraph::new(summary).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", FORM_TITLE))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(header, area);
}

fn draw_selector(frame: &mut Frame, app: &App, dashboard: &AlertDashboard, area: Rect) {
    let items: Vec<ListItem> = dashboard
        .areas()
        .iter()
        .map(|label| ListItem::new(visual_order(label)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Area "))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(if app.area_count == 0 {
        None
    } else {
        Some(app.selected)
    });
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_buttons(frame: &mut Frame, dashboard: &AlertDashboard, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let top_areas = dashboard.chart_config().top_areas;
    for (trigger, row) in TRIGGERS.iter().zip(rows.iter()) {
        let button = Paragraph::new(format!(" [{}] {}", trigger.key(), trigger.caption(top_areas)))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        frame.render_widget(button, *row);
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, help: &str) {
    let text = match &app.status {
        Some(status) => format!(" {} · {}", status, help),
        None => format!(" {}", help),
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_chart(frame: &mut Frame, app: &App, view: &ChartView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", visual_order(&view.series.title)))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .title_bottom(format!(
            " {} ↓ · {} → ",
            view.series.y_label, view.series.x_label
        ));
    let visible = block.inner(chunks[0]).height as usize;

    if view.series.is_empty() {
        frame.render_widget(Paragraph::new(" No data").block(block), chunks[0]);
    } else {
        let bars: Vec<Bar> = visible_bars(view, visible)
            .map(|(label, value)| {
                Bar::default()
                    .label(Line::from(label))
                    .value(u64::from(value))
                    .text_value(value.to_string())
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .bar_style(Style::default().fg(Color::Red))
            .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .max(u64::from(view.series.max_value()).max(1))
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, chunks[0]);
    }

    draw_footer(frame, app, chunks[1], "↑↓ scroll · Esc/q/Enter back");
}

/// Labels in visual order with their counts for the rows that fit
fn visible_bars(view: &ChartView, rows: usize) -> impl Iterator<Item = (String, u32)> + '_ {
    view.series
        .bars
        .iter()
        .skip(view.offset)
        .take(rows.max(1))
        .map(|bar| (visual_order(&bar.label), bar.value))
}
