//! UI module root: top-level frame layout plus per-panel drawing.

pub mod confirm;
pub mod containers;
pub mod files;
pub mod header;
pub mod monitor;
pub mod processes;
pub mod system;
pub mod theme;
pub mod util;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
};

use crate::app::App;
use crate::panels::Panel;

pub fn draw(f: &mut ratatui::Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // tabs
            Constraint::Min(5),    // panel body
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    header::draw_header(f, rows[0], app);
    draw_tabs(f, rows[1], app);

    match app.nav.active() {
        Panel::Monitoring => monitor::draw_monitor(f, rows[2], app),
        Panel::Processes => processes::draw_processes(f, rows[2], app),
        Panel::Containers => containers::draw_containers(f, rows[2], app),
        Panel::Files => files::draw_files(f, rows[2], app),
        Panel::System => system::draw_system(f, rows[2], app),
    }

    draw_footer(f, rows[3], app);

    // Overlays last so they sit on top
    if app.files.is_editing() {
        files::draw_editor(f, app);
    }
    if let Some(action) = app.dispatcher.pending() {
        confirm::draw_confirm(f, action);
    }
}

fn draw_tabs(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let titles: Vec<Line> = Panel::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!(" {} {} ", i + 1, p.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.nav.active().index())
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, area);
}

fn draw_footer(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let text = if let Some(notice) = app.active_notice() {
        notice.to_string()
    } else {
        match app.nav.active() {
            Panel::Monitoring => "1-5/Tab panels | q quit".into(),
            Panel::Processes => "↑↓ select | k kill | g refresh | q quit".into(),
            Panel::Containers => {
                "↑↓ select | i containers/images | s start  x stop  r restart  d delete | g refresh"
                    .into()
            }
            Panel::Files => "↑↓ select | Enter open | Backspace up | g refresh".into(),
            Panel::System => "R reboot | P power off | g refresh".into(),
        }
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme::FOOTER)),
        area,
    );
}

/// Centered overlay rectangle as a percentage of the frame.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
