//! System panel: host identity, running services, and power actions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::ui::theme;

/// Running services beyond this many are fetched but not drawn.
pub const SERVICE_DISPLAY_CAP: usize = 10;

pub fn draw_system(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    draw_identity(f, rows[0], app);
    draw_services(f, rows[1], app);
}

fn draw_identity(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let lines = if let Some(id) = &app.identity {
        vec![
            Line::from(format!("Host     {}", id.hostname)),
            Line::from(format!("User     {}", id.user)),
            Line::from(format!("Platform {} {}", id.platform, id.release)),
            Line::from(format!("Machine  {}", id.machine)),
            Line::styled(
                "R reboot | P power off (both ask for confirmation)",
                Style::default().fg(Color::Red),
            ),
        ]
    } else {
        vec![Line::styled(
            "identity unavailable",
            Style::default().fg(theme::DIM),
        )]
    };
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Host"));
    f.render_widget(p, area);
}

fn draw_services(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let shown = app.services.len().min(SERVICE_DISPLAY_CAP);
    let block = Block::default().borders(Borders::ALL).title(format!(
        "Running services (showing {shown} of {})",
        app.services.len()
    ));

    let header = Row::new(vec!["Unit", "Load", "Active", "Sub"]).style(
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.services.iter().take(SERVICE_DISPLAY_CAP).map(|s| {
        Row::new(vec![
            Cell::from(s.name.clone()),
            Cell::from(s.load.clone()),
            Cell::from(s.active.clone()).style(Style::default().fg(Color::Green)),
            Cell::from(s.sub.clone()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);
    f.render_widget(table, area);
}
