//! Processes panel: top-CPU table with row selection.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::app::App;
use crate::ui::theme;

const COLS: [Constraint; 6] = [
    Constraint::Length(8),      // PID
    Constraint::Percentage(35), // Name
    Constraint::Length(12),     // User
    Constraint::Length(8),      // CPU %
    Constraint::Length(8),      // Mem %
    Constraint::Length(10),     // Status
];

pub fn draw_processes(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Processes ({} shown, by CPU)", app.processes.len()));

    let header = Row::new(vec!["PID", "Name", "User", "CPU %", "Mem %", "Status"]).style(
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.processes.iter().enumerate().map(|(i, p)| {
        let cpu_fg = match p.cpu_percent {
            x if x < 25.0 => Color::Green,
            x if x < 60.0 => Color::Yellow,
            _ => Color::Red,
        };
        let style = if i == app.proc_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(p.pid.to_string()).style(Style::default().fg(Color::DarkGray)),
            Cell::from(p.name.clone()),
            Cell::from(p.username.clone()),
            Cell::from(format!("{:>5.1}", p.cpu_percent)).style(Style::default().fg(cpu_fg)),
            Cell::from(format!("{:>5.1}", p.memory_percent)),
            Cell::from(p.status.clone()),
        ])
        .style(style)
    });

    let table = Table::new(rows, COLS.to_vec())
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}
