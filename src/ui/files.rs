//! Files panel: directory listing plus the editor overlay.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use crate::app::App;
use crate::ui::util::{human, truncate_middle};
use crate::ui::{centered_rect, theme};

pub fn draw_files(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Files — {}", app.files.current_path));

    let header = Row::new(vec!["Name", "Size", "Modified", "Permissions"]).style(
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.files.entries.iter().enumerate().map(|(i, e)| {
        let name = if e.is_dir {
            format!("{}/", e.name)
        } else {
            e.name.clone()
        };
        let name_fg = if e.is_dir { Color::Blue } else { Color::Reset };
        let style = if i == app.files.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(name).style(Style::default().fg(name_fg)),
            Cell::from(if e.is_dir { String::new() } else { human(e.size) }),
            Cell::from(e.modified.clone()),
            Cell::from(e.permissions.clone()).style(Style::default().fg(Color::DarkGray)),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);
    f.render_widget(table, area);
}

/// Full-screen-ish editor overlay. Save keeps it open; Esc discards edits.
pub fn draw_editor(f: &mut ratatui::Frame<'_>, app: &App) {
    let Some(path) = app.files.editing_file() else { return };
    let area = centered_rect(90, 85, f.area());
    f.render_widget(Clear, area);

    let title = format!(
        "Editing {} — Ctrl-S save, Esc close (discards unsaved edits)",
        truncate_middle(path, area.width.saturating_sub(45) as usize)
    );
    let body = app.files.editor_buffer().unwrap_or_default();
    let p = Paragraph::new(body.to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(title),
        );
    f.render_widget(p, area);
}
