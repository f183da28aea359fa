//! Containers panel: container list and image list, one focused at a time.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::app::{App, ContainerFocus};
use crate::ui::theme;
use crate::ui::util::truncate_middle;

pub fn draw_containers(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_container_table(f, rows[0], app);
    draw_image_table(f, rows[1], app);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default()
    }
}

fn draw_container_table(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let focused = app.container_focus == ContainerFocus::Containers;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(format!("Containers ({})", app.containers.len()));

    let header = Row::new(vec!["Name", "Image", "State", "Status", "Ports"]).style(
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.containers.iter().enumerate().map(|(i, c)| {
        let state_fg = if c.is_running() { Color::Green } else { Color::DarkGray };
        let style = if focused && i == app.container_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(c.name.clone()),
            Cell::from(truncate_middle(&c.image, 30)),
            Cell::from(c.state.clone()).style(Style::default().fg(state_fg)),
            Cell::from(c.status.clone()),
            Cell::from(c.ports.clone()),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);
    f.render_widget(table, area);
}

fn draw_image_table(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let focused = app.container_focus == ContainerFocus::Images;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(format!("Images ({})", app.images.len()));

    let header = Row::new(vec!["Repository", "Tag", "Size", "Created", "ID"]).style(
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.images.iter().enumerate().map(|(i, img)| {
        let style = if focused && i == app.image_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(truncate_middle(&img.repository, 36)),
            Cell::from(img.tag.clone()),
            Cell::from(img.size.clone()),
            Cell::from(img.created.clone()),
            Cell::from(img.id.clone()).style(Style::default().fg(Color::DarkGray)),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Percentage(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);
    f.render_widget(table, area);
}
