//! Monitoring panel: live gauges, rolling sparklines, alerts, and the
//! 1-hour aggregates from the stats poller.

use std::collections::VecDeque;

use ratatui::{
    layout::{Constraint, Direction, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Sparkline},
};

use crate::app::App;
use crate::thresholds::{classify, temp_position};
use crate::ui::theme::{tier_color, DIM};

pub fn draw_monitor(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let rows = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // gauges
            Constraint::Min(6),    // sparklines
            Constraint::Length(6), // alerts + stats
        ])
        .split(area);

    draw_gauges(f, rows[0], app);
    draw_sparklines(f, rows[1], app);

    let bottom = ratatui::layout::Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    draw_alerts(f, bottom[0], app);
    draw_stats(f, bottom[1], app);
}

fn draw_gauges(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let cols = ratatui::layout::Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let m = app.latest.as_ref();

    let cpu = m.map(|m| m.cpu_percent).unwrap_or(0.0);
    gauge(f, cols[0], "CPU", cpu, format!("{cpu:.1}%"));

    let ram = m.map(|m| m.ram_percent).unwrap_or(0.0);
    let ram_label = m
        .map(|m| format!("{:.1} / {:.1} GB", m.ram_used_gb, m.ram_total_gb))
        .unwrap_or_else(|| "-".into());
    gauge(f, cols[1], "RAM", ram, ram_label);

    let disk = m.map(|m| m.disk_percent).unwrap_or(0.0);
    let disk_label = m
        .map(|m| format!("{:.1} / {:.1} GB", m.disk_used_gb, m.disk_total_gb))
        .unwrap_or_else(|| "-".into());
    gauge(f, cols[2], "Disk", disk, disk_label);

    // Temperature is positioned linearly on [30, 85] °C, not tier-classified
    let temp = m.and_then(|m| m.cpu_temp);
    let pos = temp.map(temp_position).unwrap_or(0.0);
    let label = temp.map(|t| format!("{t:.1}°C")).unwrap_or_else(|| "N/A".into());
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Temp"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(pos.round() as u16)
        .label(label);
    f.render_widget(g, cols[3]);
}

fn gauge(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, pct: f64, label: String) {
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(tier_color(classify(pct))))
        .percent(pct.clamp(0.0, 100.0).round() as u16)
        .label(label);
    f.render_widget(g, area);
}

fn draw_sparklines(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let rows = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let since = app
        .history
        .labels()
        .front()
        .map(|l| format!(" since {l}"))
        .unwrap_or_default();

    spark(f, rows[0], &format!("CPU %{since}"), app.history.cpu(), 100, Color::Cyan);
    spark(f, rows[1], &format!("RAM %{since}"), app.history.ram(), 100, Color::Magenta);
    spark(f, rows[2], &format!("Temp °C{since}"), app.history.temp(), 100, Color::Yellow);
}

fn spark(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    hist: &VecDeque<f64>,
    max: u64,
    color: Color,
) {
    let max_points = area.width.saturating_sub(2) as usize;
    let start = hist.len().saturating_sub(max_points);
    let data: Vec<u64> = hist
        .iter()
        .skip(start)
        .map(|v| v.clamp(0.0, max as f64).round() as u64)
        .collect();
    let s = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .data(&data)
        .max(max)
        .style(Style::default().fg(color));
    f.render_widget(s, area);
}

fn draw_alerts(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let alerts = app
        .latest
        .as_ref()
        .map(|m| m.alerts.as_slice())
        .unwrap_or_default();
    let items: Vec<ListItem> = if alerts.is_empty() {
        vec![ListItem::new(Line::styled("no active alerts", Style::default().fg(DIM)))]
    } else {
        alerts
            .iter()
            .map(|a| ListItem::new(Line::styled(a.clone(), Style::default().fg(Color::Red))))
            .collect()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Alerts"));
    f.render_widget(list, area);
}

fn draw_stats(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let lines = if let Some(s) = &app.stats {
        let temp_max = s
            .temperature
            .max
            .map(|t| format!("{t:.1}°C"))
            .unwrap_or_else(|| "N/A".into());
        vec![
            Line::from(format!("CPU avg {:.1}%  max {:.1}%", s.cpu.avg, s.cpu.max)),
            Line::from(format!("RAM avg {:.1}%", s.ram.avg)),
            Line::from(format!("Temp max {temp_max}")),
            Line::styled(
                format!("{} samples over {}h", s.sample_count, s.period_hours),
                Style::default().fg(DIM),
            ),
        ]
    } else {
        vec![Line::styled("waiting for first poll…", Style::default().fg(DIM))]
    };
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Last hour"));
    f.render_widget(p, area);
}
