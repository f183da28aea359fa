//! Top header: hostname, uptime, temperature, and the connection indicator.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::theme;
use crate::ws::ConnectionState;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let host = app
        .identity
        .as_ref()
        .map(|id| format!("{}@{}", id.user, id.hostname))
        .unwrap_or_else(|| "host".into());

    let (dot, label) = match app.conn_state {
        ConnectionState::Connected => ("●", "connected"),
        ConnectionState::Connecting => ("◌", "connecting"),
        ConnectionState::Disconnected => ("✖", "disconnected"),
    };

    let mut spans = vec![
        Span::styled(
            format!("dashtop — {host}"),
            Style::default().fg(theme::ACCENT),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{dot} {label}"),
            Style::default().fg(theme::conn_color(app.conn_state)),
        ),
    ];

    if let Some(m) = &app.latest {
        if !m.uptime_formatted.is_empty() {
            spans.push(Span::raw(format!("  up {}", m.uptime_formatted)));
        }
        if let Some(t) = m.cpu_temp {
            spans.push(Span::raw(format!("  {t:.1}°C")));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
