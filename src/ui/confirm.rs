//! Confirmation modal for pending administrative actions.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::dispatch::AdminAction;
use crate::ui::centered_rect;

pub fn draw_confirm(f: &mut ratatui::Frame<'_>, action: &AdminAction) {
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(action.prompt()),
        Line::from(""),
        Line::styled(
            "[y] confirm    [n] cancel",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Confirm"),
        );
    f.render_widget(p, area);
}
