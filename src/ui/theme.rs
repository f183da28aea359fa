//! Shared UI theme constants and tier colors.

use ratatui::style::Color;

use crate::thresholds::Tier;

pub const ACCENT: Color = Color::Cyan;
pub const FOOTER: Color = Color::DarkGray;
pub const DIM: Color = Color::Rgb(170, 170, 180);

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Normal => Color::Green,
        Tier::Warning => Color::Yellow,
        Tier::Danger => Color::Red,
    }
}

pub fn conn_color(state: crate::ws::ConnectionState) -> Color {
    match state {
        crate::ws::ConnectionState::Connected => Color::Green,
        crate::ws::ConnectionState::Connecting => Color::Yellow,
        crate::ws::ConnectionState::Disconnected => Color::Red,
    }
}
