//! Severity tiers for percentage metrics and the temperature position map.

/// Severity classification for a percentage value (CPU, RAM, disk).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Warning,
    Danger,
}

/// Classify a percentage: >= 90 is danger, >= 70 is warning, else normal.
pub fn classify(value: f64) -> Tier {
    if value >= 90.0 {
        Tier::Danger
    } else if value >= 70.0 {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

pub const TEMP_MIN_C: f64 = 30.0;
pub const TEMP_MAX_C: f64 = 85.0;

/// Map a temperature onto a 0..=100 gauge position, clamped at both ends.
pub fn temp_position(celsius: f64) -> f64 {
    ((celsius - TEMP_MIN_C) / (TEMP_MAX_C - TEMP_MIN_C) * 100.0).clamp(0.0, 100.0)
}
