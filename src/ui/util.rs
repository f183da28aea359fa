//! Small UI helpers: human-readable sizes and truncation.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn human(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    match unit {
        0 => format!("{value:.0}{}", UNITS[unit]),
        4 => format!("{value:.2}{}", UNITS[unit]),
        _ => format!("{value:.1}{}", UNITS[unit]),
    }
}

/// Shorten `s` to at most `max` characters, eliding the middle. Operates on
/// chars, so paths and image names with multibyte characters are safe.
pub fn truncate_middle(s: &str, max: usize) -> String {
    let total = s.chars().count();
    if total <= max {
        return s.to_string();
    }
    if max <= 3 {
        return "...".into();
    }
    let keep = max - 3;
    let left = keep / 2;
    let right = keep - left;
    let head: String = s.chars().take(left).collect();
    let tail: String = s.chars().skip(total - right).collect();
    format!("{head}...{tail}")
}
