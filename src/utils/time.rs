//! Time utilities: strict HH:MM parsing and hour formatting.

use chrono::NaiveTime;

/// Parse a wall-clock `HH:MM` value. Seconds are not accepted.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if t.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `8.5` → `"8.50"`
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
