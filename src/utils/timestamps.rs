use chrono::{DateTime, Local, Utc};

/// Describe when results were stored:
/// - Relative for <7 days: "zojuist", "12 min geleden", "3 uur geleden", "2 dagen geleden"
/// - Absolute for ≥7 days: "15-01-2024 10:30" in local time
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(timestamp, &Utc::now())
}

fn format_timestamp_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else {
        timestamp.with_timezone(&Local).format("%d-%m-%Y %H:%M").to_string()
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match (days, hours, minutes) {
        (1, _, _) => "1 dag geleden".to_string(),
        (d, _, _) if d > 1 => format!("{} dagen geleden", d),
        (_, h, _) if h > 0 => format!("{} uur geleden", h),
        (_, _, m) if m > 0 => format!("{} min geleden", m),
        // Also covers clock skew (timestamps slightly in the future)
        _ => "zojuist".to_string(),
    }
}
