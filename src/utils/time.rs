//! Time utilities: readable durations and display labels for trigger times.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// `125` → `02h 05m`
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Whole minutes left, rounded up so "30 seconds" still reads `00h 01m`.
pub fn minutes_ceil(delta: TimeDelta) -> i64 {
    let secs = delta.num_seconds();
    if secs <= 0 { secs / 60 } else { (secs + 59) / 60 }
}

/// `today 13:30` / `tomorrow 07:30` / `2024-01-03 07:30`
pub fn describe_trigger(next: NaiveDateTime, today: NaiveDate) -> String {
    let day = if next.date() == today {
        "today".to_string()
    } else if today.succ_opt() == Some(next.date()) {
        "tomorrow".to_string()
    } else {
        next.date().format("%Y-%m-%d").to_string()
    };
    format!("{day} {}", next.format("%H:%M"))
}
