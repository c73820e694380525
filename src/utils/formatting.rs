//! Formatting utilities used by the views and status lines.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `MM/DD/YYYY, HH:MM:SS`
pub const HUMAN_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format(HUMAN_FORMAT).to_string()
}

/// "1 day", "2 days", "0 days".
pub fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

pub fn secs2readable(secs: i64) -> String {
    let abs_s = secs.abs();
    let hours = abs_s / 3600;
    let minutes = (abs_s % 3600) / 60;
    let seconds = abs_s % 60;

    let sign = if secs < 0 { "-" } else { "" };

    // es: 07h 05m 09s
    format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
}
