//! Time utilities: epoch seconds <-> local date-times.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Current time as fractional epoch seconds.
pub fn now_timestamp() -> f64 {
    to_timestamp(&Utc::now())
}

pub fn to_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1_000_000.0
}

/// Convert fractional epoch seconds to a local date-time.
/// Out-of-range values fall back to the epoch.
pub fn to_local(ts: f64) -> DateTime<Local> {
    let secs = ts.floor();
    let nanos = (((ts - secs) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(secs as i64, nanos)
        .unwrap_or_default()
        .with_timezone(&Local)
}
