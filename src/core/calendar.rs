//! Calendar-aware difference between two date-times.
//!
//! Whole months are counted first by stepping the start forward month by
//! month (clamping to the end of shorter months, so Jan 31 + 1 month is the
//! last day of February), then the remainder is split into days, hours,
//! minutes and seconds.

use crate::models::entry::Entry;
use crate::utils::formatting::plural;
use chrono::{Datelike, Months, NaiveDateTime};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSpan {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

fn add_months(start: NaiveDateTime, months: i64) -> NaiveDateTime {
    u32::try_from(months)
        .ok()
        .and_then(|m| start.checked_add_months(Months::new(m)))
        .unwrap_or(NaiveDateTime::MAX)
}

impl CalendarSpan {
    /// Span from `start` to `end`; empty when `end` is not after `start`.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end <= start {
            return Self::default();
        }

        let mut months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
            - i64::from(start.month());
        let mut anchor = add_months(start, months);
        while months > 0 && anchor > end {
            months -= 1;
            anchor = add_months(start, months);
        }

        let rest = (end - anchor).num_seconds();

        Self {
            years: months / 12,
            months: months % 12,
            days: rest / 86_400,
            hours: (rest % 86_400) / 3600,
            minutes: (rest % 3600) / 60,
            seconds: rest % 60,
        }
    }

    /// Span of an entry in local time; open entries run until `now`.
    pub fn of_entry(entry: &Entry, now: f64) -> Self {
        let start = entry.clock_in_local().naive_local();
        let end = crate::utils::time::to_local(entry.end_or(now)).naive_local();
        Self::between(start, end)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// "1 year 2 months 3 days"; zero units are left out.
    pub fn humanize(&self) -> String {
        if self.is_zero() {
            return plural(0, "second");
        }

        [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ]
        .into_iter()
        .filter(|(n, _)| *n != 0)
        .map(|(n, unit)| plural(n, unit))
        .collect::<Vec<_>>()
        .join(" ")
    }
}
