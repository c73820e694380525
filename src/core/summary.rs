//! Aggregate views: total worked time, per-day and per-week totals.
//!
//! A session is attributed to the local day (or week) it started in, even
//! when it runs past midnight. Open sessions count up to `now`.

use crate::models::entry::Entry;
use crate::utils::secs2readable;
use crate::utils::table::{Align, Column, Table};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotal {
    /// First day of the period.
    pub start: NaiveDate,
    pub sessions: usize,
    pub worked_secs: i64,
    /// Sessions still open; more than one only in a broken log.
    pub open: usize,
}

impl PeriodTotal {
    fn new(start: NaiveDate) -> Self {
        Self {
            start,
            sessions: 0,
            worked_secs: 0,
            open: 0,
        }
    }

    fn add(&mut self, entry: &Entry, now: f64) {
        self.sessions += 1;
        self.worked_secs += entry.worked_seconds(now);
        self.open += usize::from(entry.is_open());
    }
}

/// First day of the week containing `date`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date - Days::new(u64::from(offset))
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn total(entries: &[Entry], now: f64) -> PeriodTotal {
        let first = entries
            .iter()
            .map(|e| e.clock_in_local().date_naive())
            .min()
            .unwrap_or_default();

        let mut total = PeriodTotal::new(first);
        for entry in entries {
            total.add(entry, now);
        }
        total
    }

    fn group_by<F>(entries: &[Entry], now: f64, key: F) -> Vec<PeriodTotal>
    where
        F: Fn(NaiveDate) -> NaiveDate,
    {
        let mut groups: BTreeMap<NaiveDate, PeriodTotal> = BTreeMap::new();
        for entry in entries {
            let start = key(entry.clock_in_local().date_naive());
            groups
                .entry(start)
                .or_insert_with(|| PeriodTotal::new(start))
                .add(entry, now);
        }
        groups.into_values().collect()
    }

    pub fn by_day(entries: &[Entry], now: f64) -> Vec<PeriodTotal> {
        Self::group_by(entries, now, |d| d)
    }

    pub fn by_week(entries: &[Entry], now: f64, week_start: Weekday) -> Vec<PeriodTotal> {
        Self::group_by(entries, now, |d| week_start_of(d, week_start))
    }

    pub fn render_total(entries: &[Entry], now: f64) -> String {
        let total = Self::total(entries, now);
        let mut out = format!(
            "Total time: {} across {} session{}",
            secs2readable(total.worked_secs),
            total.sessions,
            if total.sessions == 1 { "" } else { "s" }
        );
        if total.open > 0 {
            out.push_str(&format!(" ({} in progress)", total.open));
        }
        out
    }

    pub fn render_days(entries: &[Entry], now: f64) -> String {
        Self::render_periods("Date", &Self::by_day(entries, now), entries, now)
    }

    pub fn render_weeks(entries: &[Entry], now: f64, week_start: Weekday) -> String {
        Self::render_periods("Week of", &Self::by_week(entries, now, week_start), entries, now)
    }

    fn render_periods(label: &str, periods: &[PeriodTotal], entries: &[Entry], now: f64) -> String {
        if periods.is_empty() {
            return "No sessions recorded.".to_string();
        }

        let mut table = Table::new(vec![
            Column::new(label, Align::Left),
            Column::new("Sessions", Align::Right),
            Column::new("Worked", Align::Right),
        ]);

        for p in periods {
            let marker = if p.open > 0 { " *" } else { "" };
            table.add_row(vec![
                p.start.format("%Y-%m-%d").to_string(),
                p.sessions.to_string(),
                format!("{}{}", secs2readable(p.worked_secs), marker),
            ]);
        }

        let total = Self::total(entries, now);
        table.set_footer(vec![
            "Total".to_string(),
            total.sessions.to_string(),
            secs2readable(total.worked_secs),
        ]);

        let mut out = table.render();
        if total.open > 0 {
            out.push_str("* includes time still running\n");
        }
        out.trim_end().to_string()
    }
}
