//! Rendering of the per-entry views (`raw`, `human`, `parsed`) and the
//! dispatch to the aggregate views in `summary`.

use crate::core::calendar::CalendarSpan;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::view_mode::ViewMode;
use crate::utils::format_timestamp;
use chrono::Weekday;
use serde::Serialize;
use serde_json::Value;

/// Shown in place of `clock_out` for the open entry.
pub const OPEN_LABEL: &str = "open";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanEntry {
    pub clock_in: String,
    pub clock_out: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl HumanEntry {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            clock_in: format_timestamp(&entry.clock_in_local()),
            clock_out: entry
                .clock_out_local()
                .map(|dt| format_timestamp(&dt))
                .unwrap_or_else(|| OPEN_LABEL.to_string()),
            notes: entry.notes.clone(),
            duration: None,
        }
    }
}

/// Everything a view needs; built once per invocation.
pub struct ViewContext<'a> {
    pub document: &'a Value,
    pub entries: &'a [Entry],
    pub now: f64,
    pub week_start: Weekday,
}

pub struct ViewLogic;

impl ViewLogic {
    pub fn human(entries: &[Entry]) -> Vec<HumanEntry> {
        entries.iter().map(HumanEntry::from_entry).collect()
    }

    pub fn parsed(entries: &[Entry], now: f64) -> Vec<HumanEntry> {
        entries
            .iter()
            .map(|entry| {
                let mut human = HumanEntry::from_entry(entry);
                let span = CalendarSpan::of_entry(entry, now).humanize();
                human.duration = Some(if entry.is_open() {
                    format!("{span} (in progress)")
                } else {
                    span
                });
                human
            })
            .collect()
    }

    pub fn render(mode: ViewMode, ctx: &ViewContext<'_>) -> AppResult<String> {
        let out = match mode {
            ViewMode::Raw => serde_json::to_string_pretty(ctx.document)?,
            ViewMode::Human => serde_json::to_string_pretty(&Self::human(ctx.entries))?,
            ViewMode::Parsed => serde_json::to_string_pretty(&Self::parsed(ctx.entries, ctx.now))?,
            ViewMode::TotalTime => SummaryLogic::render_total(ctx.entries, ctx.now),
            ViewMode::Summary => SummaryLogic::render_days(ctx.entries, ctx.now),
            ViewMode::SummaryWeek => {
                SummaryLogic::render_weeks(ctx.entries, ctx.now, ctx.week_start)
            }
        };
        Ok(out)
    }
}
