use super::timestamp::Timestamp;
use crate::utils::time;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `clock_out` value of an entry whose session has not ended yet.
pub const OPEN_SENTINEL: f64 = -1.0;

/// One work session as stored in the JSON log.
///
/// Timestamps are Unix epoch seconds and are written back exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub clock_in: Timestamp,
    #[serde(default = "Timestamp::sentinel")]
    pub clock_out: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Keys written by other tools, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// New open entry starting at `clock_in`.
    pub fn open(clock_in: f64, notes: Option<String>) -> Self {
        Self {
            clock_in: Timestamp::from_secs(clock_in),
            clock_out: Timestamp::sentinel(),
            notes,
            extra: Map::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.secs() == OPEN_SENTINEL
    }

    /// Close the session at `at`, never earlier than `clock_in`.
    /// Notes replace the existing ones only when given.
    pub fn close(&mut self, at: f64, notes: Option<String>) {
        self.clock_out = if at < self.clock_in.secs() {
            self.clock_in.clone()
        } else {
            Timestamp::from_secs(at)
        };
        if notes.is_some() {
            self.notes = notes;
        }
    }

    pub fn clock_in_local(&self) -> DateTime<Local> {
        time::to_local(self.clock_in.secs())
    }

    pub fn clock_out_local(&self) -> Option<DateTime<Local>> {
        (!self.is_open()).then(|| time::to_local(self.clock_out.secs()))
    }

    /// End of the session, or `now` while it is still open.
    pub fn end_or(&self, now: f64) -> f64 {
        if self.is_open() {
            now
        } else {
            self.clock_out.secs()
        }
    }

    /// Whole seconds worked; open entries count up to `now`.
    pub fn worked_seconds(&self, now: f64) -> i64 {
        (self.end_or(now) - self.clock_in.secs()).max(0.0) as i64
    }
}
