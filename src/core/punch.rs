use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::format_timestamp;

pub struct PunchLogic;

impl PunchLogic {
    /// Order entries by `clock_in`, oldest first.
    pub fn sort(entries: &mut [Entry]) {
        entries.sort_by(|a, b| a.clock_in.secs().total_cmp(&b.clock_in.secs()));
    }

    /// The open entry, if any. Expects a sorted log.
    pub fn open_entry(entries: &[Entry]) -> Option<&Entry> {
        entries.last().filter(|e| e.is_open())
    }

    /// Check the log invariants on a sorted log: only the most recent entry
    /// may be open, and no closed entry ends before it starts.
    pub fn validate(entries: &[Entry]) -> AppResult<()> {
        let open = entries.iter().filter(|e| e.is_open()).count();
        if open > 1 {
            return Err(AppError::InvalidLog(format!(
                "{open} entries are still open"
            )));
        }

        if let Some(pos) = entries.iter().position(Entry::is_open)
            && pos + 1 != entries.len()
        {
            return Err(AppError::InvalidLog(format!(
                "entry started {} is open but is not the most recent",
                format_timestamp(&entries[pos].clock_in_local())
            )));
        }

        if let Some(bad) = entries
            .iter()
            .find(|e| !e.is_open() && e.clock_out.secs() < e.clock_in.secs())
        {
            return Err(AppError::InvalidLog(format!(
                "entry started {} ends before it starts",
                format_timestamp(&bad.clock_in_local())
            )));
        }

        Ok(())
    }

    /// Append a new open entry at `now`. Sorts `entries` in place.
    pub fn clock_in(entries: &mut Vec<Entry>, now: f64, notes: Option<String>) -> AppResult<&Entry> {
        Self::sort(entries);
        Self::validate(entries)?;

        if let Some(open) = Self::open_entry(entries) {
            return Err(AppError::AlreadyClockedIn(format_timestamp(
                &open.clock_in_local(),
            )));
        }

        // never start before the previous session ended
        let start = entries.last().map_or(now, |last| now.max(last.clock_out.secs()));
        entries.push(Entry::open(start, notes));

        let idx = entries.len() - 1;
        Ok(&entries[idx])
    }

    /// Close the most recent entry at `now`. Sorts `entries` in place.
    pub fn clock_out(entries: &mut [Entry], now: f64, notes: Option<String>) -> AppResult<&Entry> {
        Self::sort(entries);
        Self::validate(entries)?;

        match entries.last_mut() {
            Some(last) if last.is_open() => {
                last.close(now, notes);
                Ok(last)
            }
            _ => Err(AppError::NotClockedIn),
        }
    }
}
