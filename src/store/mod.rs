//! JSON store holding the punch log.
//!
//! Reads never lock: saves go through a temp file renamed over the store, so
//! a reader always sees a complete document. Mutations go through
//! [`Store::update`], which holds a [`StoreLock`] for the whole cycle.

pub mod lock;

use crate::core::punch::PunchLogic;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::path::with_suffix;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use lock::StoreLock;

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn lock(&self) -> AppResult<StoreLock> {
        StoreLock::acquire(&self.path)
    }

    /// Parsed document exactly as stored.
    pub fn load_document(&self) -> AppResult<Value> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::StoreMissing(self.path.clone()),
            _ => AppError::Io(e),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Entries sorted by `clock_in`.
    pub fn load(&self) -> AppResult<Vec<Entry>> {
        let document = self.load_document()?;
        Self::entries_from(document)
    }

    pub fn entries_from(document: Value) -> AppResult<Vec<Entry>> {
        let mut entries: Vec<Entry> = serde_json::from_value(document)?;
        PunchLogic::sort(&mut entries);
        Ok(entries)
    }

    /// Write `entries` atomically, creating parent directories as needed.
    pub fn save(&self, entries: &[Entry]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = with_suffix(&self.path, ".tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(store = %self.path.display(), entries = entries.len(), "store saved");
        Ok(())
    }

    /// Write an empty log if the store does not exist yet.
    /// Returns true when a new store was created.
    pub fn init(&self) -> AppResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&[])?;
        tracing::info!(store = %self.path.display(), "initialized empty store");
        Ok(true)
    }

    /// Truncate the log to an empty array.
    pub fn reset(&self) -> AppResult<()> {
        let _lock = self.lock()?;
        self.save(&[])
    }

    /// Locked load-mutate-save cycle. The store is only rewritten when `f`
    /// succeeds.
    pub fn update<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<Entry>) -> AppResult<T>,
    {
        let _lock = self.lock()?;
        self.init()?;

        let mut entries = self.load()?;
        let out = f(&mut entries)?;
        self.save(&entries)?;
        Ok(out)
    }
}
