//! Exclusive advisory lock around a load-mutate-save cycle.

use crate::errors::{AppError, AppResult};
use crate::utils::path::with_suffix;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Held for the duration of a mutation; the lock is released on drop.
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Block until the lock on `<store>.lock` is ours.
    pub fn acquire(store_path: &Path) -> AppResult<Self> {
        let path = with_suffix(store_path, ".lock");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        FileExt::lock_exclusive(&file).map_err(|source| AppError::Lock {
            path: store_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(lock = %path.display(), "store lock acquired");
        Ok(Self { file, path })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        match FileExt::unlock(&self.file) {
            Ok(()) => tracing::debug!(lock = %self.path.display(), "store lock released"),
            Err(e) => tracing::warn!(lock = %self.path.display(), error = %e, "failed to release store lock"),
        }
    }
}
