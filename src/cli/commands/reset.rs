use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;

/// Handle `--reset`
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_path());
    store.reset()?;
    tracing::info!(store = %store.path().display(), "store reset");
    success(format!("Log reset: {}", store.path().display()));
    Ok(())
}
