use crate::config::Config;
use crate::core::calendar::CalendarSpan;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::{format_timestamp, time};

/// Handle an invocation without actions: report the current state
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_path());

    if !store.exists() {
        info(format!(
            "Not clocked in (no log yet at {})",
            store.path().display()
        ));
        return Ok(());
    }

    let entries = store.load()?;
    match PunchLogic::open_entry(&entries) {
        Some(open) => {
            let now = time::now_timestamp();
            info(format!(
                "Clocked in since {} ({})",
                format_timestamp(&open.clock_in_local()),
                CalendarSpan::of_entry(open, now).humanize()
            ));
        }
        None => info("Not clocked in"),
    }

    Ok(())
}
