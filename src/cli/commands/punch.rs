use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calendar::CalendarSpan;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::{format_timestamp, time};

/// Handle `--clock-in` / `--clock-out`
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_path());
    let now = time::now_timestamp();
    let notes = cli.notes.clone();

    if cli.clock_in {
        let entry = store.update(|entries| PunchLogic::clock_in(entries, now, notes).cloned())?;
        tracing::info!(clock_in = entry.clock_in.secs(), "clocked in");
        success(format!(
            "Clocked in at {}",
            format_timestamp(&entry.clock_in_local())
        ));
    } else if cli.clock_out {
        let entry = store.update(|entries| PunchLogic::clock_out(entries, now, notes).cloned())?;
        tracing::info!(clock_out = entry.clock_out.secs(), "clocked out");
        success(format!(
            "Clocked out at {} after {}",
            format_timestamp(&entry.clock_out_local().unwrap_or_else(|| entry.clock_in_local())),
            CalendarSpan::of_entry(&entry, now).humanize()
        ));
    }

    Ok(())
}
