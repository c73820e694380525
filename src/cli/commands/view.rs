use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::view::{ViewContext, ViewLogic};
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{header, warning};
use crate::utils::time;

/// Handle `--view <mode...>`
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_path());
    let week_start = cfg.week_start_day()?;

    let document = store.load_document()?;
    let entries = Store::entries_from(document.clone())?;

    if let Err(e) = PunchLogic::validate(&entries) {
        warning(&e);
    }

    let ctx = ViewContext {
        document: &document,
        entries: &entries,
        now: time::now_timestamp(),
        week_start,
    };

    let with_headers = cli.view.len() > 1;
    for mode in &cli.view {
        if with_headers {
            header(mode.label());
        }
        println!("{}", ViewLogic::render(*mode, &ctx)?);
    }

    Ok(())
}
