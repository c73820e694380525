use crate::models::view_mode::ViewMode;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Command-line interface definition for punchclock
#[derive(Parser, Debug)]
#[command(
    name = "punch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in and out of work sessions and review the log",
    long_about = None
)]
#[command(group(
    ArgGroup::new("punch")
        .args(["clock_in", "clock_out"])
        .multiple(true)
))]
pub struct Cli {
    /// Start a work session now
    #[arg(short = 'i', long = "clock-in")]
    pub clock_in: bool,

    /// End the open work session now
    #[arg(short = 'o', long = "clock-out")]
    pub clock_out: bool,

    /// Truncate the log to an empty list
    #[arg(short = 'r', long = "reset")]
    pub reset: bool,

    /// Show the log in one or more formats
    #[arg(
        short = 'v',
        long = "view",
        value_enum,
        num_args = 1..,
        value_name = "MODE"
    )]
    pub view: Vec<ViewMode>,

    /// Note attached to the clock-in or clock-out being performed
    #[arg(short = 'n', long = "notes", requires = "punch", value_name = "TEXT")]
    pub notes: Option<String>,

    /// Override the store path
    #[arg(short = 'f', long = "file", env = "PUNCH_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Override the configuration file path
    #[arg(long = "config", env = "PUNCH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn wants_punch(&self) -> bool {
        self.clock_in || self.clock_out
    }

    /// Nothing to do but report where things stand.
    pub fn is_status_only(&self) -> bool {
        !self.reset && !self.wants_punch() && self.view.is_empty()
    }
}
