use clap::ValueEnum;

/// Rendering requested with `--view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    /// The store as written on disk
    #[value(name = "raw")]
    Raw,
    /// Timestamps as local dates
    #[value(name = "human")]
    Human,
    /// Human view plus the duration of each session
    #[value(name = "parsed")]
    Parsed,
    /// Total worked time
    #[value(name = "total_time")]
    TotalTime,
    /// Worked time per day
    #[value(name = "summary")]
    Summary,
    /// Worked time per week
    #[value(name = "summary_week")]
    SummaryWeek,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Raw => "raw",
            ViewMode::Human => "human",
            ViewMode::Parsed => "parsed",
            ViewMode::TotalTime => "total_time",
            ViewMode::Summary => "summary",
            ViewMode::SummaryWeek => "summary_week",
        }
    }
}
