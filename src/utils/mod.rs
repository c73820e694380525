pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_timestamp;
pub use formatting::secs2readable;
