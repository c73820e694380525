pub mod entry;
pub mod timestamp;
pub mod view_mode;
