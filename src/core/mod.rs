pub mod calendar;
pub mod punch;
pub mod summary;
pub mod view;
