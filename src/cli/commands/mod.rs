pub mod punch;
pub mod reset;
pub mod status;
pub mod view;
