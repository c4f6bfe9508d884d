pub mod content;
pub mod listing;
