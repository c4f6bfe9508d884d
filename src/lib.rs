pub mod config;
pub mod draw;
pub mod gemini;
pub mod handler;
pub mod model;
pub mod prompt;
pub mod serverchan;
