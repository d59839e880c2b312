// src/models/mod.rs

//! Domain models for the watcher.

mod config;
mod homework;
mod verdict;

// Re-export all public types
pub use config::{ApiConfig, Config, LoggingConfig, PollerConfig, TelegramConfig};
pub use homework::{ApiResponse, HomeworkRecord, current_date_of};
pub use verdict::{HomeworkStatus, VerdictTable};
