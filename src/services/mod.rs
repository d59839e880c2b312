//! Service layer for the watcher.
//!
//! This module contains the external collaborators of the poll loop:
//! - Homework API access (`PracticumClient`)
//! - Chat notifications (`TelegramNotifier`)

mod practicum;
mod telegram;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use practicum::PracticumClient;
pub use telegram::TelegramNotifier;

/// Source of homework status updates.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch the raw body of all updates since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Destination for human-readable notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one text message. `Ok` means the platform accepted it.
    async fn send(&self, text: &str) -> Result<()>;
}
