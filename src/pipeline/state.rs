// src/pipeline/state.rs

//! In-memory state carried between poll cycles.

/// Watermark and last delivered message. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopState {
    watermark: i64,
    last_sent_message: Option<String>,
}

impl LoopState {
    pub fn new(watermark: i64) -> Self {
        Self {
            watermark,
            last_sent_message: None,
        }
    }

    /// `from_date` for the next request.
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    pub fn last_sent_message(&self) -> Option<&str> {
        self.last_sent_message.as_deref()
    }

    /// Whether `message` repeats the last delivered one.
    pub fn is_duplicate(&self, message: &str) -> bool {
        self.last_sent_message.as_deref() == Some(message)
    }

    /// Remember a message the notifier accepted.
    pub fn record_sent(&mut self, message: impl Into<String>) {
        self.last_sent_message = Some(message.into());
    }

    /// Move the watermark to `current_date` if given. Never moves it back.
    ///
    /// Returns whether the watermark changed.
    pub fn advance_watermark(&mut self, current_date: Option<i64>) -> bool {
        match current_date {
            Some(date) if date > self.watermark => {
                self.watermark = date;
                true
            }
            _ => false,
        }
    }
}
