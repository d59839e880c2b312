// src/error.rs

//! Unified error handling for the watcher.
//!
//! Every failure the poll loop can observe is an [`AppError`]. Each variant
//! belongs to exactly one [`FaultKind`], and only
//! [`FaultKind::Configuration`] is allowed to stop the process.

use std::fmt;

use thiserror::Error;

/// Result type alias for watcher operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing credentials or invalid settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure reaching the API (includes timeouts)
    #[error("API request failed: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// The API answered with something other than HTTP 200
    #[error("Endpoint is not accessible: HTTP {status}")]
    Access { status: u16 },

    /// The body is JSON but not the documented shape
    #[error("Unexpected API response shape: {0}")]
    Shape(String),

    /// A homework record lacks a required field
    #[error("Homework record is missing `{0}`")]
    MissingField(&'static str),

    /// A homework record carries a status outside the verdict table
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    /// Sending a message to the chat failed
    #[error("Failed to send message: {0}")]
    Notifier(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The response body is not JSON
    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fault taxonomy used for logging and cycle outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    Configuration,
    Connectivity,
    Access,
    Format,
    Shape,
    MissingField,
    UnknownStatus,
    Notifier,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::Configuration => "configuration",
            FaultKind::Connectivity => "connectivity",
            FaultKind::Access => "access",
            FaultKind::Format => "format",
            FaultKind::Shape => "shape",
            FaultKind::MissingField => "missing-field",
            FaultKind::UnknownStatus => "unknown-status",
            FaultKind::Notifier => "notifier",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a response-shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    /// Create an unknown-status error.
    pub fn unknown_status(status: impl Into<String>) -> Self {
        Self::UnknownStatus(status.into())
    }

    /// Create a notifier error.
    pub fn notifier(message: impl fmt::Display) -> Self {
        Self::Notifier(message.to_string())
    }

    /// Classify this error into the fault taxonomy.
    ///
    /// File and TOML errors only occur while loading settings, so they count
    /// as configuration faults.
    pub fn kind(&self) -> FaultKind {
        match self {
            AppError::Config(_) | AppError::Io(_) | AppError::Toml(_) => FaultKind::Configuration,
            AppError::Connectivity(_) => FaultKind::Connectivity,
            AppError::Access { .. } => FaultKind::Access,
            AppError::Json(_) => FaultKind::Format,
            AppError::Shape(_) => FaultKind::Shape,
            AppError::MissingField(_) => FaultKind::MissingField,
            AppError::UnknownStatus(_) => FaultKind::UnknownStatus,
            AppError::Notifier(_) => FaultKind::Notifier,
        }
    }

    /// Whether this error must terminate the process.
    pub fn is_fatal(&self) -> bool {
        self.kind() == FaultKind::Configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_configuration_is_fatal() {
        assert!(AppError::config("TELEGRAM_TOKEN").is_fatal());
        assert!(!AppError::Access { status: 503 }.is_fatal());
        assert!(!AppError::shape("homeworks not a list").is_fatal());
        assert!(!AppError::MissingField("status").is_fatal());
        assert!(!AppError::notifier("chat not found").is_fatal());
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AppError::Access { status: 404 }.kind(), FaultKind::Access);
        assert_eq!(
            AppError::unknown_status("graded").kind(),
            FaultKind::UnknownStatus
        );
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::from(json_err).kind(), FaultKind::Format);
    }

    #[test]
    fn test_display_carries_cause() {
        assert_eq!(
            AppError::Access { status: 401 }.to_string(),
            "Endpoint is not accessible: HTTP 401"
        );
        assert_eq!(
            AppError::MissingField("homework_name").to_string(),
            "Homework record is missing `homework_name`"
        );
    }
}
