// src/pipeline/status.rs

//! Homework record to notification text.

use crate::error::{AppError, Result};
use crate::models::{HomeworkRecord, VerdictTable};

/// Format the status-change message for one homework record.
pub fn parse_status(record: &HomeworkRecord, verdicts: &VerdictTable) -> Result<String> {
    let name = record
        .homework_name
        .as_deref()
        .ok_or(AppError::MissingField("homework_name"))?;
    let status = record
        .status
        .as_deref()
        .ok_or(AppError::MissingField("status"))?;
    let verdict = verdicts
        .lookup(status)
        .ok_or_else(|| AppError::unknown_status(status))?;

    Ok(format!("Status of homework \"{name}\" has changed. {verdict}"))
}
