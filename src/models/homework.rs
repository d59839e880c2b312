//! Homework API payload structures.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// A validated homework statuses response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Raw homework entries, newest first
    pub homeworks: Vec<Value>,

    /// Server time to use as the next `from_date`
    pub current_date: Option<i64>,
}

impl ApiResponse {
    /// Build from a body that already passed
    /// [`check_response`](crate::pipeline::check_response).
    pub fn from_checked(body: &Value) -> Result<Self> {
        let homeworks = body
            .get("homeworks")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| AppError::shape("homeworks not a list"))?;

        Ok(Self {
            homeworks,
            current_date: current_date_of(body),
        })
    }

    /// The only record the watcher reports on.
    pub fn first_record(&self) -> Option<Result<HomeworkRecord>> {
        self.homeworks.first().map(HomeworkRecord::from_value)
    }
}

/// Extract `current_date` from a parsed body, if it is an integer.
pub fn current_date_of(body: &Value) -> Option<i64> {
    body.get("current_date").and_then(Value::as_i64)
}

/// One homework entry. Fields other than name and status are kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HomeworkRecord {
    #[serde(default)]
    pub homework_name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HomeworkRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(name.into()),
            status: Some(status.into()),
            extra: Map::new(),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AppError::shape("homework record not an object"));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| AppError::shape(format!("invalid homework record: {e}")))
    }
}
