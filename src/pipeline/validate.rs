// src/pipeline/validate.rs

//! Response shape validation.

use serde_json::Value;

use crate::error::{AppError, Result};

/// Check that a parsed body matches the documented response shape.
///
/// `homeworks` must be a list. `current_date` may be absent or null, but if
/// present it must be an integer.
pub fn check_response(response: &Value) -> Result<()> {
    log::debug!("Validating API response");

    let object = response
        .as_object()
        .ok_or_else(|| AppError::shape("not an object"))?;

    match object.get("homeworks") {
        Some(Value::Array(_)) => {}
        _ => return Err(AppError::shape("homeworks not a list")),
    }

    match object.get("current_date") {
        None | Some(Value::Null) => {}
        Some(value) if value.is_i64() => {}
        Some(_) => return Err(AppError::shape("current_date not an integer")),
    }

    Ok(())
}
