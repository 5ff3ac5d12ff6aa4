use crate::error::{AppError, AppResult};

/// Reject a missing or empty required field with a 400 validation error
pub fn require_field(value: Option<String>, field: &str) -> AppResult<String> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => Ok(v),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}
