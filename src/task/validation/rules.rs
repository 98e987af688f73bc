//! Individual validation rule implementations.
//!
//! Each rule checks a single form field and returns `None` on success or the
//! matching [`FieldError`] on failure. The validator service combines rules
//! and collects every failure.

use super::{FieldError, ValidationLimits};
use crate::task::domain::TaskState;

/// Checks that a title is non-blank and within the configured length bound.
#[must_use]
pub fn check_title(title: &str, limits: &ValidationLimits) -> Option<FieldError> {
    check_text_field("title", title, limits.max_title_length)
}

/// Checks that a description is non-blank and within the configured length
/// bound.
#[must_use]
pub fn check_description(description: &str, limits: &ValidationLimits) -> Option<FieldError> {
    check_text_field("description", description, limits.max_description_length)
}

/// Checks that an update form carries a plausible task identifier.
#[must_use]
pub fn check_id(id: i64) -> Option<FieldError> {
    if id < 1 {
        return Some(FieldError::new("id", "must be a positive integer"));
    }
    None
}

/// Checks that a requested page size lies in `1..=max_page_size`.
#[must_use]
pub fn check_page_size(size: Option<u32>, limits: &ValidationLimits) -> Option<FieldError> {
    match size {
        Some(0) => Some(FieldError::new("size", "must be at least 1")),
        Some(value) if value > limits.max_page_size => Some(FieldError::new(
            "size",
            format!("must be at most {}", limits.max_page_size),
        )),
        _ => None,
    }
}

/// Checks that a state filter names one of the known completion states.
#[must_use]
pub fn check_state_filter(state: Option<&str>) -> Option<FieldError> {
    let raw = state?;
    if TaskState::try_from(raw).is_err() {
        return Some(FieldError::new("state", "must be one of NEW, DONE"));
    }
    None
}

fn check_text_field(field: &'static str, value: &str, max_length: usize) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(field, "must not be blank"));
    }
    if value.chars().count() > max_length {
        return Some(FieldError::new(
            field,
            format!("must be at most {max_length} characters"),
        ));
    }
    None
}
