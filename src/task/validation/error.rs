//! Field-level validation error types.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending form field.
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The complete set of field errors produced by validating one form.
///
/// Validators collect every failure before returning, so callers can report
/// all of them at once rather than just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("validation failed with {} field error(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a field error to the set.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Adds a field error when `maybe_error` carries one.
    pub fn collect(&mut self, maybe_error: Option<FieldError>) {
        if let Some(error) = maybe_error {
            self.0.push(error);
        }
    }

    /// Returns `true` when no field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of field errors in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the collected field errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Converts the set into `Err(self)` when non-empty.
    ///
    /// # Errors
    ///
    /// Returns the set itself when it contains at least one field error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
