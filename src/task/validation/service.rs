//! Form validator implementation.
//!
//! Combines the individual rules into per-form validators that collect every
//! field error instead of failing on the first one. Validation is a pure
//! function of form contents; it never consults storage.

use super::{ValidationErrors, ValidationLimits, rules};
use crate::task::domain::{TaskSearchCriteria, TaskState};
use crate::task::forms::{TaskCreateForm, TaskSearchForm, TaskUpdateForm};

/// Validator for task create, update, and search forms.
#[derive(Debug, Clone, Default)]
pub struct TaskFormValidator {
    limits: ValidationLimits,
}

impl TaskFormValidator {
    /// Creates a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            limits: ValidationLimits::default(),
        }
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits in force.
    #[must_use]
    pub const fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validates a create form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every failing field.
    pub fn validate_create(&self, form: &TaskCreateForm) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.collect(rules::check_title(&form.title, &self.limits));
        errors.collect(rules::check_description(&form.description, &self.limits));
        errors.into_result()
    }

    /// Validates an update form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every failing field.
    pub fn validate_update(&self, form: &TaskUpdateForm) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.collect(rules::check_id(form.id));
        errors.collect(rules::check_title(&form.title, &self.limits));
        errors.collect(rules::check_description(&form.description, &self.limits));
        errors.into_result()
    }

    /// Validates a search form and builds the typed criteria from it.
    ///
    /// Blank text filters are treated as absent; omitted page and size fall
    /// back to the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every failing field.
    pub fn validate_search(
        &self,
        form: &TaskSearchForm,
    ) -> Result<TaskSearchCriteria, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.collect(rules::check_page_size(form.size, &self.limits));
        errors.collect(rules::check_state_filter(form.state.as_deref()));
        errors.into_result()?;

        let mut criteria = TaskSearchCriteria::new(
            form.page.unwrap_or(0),
            form.size.unwrap_or(self.limits.default_page_size),
        );
        if let Some(state) = form
            .state
            .as_deref()
            .and_then(|raw| TaskState::try_from(raw).ok())
        {
            criteria = criteria.with_state(state);
        }
        if let Some(text) = form.text.as_deref().map(str::trim)
            && !text.is_empty()
        {
            criteria = criteria.with_text(text);
        }
        Ok(criteria)
    }
}
