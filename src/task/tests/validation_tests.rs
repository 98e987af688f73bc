//! Unit tests for form validation: every failing field is reported, not
//! just the first.

use crate::task::domain::TaskState;
use crate::task::forms::{TaskCreateForm, TaskSearchForm, TaskUpdateForm};
use crate::task::validation::{TaskFormValidator, ValidationLimits};
use rstest::{fixture, rstest};

#[fixture]
fn validator() -> TaskFormValidator {
    TaskFormValidator::new()
}

fn create_form(title: &str, description: &str) -> TaskCreateForm {
    TaskCreateForm {
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

#[rstest]
fn valid_create_form_passes(validator: TaskFormValidator) {
    let result = validator.validate_create(&create_form("Buy milk", "Semi-skimmed"));
    assert_eq!(result, Ok(()));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_title_is_reported(validator: TaskFormValidator, #[case] title: &str) {
    let result = validator.validate_create(&create_form(title, "Semi-skimmed"));
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert_eq!(errors.len(), 1);
    assert!(errors.errors().iter().any(|error| error.field == "title"));
}

#[rstest]
fn all_blank_fields_are_reported_together(validator: TaskFormValidator) {
    let result = validator.validate_create(&create_form("", " "));
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert_eq!(errors.len(), 2);
    let fields: Vec<&str> = errors.errors().iter().map(|error| error.field).collect();
    assert_eq!(fields, vec!["title", "description"]);
}

#[rstest]
fn overlong_title_is_reported_with_the_bound(validator: TaskFormValidator) {
    let result = validator.validate_create(&create_form(&"x".repeat(256), "Semi-skimmed"));
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert!(
        errors
            .errors()
            .iter()
            .any(|error| error.field == "title" && error.message.contains("255"))
    );
}

#[rstest]
fn custom_limits_are_honoured() {
    let limited = TaskFormValidator::with_limits(ValidationLimits {
        max_title_length: 5,
        max_description_length: 5,
        max_page_size: 10,
        default_page_size: 5,
    });
    let result = limited.validate_create(&create_form("too long", "also too long"));
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert_eq!(errors.len(), 2);
}

#[rstest]
#[case(0)]
#[case(-7)]
fn non_positive_update_id_is_reported(validator: TaskFormValidator, #[case] id: i64) {
    let form = TaskUpdateForm {
        id,
        title: "Buy milk".to_owned(),
        description: "Semi-skimmed".to_owned(),
    };
    let result = validator.validate_update(&form);
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert!(errors.errors().iter().any(|error| error.field == "id"));
}

#[rstest]
fn update_form_collects_every_field_error(validator: TaskFormValidator) {
    let form = TaskUpdateForm {
        id: 0,
        title: String::new(),
        description: String::new(),
    };
    let result = validator.validate_update(&form);
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert_eq!(errors.len(), 3);
}

#[rstest]
fn search_defaults_apply_when_fields_are_omitted(validator: TaskFormValidator) {
    let result = validator.validate_search(&TaskSearchForm::default());
    assert!(result.is_ok());
    let Ok(criteria) = result else { return };
    assert_eq!(criteria.page(), 0);
    assert_eq!(criteria.size(), 20);
    assert_eq!(criteria.state(), None);
    assert_eq!(criteria.text(), None);
}

#[rstest]
#[case(Some(0))]
#[case(Some(101))]
fn out_of_bounds_page_size_is_reported(validator: TaskFormValidator, #[case] size: Option<u32>) {
    let form = TaskSearchForm {
        size,
        ..TaskSearchForm::default()
    };
    let result = validator.validate_search(&form);
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert!(errors.errors().iter().any(|error| error.field == "size"));
}

#[rstest]
fn unknown_state_filter_is_reported(validator: TaskFormValidator) {
    let form = TaskSearchForm {
        state: Some("URGENT".to_owned()),
        ..TaskSearchForm::default()
    };
    let result = validator.validate_search(&form);
    assert!(result.is_err());
    let Err(errors) = result else { return };
    assert!(errors.errors().iter().any(|error| error.field == "state"));
}

#[rstest]
#[case("DONE")]
#[case("done")]
fn state_filter_parses_case_insensitively(validator: TaskFormValidator, #[case] raw: &str) {
    let form = TaskSearchForm {
        state: Some(raw.to_owned()),
        ..TaskSearchForm::default()
    };
    let result = validator.validate_search(&form);
    assert!(matches!(
        result,
        Ok(criteria) if criteria.state() == Some(TaskState::Done)
    ));
}

#[rstest]
fn blank_text_filter_is_dropped_and_nonblank_is_trimmed(validator: TaskFormValidator) {
    let blank = TaskSearchForm {
        text: Some("   ".to_owned()),
        ..TaskSearchForm::default()
    };
    let trimmed = TaskSearchForm {
        text: Some("  milk  ".to_owned()),
        ..TaskSearchForm::default()
    };
    assert!(matches!(
        validator.validate_search(&blank),
        Ok(criteria) if criteria.text().is_none()
    ));
    assert!(matches!(
        validator.validate_search(&trimmed),
        Ok(criteria) if criteria.text() == Some("milk")
    ));
}

#[rstest]
fn explicit_page_and_size_are_used(validator: TaskFormValidator) {
    let form = TaskSearchForm {
        page: Some(3),
        size: Some(50),
        ..TaskSearchForm::default()
    };
    let result = validator.validate_search(&form);
    assert!(result.is_ok());
    let Ok(criteria) = result else { return };
    assert_eq!(criteria.page(), 3);
    assert_eq!(criteria.size(), 50);
    assert_eq!(criteria.offset(), 150);
}
