// SPDX-License-Identifier: MIT

//! The individual validation checks.
//!
//! Checks run in a fixed order (type, scope, subject, body, breaking) and
//! never short-circuit: every applicable check contributes its errors even
//! when an earlier one already failed. Callers rely on this ordering for
//! reproducible output.

use crate::commit::CommitRecord;
use crate::config::ScConfig;

use super::validator::{ErrorField, ValidationError};

/// Apply every check to a record, accumulating errors in the fixed order.
pub fn apply_checks(record: &CommitRecord, config: &ScConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_type(record, config, &mut errors);
    check_scope(record, config, &mut errors);
    check_subject(record, config, &mut errors);
    check_body(record, config, &mut errors);
    check_breaking(record, &mut errors);

    errors
}

/// Type must be present when required and must be a configured value.
fn check_type(record: &CommitRecord, config: &ScConfig, errors: &mut Vec<ValidationError>) {
    if config.validation.type_required && record.commit_type.is_empty() {
        errors.push(ValidationError::new(
            ErrorField::Type,
            "Commit type is required",
        ));
    }

    if !record.commit_type.is_empty() && config.type_entry(&record.commit_type).is_none() {
        let valid: Vec<&str> = config.types.iter().map(|t| t.value.as_str()).collect();
        errors.push(ValidationError::new(
            ErrorField::Type,
            format!(
                "Invalid type \"{}\". Valid types are: {}",
                record.commit_type,
                valid.join(", ")
            ),
        ));
    }
}

/// Scope must be present when required; when predefined scopes exist and
/// custom scopes are disallowed, it must be one of them.
fn check_scope(record: &CommitRecord, config: &ScConfig, errors: &mut Vec<ValidationError>) {
    let scope = record.scope.as_deref().unwrap_or("");

    if config.validation.scope_required && scope.is_empty() {
        errors.push(ValidationError::new(ErrorField::Scope, "Scope is required"));
    }

    if !scope.is_empty() && !config.validation.allow_custom_scopes {
        if let Some(ref scopes) = config.scopes {
            if !scopes.iter().any(|s| s.value == scope) {
                let valid: Vec<&str> = scopes.iter().map(|s| s.value.as_str()).collect();
                errors.push(ValidationError::new(
                    ErrorField::Scope,
                    format!(
                        "Invalid scope \"{}\". Valid scopes are: {}",
                        scope,
                        valid.join(", ")
                    ),
                ));
            }
        }
    }
}

/// The four subject checks are independent; all of them may fire for one
/// record.
fn check_subject(record: &CommitRecord, config: &ScConfig, errors: &mut Vec<ValidationError>) {
    if config.validation.subject_required && record.subject.is_empty() {
        errors.push(ValidationError::new(
            ErrorField::Subject,
            "Subject is required",
        ));
    }

    if record.subject.is_empty() {
        return;
    }

    let length = record.subject.chars().count();

    if length < config.validation.subject_min_length {
        errors.push(ValidationError::new(
            ErrorField::Subject,
            format!(
                "Subject is too short. Minimum length is {} characters",
                config.validation.subject_min_length
            ),
        ));
    }

    if length > config.validation.subject_max_length {
        errors.push(ValidationError::new(
            ErrorField::Subject,
            format!(
                "Subject is too long. Maximum length is {} characters (current: {})",
                config.validation.subject_max_length, length
            ),
        ));
    }

    if !record.subject.starts_with(|c: char| c.is_ascii_lowercase()) {
        errors.push(ValidationError::new(
            ErrorField::Subject,
            "Subject should start with a lowercase letter",
        ));
    }

    if record.subject.ends_with('.') {
        errors.push(ValidationError::new(
            ErrorField::Subject,
            "Subject should not end with a period",
        ));
    }
}

/// Body may be mandatory, and every line is bounded. A breaking-change
/// record is exempt from the body-required rule.
fn check_body(record: &CommitRecord, config: &ScConfig, errors: &mut Vec<ValidationError>) {
    let body = record.body.as_deref().unwrap_or("");

    if !config.validation.allow_empty_body && body.is_empty() && !record.breaking {
        errors.push(ValidationError::new(ErrorField::Body, "Body is required"));
    }

    if !body.is_empty() {
        for (index, line) in body.split('\n').enumerate() {
            if line.chars().count() > config.validation.body_max_line_length {
                errors.push(ValidationError::new(
                    ErrorField::Body,
                    format!(
                        "Body line {} is too long. Maximum length is {} characters",
                        index + 1,
                        config.validation.body_max_line_length
                    ),
                ));
            }
        }
    }
}

/// Breaking changes need a description.
fn check_breaking(record: &CommitRecord, errors: &mut Vec<ValidationError>) {
    let breaking_body = record.breaking_body.as_deref().unwrap_or("");

    if record.breaking && breaking_body.is_empty() {
        errors.push(ValidationError::new(
            ErrorField::BreakingBody,
            "Breaking changes must have a description",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, Language};

    fn config() -> ScConfig {
        default_config(Language::En)
    }

    #[test]
    fn test_valid_record_passes() {
        let record = CommitRecord::new("feat", "add login flow");
        assert!(apply_checks(&record, &config()).is_empty());
    }

    #[test]
    fn test_missing_type_single_error() {
        let record = CommitRecord::new("", "add login flow");
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Type);
    }

    #[test]
    fn test_type_not_required() {
        let mut config = config();
        config.validation.type_required = false;
        let record = CommitRecord::new("", "add login flow");
        assert!(apply_checks(&record, &config).is_empty());
    }

    #[test]
    fn test_unknown_type_enumerates_valid_set() {
        let record = CommitRecord::new("wip", "add login flow");
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Type);
        assert!(errors[0].message.contains("feat"));
        assert!(errors[0].message.contains("revert"));
    }

    #[test]
    fn test_scope_required() {
        let mut config = config();
        config.validation.scope_required = true;
        let record = CommitRecord::new("feat", "add login flow");
        let errors = apply_checks(&record, &config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Scope);
    }

    #[test]
    fn test_custom_scope_rejected_when_disallowed() {
        let mut config = config();
        config.validation.allow_custom_scopes = false;
        let record = CommitRecord::new("feat", "add login flow").with_scope("parser");
        let errors = apply_checks(&record, &config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Scope);
        assert!(errors[0].message.contains("api"));
    }

    #[test]
    fn test_custom_scope_allowed_by_default() {
        let record = CommitRecord::new("feat", "add login flow").with_scope("parser");
        assert!(apply_checks(&record, &config()).is_empty());
    }

    #[test]
    fn test_custom_scope_unchecked_without_predefined_list() {
        let mut config = config();
        config.validation.allow_custom_scopes = false;
        config.scopes = None;
        let record = CommitRecord::new("feat", "add login flow").with_scope("anything");
        assert!(apply_checks(&record, &config).is_empty());
    }

    #[test]
    fn test_subject_too_long_names_actual_length() {
        let record = CommitRecord::new("feat", "a".repeat(80));
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Subject);
        assert!(errors[0].message.contains("80"));
    }

    #[test]
    fn test_subject_too_short() {
        let mut config = config();
        config.validation.subject_min_length = 10;
        let record = CommitRecord::new("feat", "add x");
        let errors = apply_checks(&record, &config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("10"));
    }

    #[test]
    fn test_uppercase_subject_rejected() {
        let record = CommitRecord::new("feat", "Add Endpoint").with_scope("api");
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Subject);
        assert!(errors[0].message.contains("lowercase"));
    }

    #[test]
    fn test_digit_start_rejected() {
        let record = CommitRecord::new("feat", "2nd attempt");
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Subject);
    }

    #[test]
    fn test_trailing_period_rejected() {
        let record = CommitRecord::new("feat", "add login flow.");
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("period"));
    }

    #[test]
    fn test_all_four_subject_checks_fire_together() {
        let mut config = config();
        config.validation.subject_min_length = 5;
        config.validation.subject_max_length = 3;
        let record = CommitRecord::new("feat", "Add.");
        let errors = apply_checks(&record, &config);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|e| e.field == ErrorField::Subject));
    }

    #[test]
    fn test_body_required_unless_breaking() {
        let mut config = config();
        config.validation.allow_empty_body = false;

        let record = CommitRecord::new("feat", "add x");
        let errors = apply_checks(&record, &config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Body);

        // Breaking-change records are exempt from the body rule
        let record = CommitRecord::new("feat", "add x")
            .with_breaking(true)
            .with_breaking_body("payload changed");
        assert!(apply_checks(&record, &config).is_empty());
    }

    #[test]
    fn test_body_line_too_long_names_line_number() {
        let body = format!("line1\n{}", "x".repeat(120));
        let record = CommitRecord::new("feat", "add x").with_body(body);
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::Body);
        assert!(errors[0].message.contains("Body line 2"));
    }

    #[test]
    fn test_one_error_per_offending_body_line() {
        let long = "x".repeat(150);
        let body = format!("{}\nok\n{}", long, long);
        let record = CommitRecord::new("feat", "add x").with_body(body);
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("line 1"));
        assert!(errors[1].message.contains("line 3"));
    }

    #[test]
    fn test_breaking_without_description() {
        let record = CommitRecord::new("feat", "add retry logic").with_breaking(true);
        let errors = apply_checks(&record, &config());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ErrorField::BreakingBody);
    }

    #[test]
    fn test_error_order_is_stable() {
        let mut config = config();
        config.validation.scope_required = true;

        let record = CommitRecord::new("wip", "Add.").with_breaking(true);
        let first = apply_checks(&record, &config);
        let second = apply_checks(&record, &config);
        assert_eq!(first, second);

        let fields: Vec<ErrorField> = first.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ErrorField::Type,
                ErrorField::Scope,
                ErrorField::Subject,
                ErrorField::Subject,
                ErrorField::BreakingBody,
            ]
        );
    }
}
