// SPDX-License-Identifier: MIT

//! Validation error types and terminal rendering.

use console::style;

/// The commit record attribute a validation error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Type,
    Scope,
    Subject,
    Body,
    BreakingBody,
}

impl ErrorField {
    /// Stable string form, used in output and by downstream tooling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorField::Type => "type",
            ErrorField::Scope => "scope",
            ErrorField::Subject => "subject",
            ErrorField::Body => "body",
            ErrorField::BreakingBody => "breakingBody",
        }
    }
}

impl std::fmt::Display for ErrorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single structural violation found in a commit record.
///
/// Always returned as data, never raised: the caller decides whether to
/// display and abort or to re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Which attribute failed.
    pub field: ErrorField,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: ErrorField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Format the error for terminal output.
    pub fn format(&self) -> String {
        format!(
            "{} {}: {}",
            style("•").red(),
            style(self.field.as_str()).red().bold(),
            self.message
        )
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Print a validation error list to stderr.
pub fn display_errors(errors: &[ValidationError]) {
    eprintln!("\n{}\n", style("✗ Validation Errors:").red().bold());
    for error in errors {
        eprintln!("  {}", error.format());
    }
    eprintln!();
}
