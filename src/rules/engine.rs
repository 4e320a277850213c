// SPDX-License-Identifier: MIT

//! The commit record validator.

use crate::commit::CommitRecord;
use crate::config::ScConfig;

use super::checks::apply_checks;
use super::validator::ValidationError;

/// Validates commit records against the configured rules.
///
/// Pure over its two inputs: no I/O, no shared state, safe to call from
/// anywhere. Structural violations come back as data; a malformed record
/// is never a fault.
#[derive(Debug, Clone, Copy)]
pub struct CommitValidator<'a> {
    config: &'a ScConfig,
}

impl<'a> CommitValidator<'a> {
    /// Create a validator over a configuration.
    pub fn new(config: &'a ScConfig) -> Self {
        Self { config }
    }

    /// Produce the complete, ordered list of violations for a record.
    pub fn validate(&self, record: &CommitRecord) -> Vec<ValidationError> {
        apply_checks(record, self.config)
    }

    /// Whether a record has no violations.
    pub fn is_valid(&self, record: &CommitRecord) -> bool {
        self.validate(record).is_empty()
    }
}
