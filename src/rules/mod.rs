// SPDX-License-Identifier: MIT

//! Rule-driven validation of commit records.
//!
//! The checks are a small ordered list of independent predicates; their
//! order (type, scope, subject, body, breaking) is part of the contract
//! and is covered by tests.

mod checks;
mod engine;
mod validator;

pub use checks::apply_checks;
pub use engine::CommitValidator;
pub use validator::{display_errors, ErrorField, ValidationError};
