// SPDX-License-Identifier: MIT

//! Parsing an existing commit message back into a record.
//!
//! Used by `sc check` (and through it by the commit-msg hook) to run the
//! validator over messages that were not produced by this tool.

use crate::error::{CommitError, Result, ScError};
use lazy_static::lazy_static;
use regex::Regex;

use super::record::CommitRecord;

lazy_static! {
    /// Header shape: `type(scope): subject`.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^)]+)\))?: (?P<subject>.+)$").unwrap();

    /// `BREAKING CHANGE:` footer up to the next blank line.
    static ref BREAKING_REGEX: Regex =
        Regex::new(r"(?s)BREAKING CHANGE:\s*(?P<body>.+?)(?:\n\n|\z)").unwrap();

    /// Issue reference, e.g. `fixes #123`.
    static ref ISSUE_REGEX: Regex = Regex::new(
        r"(?i)(close|closes|closed|fix|fixes|fixed|resolve|resolves|resolved|re|ref|refs)\s+#\d+"
    )
    .unwrap();
}

/// Parse a conventional commit message into a [`CommitRecord`].
///
/// The record is *not* validated here; feed it to
/// [`crate::rules::CommitValidator`] afterwards.
pub fn parse_message(message: &str) -> Result<CommitRecord> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ScError::Commit(CommitError::EmptyMessage));
    }

    let mut lines = message.split('\n');
    let header = lines.next().unwrap_or("");

    let captures = HEADER_REGEX
        .captures(header)
        .ok_or(ScError::Commit(CommitError::InvalidConventionalFormat))?;

    let commit_type = captures.name("type").map_or("", |m| m.as_str());
    let scope = captures.name("scope").map(|m| m.as_str().to_string());
    let subject = captures.name("subject").map_or("", |m| m.as_str());

    let rest = lines.collect::<Vec<_>>().join("\n");
    let rest = rest.trim();

    let mut breaking = false;
    let mut breaking_body = None;
    let mut issues = None;

    if let Some(captures) = BREAKING_REGEX.captures(rest) {
        breaking = true;
        breaking_body = captures
            .name("body")
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty());
    }

    if let Some(found) = ISSUE_REGEX.find(rest) {
        issues = Some(found.as_str().to_string());
    }

    // Body is whatever remains once footers are stripped
    let body = {
        let without_breaking = match BREAKING_REGEX.find(rest) {
            Some(m) => format!("{}{}", &rest[..m.start()], &rest[m.end()..]),
            None => rest.to_string(),
        };
        let without_issues = ISSUE_REGEX.replace_all(&without_breaking, "");
        let trimmed = without_issues.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    };

    Ok(CommitRecord {
        commit_type: commit_type.to_string(),
        scope,
        subject: subject.to_string(),
        body,
        breaking,
        breaking_body,
        issues,
    })
}
