// SPDX-License-Identifier: MIT

//! Library-level tests running records through validate-then-format,
//! the same pipeline the commit command uses.

use sc::commit::{parse_message, CommitRecord, MessageFormatter};
use sc::config::{EmojiPosition, ScConfig};
use sc::rules::{CommitValidator, ErrorField};

fn pipeline(config: &ScConfig, record: &CommitRecord) -> Result<String, Vec<String>> {
    let errors = CommitValidator::new(config).validate(record);
    if errors.is_empty() {
        Ok(MessageFormatter::new(config).format(record))
    } else {
        Err(errors.into_iter().map(|e| e.message).collect())
    }
}

#[test]
fn test_plain_feature_commit() {
    let config = ScConfig::default();
    let record = CommitRecord::new("feat", "add login flow");

    assert_eq!(pipeline(&config, &record).unwrap(), "feat: add login flow");
}

#[test]
fn test_scoped_commit_with_body_and_issue() {
    let config = ScConfig::default();
    let record = CommitRecord::new("fix", "correct token refresh")
        .with_scope("auth")
        .with_body("Tokens were dropped on the retry path.")
        .with_issues("fixes #42");

    let message = pipeline(&config, &record).unwrap();
    assert_eq!(
        message,
        "fix(auth): correct token refresh\nTokens were dropped on the retry path.\nfixes #42"
    );
}

#[test]
fn test_breaking_commit_full_layout() {
    let mut config = ScConfig::default();
    config.format.line_breaks_between_sections = 2;

    let record = CommitRecord::new("refactor", "rename public entrypoints")
        .with_body("Old names stay as deprecated aliases.")
        .with_breaking(true)
        .with_breaking_body("entrypoint names changed");

    let message = pipeline(&config, &record).unwrap();
    assert_eq!(
        message,
        "refactor: rename public entrypoints\n\nOld names stay as deprecated aliases.\n\nBREAKING CHANGE: entrypoint names changed"
    );
}

#[test]
fn test_emoji_header_round_trips_through_parser() {
    let mut config = ScConfig::default();
    config.format.use_emoji = true;
    config.format.emoji_position = EmojiPosition::AfterSubject;

    let record = CommitRecord::new("fix", "correct token refresh");
    let message = pipeline(&config, &record).unwrap();
    assert_eq!(message, "fix: correct token refresh 🐛");

    // The parser still recovers the type and keeps the emoji in the subject
    let parsed = parse_message(&message).unwrap();
    assert_eq!(parsed.commit_type, "fix");
}

#[test]
fn test_invalid_record_reports_all_findings() {
    let mut config = ScConfig::default();
    config.validation.scope_required = true;
    config.validation.subject_max_length = 10;

    let record = CommitRecord::new("feature", "Add a rather long subject line.");

    let messages = pipeline(&config, &record).unwrap_err();
    // Type, scope, three subject findings
    assert_eq!(messages.len(), 5);
    assert!(messages[0].contains("Invalid type"));
    assert!(messages[1].contains("Scope is required"));
}

#[test]
fn test_breaking_without_description_is_rejected() {
    let config = ScConfig::default();
    let record = CommitRecord::new("feat", "drop v1 endpoints").with_breaking(true);

    let errors = CommitValidator::new(&config).validate(&record);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, ErrorField::BreakingBody);
}

#[test]
fn test_parse_then_validate_existing_message() {
    let config = ScConfig::default();
    let record = parse_message("docs(readme): describe config discovery").unwrap();

    assert!(CommitValidator::new(&config).is_valid(&record));
}

#[test]
fn test_formatter_is_deterministic() {
    let config = ScConfig::default();
    let record = CommitRecord::new("perf", "cache parsed templates")
        .with_scope("render")
        .with_body("Avoids re-reading templates per request.");

    let first = MessageFormatter::new(&config).format(&record);
    let second = MessageFormatter::new(&config).format(&record);
    assert_eq!(first, second);
}
