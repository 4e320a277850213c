// SPDX-License-Identifier: MIT

//! Rendering a commit record into the final message string.
//!
//! The output must be byte-exact: git hooks and commit-message linters
//! downstream diff these strings. Same (config, record) in, same string
//! out, every time.

use crate::config::{EmojiPosition, ScConfig};

use super::record::CommitRecord;

/// Renders validated commit records per the configured layout.
///
/// The formatter does not re-validate; callers run the record through
/// [`crate::rules::CommitValidator`] first.
pub struct MessageFormatter<'a> {
    config: &'a ScConfig,
}

impl<'a> MessageFormatter<'a> {
    /// Create a formatter over a configuration.
    pub fn new(config: &'a ScConfig) -> Self {
        Self { config }
    }

    /// Format the full commit message.
    pub fn format(&self, record: &CommitRecord) -> String {
        let mut message = self.format_header(record);

        // Each section after the header is prefixed by this block.
        let gap = "\n".repeat(self.config.format.line_breaks_between_sections);

        if let Some(ref body) = record.body {
            if !body.is_empty() {
                message.push_str(&gap);
                message.push_str(body);
            }
        }

        if record.breaking {
            if let Some(ref breaking_body) = record.breaking_body {
                message.push_str(&gap);
                message.push_str(&self.format_breaking(breaking_body));
            }
        }

        if let Some(ref issues) = record.issues {
            if !issues.is_empty() {
                message.push_str(&gap);
                message.push_str(&self.format_issues(issues));
            }
        }

        message
    }

    /// Format the header line: emoji placement, type, scope, separator, subject.
    pub fn format_header(&self, record: &CommitRecord) -> String {
        let emoji = self.active_emoji(record);
        let position = self.config.format.emoji_position;

        let mut header = String::new();

        if let Some(e) = emoji {
            if matches!(position, EmojiPosition::BeforeType) {
                header.push_str(e);
                header.push(' ');
            }
        }

        header.push_str(&record.commit_type);

        if let Some(e) = emoji {
            if matches!(position, EmojiPosition::AfterType) {
                header.push(' ');
                header.push_str(e);
            }
        }

        if let Some(ref scope) = record.scope {
            if !scope.is_empty() {
                header.push('(');
                header.push_str(scope);
                header.push(')');
            }
        }

        header.push_str(&self.config.format.separator);
        header.push(' ');
        header.push_str(&record.subject);

        if let Some(e) = emoji {
            if matches!(position, EmojiPosition::AfterSubject) {
                header.push(' ');
                header.push_str(e);
            }
        }

        header
    }

    /// The emoji to place, if any.
    ///
    /// None when emoji are disabled, the type is unknown, or the type has
    /// no emoji configured.
    fn active_emoji(&self, record: &CommitRecord) -> Option<&str> {
        if !self.config.format.use_emoji {
            return None;
        }
        self.config
            .type_entry(&record.commit_type)
            .and_then(|t| t.emoji.as_deref())
            .filter(|e| !e.is_empty())
    }

    fn format_breaking(&self, breaking_body: &str) -> String {
        format!("BREAKING CHANGE: {}", breaking_body)
    }

    /// Issue references pass through untouched apart from a surrounding
    /// whitespace trim.
    fn format_issues(&self, issues: &str) -> String {
        issues.trim().to_string()
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
    fn test_plain_header() {
        let record = CommitRecord::new("feat", "add login flow");
        let formatted = MessageFormatter::new(&config()).format(&record);
        assert_eq!(formatted, "feat: add login flow");
    }

    #[test]
    fn test_header_with_scope() {
        let record = CommitRecord::new("fix", "resolve login endpoint error").with_scope("api");
        let formatted = MessageFormatter::new(&config()).format(&record);
        assert_eq!(formatted, "fix(api): resolve login endpoint error");
    }

    #[test]
    fn test_emoji_before_type() {
        let mut config = config();
        config.format.use_emoji = true;
        config.format.emoji_position = EmojiPosition::BeforeType;

        let record = CommitRecord::new("fix", "correct token refresh");
        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(formatted, "🐛 fix: correct token refresh");
    }

    #[test]
    fn test_emoji_after_type() {
        let mut config = config();
        config.format.use_emoji = true;
        config.format.emoji_position = EmojiPosition::AfterType;

        let record = CommitRecord::new("feat", "add x").with_scope("api");
        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(formatted, "feat ✨(api): add x");
    }

    #[test]
    fn test_emoji_after_subject() {
        let mut config = config();
        config.format.use_emoji = true;
        config.format.emoji_position = EmojiPosition::AfterSubject;

        let record = CommitRecord::new("feat", "add x");
        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(formatted, "feat: add x ✨");
    }

    #[test]
    fn test_emoji_disabled_regardless_of_position() {
        for position in [
            EmojiPosition::BeforeType,
            EmojiPosition::AfterType,
            EmojiPosition::AfterSubject,
        ] {
            let mut config = config();
            config.format.use_emoji = false;
            config.format.emoji_position = position;

            let record = CommitRecord::new("feat", "add x");
            let formatted = MessageFormatter::new(&config).format(&record);
            assert_eq!(formatted, "feat: add x");
        }
    }

    #[test]
    fn test_unknown_type_skips_emoji() {
        let mut config = config();
        config.format.use_emoji = true;

        let record = CommitRecord::new("wip", "half done");
        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(formatted, "wip: half done");
    }

    #[test]
    fn test_custom_separator() {
        let mut config = config();
        config.format.separator = " ->".to_string();

        let record = CommitRecord::new("docs", "update readme");
        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(formatted, "docs -> update readme");
    }

    #[test]
    fn test_body_section() {
        let record = CommitRecord::new("feat", "add x").with_body("Longer description.");
        let formatted = MessageFormatter::new(&config()).format(&record);
        assert_eq!(formatted, "feat: add x\nLonger description.");
    }

    #[test]
    fn test_section_gap_width() {
        let mut config = config();
        config.format.line_breaks_between_sections = 2;

        let record = CommitRecord::new("feat", "add x").with_body("Longer description.");
        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(formatted, "feat: add x\n\nLonger description.");
    }

    #[test]
    fn test_all_sections_in_order() {
        let mut config = config();
        config.format.line_breaks_between_sections = 2;

        let record = CommitRecord::new("feat", "add x")
            .with_body("Body text.")
            .with_breaking(true)
            .with_breaking_body("payload changed")
            .with_issues("  fix #123  ");

        let formatted = MessageFormatter::new(&config).format(&record);
        assert_eq!(
            formatted,
            "feat: add x\n\nBody text.\n\nBREAKING CHANGE: payload changed\n\nfix #123"
        );
    }

    #[test]
    fn test_breaking_without_body_is_omitted() {
        let record = CommitRecord::new("feat", "add x").with_breaking(true);
        let formatted = MessageFormatter::new(&config()).format(&record);
        assert_eq!(formatted, "feat: add x");
    }

    #[test]
    fn test_issues_pass_through_with_trim_only() {
        let record = CommitRecord::new("feat", "add x").with_issues("see tracker item 42");
        let formatted = MessageFormatter::new(&config()).format(&record);
        assert_eq!(formatted, "feat: add x\nsee tracker item 42");
    }

    #[test]
    fn test_format_is_deterministic() {
        let config = config();
        let record = CommitRecord::new("feat", "add x")
            .with_scope("api")
            .with_body("Body.")
            .with_issues("fix #1");
        let formatter = MessageFormatter::new(&config);
        assert_eq!(formatter.format(&record), formatter.format(&record));
    }
}
