// SPDX-License-Identifier: MIT

//! The commit record value.

/// All data gathered for a single commit, either from flags or from the
/// interactive flow. A record is fully built before it reaches the
/// validator; partial records never leave the collecting code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit type value (e.g. "feat").
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Imperative short description.
    pub subject: String,
    /// Optional multi-line body.
    pub body: Option<String>,
    /// Whether this commit introduces a breaking change.
    pub breaking: bool,
    /// Description of the breaking change.
    pub breaking_body: Option<String>,
    /// Raw issue-reference text (e.g. "fix #123").
    pub issues: Option<String>,
}

impl CommitRecord {
    /// Create a new record with the two header fields.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Set the scope. Empty strings are treated as absent.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        if !scope.is_empty() {
            self.scope = Some(scope);
        }
        self
    }

    /// Set the body. Empty strings are treated as absent.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        if !body.is_empty() {
            self.body = Some(body);
        }
        self
    }

    /// Set the breaking flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Set the breaking-change description. Empty strings are treated as absent.
    pub fn with_breaking_body(mut self, breaking_body: impl Into<String>) -> Self {
        let breaking_body = breaking_body.into();
        if !breaking_body.is_empty() {
            self.breaking_body = Some(breaking_body);
        }
        self
    }

    /// Set the issue references. Empty strings are treated as absent.
    pub fn with_issues(mut self, issues: impl Into<String>) -> Self {
        let issues = issues.into();
        if !issues.is_empty() {
            self.issues = Some(issues);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = CommitRecord::new("feat", "add login flow");
        assert_eq!(record.commit_type, "feat");
        assert_eq!(record.subject, "add login flow");
        assert!(record.scope.is_none());
        assert!(!record.breaking);
    }

    #[test]
    fn test_record_builder() {
        let record = CommitRecord::new("fix", "correct token refresh")
            .with_scope("api")
            .with_body("Refresh tokens were dropped on retry.")
            .with_breaking(true)
            .with_breaking_body("token payload changed")
            .with_issues("fix #123");

        assert_eq!(record.scope.as_deref(), Some("api"));
        assert!(record.breaking);
        assert_eq!(record.issues.as_deref(), Some("fix #123"));
    }

    #[test]
    fn test_empty_strings_become_absent() {
        let record = CommitRecord::new("feat", "add x")
            .with_scope("")
            .with_body("")
            .with_issues("");
        assert!(record.scope.is_none());
        assert!(record.body.is_none());
        assert!(record.issues.is_none());
    }
}
