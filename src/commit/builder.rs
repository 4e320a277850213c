// SPDX-License-Identifier: MIT

//! Commit record collection.
//!
//! Builds a full [`CommitRecord`] either from CLI flag prefills or by
//! walking the user through the interactive question flow. Validation
//! happens afterwards, on the finished record.

use crate::config::{Language, ScConfig};
use crate::error::{CommitError, Result, ScError};

use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};

use super::preview::CommitPreview;
use super::record::CommitRecord;

/// Sentinel index meaning "no scope" in the scope selector.
const SCOPE_NONE: usize = 0;

/// Collects commit data from flags and prompts.
pub struct CommitBuilder<'a> {
    config: &'a ScConfig,
    commit_type: Option<String>,
    scope: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    breaking: bool,
    issues: Option<String>,
}

impl<'a> CommitBuilder<'a> {
    /// Create a new builder over a configuration.
    pub fn new(config: &'a ScConfig) -> Self {
        Self {
            config,
            commit_type: None,
            scope: None,
            subject: None,
            body: None,
            breaking: false,
            issues: None,
        }
    }

    /// Pre-fill the commit type.
    pub fn with_type(mut self, commit_type: &str) -> Self {
        if !commit_type.is_empty() {
            self.commit_type = Some(commit_type.to_string());
        }
        self
    }

    /// Pre-fill the scope.
    pub fn with_scope(mut self, scope: &str) -> Self {
        if !scope.is_empty() {
            self.scope = Some(scope.to_string());
        }
        self
    }

    /// Pre-fill the subject.
    pub fn with_subject(mut self, subject: &str) -> Self {
        if !subject.is_empty() {
            self.subject = Some(subject.to_string());
        }
        self
    }

    /// Pre-fill the body.
    pub fn with_body(mut self, body: &str) -> Self {
        if !body.is_empty() {
            self.body = Some(body.to_string());
        }
        self
    }

    /// Mark as breaking change.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Pre-fill the issue references.
    pub fn with_issues(mut self, issues: &str) -> Self {
        if !issues.is_empty() {
            self.issues = Some(issues.to_string());
        }
        self
    }

    /// Whether the prefills are enough to skip the interactive flow.
    ///
    /// Flag mode requires at least a type and a subject; anything less
    /// falls back to the questions.
    pub fn is_complete(&self) -> bool {
        self.commit_type.is_some() && self.subject.is_some()
    }

    /// Build a record from the prefills alone.
    ///
    /// When the record is breaking, the body doubles as the breaking-change
    /// description, matching the flag surface which has no dedicated
    /// breaking-body flag.
    pub fn build(self) -> Result<CommitRecord> {
        let commit_type = self.commit_type.ok_or_else(|| {
            ScError::Commit(CommitError::MissingField {
                field: "type".to_string(),
            })
        })?;
        let subject = self.subject.ok_or_else(|| {
            ScError::Commit(CommitError::MissingField {
                field: "subject".to_string(),
            })
        })?;

        Ok(CommitRecord {
            commit_type,
            scope: self.scope,
            subject,
            breaking: self.breaking,
            breaking_body: if self.breaking { self.body.clone() } else { None },
            body: self.body,
            issues: self.issues,
        })
    }

    /// Run the interactive question flow, prompting only for fields that
    /// were not prefilled.
    pub fn collect_interactive(mut self) -> Result<CommitRecord> {
        let theme = ColorfulTheme::default();

        if self.commit_type.is_none() {
            self.commit_type = Some(self.prompt_type(&theme)?);
        }

        if self.scope.is_none() {
            self.scope = self.prompt_scope(&theme)?;
        }

        if self.subject.is_none() {
            self.subject = Some(self.prompt_subject(&theme)?);
        }

        if self.body.is_none() {
            self.body = self.prompt_body(&theme)?;
        }

        let (breaking, breaking_body) = self.prompt_breaking(&theme)?;

        if self.issues.is_none() {
            self.issues = self.prompt_issues(&theme)?;
        }

        Ok(CommitRecord {
            commit_type: self.commit_type.unwrap_or_default(),
            scope: self.scope,
            subject: self.subject.unwrap_or_default(),
            body: self.body,
            breaking,
            breaking_body,
            issues: self.issues,
        })
    }

    fn prompt_type(&self, theme: &ColorfulTheme) -> Result<String> {
        let items: Vec<String> = self
            .config
            .types
            .iter()
            .map(|t| {
                match (&t.emoji, self.config.format.use_emoji) {
                    (Some(emoji), true) => format!("{} {}", emoji, t.name),
                    _ => t.name.clone(),
                }
            })
            .collect();

        let selection = Select::with_theme(theme)
            .with_prompt(&self.config.prompt_messages.commit_type)
            .items(&items)
            .default(0)
            .interact()?;

        Ok(self.config.types[selection].value.clone())
    }

    fn prompt_scope(&self, theme: &ColorfulTheme) -> Result<Option<String>> {
        let mut items: Vec<String> = vec![match self.config.language {
            Language::En => "None (no scope)".to_string(),
            Language::Tr => "Yok (scope yok)".to_string(),
        }];

        let scopes = self.config.scopes.as_deref().unwrap_or(&[]);
        items.extend(scopes.iter().map(|s| s.name.clone()));

        let custom_index = if self.config.validation.allow_custom_scopes {
            items.push(match self.config.language {
                Language::En => "[ Enter custom scope ]".to_string(),
                Language::Tr => "[ Özel scope gir ]".to_string(),
            });
            Some(items.len() - 1)
        } else {
            None
        };

        let selection = Select::with_theme(theme)
            .with_prompt(&self.config.prompt_messages.scope)
            .items(&items)
            .default(SCOPE_NONE)
            .interact()?;

        if selection == SCOPE_NONE {
            return Ok(None);
        }

        if Some(selection) == custom_index {
            return Ok(Some(self.prompt_custom_scope(theme)?));
        }

        Ok(Some(scopes[selection - 1].value.clone()))
    }

    fn prompt_custom_scope(&self, theme: &ColorfulTheme) -> Result<String> {
        let language = self.config.language;

        let scope: String = Input::with_theme(theme)
            .with_prompt(&self.config.prompt_messages.custom_scope)
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Err(match language {
                        Language::En => "Scope cannot be empty".to_string(),
                        Language::Tr => "Scope boş olamaz".to_string(),
                    });
                }
                let well_formed = trimmed
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
                if !well_formed {
                    return Err(match language {
                        Language::En => {
                            "Scope can only contain lowercase letters, numbers, and hyphens"
                                .to_string()
                        }
                        Language::Tr => {
                            "Scope sadece küçük harf, rakam ve tire içerebilir".to_string()
                        }
                    });
                }
                Ok(())
            })
            .interact_text()?;

        Ok(scope.trim().to_string())
    }

    fn prompt_subject(&self, theme: &ColorfulTheme) -> Result<String> {
        let rules = self.config.validation.clone();
        let language = self.config.language;

        let subject: String = Input::with_theme(theme)
            .with_prompt(&self.config.prompt_messages.subject)
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                let trimmed = input.trim();
                let length = trimmed.chars().count();

                if trimmed.is_empty() {
                    return Err(match language {
                        Language::En => "Subject is required".to_string(),
                        Language::Tr => "Açıklama zorunludur".to_string(),
                    });
                }
                if length < rules.subject_min_length {
                    return Err(match language {
                        Language::En => format!(
                            "Subject must be at least {} characters",
                            rules.subject_min_length
                        ),
                        Language::Tr => format!(
                            "Açıklama en az {} karakter olmalıdır",
                            rules.subject_min_length
                        ),
                    });
                }
                if length > rules.subject_max_length {
                    return Err(match language {
                        Language::En => format!(
                            "Subject must be at most {} characters (current: {})",
                            rules.subject_max_length, length
                        ),
                        Language::Tr => format!(
                            "Açıklama en fazla {} karakter olabilir (şu an: {})",
                            rules.subject_max_length, length
                        ),
                    });
                }
                if trimmed.ends_with('.') {
                    return Err(match language {
                        Language::En => "Subject should not end with a period".to_string(),
                        Language::Tr => "Açıklama nokta ile bitmemelidir".to_string(),
                    });
                }
                Ok(())
            })
            .interact_text()?;

        Ok(subject.trim().to_string())
    }

    fn prompt_body(&self, theme: &ColorfulTheme) -> Result<Option<String>> {
        if self.config.validation.allow_empty_body {
            let prompt = match self.config.language {
                Language::En => "Do you want to add a longer description?",
                Language::Tr => "Detaylı bir açıklama eklemek ister misiniz?",
            };

            let wants_body = Confirm::with_theme(theme)
                .with_prompt(prompt)
                .default(false)
                .interact()?;

            if !wants_body {
                return Ok(None);
            }
        }

        let body = Editor::new().edit(&self.config.prompt_messages.body)?;
        Ok(body
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    fn prompt_breaking(&self, theme: &ColorfulTheme) -> Result<(bool, Option<String>)> {
        let breaking = if self.breaking {
            true
        } else {
            Confirm::with_theme(theme)
                .with_prompt(&self.config.prompt_messages.breaking)
                .default(false)
                .interact()?
        };

        if !breaking {
            return Ok((false, None));
        }

        let language = self.config.language;
        let breaking_body: String = Input::with_theme(theme)
            .with_prompt(&self.config.prompt_messages.breaking_body)
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                if input.trim().is_empty() {
                    Err(match language {
                        Language::En => "Breaking change description is required".to_string(),
                        Language::Tr => "Breaking change açıklaması zorunludur".to_string(),
                    })
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok((true, Some(breaking_body.trim().to_string())))
    }

    fn prompt_issues(&self, theme: &ColorfulTheme) -> Result<Option<String>> {
        let issues: String = Input::with_theme(theme)
            .with_prompt(&self.config.prompt_messages.issues)
            .allow_empty(true)
            .interact_text()?;

        if issues.is_empty() {
            Ok(None)
        } else {
            Ok(Some(issues))
        }
    }
}

/// Show the formatted message and ask for final confirmation.
pub fn confirm_commit(config: &ScConfig, message: &str) -> Result<bool> {
    CommitPreview::new(message).print();

    let prompt = match config.language {
        Language::En => "Proceed with this commit message?",
        Language::Tr => "Bu commit mesajı ile devam edilsin mi?",
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?;

    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, Language};

    #[test]
    fn test_builder_flag_mode() {
        let config = default_config(Language::En);
        let record = CommitBuilder::new(&config)
            .with_type("feat")
            .with_scope("api")
            .with_subject("add endpoint")
            .with_body("Longer text.")
            .with_issues("fix #1")
            .build()
            .unwrap();

        assert_eq!(record.commit_type, "feat");
        assert_eq!(record.scope.as_deref(), Some("api"));
        assert_eq!(record.body.as_deref(), Some("Longer text."));
        assert!(!record.breaking);
        assert!(record.breaking_body.is_none());
    }

    #[test]
    fn test_builder_breaking_reuses_body() {
        let config = default_config(Language::En);
        let record = CommitBuilder::new(&config)
            .with_type("feat")
            .with_subject("change payload")
            .with_body("New payload format.")
            .with_breaking(true)
            .build()
            .unwrap();

        assert!(record.breaking);
        assert_eq!(record.breaking_body.as_deref(), Some("New payload format."));
    }

    #[test]
    fn test_builder_missing_type_fails() {
        let config = default_config(Language::En);
        let result = CommitBuilder::new(&config).with_subject("add x").build();
        assert!(matches!(
            result,
            Err(ScError::Commit(CommitError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_is_complete() {
        let config = default_config(Language::En);
        assert!(!CommitBuilder::new(&config).with_type("feat").is_complete());
        assert!(CommitBuilder::new(&config)
            .with_type("feat")
            .with_subject("add x")
            .is_complete());
    }

    #[test]
    fn test_empty_prefills_ignored() {
        let config = default_config(Language::En);
        let builder = CommitBuilder::new(&config).with_type("").with_subject("");
        assert!(!builder.is_complete());
    }
}
