// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! `.scrc.json` or `sc.toml`. Field names use camelCase on disk so the
//! same config file works across tooling that shares the format.

use serde::{Deserialize, Serialize};

/// The main configuration structure for sc.
///
/// Loaded once per invocation and passed around by reference; nothing in
/// the core mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScConfig {
    /// Display language for prompts and default tables.
    pub language: Language,

    /// Permitted commit types, in display order.
    pub types: Vec<TypeEntry>,

    /// Optional predefined scopes.
    pub scopes: Option<Vec<ScopeEntry>>,

    /// Validation rule parameters.
    pub validation: ValidationRules,

    /// Prompt text shown in interactive mode.
    pub prompt_messages: PromptMessages,

    /// Message layout parameters.
    pub format: FormatTemplate,
}

impl Default for ScConfig {
    fn default() -> Self {
        super::default::default_config(Language::En)
    }
}

impl ScConfig {
    /// Load configuration from the default search locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Look up a type entry by its canonical value.
    pub fn type_entry(&self, value: &str) -> Option<&TypeEntry> {
        self.types.iter().find(|t| t.value == value)
    }
}

/// A permitted commit type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeEntry {
    /// Canonical lowercase identifier, e.g. "feat".
    pub value: String,

    /// Display name shown in the type selector.
    pub name: String,

    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional emoji used when `format.useEmoji` is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl TypeEntry {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            description: None,
            emoji: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

/// A predefined scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScopeEntry {
    /// Canonical identifier, e.g. "api".
    pub value: String,

    /// Display name shown in the scope selector.
    pub name: String,

    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ScopeEntry {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Validation rule parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
    /// Maximum subject length.
    pub subject_max_length: usize,

    /// Minimum subject length.
    pub subject_min_length: usize,

    /// Maximum length of a single body line.
    pub body_max_line_length: usize,

    /// Whether a commit type is required.
    pub type_required: bool,

    /// Whether a scope is required.
    pub scope_required: bool,

    /// Whether a subject is required.
    pub subject_required: bool,

    /// Whether scopes outside the predefined list are allowed.
    pub allow_custom_scopes: bool,

    /// Whether a commit may omit the body.
    pub allow_empty_body: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            subject_max_length: 72,
            subject_min_length: 1,
            body_max_line_length: 100,
            type_required: true,
            scope_required: false,
            subject_required: true,
            allow_custom_scopes: true,
            allow_empty_body: true,
        }
    }
}

/// Message layout parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatTemplate {
    /// Whether to place the type's emoji in the header.
    pub use_emoji: bool,

    /// Where in the header the emoji goes.
    pub emoji_position: EmojiPosition,

    /// Separator between type(scope) and subject.
    pub separator: String,

    /// Number of newline characters prefixing each section after the header.
    pub line_breaks_between_sections: usize,
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self {
            use_emoji: false,
            emoji_position: EmojiPosition::BeforeType,
            separator: ":".to_string(),
            line_breaks_between_sections: 1,
        }
    }
}

/// Emoji placement within the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmojiPosition {
    /// `✨ feat: subject`
    #[default]
    BeforeType,
    /// `feat ✨: subject`
    AfterType,
    /// `feat: subject ✨`
    AfterSubject,
}

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

/// Prompt text for the interactive flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptMessages {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub scope: String,
    pub custom_scope: String,
    pub subject: String,
    pub body: String,
    pub breaking: String,
    pub breaking_body: String,
    pub issues: String,
}

impl Default for PromptMessages {
    fn default() -> Self {
        super::default::default_prompts(Language::En)
    }
}
