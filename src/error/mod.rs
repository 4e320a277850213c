// SPDX-License-Identifier: MIT

//! Error types for the sc application.
//!
//! Structural problems found in a commit record are *not* represented here:
//! the validator returns them as data (see [`crate::rules`]). This tree only
//! covers the fatal paths of the surrounding tool.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sc operations.
#[derive(Error, Debug)]
pub enum ScError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Exit path when the validator reported issues
    #[error("Commit message failed validation: {count} issue(s) found")]
    ValidationFailed { count: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for ScError {
    fn from(err: dialoguer::Error) -> Self {
        ScError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Detached HEAD state")]
    DetachedHead,
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Commit-message-related errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to parse commit message: {message}")]
    ParseFailed { message: String },

    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Invalid conventional commit format")]
    InvalidConventionalFormat,

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for sc operations.
pub type Result<T> = std::result::Result<T, ScError>;
