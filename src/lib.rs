// SPDX-License-Identifier: MIT

//! sc - Conventional commit composer.
//!
//! Composes, validates and formats git commit messages against a
//! configurable rule set. The core pipeline is pure: the validator turns a
//! commit record into a list of findings, and the formatter turns the same
//! record into the final message string. Everything around it (prompts,
//! config files, git, hooks) feeds that pipeline.

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

pub use config::ScConfig;
pub use error::{Result, ScError};

/// Version information embedded at build time.
pub mod version {
    /// Crate version from Cargo.toml.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Short git SHA of the build, when built from a checkout.
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// Commit date of the build, when built from a checkout.
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Human-readable version line.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("sc {} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("sc {} ({})", VERSION, sha),
            _ => format!("sc {}", VERSION),
        }
    }
}
