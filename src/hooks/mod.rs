// SPDX-License-Identifier: MIT

//! Native git hook management.
//!
//! Installs a `commit-msg` hook that routes every message through
//! `sc check`, so commits made outside the interactive flow are held to
//! the same rules.

mod manager;
mod templates;

pub use manager::HookManager;
pub use templates::{HookTemplate, HOOK_MARKER};
