// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! All version-control side effects live here; the commit pipeline itself
//! never touches the repository.

pub mod commands;
mod repo;

pub use commands::{amend_commit, create_commit, create_commit_in, stage_all};
pub use repo::{get_branch_name, is_git_repo, open_repo, Repository};
