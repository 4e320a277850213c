// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, Result, ScError};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with the operations sc needs.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            ScError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ScError::Git(GitError::NotARepository)
            } else {
                ScError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                ScError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get the current branch name.
    pub fn branch_name(&self) -> Result<String> {
        let head = self.inner.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                ScError::Git(GitError::DetachedHead)
            } else {
                ScError::Git(GitError::BranchFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        if head.is_branch() {
            let name = head.shorthand().ok_or_else(|| {
                ScError::Git(GitError::BranchFailed {
                    message: "Invalid branch name encoding".to_string(),
                })
            })?;
            Ok(name.to_string())
        } else {
            Err(ScError::Git(GitError::DetachedHead))
        }
    }

    /// Get the HEAD commit.
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.inner.head().map_err(|e| {
            ScError::Git(GitError::BranchFailed {
                message: e.message().to_string(),
            })
        })?;

        let commit = head.peel_to_commit().map_err(|e| {
            ScError::Git(GitError::InvalidReference {
                reference: format!("HEAD: {}", e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the message of the HEAD commit.
    pub fn last_commit_message(&self) -> Result<String> {
        let commit = self.head_commit()?;
        Ok(commit.message().unwrap_or("").to_string())
    }

    /// Check if there are staged changes.
    pub fn has_staged_changes(&self) -> Result<bool> {
        Ok(!self.staged_files()?.is_empty())
    }

    /// List the paths currently staged for commit.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let head = self.inner.head().ok();
        let head_tree = head.as_ref().and_then(|h| h.peel_to_tree().ok());

        let diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .map_err(|e| {
                ScError::Git(GitError::CommandFailed {
                    command: "diff".to_string(),
                    message: e.message().to_string(),
                })
            })?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Check if the current directory is within a git repository.
pub fn is_git_repo() -> bool {
    Repository::open_current().is_ok()
}

/// Get the current branch name.
pub fn get_branch_name() -> Result<String> {
    let repo = Repository::open_current()?;
    repo.branch_name()
}
