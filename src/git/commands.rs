// SPDX-License-Identifier: MIT

//! Git command wrappers for staging and committing.

use crate::error::{GitError, Result, ScError};
use std::process::Command;

use super::repo::Repository;

/// Stage all modified and deleted files.
pub fn stage_all() -> Result<()> {
    let repo = Repository::open_current()?;
    let mut index = repo.inner().index().map_err(|e| {
        ScError::Git(GitError::CommandFailed {
            command: "index".to_string(),
            message: e.message().to_string(),
        })
    })?;

    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .map_err(|e| {
            ScError::Git(GitError::CommandFailed {
                command: "add all".to_string(),
                message: e.message().to_string(),
            })
        })?;

    index.write().map_err(|e| {
        ScError::Git(GitError::CommandFailed {
            command: "write index".to_string(),
            message: e.message().to_string(),
        })
    })?;

    Ok(())
}

/// Create a commit from the index with the given message.
///
/// Returns the new commit SHA.
pub fn create_commit(message: &str) -> Result<String> {
    let repo = Repository::open_current()?;
    create_commit_in(&repo, message)
}

/// Create a commit in a specific repository.
pub fn create_commit_in(repo: &Repository, message: &str) -> Result<String> {
    let sig = repo.inner().signature().map_err(|e| {
        ScError::Git(GitError::CommitFailed {
            message: format!("Failed to get signature: {}", e.message()),
        })
    })?;

    let mut index = repo.inner().index().map_err(|e| {
        ScError::Git(GitError::CommitFailed {
            message: format!("Failed to get index: {}", e.message()),
        })
    })?;
    let tree_id = index.write_tree().map_err(|e| {
        ScError::Git(GitError::CommitFailed {
            message: format!("Failed to write tree: {}", e.message()),
        })
    })?;
    let tree = repo.inner().find_tree(tree_id).map_err(|e| {
        ScError::Git(GitError::CommitFailed {
            message: format!("Failed to find tree: {}", e.message()),
        })
    })?;

    // Initial commits have no parent
    let parents: Vec<git2::Commit<'_>> = match repo.head_commit() {
        Ok(head) => vec![head],
        Err(_) => vec![],
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    let commit_oid = repo
        .inner()
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .map_err(|e| {
            ScError::Git(GitError::CommitFailed {
                message: e.message().to_string(),
            })
        })?;

    Ok(commit_oid.to_string())
}

/// Amend the last commit with a new message.
///
/// Shells out to git so hooks and message filters behave exactly as a
/// hand-typed `git commit --amend` would.
pub fn amend_commit(message: &str) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("commit");
    cmd.arg("--amend");
    cmd.arg("-m").arg(message);

    let output = cmd.output().map_err(|e| {
        ScError::Git(GitError::CommitFailed {
            message: format!("Failed to run git commit --amend: {}", e),
        })
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScError::Git(GitError::CommitFailed {
            message: stderr.to_string(),
        }));
    }

    let repo = Repository::open_current()?;
    let new_head = repo.head_commit()?;
    Ok(new_head.id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_create_commit_in_fresh_repo() {
        let dir = TempDir::new().unwrap();
        let raw = git2::Repository::init(dir.path()).unwrap();

        // Commit signature for the test repo
        let mut config = raw.config().unwrap();
        config.set_str("user.name", "tester").unwrap();
        config.set_str("user.email", "tester@example.com").unwrap();

        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        let mut index = raw.index().unwrap();
        index.add_path(Path::new("a.txt")).unwrap();
        index.write().unwrap();
        drop(index);
        drop(raw);

        let repo = Repository::open(dir.path()).unwrap();
        let sha = create_commit_in(&repo, "feat: add a").unwrap();

        let commit = repo
            .inner()
            .find_commit(git2::Oid::from_str(&sha).unwrap())
            .unwrap();
        assert_eq!(commit.message().unwrap(), "feat: add a");
    }
}
