// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{HookError, Result, ScError};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::with_hooks_dir(repo.git_dir().join("hooks")))
    }

    /// Create a hook manager over an explicit hooks directory.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Self {
        Self { hooks_dir }
    }

    /// Install a specific hook by name.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = hook_name.parse::<HookTemplate>().ok().ok_or_else(|| {
            ScError::Hook(HookError::NotFound {
                hook: hook_name.to_string(),
            })
        })?;

        self.install_template(&template, force)
    }

    /// Install all managed hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir).map_err(|e| {
                ScError::Hook(HookError::InstallFailed {
                    hook: template.filename().to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if hook_path.exists() && !self.is_sc_hook(&hook_path)? {
            if !force {
                return Err(ScError::Hook(HookError::AlreadyExists {
                    hook: template.filename().to_string(),
                }));
            }
            // Preserve the foreign hook so uninstall can restore it
            fs::rename(&hook_path, &backup_path).map_err(|e| {
                ScError::Hook(HookError::InstallFailed {
                    hook: template.filename().to_string(),
                    message: format!("Failed to backup existing hook: {}", e),
                })
            })?;
        }

        let script = template.generate();
        fs::write(&hook_path, &script).map_err(|e| {
            ScError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        set_executable(&hook_path).map_err(|e| {
            ScError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to set permissions: {}", e),
            })
        })?;

        Ok(())
    }

    /// Uninstall a specific hook by name.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = hook_name.parse::<HookTemplate>().ok().ok_or_else(|| {
            ScError::Hook(HookError::NotFound {
                hook: hook_name.to_string(),
            })
        })?;

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(()); // Nothing to uninstall
        }

        if !self.is_sc_hook(&hook_path)? {
            return Err(ScError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by sc".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            ScError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        // Restore backup if present
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).ok();
        }

        Ok(())
    }

    /// Uninstall all managed hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Installed state of each managed hook.
    pub fn status(&self) -> Result<Vec<(&'static str, bool)>> {
        let mut status = Vec::new();
        for template in HookTemplate::all() {
            let hook_path = self.hooks_dir.join(template.filename());
            let installed = hook_path.exists() && self.is_sc_hook(&hook_path)?;
            status.push((template.filename(), installed));
        }
        Ok(status)
    }

    fn is_sc_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).unwrap_or_default();
        Ok(content.contains(HOOK_MARKER))
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
