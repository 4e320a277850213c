// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker line used to recognize hooks installed by sc.
pub const HOOK_MARKER: &str = "# Managed by sc - do not edit";

/// The git hooks sc can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Validates every commit message through `sc check`.
    CommitMsg,
}

impl HookTemplate {
    /// All managed hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// The file name under `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                "#!/bin/sh\n{}\nsc check --file \"$1\"\n",
                HOOK_MARKER
            ),
        }
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_msg_script() {
        let script = HookTemplate::CommitMsg.generate();
        assert!(script.starts_with("#!/bin/sh"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains("sc check --file"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("commit-msg".parse(), Ok(HookTemplate::CommitMsg));
        assert!("pre-push".parse::<HookTemplate>().is_err());
    }
}
