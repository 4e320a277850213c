// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{style, Term};

/// Renders the exact outgoing message between dim rulers so the user can
/// inspect every byte before confirming.
pub struct CommitPreview<'a> {
    message: &'a str,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for a formatted message.
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Print the preview to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        let _ = self.render(&term);
    }

    fn render(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!("\n{}\n", style("Commit Message:").cyan().bold()))?;
        term.write_line(&format!("{}", style("─".repeat(60)).dim()))?;

        for (index, line) in self.message.split('\n').enumerate() {
            if index == 0 {
                term.write_line(line)?;
            } else {
                term.write_line(&format!("{}", style(line).dim()))?;
            }
        }

        term.write_line(&format!("{}", style("─".repeat(60)).dim()))?;
        Ok(())
    }
}
