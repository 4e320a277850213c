// SPDX-License-Identifier: MIT

//! Commit record handling: collection, formatting, parsing, preview.

mod builder;
mod format;
mod parse;
mod preview;
mod record;

pub use builder::{confirm_commit, CommitBuilder};
pub use format::MessageFormatter;
pub use parse::parse_message;
pub use preview::CommitPreview;
pub use record::CommitRecord;
