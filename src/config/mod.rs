// SPDX-License-Identifier: MIT

//! Configuration module for sc.
//!
//! Handles loading and defaulting of the tool configuration. The
//! configuration is resolved once per invocation and is immutable
//! afterwards; the validator and formatter only ever borrow it.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, default_prompts, default_scopes, default_types};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from};
pub use schema::*;
