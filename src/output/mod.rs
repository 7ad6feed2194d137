//! Text formatting for command output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, prefixes and colored names shared by formatters
//! - `tree` - Branch-drawn rendering of a `TreeNode`
//! - `listing` - One-level `ls` listing with directory suffixes
//! - `stat` - Fixed-field entry report

mod config;
mod listing;
mod stat;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use listing::ListFormatter;
pub use stat::StatReport;
pub use tree::TreeFormatter;
pub use utils::{connector, continuation_prefix};
