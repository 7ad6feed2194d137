//! fscmd - Unix-like inspection commands over any tree-shaped data source
//!
//! `cat`, `file`, `hashsum`, `ls`, `stat` and `tree` only see the world through
//! [`TreeSource`] (stat, open, list), so the same commands work on a directory on
//! disk ([`OsTree`]) or a tree held in memory ([`MemoryTree`]).

pub mod commands;
pub mod config;
pub mod error;
pub mod hash;
pub mod logging;
pub mod output;
pub mod path;
pub mod sniff;
pub mod source;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use commands::{Verb, run};
pub use config::{AppConfig, ColorMode, CommandContext};
pub use error::{CommandError, FsError, ResolveError, WalkError};
pub use hash::{Digests, MultiHasher};
pub use output::{ListFormatter, OutputConfig, StatReport, TreeFormatter};
pub use sniff::{SignatureSniffer, TypeSniffer};
pub use source::{
    Entry, EntryKind, MemoryTree, Mode, OsTree, RootResolver, SourceResolver, StaticResolver,
    TreeSource,
};
pub use tree::{TreeNode, Walk, WalkItem};
