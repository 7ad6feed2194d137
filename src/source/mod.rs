//! Tree sources: the read-only capability every command works through.
//!
//! A source answers three questions about a slash-separated path: what is it
//! ([`TreeSource::stat`]), what bytes does it hold ([`TreeSource::open`]), and what
//! lives directly below it ([`TreeSource::list`]). Commands never learn whether the
//! tree is a real disk, an archive, or an in-memory map.
//!
//! - `memory` - In-memory tree for tests and embedders
//! - `os` - Directory on the local disk
//! - `resolve` - Turning raw arguments into a source plus normalized paths

mod memory;
mod os;
mod resolve;

use std::fmt;
use std::io::Read;
use std::time::SystemTime;

use crate::error::FsError;

pub use memory::MemoryTree;
pub use os::OsTree;
pub use resolve::{Resolved, RootResolver, SourceResolver, StaticResolver};

/// Read-only access to one hierarchical data source.
///
/// This trait is object-safe; commands receive it as `&dyn TreeSource`.
pub trait TreeSource: Send + Sync {
    /// Metadata for `path`, following links.
    fn stat(&self, path: &str) -> Result<Entry, FsError>;

    /// Open a file for reading.
    fn open(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError>;

    /// Immediate children of a directory, in no particular order.
    ///
    /// Entries describe what the listing saw; a child may still fail a later
    /// [`stat`](Self::stat) (a link whose target is gone, for instance).
    fn list(&self, path: &str) -> Result<Vec<Entry>, FsError>;
}

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
}

/// Entry kind plus unix permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode {
    pub kind: EntryKind,
    pub perm: u32,
}

impl Mode {
    pub const fn new(kind: EntryKind, perm: u32) -> Self {
        Self {
            kind,
            perm: perm & 0o777,
        }
    }

    pub const fn file(perm: u32) -> Self {
        Self::new(EntryKind::File, perm)
    }

    pub const fn dir(perm: u32) -> Self {
        Self::new(EntryKind::Dir, perm)
    }
}

/// Renders as `drwxr-xr-x` / `-rw-r--r--` / `lrwxrwxrwx`.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            EntryKind::Dir => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::File => '-',
        };
        let mut out = String::with_capacity(10);
        out.push(kind);
        for (i, c) in "rwxrwxrwx".chars().enumerate() {
            if self.perm & (1 << (8 - i)) != 0 {
                out.push(c);
            } else {
                out.push('-');
            }
        }
        f.write_str(&out)
    }
}

/// Result of a stat or listing: one entry's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare name, `.` for the root.
    pub name: String,
    pub size: u64,
    pub mode: Mode,
    pub modified: SystemTime,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.mode.kind == EntryKind::Dir
    }
}

/// Sort entries by name, the only order commands print in.
pub fn sort_by_name(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
}
