//! OsTree - a directory on the local disk

use std::fs::{self, File, Metadata};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{trace, warn};

use crate::error::FsError;
use crate::path::{self, ROOT};

use super::{Entry, EntryKind, Mode, TreeSource};

/// Tree source rooted at a directory on disk.
///
/// `stat` and `open` follow symlinks; `list` reports links as links, so a dangling
/// link lists fine and only fails once stat-ed.
#[derive(Debug, Clone)]
pub struct OsTree {
    root: PathBuf,
}

impl OsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path == ROOT {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

fn entry_from_metadata(name: String, meta: &Metadata) -> Entry {
    let file_type = meta.file_type();
    let kind = if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::File
    };
    Entry {
        name,
        size: meta.len(),
        mode: Mode::new(kind, permission_bits(meta)),
        modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
    }
}

#[cfg(unix)]
fn permission_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn permission_bits(meta: &Metadata) -> u32 {
    let base = if meta.is_dir() { 0o755 } else { 0o644 };
    if meta.permissions().readonly() {
        base & !0o222
    } else {
        base
    }
}

impl TreeSource for OsTree {
    fn stat(&self, path: &str) -> Result<Entry, FsError> {
        let full = self.resolve(path);
        trace!(path, full = %full.display(), "stat");
        let meta = match fs::metadata(&full) {
            Ok(meta) => meta,
            Err(e) => {
                // A link that lists but cannot be followed
                if fs::symlink_metadata(&full).is_ok_and(|m| m.file_type().is_symlink()) {
                    return Err(FsError::BrokenLink {
                        path: path.to_string(),
                    });
                }
                return Err(FsError::from_io(path, e));
            }
        };
        Ok(entry_from_metadata(path::base_name(path).to_string(), &meta))
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError> {
        let full = self.resolve(path);
        trace!(path, full = %full.display(), "open");
        let file = File::open(&full).map_err(|e| FsError::from_io(path, e))?;
        Ok(Box::new(file))
    }

    fn list(&self, path: &str) -> Result<Vec<Entry>, FsError> {
        let full = self.resolve(path);
        trace!(path, full = %full.display(), "list");
        let dir = fs::read_dir(&full).map_err(|e| FsError::from_io(path, e))?;

        let mut entries = Vec::new();
        for item in dir {
            let item = item.map_err(|e| FsError::from_io(path, e))?;
            // Tree paths are UTF-8; a lossy name could not be stat-ed again.
            let name = match item.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(path, name = ?raw, "skipping entry with non-UTF-8 name");
                    continue;
                }
            };
            let meta = item
                .metadata()
                .map_err(|e| FsError::from_io(&path::join(path, &name), e))?;
            entries.push(entry_from_metadata(name, &meta));
        }
        Ok(entries)
    }
}
