//! MemoryTree - a tree source held entirely in memory

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::time::SystemTime;

use crate::error::FsError;
use crate::path::{self, ROOT};

use super::{Entry, EntryKind, Mode, TreeSource};

const FILE_PERM: u32 = 0o644;
const DIR_PERM: u32 = 0o755;

#[derive(Debug, Clone)]
enum Node {
    File {
        data: Vec<u8>,
        perm: u32,
        modified: SystemTime,
    },
    Dir {
        perm: u32,
        modified: SystemTime,
    },
    /// Shows up in listings but cannot be stat-ed or opened.
    Dangling,
}

/// Path-keyed in-memory tree.
///
/// Parent directories are created implicitly when a file is inserted, so
/// `MemoryTree::new().with_file("folder/bar", "bar")` holds `folder` and `folder/bar`.
/// Listing order is unspecified, just like a real directory.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: HashMap<String, Node>,
}

impl MemoryTree {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            ROOT.to_string(),
            Node::Dir {
                perm: DIR_PERM,
                modified: SystemTime::UNIX_EPOCH,
            },
        );
        Self { nodes }
    }

    pub fn with_file(mut self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.insert_file(path, data, FILE_PERM, SystemTime::UNIX_EPOCH);
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert_dir(path);
        self
    }

    /// Add an entry that lists like a link but whose target is missing.
    pub fn with_dangling(mut self, path: &str) -> Self {
        self.insert_parents(path);
        self.nodes.insert(path.to_string(), Node::Dangling);
        self
    }

    pub fn insert_file(
        &mut self,
        path: &str,
        data: impl Into<Vec<u8>>,
        perm: u32,
        modified: SystemTime,
    ) {
        self.insert_parents(path);
        self.nodes.insert(
            path.to_string(),
            Node::File {
                data: data.into(),
                perm,
                modified,
            },
        );
    }

    pub fn insert_dir(&mut self, path: &str) {
        self.insert_parents(path);
        self.nodes.entry(path.to_string()).or_insert(Node::Dir {
            perm: DIR_PERM,
            modified: SystemTime::UNIX_EPOCH,
        });
    }

    fn insert_parents(&mut self, path: &str) {
        let mut parent = parent_of(path);
        while let Some(p) = parent {
            self.nodes.entry(p.to_string()).or_insert(Node::Dir {
                perm: DIR_PERM,
                modified: SystemTime::UNIX_EPOCH,
            });
            parent = parent_of(p);
        }
    }

    fn node(&self, path: &str) -> Result<&Node, FsError> {
        self.nodes.get(path).ok_or_else(|| FsError::NotFound {
            path: path.to_string(),
        })
    }

    fn entry(path: &str, node: &Node) -> Entry {
        let name = path::base_name(path).to_string();
        match node {
            Node::File {
                data,
                perm,
                modified,
            } => Entry {
                name,
                size: data.len() as u64,
                mode: Mode::file(*perm),
                modified: *modified,
            },
            Node::Dir { perm, modified } => Entry {
                name,
                size: 0,
                mode: Mode::dir(*perm),
                modified: *modified,
            },
            Node::Dangling => Entry {
                name,
                size: 0,
                mode: Mode::new(EntryKind::Symlink, 0o777),
                modified: SystemTime::UNIX_EPOCH,
            },
        }
    }
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

fn parent_of(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    match path.rfind('/') {
        Some(idx) => Some(&path[..idx]),
        None => Some(ROOT),
    }
}

impl TreeSource for MemoryTree {
    fn stat(&self, path: &str) -> Result<Entry, FsError> {
        match self.node(path)? {
            Node::Dangling => Err(FsError::BrokenLink {
                path: path.to_string(),
            }),
            node => Ok(Self::entry(path, node)),
        }
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError> {
        match self.node(path)? {
            Node::File { data, .. } => Ok(Box::new(Cursor::new(data.clone()))),
            Node::Dir { .. } => Err(FsError::Io {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
            }),
            Node::Dangling => Err(FsError::BrokenLink {
                path: path.to_string(),
            }),
        }
    }

    fn list(&self, path: &str) -> Result<Vec<Entry>, FsError> {
        if !matches!(self.node(path)?, Node::Dir { .. }) {
            return Err(FsError::NotADirectory {
                path: path.to_string(),
            });
        }
        Ok(self
            .nodes
            .iter()
            .filter(|(p, _)| parent_of(p) == Some(path))
            .map(|(p, node)| Self::entry(p, node))
            .collect())
    }
}
