//! Walk - lazy pre-order traversal of a subtree

use tracing::{debug, trace};

use crate::error::{FsError, WalkError};
use crate::path;
use crate::source::{Entry, TreeSource, sort_by_name};

/// One visited entry below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkItem {
    /// Full tree path of the entry.
    pub path: String,
    /// 1 for children of the walk root.
    pub depth: usize,
    pub parent: Entry,
    pub entry: Entry,
}

/// A directory whose children are still being handed out.
struct Frame {
    path: String,
    entry: Entry,
    depth: usize,
    /// Sorted children, reversed so `pop` yields the next name.
    pending: Vec<Entry>,
}

/// Depth-first walk that visits a directory's children in name order and
/// descends into each child directory before moving to its next sibling.
///
/// Children are re-stat-ed by path before they are yielded. When that stat (or
/// the listing of a child directory) fails, the error is yielded in place of
/// the child and the walk moves on; callers decide whether that is fatal.
pub struct Walk<'a> {
    source: &'a dyn TreeSource,
    root: Entry,
    stack: Vec<Frame>,
    /// Directory yielded last; listed lazily on the next call.
    descend: Option<(String, Entry, usize)>,
}

impl<'a> Walk<'a> {
    /// Start a walk at `start`. Failing to stat or list the start path is returned
    /// here rather than from the iterator.
    pub fn new(source: &'a dyn TreeSource, start: &str) -> Result<Self, WalkError> {
        let root = source.stat(start).map_err(|e| WalkError::Stat {
            path: start.to_string(),
            source: e,
        })?;
        debug!(path = start, is_dir = root.is_dir(), "walk start");

        let mut walk = Self {
            source,
            root: root.clone(),
            stack: Vec::new(),
            descend: None,
        };
        if root.is_dir() {
            let frame = walk
                .frame(start, root, 0)
                .map_err(|e| WalkError::List {
                    path: start.to_string(),
                    source: e,
                })?;
            walk.stack.push(frame);
        }
        Ok(walk)
    }

    /// Metadata of the start path.
    pub fn root(&self) -> &Entry {
        &self.root
    }

    fn frame(&self, path: &str, entry: Entry, depth: usize) -> Result<Frame, FsError> {
        let mut pending = self.source.list(path)?;
        sort_by_name(&mut pending);
        pending.reverse();
        trace!(path, children = pending.len(), "listed");
        Ok(Frame {
            path: path.to_string(),
            entry,
            depth,
            pending,
        })
    }
}

impl Iterator for Walk<'_> {
    type Item = Result<WalkItem, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((path, entry, depth)) = self.descend.take() {
            match self.frame(&path, entry, depth) {
                Ok(frame) => self.stack.push(frame),
                Err(source) => return Some(Err(WalkError::List { path, source })),
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some(listed) = frame.pending.pop() else {
                self.stack.pop();
                continue;
            };

            let child_path = path::join(&frame.path, &listed.name);
            let depth = frame.depth + 1;
            let parent = frame.entry.clone();

            let entry = match self.source.stat(&child_path) {
                Ok(entry) => entry,
                Err(source) => {
                    debug!(path = %child_path, error = %source, "stat failed during walk");
                    return Some(Err(WalkError::Stat {
                        path: child_path,
                        source,
                    }));
                }
            };

            if entry.is_dir() {
                self.descend = Some((child_path.clone(), entry.clone(), depth));
            }
            return Some(Ok(WalkItem {
                path: child_path,
                depth,
                parent,
                entry,
            }));
        }
    }
}
