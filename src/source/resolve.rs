//! Source resolution: raw arguments in, tree source and tree paths out

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::error::{FsError, ResolveError};
use crate::path;

use super::{Entry, OsTree, TreeSource};

/// A tree source bound for one command invocation plus the paths to visit in it.
pub struct Resolved {
    pub source: Box<dyn TreeSource>,
    pub paths: Vec<String>,
}

/// Turns the raw positional arguments of a command into a [`Resolved`].
///
/// Called exactly once per command invocation, before any output is written.
pub trait SourceResolver {
    fn resolve(&self, args: &[String]) -> Result<Resolved, ResolveError>;
}

/// Resolves arguments as paths below a directory on disk.
#[derive(Debug, Clone)]
pub struct RootResolver {
    root: PathBuf,
}

impl RootResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceResolver for RootResolver {
    fn resolve(&self, args: &[String]) -> Result<Resolved, ResolveError> {
        let meta = fs::metadata(&self.root).map_err(|source| ResolveError::RootNotFound {
            root: self.root.display().to_string(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ResolveError::RootNotADirectory {
                root: self.root.display().to_string(),
            });
        }

        let paths = args
            .iter()
            .map(|arg| {
                path::clean(arg).map_err(|invalid| ResolveError::InvalidPath {
                    arg: arg.clone(),
                    reason: invalid.reason(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(root = %self.root.display(), ?paths, "resolved arguments");
        Ok(Resolved {
            source: Box::new(OsTree::new(self.root.clone())),
            paths,
        })
    }
}

/// Hands out one shared tree and passes arguments through unchanged.
#[derive(Clone)]
pub struct StaticResolver<T> {
    source: Arc<T>,
}

impl<T: TreeSource + 'static> StaticResolver<T> {
    pub fn new(source: T) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

struct Shared<T>(Arc<T>);

impl<T: TreeSource> TreeSource for Shared<T> {
    fn stat(&self, path: &str) -> Result<Entry, FsError> {
        self.0.stat(path)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError> {
        self.0.open(path)
    }

    fn list(&self, path: &str) -> Result<Vec<Entry>, FsError> {
        self.0.list(path)
    }
}

impl<T: TreeSource + 'static> SourceResolver for StaticResolver<T> {
    fn resolve(&self, args: &[String]) -> Result<Resolved, ResolveError> {
        Ok(Resolved {
            source: Box::new(Shared(Arc::clone(&self.source))),
            paths: args.to_vec(),
        })
    }
}
