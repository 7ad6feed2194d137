//! Error types shared by tree sources, the walker, and the command dispatcher.

use std::io;

/// Failure reported by a [`TreeSource`](crate::source::TreeSource).
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    #[error("{path}: not a directory")]
    NotADirectory { path: String },

    /// A listed entry whose target cannot be resolved (e.g. a dangling symlink).
    #[error("{path}: broken link")]
    BrokenLink { path: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Map an I/O error on `path` to the closest variant.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound {
                path: path.to_string(),
            },
            io::ErrorKind::NotADirectory => FsError::NotADirectory {
                path: path.to_string(),
            },
            _ => FsError::Io {
                path: path.to_string(),
                source,
            },
        }
    }

    /// What went wrong, without the path.
    pub fn reason(&self) -> String {
        match self {
            FsError::NotFound { .. } => "no such file or directory".to_string(),
            FsError::NotADirectory { .. } => "not a directory".to_string(),
            FsError::BrokenLink { .. } => "broken link".to_string(),
            FsError::Io { source, .. } => source.to_string(),
        }
    }

    /// The path the failing operation was addressed to.
    pub fn path(&self) -> &str {
        match self {
            FsError::NotFound { path }
            | FsError::NotADirectory { path }
            | FsError::BrokenLink { path }
            | FsError::Io { path, .. } => path,
        }
    }
}

/// Failure turning raw command-line arguments into a tree and a path list.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid path '{arg}': {reason}")]
    InvalidPath { arg: String, reason: &'static str },

    #[error("cannot access root '{root}': {source}")]
    RootNotFound {
        root: String,
        #[source]
        source: io::Error,
    },

    #[error("root '{root}' is not a directory")]
    RootNotADirectory { root: String },
}

/// A failure met while descending into a subtree.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("stat: {source}")]
    Stat {
        path: String,
        #[source]
        source: FsError,
    },

    #[error("list: {source}")]
    List {
        path: String,
        #[source]
        source: FsError,
    },
}

impl WalkError {
    pub fn path(&self) -> &str {
        match self {
            WalkError::Stat { path, .. } | WalkError::List { path, .. } => path,
        }
    }
}

/// Fatal failure of a whole command invocation.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T, E = CommandError> = std::result::Result<T, E>;
