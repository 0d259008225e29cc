//! Option models, traversal entries and top-level error types.

use std::io;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Kind of a storage entry discovered while walking a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEntryKind {
    /// Anything that is not a directory.
    File,
    /// A directory; always descended into, never matched.
    Directory,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Options shared by every operation of one [`crate::BuildFs`] value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecBuildFsOptions {
    /// Suppress the per-operation log line.
    pub if_silent: bool,
}

/// One entry yielded by [`crate::walk::Traverser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTraversalEntry {
    /// Path of the entry, prefixed by the traversal folder (unless it is `.`).
    pub path: String,
    /// Base name of the entry.
    pub name: String,
    /// File or directory.
    pub kind: EnumEntryKind,
}

impl SpecTraversalEntry {
    /// Whether the entry is a file (links included).
    pub fn is_file(&self) -> bool {
        self.kind == EnumEntryKind::File
    }
}

/// Errors raised by the build file operations.
///
/// Storage failures keep the original [`io::Error`] as their source.
#[derive(Debug, thiserror::Error)]
pub enum BuildFsError {
    /// A wildcard source was copied onto a destination that is not a folder.
    #[error(
        "Cannot use destination file `{path_dst}` for multiple source files (source: `{path_src}`)"
    )]
    MultipleSourcesNeedDirectoryDestination {
        /// Normalized source argument.
        path_src: String,
        /// Normalized destination argument.
        path_dst: String,
    },
    /// A path segment that must be a directory exists as something else.
    #[error("Path exists but is not a directory: {path}")]
    PathConflict {
        /// Conflicting path.
        path: String,
    },
    /// The storage backend failed.
    #[error("Failed to {op} {path}: {source}")]
    Storage {
        /// Storage primitive that failed.
        op: &'static str,
        /// Path passed to the primitive.
        path: String,
        /// Underlying error, unchanged.
        #[source]
        source: io::Error,
    },
    /// File contents are not valid UTF-8.
    #[error("File is not valid UTF-8 text: {path}")]
    InvalidText {
        /// File that was read.
        path: String,
    },
    /// Wildcard fragment could not be compiled.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl BuildFsError {
    pub(crate) fn storage(op: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        Self::Storage {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BuildFsError>;

// #endregion
////////////////////////////////////////////////////////////////////////////////
