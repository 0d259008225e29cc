//! `axiomkit_io_build` v1:
//! Build-time file helpers for assembling output folders from source trees.
//!
//! Layout:
//! - `ops`     : public operations (`BuildFs`)
//! - `copy`    : wildcard copy orchestration
//! - `list`    : wildcard listing
//! - `folder`  : folder create/delete/clean
//! - `walk`    : breadth-first traversal
//! - `pattern` : wildcard fragment compilation
//! - `path`    : separator normalization and argument parsing
//! - `storage` : storage capability and host backend
//! - `memory`  : in-memory backend
//! - `report`  : copy report model
//! - `spec`    : options/errors

pub mod copy;
pub mod folder;
pub mod list;
pub mod memory;
pub mod ops;
pub mod path;
pub mod pattern;
pub mod report;
pub mod spec;
pub mod storage;
pub mod walk;

pub use memory::MemoryStorage;
pub use ops::BuildFs;
pub use pattern::{EnumPatternToken, SpecPattern};
pub use report::{ReportCopy, ReportCopyBuilder};
pub use spec::{BuildFsError, EnumEntryKind, Result, SpecBuildFsOptions, SpecTraversalEntry};
pub use storage::{LocalStorage, Storage};
