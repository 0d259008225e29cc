//! Breadth-first subtree traversal.

use std::collections::VecDeque;

use crate::path::join_path;
use crate::spec::{BuildFsError, EnumEntryKind, Result, SpecTraversalEntry};
use crate::storage::Storage;

/// Lazy breadth-first walk below a folder.
///
/// Children of each folder are yielded sorted by name, whatever order the
/// storage lists them in. Directories are yielded and then queued; the
/// starting folder itself is not yielded. The walk stops after the first
/// error.
pub struct Traverser<'a, S: Storage + ?Sized> {
    storage: &'a S,
    q_dirs_pending: VecDeque<String>,
    q_entries_ready: VecDeque<SpecTraversalEntry>,
    if_failed: bool,
}

impl<'a, S: Storage + ?Sized> Traverser<'a, S> {
    /// Walk below `path_dir_root`; nothing is listed until the first `next`.
    pub fn new(storage: &'a S, path_dir_root: &str) -> Self {
        Self {
            storage,
            q_dirs_pending: VecDeque::from([path_dir_root.to_string()]),
            q_entries_ready: VecDeque::new(),
            if_failed: false,
        }
    }

    fn expand_next_dir(&mut self) -> Option<Result<()>> {
        let path_dir = self.q_dirs_pending.pop_front()?;
        let mut l_names = match self.storage.list_children(&path_dir) {
            Ok(v) => v,
            Err(e) => return Some(Err(BuildFsError::storage("list", path_dir, e))),
        };
        l_names.sort();

        for name in l_names {
            let path = join_path(&path_dir, &name);
            let kind = if self.storage.is_directory(&path) {
                self.q_dirs_pending.push_back(path.clone());
                EnumEntryKind::Directory
            } else {
                EnumEntryKind::File
            };
            self.q_entries_ready
                .push_back(SpecTraversalEntry { path, name, kind });
        }
        Some(Ok(()))
    }
}

impl<S: Storage + ?Sized> Iterator for Traverser<'_, S> {
    type Item = Result<SpecTraversalEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.if_failed {
            return None;
        }
        loop {
            if let Some(entry) = self.q_entries_ready.pop_front() {
                return Some(Ok(entry));
            }
            match self.expand_next_dir()? {
                Ok(()) => continue,
                Err(e) => {
                    self.if_failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
