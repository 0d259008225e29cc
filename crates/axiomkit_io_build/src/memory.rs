//! In-memory storage backend.
//!
//! Keys are normalized paths: `.` segments and repeated separators are
//! dropped and `..` is resolved lexically, so `./dir//a` and `dir/a` name the
//! same entry. The relative root (`""`) and `/` always exist.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EnumMemoryNode {
    Directory,
    File(Vec<u8>),
}

/// A file tree held in memory, used for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map_nodes: RefCell<BTreeMap<String, EnumMemoryNode>>,
}

fn normalize_key(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut l_parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                l_parts.pop();
            }
            _ => l_parts.push(part),
        }
    }

    let joined = l_parts.join("/");
    if path.starts_with('/') {
        format!("/{joined}")
    } else {
        joined
    }
}

fn is_root_key(key: &str) -> bool {
    key.is_empty() || key == "/"
}

fn parent_key(key: &str) -> &str {
    match key.rfind('/') {
        None => "",
        Some(0) => "/",
        Some(pos) => &key[..pos],
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("No such file or directory: {path}"))
}

impl MemoryStorage {
    /// Empty tree holding only the roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating any missing parent directories.
    ///
    /// Panics when a parent is already a file.
    pub fn with_file(self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        let key = normalize_key(path);
        self.insert_parents(&key);
        self.map_nodes
            .borrow_mut()
            .insert(key, EnumMemoryNode::File(contents.as_ref().to_vec()));
        self
    }

    /// Seed a directory, creating any missing parent directories.
    ///
    /// Panics when a parent is already a file.
    pub fn with_dir(self, path: &str) -> Self {
        let key = normalize_key(path);
        self.insert_parents(&key);
        if !is_root_key(&key) {
            self.map_nodes
                .borrow_mut()
                .insert(key, EnumMemoryNode::Directory);
        }
        self
    }

    /// Every file path, sorted.
    pub fn file_paths(&self) -> Vec<String> {
        self.map_nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, EnumMemoryNode::File(_)))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Every directory path (roots excluded), sorted.
    pub fn dir_paths(&self) -> Vec<String> {
        self.map_nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, EnumMemoryNode::Directory))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // Panics when a parent is already a file: such a tree cannot exist on disk.
    fn insert_parents(&self, key: &str) {
        let mut map_nodes = self.map_nodes.borrow_mut();
        let mut key_parent = parent_key(key);
        while !is_root_key(key_parent) {
            let node = map_nodes
                .entry(key_parent.to_string())
                .or_insert(EnumMemoryNode::Directory);
            assert!(
                matches!(node, EnumMemoryNode::Directory),
                "cannot seed {key}: parent {key_parent} is a file"
            );
            key_parent = parent_key(key_parent);
        }
    }

    fn node(&self, key: &str) -> Option<EnumMemoryNode> {
        if is_root_key(key) {
            return Some(EnumMemoryNode::Directory);
        }
        self.map_nodes.borrow().get(key).cloned()
    }

    fn require_parent_dir(&self, key: &str, path: &str) -> io::Result<()> {
        match self.node(parent_key(key)) {
            Some(EnumMemoryNode::Directory) => Ok(()),
            Some(EnumMemoryNode::File(_)) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("Parent is not a directory: {path}"),
            )),
            None => Err(not_found(path)),
        }
    }

    fn has_children(&self, key: &str) -> bool {
        self.map_nodes
            .borrow()
            .keys()
            .any(|k| k != key && parent_key(k) == key)
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &str) -> bool {
        self.node(&normalize_key(path)).is_some()
    }

    fn is_directory(&self, path: &str) -> bool {
        matches!(
            self.node(&normalize_key(path)),
            Some(EnumMemoryNode::Directory)
        )
    }

    fn list_children(&self, path: &str) -> io::Result<Vec<String>> {
        let key = normalize_key(path);
        match self.node(&key) {
            Some(EnumMemoryNode::Directory) => {}
            Some(EnumMemoryNode::File(_)) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("Not a directory: {path}"),
                ));
            }
            None => return Err(not_found(path)),
        }

        Ok(self
            .map_nodes
            .borrow()
            .keys()
            .filter(|k| k.as_str() != key && parent_key(k) == key)
            .map(|k| k[k.rfind('/').map_or(0, |pos| pos + 1)..].to_string())
            .collect())
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        match self.node(&normalize_key(path)) {
            Some(EnumMemoryNode::File(raw)) => Ok(raw),
            Some(EnumMemoryNode::Directory) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {path}"),
            )),
            None => Err(not_found(path)),
        }
    }

    fn write_file(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        let key = normalize_key(path);
        if let Some(EnumMemoryNode::Directory) = self.node(&key) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {path}"),
            ));
        }
        self.require_parent_dir(&key, path)?;
        self.map_nodes
            .borrow_mut()
            .insert(key, EnumMemoryNode::File(contents.to_vec()));
        Ok(())
    }

    fn copy_file(&self, path_src: &str, path_dst: &str) -> io::Result<()> {
        let raw = self.read_file(path_src)?;
        self.write_file(path_dst, &raw)
    }

    fn create_directory(&self, path: &str) -> io::Result<()> {
        let key = normalize_key(path);
        if self.node(&key).is_some() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Already exists: {path}"),
            ));
        }
        self.require_parent_dir(&key, path)?;
        self.map_nodes
            .borrow_mut()
            .insert(key, EnumMemoryNode::Directory);
        Ok(())
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        let key = normalize_key(path);
        match self.node(&key) {
            Some(EnumMemoryNode::File(_)) => {
                self.map_nodes.borrow_mut().remove(&key);
                Ok(())
            }
            Some(EnumMemoryNode::Directory) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {path}"),
            )),
            None => Err(not_found(path)),
        }
    }

    fn remove_directory(&self, path: &str) -> io::Result<()> {
        let key = normalize_key(path);
        if is_root_key(&key) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Cannot remove root: {path}"),
            ));
        }
        match self.node(&key) {
            Some(EnumMemoryNode::Directory) => {
                if self.has_children(&key) {
                    return Err(io::Error::new(
                        io::ErrorKind::DirectoryNotEmpty,
                        format!("Directory not empty: {path}"),
                    ));
                }
                self.map_nodes.borrow_mut().remove(&key);
                Ok(())
            }
            Some(EnumMemoryNode::File(_)) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("Not a directory: {path}"),
            )),
            None => Err(not_found(path)),
        }
    }
}
