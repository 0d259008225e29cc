//! Storage capability consumed by the engine, plus the host file system backend.

use std::fs;
use std::io;
use std::path::Path;

/// Primitive storage operations. Paths use `/` separators.
///
/// Implementations report failures as [`io::Error`]; the engine wraps them
/// without changing their kind.
pub trait Storage {
    /// `true` for files, directories and links (dangling links included).
    fn exists(&self, path: &str) -> bool;

    /// `false` for missing paths. Links are not followed.
    fn is_directory(&self, path: &str) -> bool;

    /// Like [`Storage::is_directory`], but a link to a directory counts.
    ///
    /// Used when a path only has to be usable as a parent folder.
    fn points_to_directory(&self, path: &str) -> bool {
        self.is_directory(path)
    }

    /// Names (not paths) of the direct children, in any order.
    ///
    /// Names that are not valid UTF-8 are an error of kind `InvalidData`.
    fn list_children(&self, path: &str) -> io::Result<Vec<String>>;

    /// Whole file contents.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Create or truncate a file. The parent directory must exist.
    fn write_file(&self, path: &str, contents: &[u8]) -> io::Result<()>;

    /// Copy file bytes. The parent directory of `path_dst` must exist.
    fn copy_file(&self, path_src: &str, path_dst: &str) -> io::Result<()>;

    /// Create a single directory. The parent must exist.
    fn create_directory(&self, path: &str) -> io::Result<()>;

    /// Remove a file or link.
    fn remove_file(&self, path: &str) -> io::Result<()>;

    /// Remove an empty directory.
    fn remove_directory(&self, path: &str) -> io::Result<()>;
}

/// Host file system backend.
///
/// Symbolic links are reported as files, never as directories, so deleting a
/// tree never descends through a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    if_keep_metadata: bool,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self {
            if_keep_metadata: true,
        }
    }
}

impl LocalStorage {
    /// Backend that keeps metadata on copies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle copying permissions, timestamps and extended attributes along with file bytes.
    pub fn with_metadata(mut self, if_keep_metadata: bool) -> Self {
        self.if_keep_metadata = if_keep_metadata;
        self
    }

    /// Whether copies carry metadata.
    pub fn keeps_metadata(&self) -> bool {
        self.if_keep_metadata
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &str) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_dir())
            .unwrap_or(false)
    }

    fn points_to_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn list_children(&self, path: &str) -> io::Result<Vec<String>> {
        let mut l_names = Vec::new();
        for entry in fs::read_dir(path)? {
            let name = entry?.file_name().into_string().map_err(|raw_name| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "File name {} in {path} is not valid UTF-8",
                        raw_name.to_string_lossy()
                    ),
                )
            })?;
            l_names.push(name);
        }
        Ok(l_names)
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_file(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn copy_file(&self, path_src: &str, path_dst: &str) -> io::Result<()> {
        use filetime::{FileTime, set_file_times};

        fs::copy(path_src, path_dst)?;
        if !self.if_keep_metadata {
            return Ok(());
        }

        let stat_src = fs::metadata(path_src)?;
        fs::set_permissions(path_dst, stat_src.permissions())?;
        set_file_times(
            path_dst,
            FileTime::from_last_access_time(&stat_src),
            FileTime::from_last_modification_time(&stat_src),
        )?;

        // Attributes the destination refuses (e.g. `security.*` without privileges) are skipped.
        #[cfg(target_os = "linux")]
        match xattr::list(path_src) {
            Ok(iter_names) => {
                for name in iter_names {
                    let Ok(Some(raw_value)) = xattr::get(path_src, &name) else {
                        continue;
                    };
                    if let Err(e) = xattr::set(path_dst, &name, &raw_value) {
                        tracing::debug!(
                            "Skipped extended attribute {} on {path_dst}: {e}",
                            name.to_string_lossy()
                        );
                    }
                }
            }
            Err(e) => tracing::debug!("Extended attributes unavailable on {path_src}: {e}"),
        }
        Ok(())
    }

    fn create_directory(&self, path: &str) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_directory(&self, path: &str) -> io::Result<()> {
        fs::remove_dir(path)
    }
}
