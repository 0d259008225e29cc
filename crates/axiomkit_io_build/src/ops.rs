//! Public build operations over a [`Storage`] backend.

use crate::copy::copy_matching;
use crate::folder::{clean_folder, create_folders, delete_folder};
use crate::list::list_matching;
use crate::path::normalize_separators;
use crate::report::ReportCopy;
use crate::spec::{BuildFsError, Result, SpecBuildFsOptions};
use crate::storage::{LocalStorage, Storage};

/// Build-time file operations.
///
/// Every completed operation emits one `info` line through `tracing` unless
/// the value is silenced. Silence is a property of this value, not of the
/// process.
#[derive(Debug, Default)]
pub struct BuildFs<S: Storage> {
    storage: S,
    spec_options: SpecBuildFsOptions,
}

impl BuildFs<LocalStorage> {
    /// Operations on the host file system with default options.
    pub fn local() -> Self {
        Self::new(LocalStorage::default(), SpecBuildFsOptions::default())
    }
}

impl<S: Storage> BuildFs<S> {
    /// Operations on `storage` with the given options.
    pub fn new(storage: S, spec_options: SpecBuildFsOptions) -> Self {
        Self {
            storage,
            spec_options,
        }
    }

    /// Backend the operations run against.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current options.
    pub fn options(&self) -> &SpecBuildFsOptions {
        &self.spec_options
    }

    /// Turn operation log lines off (`true`) or back on.
    pub fn set_silent(&mut self, if_silent: bool) {
        self.spec_options.if_silent = if_silent;
    }

    /// Whether operation log lines are suppressed.
    pub fn is_silent(&self) -> bool {
        self.spec_options.if_silent
    }

    /// Remove `folder` recursively. A missing folder is not an error.
    pub fn delete_folder(&self, folder: &str) -> Result<()> {
        if delete_folder(&self.storage, folder)? && !self.is_silent() {
            tracing::info!("Deleted folder {}", normalize_separators(folder));
        }
        Ok(())
    }

    /// Leave `folder` existing and empty.
    pub fn clean_folder(&self, folder: &str) -> Result<()> {
        clean_folder(&self.storage, folder)?;
        if !self.is_silent() {
            tracing::info!("Cleaned folder {}", normalize_separators(folder));
        }
        Ok(())
    }

    /// Read a whole file as UTF-8 text.
    pub fn read(&self, path: &str) -> Result<String> {
        let path = normalize_separators(path);
        let txt = self.read_text(&path)?;
        if !self.is_silent() {
            tracing::info!("Read file {path}");
        }
        Ok(txt)
    }

    /// Concatenate files in the given order, with no separator.
    pub fn concat<I, P>(&self, paths: I) -> Result<String>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut txt = String::new();
        let mut l_paths = Vec::new();
        for path in paths {
            let path = normalize_separators(path.as_ref());
            txt.push_str(&self.read_text(&path)?);
            l_paths.push(path);
        }
        if !self.is_silent() {
            tracing::info!("Concatenated files {}", l_paths.join(", "));
        }
        Ok(txt)
    }

    /// Write `contents` to `path`, creating parent folders first.
    pub fn save(&self, path: &str, contents: &str) -> Result<()> {
        let path = normalize_separators(path);
        create_folders(&self.storage, &path)?;
        self.storage
            .write_file(&path, contents.as_bytes())
            .map_err(|e| BuildFsError::storage("write", &path, e))?;
        if !self.is_silent() {
            tracing::info!("Saved file {path}");
        }
        Ok(())
    }

    /// Create missing folders; a trailing separator marks the whole path as a folder.
    pub fn create_folders(&self, destination: &str) -> Result<()> {
        let n_created = create_folders(&self.storage, destination)?;
        if !self.is_silent() {
            tracing::info!(
                "Created folders for {} ({n_created} new)",
                normalize_separators(destination)
            );
        }
        Ok(())
    }

    /// Copy a file or every file matching a wildcard; see [`copy_matching`].
    pub fn copy(&self, source: &str, destination: &str) -> Result<ReportCopy> {
        copy_matching(&self.storage, source, destination, &self.spec_options)
    }

    /// List the files a path or wildcard selects; see [`list_matching`].
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        list_matching(&self.storage, path)
    }

    fn read_text(&self, path: &str) -> Result<String> {
        let raw = self
            .storage
            .read_file(path)
            .map_err(|e| BuildFsError::storage("read", path, e))?;
        String::from_utf8(raw).map_err(|_| BuildFsError::InvalidText {
            path: path.to_string(),
        })
    }
}
