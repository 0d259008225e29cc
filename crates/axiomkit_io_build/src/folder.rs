//! Folder creation, deletion and cleaning.

use crate::path::{derive_traversal_root, normalize_separators, trim_trailing_separators};
use crate::spec::{BuildFsError, Result};
use crate::storage::Storage;
use crate::walk::Traverser;

/// Create every missing folder implied by `destination`.
///
/// A trailing separator means the whole path is a folder; otherwise only the
/// segments before the last one are created. Returns how many folders were
/// created.
pub fn create_folders<S: Storage + ?Sized>(storage: &S, destination: &str) -> Result<usize> {
    let path_dst = normalize_separators(destination);
    let path_dir = if path_dst.ends_with('/') {
        path_dst.as_str()
    } else {
        match path_dst.rfind('/') {
            Some(pos) => &path_dst[..pos],
            None => return Ok(0),
        }
    };

    let b_leading_slash = path_dst.starts_with('/');
    let mut path_acc = derive_traversal_root(&path_dst).to_string();
    let mut n_created = 0;
    for part in path_dir.split('/').filter(|p| !p.is_empty() && *p != ".") {
        path_acc = if path_acc.is_empty() && !b_leading_slash {
            part.to_string()
        } else {
            format!("{path_acc}/{part}")
        };
        if ensure_directory(storage, &path_acc)? {
            n_created += 1;
        }
    }
    Ok(n_created)
}

// Existence is checked first: backends differ in how they report "already exists".
fn ensure_directory<S: Storage + ?Sized>(storage: &S, path: &str) -> Result<bool> {
    if storage.exists(path) {
        if !storage.points_to_directory(path) {
            return Err(BuildFsError::PathConflict {
                path: path.to_string(),
            });
        }
        return Ok(false);
    }
    storage
        .create_directory(path)
        .map_err(|e| BuildFsError::storage("create directory", path, e))?;
    Ok(true)
}

/// Remove `folder` and everything below it.
///
/// Returns `false` when the folder did not exist.
pub fn delete_folder<S: Storage + ?Sized>(storage: &S, folder: &str) -> Result<bool> {
    let path_norm = normalize_separators(folder);
    let path_dir = trim_trailing_separators(&path_norm);
    if !storage.exists(path_dir) {
        return Ok(false);
    }
    if !storage.is_directory(path_dir) {
        return Err(BuildFsError::PathConflict {
            path: path_dir.to_string(),
        });
    }

    // Listed in full before anything is removed, so a listing failure leaves the tree intact.
    let l_entries = Traverser::new(storage, path_dir).collect::<Result<Vec<_>>>()?;

    // BFS order puts every folder after its parent; removing in reverse empties children first.
    let mut l_dirs = vec![path_dir.to_string()];
    for entry in l_entries {
        if entry.is_file() {
            storage
                .remove_file(&entry.path)
                .map_err(|e| BuildFsError::storage("remove file", &entry.path, e))?;
        } else {
            l_dirs.push(entry.path);
        }
    }
    for path in l_dirs.iter().rev() {
        storage
            .remove_directory(path)
            .map_err(|e| BuildFsError::storage("remove directory", path, e))?;
    }
    Ok(true)
}

/// Leave `folder` existing and empty.
pub fn clean_folder<S: Storage + ?Sized>(storage: &S, folder: &str) -> Result<()> {
    let path_norm = normalize_separators(folder);
    let path_dir = trim_trailing_separators(&path_norm);
    delete_folder(storage, path_dir)?;
    create_folders(storage, &format!("{path_dir}/"))?;
    Ok(())
}
