//! Separator normalization and source/destination argument parsing.
//!
//! Paths are plain strings with `/` as the only separator once normalized.

use crate::pattern::has_wildcard;

////////////////////////////////////////////////////////////////////////////////
// #region PathNormalization

/// Replace every backslash with a forward slash.
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// `true` for `/abs/...` and drive-style paths (`C:/...`).
pub fn is_rooted(path: &str) -> bool {
    path.starts_with('/') || path.contains(':')
}

/// Root that segment-by-segment folder creation starts from.
pub fn derive_traversal_root(path: &str) -> &'static str {
    if is_rooted(path) { "" } else { "." }
}

/// Join a child name onto a folder.
///
/// Children of the implicit root `.` carry no `./` prefix.
pub fn join_path(folder: &str, name: &str) -> String {
    if folder == "." || folder.is_empty() {
        return name.to_string();
    }
    if folder.ends_with('/') {
        return format!("{folder}{name}");
    }
    format!("{folder}/{name}")
}

/// Last segment of `path`.
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Path of `path` relative to `folder`, without a leading separator.
pub fn strip_folder<'a>(path: &'a str, folder: &str) -> &'a str {
    if folder == "." {
        return path;
    }
    path.strip_prefix(folder)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(path)
}

/// Drop trailing separators, keeping a lone `/`.
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ArgumentSpecs

/// A copy/list argument split into base folder and file-name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPathPattern {
    path: String,
    folder: String,
    pattern: String,
}

impl SpecPathPattern {
    /// Parse a raw argument.
    ///
    /// A trailing separator selects every file below the folder (`dir/` is `dir/*`).
    pub fn parse(raw: &str) -> Self {
        let mut path = normalize_separators(raw);
        if path.ends_with('/') {
            path.push('*');
        }

        let (folder, pattern) = match path.rfind('/') {
            None => (".".to_string(), path.clone()),
            Some(0) => ("/".to_string(), path[1..].to_string()),
            Some(pos) => (path[..pos].to_string(), path[pos + 1..].to_string()),
        };

        Self {
            path,
            folder,
            pattern,
        }
    }

    /// Full normalized argument.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Everything before the last separator, `.` if there is none.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// File-name fragment after the last separator.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the file-name fragment contains `*` or `?`.
    pub fn has_wildcard(&self) -> bool {
        has_wildcard(&self.pattern)
    }
}

/// A copy destination; a trailing separator marks it as a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDestination {
    path: String,
    if_is_dir: bool,
}

impl SpecDestination {
    /// Parse a raw destination argument.
    pub fn parse(raw: &str) -> Self {
        let path = normalize_separators(raw);
        let if_is_dir = path.ends_with('/');
        Self { path, if_is_dir }
    }

    /// Normalized destination.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the destination ended with a separator.
    pub fn is_dir(&self) -> bool {
        self.if_is_dir
    }

    /// Target file path for a source file whose path below the source folder is `path_rel`.
    pub fn derive_file_path(&self, path_rel: &str) -> String {
        if self.if_is_dir {
            format!("{}{path_rel}", self.path)
        } else {
            self.path.clone()
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
