//! Pattern-driven file listing.

use crate::path::SpecPathPattern;
use crate::pattern::SpecPattern;
use crate::spec::Result;
use crate::storage::Storage;
use crate::walk::Traverser;

/// List the files `path` selects, in traversal order.
///
/// Without a wildcard the normalized path is returned as is; its existence is
/// not checked.
pub fn list_matching<S: Storage + ?Sized>(storage: &S, path: &str) -> Result<Vec<String>> {
    let spec_src = SpecPathPattern::parse(path);
    if !spec_src.has_wildcard() {
        return Ok(vec![spec_src.path().to_string()]);
    }

    let spec_pattern = SpecPattern::compile(spec_src.pattern())?;
    let mut l_paths = Vec::new();
    for res_entry in Traverser::new(storage, spec_src.folder()) {
        let entry = res_entry?;
        if entry.is_file() && spec_pattern.is_match(&entry.name) {
            l_paths.push(entry.path);
        }
    }
    Ok(l_paths)
}
