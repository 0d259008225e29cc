//! Pattern-driven file copy.

use crate::folder::create_folders;
use crate::path::{SpecDestination, SpecPathPattern, base_name, strip_folder};
use crate::pattern::SpecPattern;
use crate::report::{ReportCopy, ReportCopyBuilder};
use crate::spec::{BuildFsError, Result, SpecBuildFsOptions};
use crate::storage::Storage;
use crate::walk::Traverser;

#[derive(Debug, Clone)]
struct SpecCopyTaskFile {
    path_file_src: String,
    path_file_dst: String,
}

/// Copy one file or every file matching a wildcard fragment.
///
/// - `source` without `*`/`?` in its last segment names a single file. It is
///   copied to `destination`, or into it when `destination` ends with `/`.
/// - Otherwise every file below the source folder whose base name matches is
///   copied to `destination`, keeping its path relative to the source folder.
///   `destination` must end with `/`; this is checked before any I/O.
///
/// Matches are collected before the first copy, in traversal order. A failed
/// copy stops the run; files already copied stay in place.
pub fn copy_matching<S: Storage + ?Sized>(
    storage: &S,
    source: &str,
    destination: &str,
    spec_options: &SpecBuildFsOptions,
) -> Result<ReportCopy> {
    let spec_src = SpecPathPattern::parse(source);
    let spec_dst = SpecDestination::parse(destination);
    let mut builder_cp_report = ReportCopyBuilder::default();

    if !spec_src.has_wildcard() {
        builder_cp_report.add_scanned();
        builder_cp_report.add_matched();
        let spec_task = SpecCopyTaskFile {
            path_file_src: spec_src.path().to_string(),
            path_file_dst: spec_dst.derive_file_path(base_name(spec_src.path())),
        };
        copy_one(storage, &spec_task, spec_options, &mut builder_cp_report)?;
        return Ok(builder_cp_report.build());
    }

    if !spec_dst.is_dir() {
        return Err(BuildFsError::MultipleSourcesNeedDirectoryDestination {
            path_src: spec_src.path().to_string(),
            path_dst: spec_dst.path().to_string(),
        });
    }

    let spec_pattern = SpecPattern::compile(spec_src.pattern())?;
    let mut l_tasks_file_copy = Vec::new();
    for res_entry in Traverser::new(storage, spec_src.folder()) {
        let entry = res_entry?;
        if !entry.is_file() {
            continue;
        }
        builder_cp_report.add_scanned();
        if !spec_pattern.is_match(&entry.name) {
            continue;
        }
        builder_cp_report.add_matched();

        let path_rel = strip_folder(&entry.path, spec_src.folder());
        l_tasks_file_copy.push(SpecCopyTaskFile {
            path_file_dst: spec_dst.derive_file_path(path_rel),
            path_file_src: entry.path,
        });
    }

    for spec_task in &l_tasks_file_copy {
        copy_one(storage, spec_task, spec_options, &mut builder_cp_report)?;
    }
    Ok(builder_cp_report.build())
}

fn copy_one<S: Storage + ?Sized>(
    storage: &S,
    spec_task: &SpecCopyTaskFile,
    spec_options: &SpecBuildFsOptions,
    builder_cp_report: &mut ReportCopyBuilder,
) -> Result<()> {
    let n_dirs = create_folders(storage, &spec_task.path_file_dst)?;
    builder_cp_report.add_dirs_created(n_dirs);

    storage
        .copy_file(&spec_task.path_file_src, &spec_task.path_file_dst)
        .map_err(|e| BuildFsError::storage("copy", &spec_task.path_file_src, e))?;
    builder_cp_report.add_copied();

    if !spec_options.if_silent {
        tracing::info!(
            "Copied file {} -> {}",
            spec_task.path_file_src,
            spec_task.path_file_dst
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::copy_matching;
    use crate::memory::MemoryStorage;
    use crate::spec::{BuildFsError, SpecBuildFsOptions};
    use crate::storage::Storage;

    fn fixture() -> MemoryStorage {
        MemoryStorage::new()
            .with_file("a", "file-a")
            .with_file("assets/b.png", "file-b")
            .with_file("assets/c.png", "file-c")
            .with_file("assets/d.png.gif", "file-d")
            .with_file("assets/e", "file-e")
    }

    const L_FIXTURE_FILES: [&str; 5] = [
        "a",
        "assets/b.png",
        "assets/c.png",
        "assets/d.png.gif",
        "assets/e",
    ];

    fn silent() -> SpecBuildFsOptions {
        SpecBuildFsOptions { if_silent: true }
    }

    fn files_with(extra: &[&str]) -> Vec<String> {
        let mut l_files: Vec<String> = L_FIXTURE_FILES
            .iter()
            .chain(extra.iter())
            .map(|s| s.to_string())
            .collect();
        l_files.sort();
        l_files
    }

    fn read_text(storage: &MemoryStorage, path: &str) -> String {
        String::from_utf8(storage.read_file(path).expect("read")).expect("utf8")
    }

    #[test]
    fn single_file_to_file_path() {
        let storage = fixture();
        copy_matching(&storage, "a", "dist/1/f", &silent()).expect("copy");
        assert_eq!(storage.file_paths(), files_with(&["dist/1/f"]));
        assert_eq!(read_text(&storage, "dist/1/f"), "file-a");
    }

    #[test]
    fn single_file_to_same_name() {
        let storage = fixture();
        copy_matching(&storage, "a", "dist/1/a", &silent()).expect("copy");
        assert_eq!(storage.file_paths(), files_with(&["dist/1/a"]));
    }

    #[test]
    fn single_file_into_folder() {
        let storage = fixture();
        let report = copy_matching(&storage, "a", "dist/1/", &silent()).expect("copy");
        assert_eq!(storage.file_paths(), files_with(&["dist/1/a"]));
        assert_eq!(read_text(&storage, "dist/1/a"), "file-a");
        assert_eq!(report.cnt_copied, 1);
        assert_eq!(report.cnt_dirs_created, 2);
    }

    #[test]
    fn nested_single_file_into_folder_uses_base_name() {
        let storage = fixture();
        copy_matching(&storage, "assets/e", "dist/", &silent()).expect("copy");
        assert_eq!(read_text(&storage, "dist/e"), "file-e");
    }

    #[test]
    fn wildcard_to_file_destination_fails_before_io() {
        let storage = fixture();
        let err = copy_matching(&storage, "assets/", "dist", &silent()).expect_err("must fail");
        assert!(matches!(
            err,
            BuildFsError::MultipleSourcesNeedDirectoryDestination { .. }
        ));
        assert_eq!(storage.file_paths(), files_with(&[]));
        assert_eq!(storage.dir_paths(), vec!["assets"]);
    }

    #[test]
    fn whole_folder_into_folder() {
        let storage = fixture();
        let report = copy_matching(&storage, "assets/", "dist/", &silent()).expect("copy");
        assert_eq!(
            storage.file_paths(),
            files_with(&["dist/b.png", "dist/c.png", "dist/d.png.gif", "dist/e"])
        );
        assert_eq!(read_text(&storage, "dist/d.png.gif"), "file-d");
        assert_eq!(report.cnt_scanned, 4);
        assert_eq!(report.cnt_matched, 4);
        assert_eq!(report.cnt_copied, 4);
        assert_eq!(report.cnt_dirs_created, 1);
    }

    #[test]
    fn png_only() {
        let storage = fixture();
        copy_matching(&storage, "assets/*.png", "dist/", &silent()).expect("copy");
        assert_eq!(
            storage.file_paths(),
            files_with(&["dist/b.png", "dist/c.png"])
        );
        assert_eq!(read_text(&storage, "dist/b.png"), "file-b");
        assert_eq!(read_text(&storage, "dist/c.png"), "file-c");
    }

    #[test]
    fn backslash_arguments() {
        let storage = fixture();
        copy_matching(&storage, r"assets\*.png", r"dist\", &silent()).expect("copy");
        assert_eq!(
            storage.file_paths(),
            files_with(&["dist/b.png", "dist/c.png"])
        );
    }

    #[test]
    fn single_character_name() {
        let storage = fixture();
        copy_matching(&storage, "assets/?", "dist/", &silent()).expect("copy");
        assert_eq!(storage.file_paths(), files_with(&["dist/e"]));
    }

    #[test]
    fn no_match_copies_nothing() {
        let storage = fixture();
        let report = copy_matching(&storage, "assets/g*", "dist/", &silent()).expect("copy");
        assert_eq!(storage.file_paths(), files_with(&[]));
        assert!(!storage.exists("dist"));
        assert_eq!(report.cnt_matched, 0);
    }

    #[test]
    fn one_or_more_characters_either_order() {
        for c_pattern in ["assets/?*", "assets/*?"] {
            let storage = fixture();
            copy_matching(&storage, c_pattern, "dist/", &silent()).expect("copy");
            assert_eq!(
                storage.file_paths(),
                files_with(&["dist/b.png", "dist/c.png", "dist/d.png.gif", "dist/e"]),
                "pattern {c_pattern}"
            );
        }
    }

    #[test]
    fn nested_matches_keep_relative_tree() {
        let storage = MemoryStorage::new()
            .with_file("src/top.js", "1")
            .with_file("src/lib/util.js", "2")
            .with_file("src/lib/util.ts", "3")
            .with_file("src/lib/deep/x.js", "4");

        let report = copy_matching(&storage, "src/*.js", "out/", &silent()).expect("copy");
        assert_eq!(report.cnt_scanned, 4);
        assert_eq!(report.cnt_copied, 3);
        assert!(storage.exists("out/top.js"));
        assert!(storage.exists("out/lib/util.js"));
        assert!(storage.exists("out/lib/deep/x.js"));
        assert!(!storage.exists("out/lib/util.ts"));
    }

    #[test]
    fn directory_names_are_not_matched() {
        let storage = MemoryStorage::new()
            .with_file("src/img.png/inner.txt", "x")
            .with_file("src/a.png", "y");

        copy_matching(&storage, "src/*.png", "out/", &silent()).expect("copy");
        assert!(storage.exists("out/a.png"));
        assert!(!storage.exists("out/img.png"));
    }

    #[test]
    fn missing_single_source_is_storage_error() {
        let storage = fixture();
        let err = copy_matching(&storage, "missing", "dist/", &silent()).expect_err("missing");
        assert!(matches!(err, BuildFsError::Storage { op: "copy", .. }));
    }
}
