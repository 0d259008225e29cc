//! Behavioral tests for the `axiomkit-build` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_text(&tmp.path().join("a"), "file-a");
    write_text(&tmp.path().join("assets/b.png"), "file-b");
    write_text(&tmp.path().join("assets/c.png"), "file-c");
    write_text(&tmp.path().join("assets/d.png.gif"), "file-d");
    write_text(&tmp.path().join("assets/e"), "file-e");
    tmp
}

fn write_text(path: &Path, txt: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, txt).expect("write text");
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("axiomkit-build").expect("binary");
    cmd.current_dir(dir).env_remove("AXIOMKIT_BUILD_SILENT");
    cmd
}

#[test]
fn copy_png_into_folder() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["copy", "assets/*.png", "dist/"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied file assets/b.png -> dist/b.png"))
        .stderr(predicate::str::contains("copied=2"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("dist/b.png")).expect("read"),
        "file-b"
    );
    assert!(tmp.path().join("dist/c.png").exists());
    assert!(!tmp.path().join("dist/e").exists());
    assert!(!tmp.path().join("dist/d.png.gif").exists());
}

#[test]
fn copy_wildcard_onto_file_is_usage_error() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["copy", "assets/", "dist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("multiple source files"));

    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn list_prints_one_path_per_line() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["--silent", "list", r"assets\?*"])
        .assert()
        .success()
        .stdout("assets/b.png\nassets/c.png\nassets/d.png.gif\nassets/e\n");
}

#[test]
fn silent_flag_suppresses_log_lines() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["copy", "--silent", "a", "dist/1/"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(tmp.path().join("dist/1/a")).expect("read"),
        "file-a"
    );
}

#[test]
fn save_from_stdin_then_read() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["-s", "save", r"out\notes.txt"])
        .write_stdin("line 1\nline 2")
        .assert()
        .success();

    cmd(tmp.path())
        .args(["-s", "read", "out/notes.txt"])
        .assert()
        .success()
        .stdout("line 1\nline 2");
}

#[test]
fn concat_joins_without_separator() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["-s", "concat", "a", "assets/e"])
        .assert()
        .success()
        .stdout("file-afile-e");
}

#[test]
fn clean_and_delete_folders() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["clean", "assets"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cleaned folder assets"));
    assert!(tmp.path().join("assets").is_dir());
    assert_eq!(
        fs::read_dir(tmp.path().join("assets")).expect("read dir").count(),
        0
    );

    cmd(tmp.path()).args(["-s", "delete", "assets"]).assert().success();
    assert!(!tmp.path().join("assets").exists());

    cmd(tmp.path()).args(["-s", "delete", "assets"]).assert().success();
    assert!(tmp.path().join("a").exists());
}

#[test]
fn mkdir_creates_parents_only_for_file_paths() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["-s", "mkdir", "c/d/e"])
        .assert()
        .success();
    assert!(tmp.path().join("c/d").is_dir());
    assert!(!tmp.path().join("c/d/e").exists());

    cmd(tmp.path())
        .args(["-s", "mkdir", "c/d/e/"])
        .assert()
        .success();
    assert!(tmp.path().join("c/d/e").is_dir());
}

#[test]
fn read_missing_file_fails() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["read", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read missing"));
}

#[test]
fn mkdir_through_file_is_conflict() {
    let tmp = fixture();
    cmd(tmp.path())
        .args(["-s", "mkdir", "a/sub/"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}
