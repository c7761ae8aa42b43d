//! End-to-end reconciliation tests against real directories.

use std::fs;

use assert_fs::prelude::*;
use predicates::prelude::*;
use stencil_core::{MemoryUi, OutputFile, RunConfig};
use stencil_output::{pipeline, OutputDirectory, OutputError, WriteResult};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// 1. Conflicts
// ---------------------------------------------------------------------------

#[test]
fn duplicate_destinations_leave_directory_untouched() {
    init_logger();
    let out = assert_fs::TempDir::new().expect("out");
    out.child("old.yml").write_str("old").expect("seed");

    let files = vec![
        OutputFile::new("same.yml", "1"),
        OutputFile::new("same.yml", "2"),
    ];
    let ui = MemoryUi::new();
    let err = OutputDirectory::new(out.path(), files, &ui).write().unwrap_err();

    assert!(matches!(err, OutputError::DuplicatePath { .. }), "got: {err}");
    assert!(err.to_string().contains("same.yml"));
    out.child("old.yml").assert("old");
    out.child("same.yml").assert(predicate::path::missing());
    assert!(ui.lines().is_empty(), "nothing may be announced before the conflict check");
}

#[test]
fn conflict_check_runs_before_root_is_created() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("not-yet");
    let files = vec![OutputFile::new("a.yml", ""), OutputFile::new("a.yml", "")];
    let ui = MemoryUi::new();
    OutputDirectory::new(root.path(), files, &ui)
        .write()
        .unwrap_err();
    root.assert(predicate::path::missing());
}

#[test]
fn dot_prefixed_duplicate_is_a_conflict() {
    let out = assert_fs::TempDir::new().expect("out");
    let files = vec![
        OutputFile::new("a.yml", "first"),
        OutputFile::new("./a.yml", "second"),
    ];
    let ui = MemoryUi::new();
    let err = OutputDirectory::new(out.path(), files, &ui).write().unwrap_err();

    assert!(matches!(err, OutputError::DuplicatePath { .. }), "got: {err}");
    out.child("a.yml").assert(predicate::path::missing());
}

#[test]
fn absolute_destination_is_rejected_before_any_write() {
    let outside = assert_fs::TempDir::new().expect("outside");
    outside.child("victim.yml").write_str("original").expect("seed");
    let out = assert_fs::TempDir::new().expect("out");
    out.child("old.yml").write_str("old").expect("seed");

    let files = vec![OutputFile::new(outside.child("victim.yml").path(), "clobbered")];
    let ui = MemoryUi::new();
    let err = OutputDirectory::new(out.path(), files, &ui).write().unwrap_err();

    assert!(matches!(err, OutputError::OutsideRoot { .. }), "got: {err}");
    outside.child("victim.yml").assert("original");
    out.child("old.yml").assert("old");
    assert!(ui.lines().is_empty());
}

#[test]
fn parent_dir_destination_is_rejected() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let out = tmp.child("out");
    let files = vec![OutputFile::new("../escaped.yml", "x")];
    let ui = MemoryUi::new();
    let err = OutputDirectory::new(out.path(), files, &ui).write().unwrap_err();

    assert!(matches!(err, OutputError::OutsideRoot { .. }), "got: {err}");
    tmp.child("escaped.yml").assert(predicate::path::missing());
    out.assert(predicate::path::missing());
}

// ---------------------------------------------------------------------------
// 2. Stale removal
// ---------------------------------------------------------------------------

#[test]
fn stale_outputs_replaced_and_unrelated_files_kept() {
    init_logger();
    let out = assert_fs::TempDir::new().expect("out");
    out.child("a.yml").write_str("a: old\n").expect("seed");
    out.child(".keepme/config").write_str("keep").expect("seed");

    let ui = MemoryUi::new();
    OutputDirectory::new(out.path(), vec![OutputFile::new("b.yml", "b: new\n")], &ui)
        .write()
        .expect("write");

    out.child("b.yml").assert("b: new\n");
    out.child(".keepme/config").assert("keep");
    out.child("a.yml").assert(predicate::path::missing());
}

#[test]
fn nested_stale_files_removed_but_directories_kept() {
    let out = assert_fs::TempDir::new().expect("out");
    out.child("deep/er/x.yaml").write_str("x").expect("seed");
    out.child("deep/notes.txt").write_str("n").expect("seed");
    out.child("deep/script.star").write_str("s").expect("seed");
    out.child(".git/HEAD").write_str("ref: refs/heads/main\n").expect("seed");

    let ui = MemoryUi::new();
    let results = OutputDirectory::new(out.path(), vec![], &ui)
        .write()
        .expect("write");

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| matches!(r, WriteResult::Deleted { .. })));
    out.child("deep/er").assert(predicate::path::is_dir());
    out.child("deep/er/x.yaml").assert(predicate::path::missing());
    out.child("deep/notes.txt").assert(predicate::path::missing());
    out.child("deep/script.star").assert(predicate::path::exists());
    out.child(".git/HEAD").assert(predicate::path::exists());
}

#[test]
fn progress_is_announced_in_operation_order() {
    let out = assert_fs::TempDir::new().expect("out");
    out.child("z.yml").write_str("").expect("seed");
    out.child("a.txt").write_str("").expect("seed");

    let files = vec![OutputFile::new("m.yml", "m"), OutputFile::new("sub/b.yml", "b")];
    let ui = MemoryUi::new();
    OutputDirectory::new(out.path(), files, &ui)
        .write()
        .expect("write");

    let expected: Vec<String> = vec![
        format!("deleting: {}", out.path().join("a.txt").display()),
        format!("deleting: {}", out.path().join("z.yml").display()),
        format!("creating: {}", out.path().join("m.yml").display()),
        format!("creating: {}", out.path().join("sub/b.yml").display()),
    ];
    assert_eq!(ui.lines(), expected);
    out.child("sub/b.yml").assert("b");
}

// ---------------------------------------------------------------------------
// 3. Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn path_mark_controls_output_location() {
    init_logger();
    let input = assert_fs::TempDir::new().expect("input");
    input.child("foo.yml").write_str("kind: {{ values.kind }}\n").expect("seed");
    let out = assert_fs::TempDir::new().expect("out");

    let mut cfg = RunConfig {
        files: vec![input.child("foo.yml").path().to_path_buf()],
        file_marks: vec!["foo.yml:path=bar.yml".to_string()],
        output: Some(out.path().to_path_buf()),
        ..RunConfig::default()
    };
    cfg.set_data_value("kind=Service").expect("value");

    let ui = MemoryUi::new();
    pipeline::run(&cfg, &ui).expect("run");

    out.child("bar.yml").assert("kind: Service\n");
    out.child("foo.yml").assert(predicate::path::missing());
}

#[test]
fn absolute_path_mark_cannot_write_outside_output() {
    let input = assert_fs::TempDir::new().expect("input");
    input.child("foo.yml").write_str("a: 1\n").expect("seed");
    let outside = assert_fs::TempDir::new().expect("outside");
    let target = outside.child("x.yml");
    let out = assert_fs::TempDir::new().expect("out");

    let cfg = RunConfig {
        files: vec![input.child("foo.yml").path().to_path_buf()],
        file_marks: vec![format!("foo.yml:path={}", target.path().display())],
        output: Some(out.path().to_path_buf()),
        ..RunConfig::default()
    };

    let ui = MemoryUi::new();
    let err = pipeline::run(&cfg, &ui).unwrap_err();

    assert!(matches!(err, OutputError::OutsideRoot { .. }), "got: {err}");
    target.assert(predicate::path::missing());
}

#[test]
fn excluded_and_data_files_are_not_written() {
    let input = assert_fs::TempDir::new().expect("input");
    input.child("keep.yml").write_str("k: 1\n").expect("seed");
    input.child("drop.yml").write_str("d: 1\n").expect("seed");
    input.child("values.json").write_str("{}").expect("seed");
    let out = assert_fs::TempDir::new().expect("out");

    let cfg = RunConfig {
        files: vec![input.path().to_path_buf()],
        recursive: true,
        file_marks: vec!["drop.yml:exclude=true".to_string()],
        output: Some(out.path().to_path_buf()),
        ..RunConfig::default()
    };
    let ui = MemoryUi::new();
    pipeline::run(&cfg, &ui).expect("run");

    let mut names: Vec<_> = fs::read_dir(out.path())
        .expect("read out")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["keep.yml"]);
}

#[test]
fn second_run_replaces_first_runs_outputs() {
    let input = assert_fs::TempDir::new().expect("input");
    input.child("a.yml").write_str("a: 1\n").expect("seed");
    let out = assert_fs::TempDir::new().expect("out");
    out.child("README.md").write_str("hand written").expect("seed");

    let mut cfg = RunConfig {
        files: vec![input.path().to_path_buf()],
        recursive: true,
        output: Some(out.path().to_path_buf()),
        ..RunConfig::default()
    };
    let ui = MemoryUi::new();
    pipeline::run(&cfg, &ui).expect("first run");
    out.child("a.yml").assert("a: 1\n");

    cfg.file_marks = vec!["a.yml:path=renamed/a.yml".to_string()];
    pipeline::run(&cfg, &ui).expect("second run");

    out.child("a.yml").assert(predicate::path::missing());
    out.child("renamed/a.yml").assert("a: 1\n");
    out.child("README.md").assert("hand written");
}

#[test]
fn missing_input_fails_before_output_is_touched() {
    let out = assert_fs::TempDir::new().expect("out");
    out.child("old.yml").write_str("old").expect("seed");
    let cfg = RunConfig {
        files: vec![out.path().join("does-not-exist.yml")],
        output: Some(out.path().to_path_buf()),
        ..RunConfig::default()
    };
    let ui = MemoryUi::new();
    let err = pipeline::run(&cfg, &ui).unwrap_err();
    assert!(matches!(err, OutputError::Discovery(_)), "got: {err}");
    out.child("old.yml").assert("old");
}
