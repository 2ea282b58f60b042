//! End-to-end runs of the engine against temporary directory trees.

use filestats_engine::config::{Config, ConfigBuilder, DEFAULT_MAX_LINE_BYTES};
use filestats_engine::error::EngineError;
use filestats_engine::options::Selector;
use filestats_engine::run;
use filestats_engine::stats::OVERALL_KEY;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn config(roots: &[&Path], selectors: &[&str], include_all: bool) -> Config {
    ConfigBuilder::default()
        .roots(roots.iter().map(|r| r.to_path_buf()).collect::<Vec<_>>())
        .selectors(
            selectors
                .iter()
                .map(|s| s.parse::<Selector>().unwrap())
                .collect::<Vec<_>>(),
        )
        .include_all(include_all)
        .build()
        .unwrap()
}

#[test]
fn single_go_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.go", "package main\n\nfunc main() {}\n");

    let result = run(&config(&[dir.path()], &["go"], true)).unwrap();
    assert!(result.errors.is_empty());

    let report = result.tally.finalize(true);
    let go = report.get(".go").unwrap();
    assert_eq!(go.files, 1);
    assert_eq!(go.lines, 3);
    assert_eq!(go.functions, 1);
    assert_eq!(go.empty_lines, 1);
    assert_eq!(go.classes + go.comments + go.imports + go.exports + go.structs, 0);

    let overall = report.get(OVERALL_KEY).unwrap();
    assert_eq!(overall.files, go.files);
    assert_eq!(overall.lines, go.lines);
    assert_eq!(overall.file_size, go.file_size);
}

#[test]
fn overall_lines_equal_sum_of_buckets() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.go", "import \"fmt\"\nfunc a() {}\n");
    write(dir.path(), "lib/b.ts", "export class B {}\n// c\n\nlet x = 1;\n");
    write(dir.path(), "Makefile", "all:\n\techo hi\n");
    write(dir.path(), "notes.txt", "plain\n");

    let result = run(&config(&[dir.path()], &["*"], true)).unwrap();
    let report = result.tally.finalize(true);

    let sum: usize = report
        .keys()
        .filter(|k| *k != OVERALL_KEY)
        .map(|k| report.get(k).unwrap().lines)
        .sum();
    assert_eq!(report.get(OVERALL_KEY).unwrap().lines, sum);
    assert_eq!(sum, 9);
    assert_eq!(report.get("*").unwrap().files, 1);
    assert_eq!(report.get(".ts").unwrap().classes, 1);
}

#[test]
fn rerun_is_identical() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.py", "def f():\n    return 1\n");
    write(dir.path(), "b/c.py", "import os\n");

    let cfg = config(&[dir.path()], &["py"], true);
    let first = run(&cfg).unwrap().tally.finalize(true);
    let second = run(&cfg).unwrap().tally.finalize(true);
    assert_eq!(first, second);
}

#[test]
fn media_files_use_media_bucket() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "logo.png", "not really a png\n");

    let report = run(&config(&[dir.path()], &["*"], true))
        .unwrap()
        .tally
        .finalize(true);
    assert!(report.get(".png").is_none());
    assert_eq!(report.get("media").unwrap().files, 1);
}

#[test]
fn vendor_directories_are_never_descended() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", "package main\n");
    write(dir.path(), "vendor/dep.go", "package dep\n");
    write(dir.path(), "third_party_vendor_copy/dep.go", "package dep\n");

    let report = run(&config(&[dir.path()], &["go"], false))
        .unwrap()
        .tally
        .finalize(false);
    assert_eq!(report.get(OVERALL_KEY).unwrap().files, 1);
}

#[test]
fn user_ignores_are_substrings() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a.rs", "fn a() {}\n");
    write(dir.path(), "build-output/b.rs", "fn b() {}\n");

    let mut cfg = config(&[dir.path()], &["rs"], false);
    cfg.ignore = vec!["build".to_string()];
    let report = run(&cfg).unwrap().tally.finalize(false);
    assert_eq!(report.get(OVERALL_KEY).unwrap().files, 1);
}

#[test]
fn non_utf8_files_are_skipped_silently() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "ok.txt", "fine\n");
    write(dir.path(), "blob.txt", [0xffu8, 0xfe, 0x00, 0x01]);

    let result = run(&config(&[dir.path()], &["txt"], true)).unwrap();
    assert!(result.errors.is_empty());
    let report = result.tally.finalize(true);
    assert_eq!(report.get(".txt").unwrap().files, 1);
}

#[test]
fn without_include_all_only_overall_remains() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    write(a.path(), "x.go", "func x() {}\n");
    write(b.path(), "y.rs", "struct Y;\n");

    let report = run(&config(&[a.path(), b.path()], &["go", "rs"], false))
        .unwrap()
        .tally
        .finalize(false);
    assert_eq!(report.keys().collect::<Vec<_>>(), vec![OVERALL_KEY]);
    assert_eq!(report.get(OVERALL_KEY).unwrap().files, 2);
}

#[test]
fn overlapping_pairs_count_twice() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "x.go", "func x() {}\n");

    let report = run(&config(&[dir.path()], &["go", "*"], true))
        .unwrap()
        .tally
        .finalize(true);
    assert_eq!(report.get(".go").unwrap().files, 2);
}

#[test]
fn oversized_line_is_reported_and_discarded() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "small.js", "function f() {}\n");
    let long = format!("{}\nclass X {{}}\n", "a".repeat(DEFAULT_MAX_LINE_BYTES + 1));
    let big = write(dir.path(), "big.js", long);

    let result = run(&config(&[dir.path()], &["js"], true)).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].0, big);
    assert!(matches!(result.errors[0].1, EngineError::LineTooLong { .. }));

    let report = result.tally.finalize(true);
    let js = report.get(".js").unwrap();
    assert_eq!(js.files, 1);
    assert_eq!(js.classes, 0);
}

#[test]
fn missing_root_does_not_abort_other_roots() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "x.go", "func x() {}\n");
    let missing = dir.path().join("nope");

    let result = run(&config(&[missing.as_path(), dir.path()], &["go"], false)).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].0, missing);
    assert_eq!(
        result.tally.finalize(false).get(OVERALL_KEY).unwrap().files,
        1
    );
}

#[test]
fn strict_mode_stops_on_first_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let mut cfg = config(&[missing.as_path(), dir.path()], &["go"], false);
    cfg.strict = true;
    assert!(matches!(run(&cfg), Err(EngineError::Walk(_))));
}

#[test]
fn nothing_matched_yields_empty_report() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.rs", "fn main() {}\n");

    let report = run(&config(&[dir.path()], &["go"], true))
        .unwrap()
        .tally
        .finalize(true);
    assert!(report.is_empty());
}
