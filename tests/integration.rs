//! Integration tests for fs


use harness::{TestDir, run_fs};

const FOO_HASHES: &str = "MD5: acbd18db4cc2f85cedef654fccc4a4d8
SHA1: 0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33
SHA256: 2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae
SHA512: f7fbba6e0636f890e56fbbf3283e524c6fa3204ae298382d624741d0dc6638326e282c41be5e4254d8820772c5518a2c5a8c0c7f7eda19594a7eb539453e1ed7
";

#[test]
fn test_cat() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["cat", "foo"]);
    assert!(success);
    assert_eq!(stdout, "foo");
}

#[test]
fn test_cat_multiple_files() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["cat", "foo", "folder/bar"]);
    assert!(success);
    assert_eq!(stdout, "foobar");
}

#[test]
fn test_file() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["file", "foo"]);
    assert!(success);
    assert_eq!(stdout, "foo: text/plain\n");
}

#[test]
fn test_file_binary_types() {
    let dir = TestDir::sample();
    dir.add_file("img.png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR");
    dir.add_file("blob", [0u8, 1, 2, 3, 0xff, 0xfe]);
    let (stdout, _stderr, success) = run_fs(dir.path(), &["file", "img.png", "blob"]);
    assert!(success);
    assert_eq!(stdout, "img.png: image/png\nblob: application/octet-stream\n");
}

#[test]
fn test_hashsum() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["hashsum", "foo"]);
    assert!(success);
    assert_eq!(stdout, FOO_HASHES);
}

#[test]
fn test_ls_root() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["ls", "."]);
    assert!(success);
    assert_eq!(stdout, "folder/\nfoo\n");
}

#[test]
fn test_ls_without_paths_lists_root() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["ls"]);
    assert!(success);
    assert_eq!(stdout, "folder/\nfoo\n");
}

#[test]
fn test_ls_file_prints_path() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["ls", "folder/bar"]);
    assert!(success);
    assert_eq!(stdout, "folder/bar\n");
}

#[test]
fn test_stat() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["stat", "foo"]);
    assert!(success);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "stat output: {}", stdout);
    assert_eq!(lines[0], "Name: foo");
    assert_eq!(lines[1], "Size: 3");
    assert_eq!(lines[2], "IsDir: false");
    assert!(lines[3].starts_with("Mode: -"), "mode line: {}", lines[3]);
    assert!(lines[4].starts_with("Modified: "));
    assert!(lines[4].ends_with(" +0000 UTC"));
}

#[test]
fn test_stat_directory() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["stat", "folder"]);
    assert!(success);
    assert!(stdout.contains("Name: folder\n"));
    assert!(stdout.contains("IsDir: true\n"));
    assert!(stdout.contains("Mode: d"));
}

#[test]
fn test_tree() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["tree", "."]);
    assert!(success);
    assert_eq!(stdout, ".\n├── folder\n│   └── bar\n└── foo\n");
}

#[test]
fn test_tree_nested() {
    let dir = TestDir::new();
    dir.add_file("a/b/c.txt", "c");
    dir.add_file("a/d.txt", "d");
    dir.add_file("z.txt", "z");
    let (stdout, _stderr, success) = run_fs(dir.path(), &["tree"]);
    assert!(success);
    assert_eq!(
        stdout,
        ".\n├── a\n│   ├── b\n│   │   └── c.txt\n│   └── d.txt\n└── z.txt\n"
    );
}

#[test]
fn test_tree_subdirectory_label() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["tree", "./folder/"]);
    assert!(success);
    assert_eq!(stdout, "folder\n└── bar\n");
}

#[test]
fn test_root_flag() {
    let dir = TestDir::new();
    dir.add_file("project/foo", "foo");
    dir.add_file("project/folder/bar", "bar");
    let (stdout, _stderr, success) = run_fs(dir.path(), &["-C", "project", "ls"]);
    assert!(success);
    assert_eq!(stdout, "folder/\nfoo\n");
}

#[test]
fn test_color_never_has_no_escapes() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["tree"]);
    assert!(success);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_color_always_highlights_directories() {
    let dir = TestDir::sample();
    let (stdout, _stderr, success) = run_fs(dir.path(), &["--color", "always", "ls"]);
    assert!(success);
    assert!(stdout.contains('\x1b'));
    assert!(stdout.contains("folder"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TestDir::sample();
    for args in [&["ls"][..], &["tree"], &["hashsum", "foo"], &["stat", "foo"]] {
        let first = run_fs(dir.path(), args);
        let second = run_fs(dir.path(), args);
        assert_eq!(first.0, second.0, "{:?}", args);
    }
}
