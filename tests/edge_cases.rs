//! Edge case and error handling tests for projtree


use harness::{TestTree, render_via_cli, tree_body};
use std::os::unix::fs::symlink;

// ============================================================================
// Exclusion Semantics
// ============================================================================

#[test]
fn test_exclusion_is_case_sensitive() {
    let tree = TestTree::new();
    tree.add_file("Node_Modules/pkg.js", "");

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree_body(&report), "└── Node_Modules\n    └── pkg.js\n");
}

#[test]
fn test_file_with_excluded_name_is_listed() {
    let tree = TestTree::new();
    tree.add_file("dist", "a file, not a directory");

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree_body(&report), "└── dist\n");
}

#[test]
fn test_nested_excluded_directory() {
    let tree = TestTree::new();
    tree.add_file("app/.git/HEAD", "");
    tree.add_file("app/src/main.rs", "");
    tree.add_file("app/z/__pycache__/m.pyc", "");

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    let expected = "\
└── app
    ├── src
    │   └── main.rs
    └── z
";
    assert_eq!(tree_body(&report), expected);
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_symlinked_directory_is_followed() {
    let tree = TestTree::new();
    tree.add_file("real/file.rs", "");
    symlink(tree.path().join("real"), tree.path().join("linkdir")).unwrap();

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    let expected = "\
├── linkdir
│   └── file.rs
└── real
    └── file.rs
";
    assert_eq!(tree_body(&report), expected);
}

#[test]
fn test_broken_symlink_omitted_and_lastness_unaffected() {
    let tree = TestTree::new();
    tree.add_file("a.rs", "");
    symlink("nowhere.rs", tree.path().join("zz_broken")).unwrap();

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree_body(&report), "└── a.rs\n");
}

#[test]
fn test_symlink_cycle_fails_with_depth_error() {
    let tree = TestTree::new();
    tree.add_dir("subdir");
    symlink("..", tree.path().join("subdir").join("parent")).unwrap();

    let (report, stderr, success) = render_via_cli(tree.path(), &["--max-depth", "8"]);
    assert!(!success, "cycle should trip the depth cap");
    assert!(
        stderr.contains("maximum depth 8 exceeded"),
        "stderr: {}",
        stderr
    );
    // Partial output is flushed and ends on a full line.
    assert!(report.ends_with('\n'));
    assert!(report.contains("└── subdir\n"));
}

#[test]
fn test_symlink_cycle_fails_at_default_depth() {
    let tree = TestTree::new();
    tree.add_dir("loop");
    symlink("..", tree.path().join("loop").join("back")).unwrap();

    let (report, stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(!success, "cycle must not end in a clipped tree");
    assert!(
        stderr.contains("maximum depth 256 exceeded"),
        "stderr: {}",
        stderr
    );
    assert_eq!(tree_body(&report).lines().count(), 256);
}

// ============================================================================
// Depth Cap
// ============================================================================

#[test]
fn test_max_depth_boundary() {
    let tree = TestTree::new();
    tree.add_file("l1/l2/l3.txt", "");

    let (_report, _stderr, success) = render_via_cli(tree.path(), &["--max-depth", "3"]);
    assert!(success, "tree exactly at the cap should render");

    let (_report, stderr, success) = render_via_cli(tree.path(), &["--max-depth", "2"]);
    assert!(!success);
    assert!(stderr.contains("l2"), "error should name the directory: {}", stderr);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory_aborts() {
    let tree = TestTree::new();
    tree.add_file("locked/hidden.rs", "");
    tree.add_file("open/visible.rs", "");
    if !tree.make_unreadable("locked") {
        tree.make_readable("locked");
        return;
    }

    let (report, stderr, success) = render_via_cli(tree.path(), &[]);
    tree.make_readable("locked");

    assert!(!success);
    assert!(stderr.contains("permission denied"), "stderr: {}", stderr);
    assert!(stderr.contains("locked"));
    assert!(!report.contains("visible.rs"));
}

#[test]
fn test_unreadable_directory_skipped() {
    let tree = TestTree::new();
    tree.add_file("locked/hidden.rs", "");
    tree.add_file("open/visible.rs", "");
    if !tree.make_unreadable("locked") {
        tree.make_readable("locked");
        return;
    }

    let (report, stderr, success) = render_via_cli(tree.path(), &["--skip-unreadable"]);
    tree.make_readable("locked");

    assert!(success, "stderr: {}", stderr);
    assert!(stderr.contains("skipping unreadable directory"));
    let expected = "\
├── locked
└── open
    └── visible.rs
";
    assert_eq!(tree_body(&report), expected);
}

#[test]
fn test_unsearchable_directory_aborts() {
    let tree = TestTree::new();
    tree.add_file("box/item.rs", "");
    tree.add_file("open/visible.rs", "");
    if !tree.make_unsearchable("box") {
        tree.make_readable("box");
        return;
    }

    let (report, stderr, success) = render_via_cli(tree.path(), &[]);
    tree.make_readable("box");

    assert!(!success, "children that cannot be stat'ed must not vanish");
    assert!(stderr.contains("permission denied"), "stderr: {}", stderr);
    assert!(stderr.contains("item.rs"));
    assert!(!report.contains("visible.rs"));
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_unicode_and_space_names() {
    let tree = TestTree::new();
    tree.add_file("my docs/ghi chú.txt", "");
    tree.add_file("ärger.md", "");

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    let expected = "\
├── my docs
│   └── ghi chú.txt
└── ärger.md
";
    assert_eq!(tree_body(&report), expected);
}

#[test]
fn test_uppercase_sorts_before_lowercase() {
    let tree = TestTree::new();
    for name in ["b.txt", "A.txt", "a.txt", "_x.txt"] {
        tree.add_file(name, "");
    }

    let (report, _stderr, success) = render_via_cli(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_body(&report),
        "├── A.txt\n├── _x.txt\n├── a.txt\n└── b.txt\n"
    );
}
