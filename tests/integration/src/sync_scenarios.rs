//! End-to-end synchronization scenarios
//!
//! Every scenario runs the real `git` executable against local upstream
//! repositories addressed with `file://` URLs.

use std::fs;
use std::path::Path;

use extdeps_core::{Error, Registry, SourceDescriptor, SyncOptions, Synchronizer};
use extdeps_test_utils::git::{Upstream, has_tag, head_commit, unreachable_url};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// A scratch workspace holding the external root.
struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    fn root(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("external")
    }

    fn synchronizer(&self) -> Synchronizer {
        Synchronizer::with_git(self.root())
    }

    fn checkout(&self, dir: &str) -> std::path::PathBuf {
        self.root().join(dir)
    }
}

fn descriptor(upstream: &Upstream, dir: &'static str) -> SourceDescriptor {
    SourceDescriptor::new(upstream.url(), dir)
}

/// Snapshot of every checkout's HEAD, in directory order.
fn heads(root: &Path, dirs: &[&str]) -> Vec<(String, String)> {
    dirs.iter()
        .map(|d| (d.to_string(), head_commit(&root.join(d))))
        .collect()
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_second_sync_is_a_no_op_on_unchanged_upstreams() {
    let ws = Workspace::new();
    let gui = Upstream::new();
    gui.add_branch("docking");
    let math = Upstream::new();

    let registry = Registry::new(vec![
        descriptor(&gui, "imgui").with_branch("docking"),
        descriptor(&math, "glm"),
    ])
    .unwrap();
    let sync = ws.synchronizer();

    let first = sync.sync_all(&registry, SyncOptions::default()).unwrap();
    let after_first = heads(&ws.root(), &["imgui", "glm"]);

    let second = sync.sync_all(&registry, SyncOptions::default()).unwrap();
    let after_second = heads(&ws.root(), &["imgui", "glm"]);

    assert_eq!(first.cloned_count(), 2);
    assert_eq!(second.cloned_count(), 0);
    assert_eq!(after_first, after_second);
}

// =============================================================================
// Branch resolution
// =============================================================================

#[test]
fn test_branch_and_default_head_are_checked_out() {
    let ws = Workspace::new();
    let gui = Upstream::new();
    let docking_tip = gui.add_branch("docking");
    let math = Upstream::new();

    let registry = Registry::new(vec![
        descriptor(&gui, "imgui").with_branch("docking"),
        descriptor(&math, "glm"),
    ])
    .unwrap();

    ws.synchronizer()
        .sync_all(&registry, SyncOptions::default())
        .unwrap();

    assert_eq!(head_commit(&ws.checkout("imgui")), docking_tip);
    assert_eq!(head_commit(&ws.checkout("glm")), math.branch_tip("main"));
    assert!(ws.checkout("imgui").join("docking.txt").exists());
}

#[test]
fn test_resync_follows_upstream_movement_and_tags() {
    let ws = Workspace::new();
    let upstream = Upstream::new();
    let registry = Registry::new(vec![descriptor(&upstream, "stb")]).unwrap();
    let sync = ws.synchronizer();

    sync.sync_all(&registry, SyncOptions::default()).unwrap();
    let moved = upstream.commit_file("stb_image.h", "// v2\n", "Update header");
    upstream.tag("v2.0");
    sync.sync_all(&registry, SyncOptions::default()).unwrap();

    assert_eq!(head_commit(&ws.checkout("stb")), moved);
    assert!(has_tag(&ws.checkout("stb"), "v2.0"));
}

// =============================================================================
// Force
// =============================================================================

#[test]
fn test_local_changes_block_checkout_unless_forced() {
    let ws = Workspace::new();
    let upstream = Upstream::new();
    let registry = Registry::new(vec![descriptor(&upstream, "JSON")]).unwrap();
    let sync = ws.synchronizer();

    sync.sync_all(&registry, SyncOptions::default()).unwrap();
    let readme = ws.checkout("JSON").join("README.md");
    fs::write(&readme, "local edit\n").unwrap();
    let moved = upstream.commit_file("README.md", "# Upstream v2\n", "Rewrite readme");

    let err = sync
        .sync_all(&registry, SyncOptions::default())
        .unwrap_err();
    match err {
        Error::Git(extdeps_git::Error::Sync { command, exit_code }) => {
            assert!(command.contains("git checkout origin/HEAD"), "got: {command}");
            assert!(matches!(exit_code, Some(code) if code != 0));
        }
        other => panic!("Expected checkout failure, got: {other:?}"),
    }
    assert_eq!(fs::read_to_string(&readme).unwrap(), "local edit\n");

    sync.sync_all(&registry, SyncOptions::forced()).unwrap();

    assert_eq!(head_commit(&ws.checkout("JSON")), moved);
    assert_eq!(fs::read_to_string(&readme).unwrap(), "# Upstream v2\n");
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn test_unreachable_source_stops_the_run() {
    let ws = Workspace::new();
    let first = Upstream::new();
    let last = Upstream::new();
    let bad_url = unreachable_url(ws.temp_dir.path());

    let registry = Registry::new(vec![
        descriptor(&first, "a"),
        SourceDescriptor::new(bad_url, "b"),
        descriptor(&last, "c"),
    ])
    .unwrap();
    let cwd_before = std::env::current_dir().unwrap();

    let err = ws
        .synchronizer()
        .sync_all(&registry, SyncOptions::default())
        .unwrap_err();

    match &err {
        Error::Git(inner @ extdeps_git::Error::Sync { .. }) => {
            assert!(inner.command().contains("git clone"), "got: {inner}");
            assert!(inner.exit_code().is_some());
        }
        other => panic!("Expected clone failure, got: {other:?}"),
    }
    assert_eq!(head_commit(&ws.checkout("a")), first.head());
    assert!(!ws.checkout("b").join(".git").exists());
    assert!(!ws.checkout("c").exists());
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
}

// =============================================================================
// Clear
// =============================================================================

#[test]
fn test_clear_refuses_synced_root_then_removes_emptied_root() {
    let ws = Workspace::new();
    let upstream = Upstream::new();
    let registry = Registry::new(vec![descriptor(&upstream, "tinyobj")]).unwrap();
    ws.synchronizer()
        .sync_all(&registry, SyncOptions::default())
        .unwrap();

    assert!(extdeps_core::clear(&ws.root()).is_err());
    assert!(ws.checkout("tinyobj").join(".git").exists());

    fs::remove_dir_all(ws.checkout("tinyobj")).unwrap();
    extdeps_core::clear(&ws.root()).unwrap();
    assert!(!ws.root().exists());
}
