//! Local upstream repositories for sync tests.
//!
//! Upstreams are built with the `git` CLI and addressed with `file://` URLs,
//! so tests exercise real clone/fetch/checkout without network access.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Run `git` in `dir`, panicking with git's stderr on failure.
///
/// # Panics
/// Panics if git cannot be started or exits non-zero.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A non-bare repository acting as the remote for a source.
///
/// The default branch is `main` with one commit. Extra branches and commits
/// can be added to simulate upstream movement.
pub struct Upstream {
    temp_dir: TempDir,
}

impl Default for Upstream {
    fn default() -> Self {
        Self::new()
    }
}

impl Upstream {
    /// Create an upstream with a `main` branch and an initial commit.
    ///
    /// # Panics
    /// Panics if any git operation fails.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        git(path, &["init", "--quiet"]);
        git(path, &["config", "user.email", "test@test.com"]);
        git(path, &["config", "user.name", "Test User"]);
        git(path, &["config", "commit.gpgsign", "false"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        let upstream = Self { temp_dir };
        upstream.commit_file("README.md", "# Upstream\n", "Initial commit");
        upstream
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `file://` URL for cloning this upstream.
    pub fn url(&self) -> String {
        let path = self.path().to_string_lossy().replace('\\', "/");
        if path.starts_with('/') {
            format!("file://{path}")
        } else {
            format!("file:///{path}")
        }
    }

    /// Write `name` and commit it on the current branch. Returns the new
    /// commit id.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        fs::write(self.path().join(name), content).unwrap();
        git(self.path(), &["add", name]);
        git(self.path(), &["commit", "--quiet", "-m", message]);
        self.head()
    }

    /// Create `branch` from the current HEAD, add a commit on it, and switch
    /// back to `main`. Returns the branch tip.
    pub fn add_branch(&self, branch: &str) -> String {
        git(self.path(), &["checkout", "--quiet", "-b", branch]);
        let tip = self.commit_file(
            &format!("{}.txt", branch.replace('/', "-")),
            branch,
            &format!("Work on {branch}"),
        );
        git(self.path(), &["checkout", "--quiet", "main"]);
        tip
    }

    /// Tag the current HEAD.
    pub fn tag(&self, name: &str) {
        git(self.path(), &["tag", name]);
    }

    /// Commit id of the upstream's HEAD.
    pub fn head(&self) -> String {
        head_commit(self.path())
    }

    /// Commit id of `branch` in the upstream.
    pub fn branch_tip(&self, branch: &str) -> String {
        let repo = git2::Repository::open(self.path()).unwrap();
        let reference = repo
            .find_branch(branch, git2::BranchType::Local)
            .unwrap_or_else(|e| panic!("upstream branch {branch} not found: {e}"));
        reference.get().peel_to_commit().unwrap().id().to_string()
    }
}

/// Commit id checked out at `dir`.
///
/// # Panics
/// Panics if `dir` is not a repository or HEAD does not resolve to a commit.
pub fn head_commit(dir: &Path) -> String {
    let repo = git2::Repository::open(dir)
        .unwrap_or_else(|e| panic!("not a git repository {}: {e}", dir.display()));
    let head = repo.head().unwrap();
    head.peel_to_commit().unwrap().id().to_string()
}

/// Whether a tag is present in the repository at `dir`.
pub fn has_tag(dir: &Path, tag: &str) -> bool {
    let repo = git2::Repository::open(dir).unwrap();
    repo.find_reference(&format!("refs/tags/{tag}")).is_ok()
}

/// A URL that no clone can succeed against.
pub fn unreachable_url(base: &Path) -> String {
    let missing: PathBuf = base.join("does-not-exist.git");
    format!("file://{}", missing.to_string_lossy().replace('\\', "/"))
}
