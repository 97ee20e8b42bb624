//! Clone-or-update of registered sources
//!
//! Each source goes through three linear phases: ensure its directory exists,
//! clone if there is no git metadata yet, then fetch every branch and tag and
//! check out the configured remote reference. Every git call receives the
//! source directory explicitly; the process working directory is never
//! changed.

use std::fs;
use std::path::{Path, PathBuf};

use extdeps_git::{CommandRunner, GitCli, GitInvocation, remote_ref};

use crate::{Error, Registry, Result, SourceDescriptor};

/// Options for a synchronization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Pass `--force` to fetch and checkout so local divergence is overwritten
    /// instead of rejected.
    pub force: bool,
}

impl SyncOptions {
    pub fn forced() -> Self {
        Self { force: true }
    }
}

/// What happened to one source during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    /// Directory name under the root
    pub directory: String,
    /// Whether an initial clone was performed
    pub cloned: bool,
    /// The reference that was checked out (`origin/<branch>` or `origin/HEAD`)
    pub checked_out: String,
}

/// Report from [`Synchronizer::sync_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// One entry per source, in registry order
    pub sources: Vec<SourceOutcome>,
}

impl SyncReport {
    /// Number of sources that were cloned in this run.
    pub fn cloned_count(&self) -> usize {
        self.sources.iter().filter(|s| s.cloned).count()
    }
}

/// Brings source directories under `root` in line with their remotes.
pub struct Synchronizer<R = GitCli> {
    root: PathBuf,
    runner: R,
}

impl Synchronizer<GitCli> {
    /// Synchronizer that runs the `git` found on PATH.
    pub fn with_git(root: impl Into<PathBuf>) -> Self {
        Self::new(root, GitCli::new())
    }
}

impl<R: CommandRunner> Synchronizer<R> {
    pub fn new(root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            root: root.into(),
            runner,
        }
    }

    /// The external root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory a source is checked out into.
    pub fn target_dir(&self, source: &SourceDescriptor) -> PathBuf {
        self.root.join(source.local_directory_name())
    }

    /// Create the root directory if it is missing. Only the root itself is
    /// created; its parent must already exist.
    pub fn ensure_root(&self) -> Result<()> {
        ensure_dir(&self.root)
    }

    /// Synchronize a single source.
    ///
    /// The descriptor is validated first, so a directory name that would
    /// escape the root is rejected before anything is created or run.
    ///
    /// Fails with [`extdeps_git::Error::Sync`] (wrapped in [`Error::Git`]) on
    /// the first git command that exits non-zero. Nothing is retried.
    pub fn sync(&self, source: &SourceDescriptor, options: SyncOptions) -> Result<SourceOutcome> {
        source.validate()?;

        let target = self.target_dir(source);
        let directory = source.local_directory_name();

        ensure_dir(&target)?;

        let cloned = if has_git_metadata(&target) {
            tracing::debug!(source = %directory, "Existing checkout found, skipping clone");
            false
        } else {
            tracing::info!(source = %directory, url = %source.repository_url(), "Cloning");
            self.runner
                .run(&GitInvocation::clone_into(source.repository_url(), &target))?;
            true
        };

        tracing::info!(source = %directory, force = options.force, "Fetching branches and tags");
        self.runner.run(&GitInvocation::fetch_all(
            source.repository_url(),
            &target,
            options.force,
        ))?;

        let reference = remote_ref(source.branch());
        tracing::info!(source = %directory, reference = %reference, "Checking out");
        self.runner
            .run(&GitInvocation::checkout(&reference, &target, options.force))?;

        Ok(SourceOutcome {
            directory: directory.to_string(),
            cloned,
            checked_out: reference,
        })
    }

    /// Synchronize every source in registry order.
    ///
    /// Stops at the first failure. Sources already synchronized are left as
    /// they are; later sources are not touched.
    pub fn sync_all(&self, registry: &Registry, options: SyncOptions) -> Result<SyncReport> {
        self.ensure_root()?;

        let mut report = SyncReport::default();
        for source in registry {
            let outcome = self.sync(source, options).inspect_err(|e| {
                tracing::error!(
                    source = %source.local_directory_name(),
                    error = %e,
                    "Synchronization failed"
                );
            })?;
            report.sources.push(outcome);
        }

        Ok(report)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Creating directory");
        fs::create_dir(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// git metadata is a `.git` directory, or a `.git` file for worktrees and
/// submodules.
fn has_git_metadata(dir: &Path) -> bool {
    dir.join(".git").exists()
}
