//! git argument vocabulary for clone, fetch and checkout

use std::fmt;
use std::path::{Path, PathBuf};

/// Name under which remote-tracking refs are stored.
pub const ORIGIN: &str = "origin";

/// A single git invocation: arguments plus the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInvocation {
    args: Vec<String>,
    working_dir: PathBuf,
}

impl GitInvocation {
    /// Build an invocation from raw arguments.
    pub fn new<I, S>(working_dir: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// `git clone <url> .` run inside the (empty) target directory.
    pub fn clone_into(url: &str, target: &Path) -> Self {
        Self::new(target, ["clone", url, "."])
    }

    /// `git fetch [--force] --tags <url> +refs/heads/*:refs/remotes/origin/*`
    ///
    /// Fetches every branch and tag straight from `url`, storing branches as
    /// `origin/<name>` tracking refs.
    pub fn fetch_all(url: &str, dir: &Path, force: bool) -> Self {
        let mut args = vec!["fetch".to_string()];
        if force {
            args.push("--force".to_string());
        }
        args.push("--tags".to_string());
        args.push(url.to_string());
        args.push(format!("+refs/heads/*:refs/remotes/{ORIGIN}/*"));
        Self::new(dir, args)
    }

    /// `git checkout [--force] <reference>`
    pub fn checkout(reference: &str, dir: &Path, force: bool) -> Self {
        let mut args = vec!["checkout".to_string()];
        if force {
            args.push("--force".to_string());
        }
        args.push(reference.to_string());
        Self::new(dir, args)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The git subcommand (`clone`, `fetch`, ...).
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }
}

impl fmt::Display for GitInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {} (in {})", self.args.join(" "), self.working_dir.display())
    }
}

/// Remote reference to check out: `origin/<branch>`, or the remote's default
/// branch `origin/HEAD` when no branch is configured.
pub fn remote_ref(branch: Option<&str>) -> String {
    match branch {
        Some(name) => format!("{ORIGIN}/{name}"),
        None => format!("{ORIGIN}/HEAD"),
    }
}
