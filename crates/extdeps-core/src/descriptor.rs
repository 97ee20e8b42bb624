//! Source descriptors

use std::borrow::Cow;

use crate::{Error, Result};

/// One external repository: where it comes from, where it goes under the
/// external root, and which remote branch to track.
///
/// `branch == None` tracks the remote's default branch (`origin/HEAD`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    repository_url: Cow<'static, str>,
    local_directory_name: Cow<'static, str>,
    branch: Option<Cow<'static, str>>,
}

impl SourceDescriptor {
    /// Compile-time constructor used by the built-in table.
    pub const fn from_static(
        repository_url: &'static str,
        local_directory_name: &'static str,
        branch: Option<&'static str>,
    ) -> Self {
        Self {
            repository_url: Cow::Borrowed(repository_url),
            local_directory_name: Cow::Borrowed(local_directory_name),
            branch: match branch {
                Some(name) => Some(Cow::Borrowed(name)),
                None => None,
            },
        }
    }

    /// Descriptor tracking the remote's default branch.
    pub fn new(
        repository_url: impl Into<Cow<'static, str>>,
        local_directory_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            repository_url: repository_url.into(),
            local_directory_name: local_directory_name.into(),
            branch: None,
        }
    }

    /// Track `branch` instead of the default branch.
    pub fn with_branch(mut self, branch: impl Into<Cow<'static, str>>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn local_directory_name(&self) -> &str {
        &self.local_directory_name
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Check that the descriptor maps to a single directory under the root
    /// and cannot smuggle flags into git.
    pub fn validate(&self) -> Result<()> {
        let dir = self.local_directory_name();

        if dir.is_empty() {
            return Err(Error::invalid(dir, "directory name must not be empty"));
        }
        if dir == "." || dir == ".." {
            return Err(Error::invalid(dir, "directory name must not be '.' or '..'"));
        }
        if dir.contains(['/', '\\', '\0']) {
            return Err(Error::invalid(
                dir,
                "directory name must be a single path segment",
            ));
        }

        let url = self.repository_url();
        if url.is_empty() {
            return Err(Error::invalid(dir, "repository URL must not be empty"));
        }
        if url.starts_with('-') {
            return Err(Error::invalid(
                dir,
                "repository URL must not start with '-' (would be interpreted as a git flag)",
            ));
        }

        if let Some(branch) = self.branch() {
            if branch.is_empty() {
                return Err(Error::invalid(dir, "branch name must not be empty"));
            }
            if branch.starts_with('-') {
                return Err(Error::invalid(
                    dir,
                    "branch name must not start with '-' (would be interpreted as a git flag)",
                ));
            }
            // git ref restrictions
            let invalid_chars = [' ', '~', '^', ':', '?', '*', '[', '\\', '\0'];
            if let Some(ch) = branch.chars().find(|c| invalid_chars.contains(c)) {
                return Err(Error::invalid(
                    dir,
                    format!("branch name contains invalid character '{}'", ch),
                ));
            }
            if branch.contains("..") {
                return Err(Error::invalid(dir, "branch name must not contain '..'"));
            }
        }

        Ok(())
    }
}
