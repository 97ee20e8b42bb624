//! Running git invocations

use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::{Error, GitInvocation, Result};

/// Executes git invocations.
///
/// [`GitCli`] is the real implementation; tests plug in recorders.
pub trait CommandRunner {
    /// Run `invocation` to completion. A non-zero exit is an [`Error::Sync`].
    fn run(&self, invocation: &GitInvocation) -> Result<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &GitInvocation) -> Result<()> {
        (**self).run(invocation)
    }
}

/// Runs the `git` executable found on PATH.
///
/// Stdout and stderr are inherited so git's own progress and diagnostics reach
/// the terminal unmodified.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git binary instead of the one on PATH.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for GitCli {
    fn run(&self, invocation: &GitInvocation) -> Result<()> {
        tracing::debug!(command = %invocation, "Running git");

        let status = Command::new(&self.program)
            .args(invocation.args())
            .current_dir(invocation.working_dir())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(Error::Sync {
                command: invocation.to_string(),
                exit_code: status.code(),
            });
        }

        Ok(())
    }
}
