//! Recording [`CommandRunner`] for tests that must not spawn git.

use std::cell::RefCell;

use extdeps_git::{CommandRunner, Error, GitInvocation, Result};

type FailWhen = Box<dyn Fn(&GitInvocation) -> Option<i32>>;

/// Records every invocation. Optionally fails invocations matching a
/// predicate, and can simulate a successful clone by creating `.git`.
///
/// # Example
///
/// ```rust,no_run
/// use extdeps_test_utils::runner::RecordingRunner;
///
/// let runner = RecordingRunner::new()
///     .fail_when(|inv| inv.args().iter().any(|a| a.contains("bad")).then_some(128));
/// ```
pub struct RecordingRunner {
    invocations: RefCell<Vec<GitInvocation>>,
    fail_when: Option<FailWhen>,
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRunner {
    /// A runner where every invocation succeeds and clones leave a `.git`
    /// directory behind.
    pub fn new() -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            fail_when: None,
        }
    }

    /// Fail invocations for which `predicate` returns an exit code.
    pub fn fail_when(
        mut self,
        predicate: impl Fn(&GitInvocation) -> Option<i32> + 'static,
    ) -> Self {
        self.fail_when = Some(Box::new(predicate));
        self
    }

    /// Recorded invocations, in order.
    pub fn invocations(&self) -> Vec<GitInvocation> {
        self.invocations.borrow().clone()
    }

    /// Recorded subcommands, in order (`clone`, `fetch`, `checkout`, ...).
    pub fn subcommands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .filter_map(|inv| inv.subcommand().map(str::to_string))
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &GitInvocation) -> Result<()> {
        self.invocations.borrow_mut().push(invocation.clone());

        if let Some(code) = self.fail_when.as_ref().and_then(|f| f(invocation)) {
            return Err(Error::Sync {
                command: invocation.to_string(),
                exit_code: Some(code),
            });
        }

        if invocation.subcommand() == Some("clone") {
            std::fs::create_dir(invocation.working_dir().join(".git"))
                .unwrap_or_else(|e| panic!("RecordingRunner: failed to create .git: {e}"));
        }

        Ok(())
    }
}
