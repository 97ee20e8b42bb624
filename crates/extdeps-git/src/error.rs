//! Error types for extdeps-git

/// Result type for extdeps-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while invoking git
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// git ran and reported failure.
    #[error("Failed to execute '{command}', got {}", describe_exit(.exit_code))]
    Sync {
        command: String,
        /// `None` when the process was terminated by a signal
        exit_code: Option<i32>,
    },

    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Exit code of the failing command, if it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Sync { exit_code, .. } => *exit_code,
            Self::Spawn { .. } => None,
        }
    }

    /// The command line that failed.
    pub fn command(&self) -> &str {
        match self {
            Self::Sync { command, .. } | Self::Spawn { command, .. } => command,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
