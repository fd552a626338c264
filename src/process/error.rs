//! Errors raised while supervising child processes.
//!
//! I/O errors are wrapped in `Arc` so that the error type stays `Clone` and
//! small enough to return by value.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

/// Errors arising from a supervised process invocation.
#[derive(Clone, Debug, Error)]
pub enum ProcessError {
    /// The executable does not exist.
    #[error("executable '{command}' not found")]
    ExecutableNotFound {
        /// Command that was spawned.
        command: String,
    },

    /// The executable exists but may not be run.
    #[error("permission denied when running '{command}'")]
    PermissionDenied {
        /// Command that was spawned.
        command: String,
    },

    /// Spawning failed for another reason.
    #[error("failed to start '{command}': {source}")]
    Spawn {
        /// Command that was spawned.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The process exited with a code outside the expected set.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("process exited with unexpected status {}", display_code(.code))]
    UnexpectedExit {
        /// Exit code, if any.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The process did not finish in time and was killed.
    #[error("process timed out after {}ms", .timeout.as_millis())]
    Timeout {
        /// Configured timeout.
        timeout: Duration,
    },

    /// The invocation was cancelled or superseded by a newer one.
    #[error("process was killed")]
    Killed,

    /// Communicating with the process failed.
    #[error("I/O error communicating with process: {source}")]
    Io {
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
}

impl ProcessError {
    /// Classify an error returned by spawning `command`.
    pub fn from_spawn_error(command: &str, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::ExecutableNotFound {
                command: command.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                command: command.to_string(),
            },
            _ => Self::Spawn {
                command: command.to_string(),
                source: Arc::new(error),
            },
        }
    }

    pub(crate) fn io(error: io::Error) -> Self {
        Self::Io {
            source: Arc::new(error),
        }
    }

    /// Whether this invocation lost to a newer one (or an explicit cancel).
    ///
    /// Such errors carry no answer and should not be reported.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Killed)
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<signal>".to_string(),
    }
}
