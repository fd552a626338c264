use std::sync::Arc;

use thiserror::Error;

use super::ConfigError;
use crate::process::ProcessError;

/// Errors from running the compiler.
#[derive(Clone, Debug, Error)]
pub enum CompilerError {
    /// Running the process failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// The compiler ran but its stdout is not the expected JSON document.
    #[error("pomsky returned invalid JSON: {stdout}")]
    MalformedOutput {
        /// Raw standard output.
        stdout: String,
        /// Underlying JSON error.
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// The configured executable was rejected before spawning.
    #[error("invalid executable: {0}")]
    InvalidExecutable(#[from] ConfigError),
}

impl CompilerError {
    /// Whether a newer compile for the same key replaced this one.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Process(error) if error.is_superseded())
    }
}
