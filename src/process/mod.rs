//! Process supervision for external tools.
//!
//! [`ProcessSupervisor`] runs child processes keyed by document, killing a
//! key's running process whenever a newer invocation for that key starts.
//! Every invocation settles exactly once: with its output, with a
//! [`ProcessError`] describing the exit, the timeout or the spawn failure, or
//! with [`ProcessError::Killed`] when it was superseded or cancelled.

mod error;
mod supervisor;

pub use error::ProcessError;
pub use supervisor::{DEFAULT_TIMEOUT, Invocation, ProcessOutput, ProcessSupervisor};
