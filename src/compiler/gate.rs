//! Deciding which compiler failures the user should hear about.
//!
//! A missing or non-executable compiler fails every compile of a document,
//! so those failures are reported once per document until it compiles again
//! or the configuration changes.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::{COMPILER_TARGET, CompilerError, ConfigError, is_directory};
use crate::process::ProcessError;

/// Kind of a user-visible message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    Error,
    Warning,
    Info,
}

impl MessageLevel {
    /// Convert to LSP message type number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            MessageLevel::Error => 1,
            MessageLevel::Warning => 2,
            MessageLevel::Info => 3,
        }
    }
}

/// A message to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: MessageLevel,
    pub message: Arc<str>,
}

impl Notification {
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self {
            level: MessageLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Repeated {
    ExecutableMissing,
    PermissionDenied,
}

/// Per-document de-duplication of compiler failure notifications.
#[derive(Debug, Default)]
pub struct NotificationGate {
    reported: Mutex<FxHashMap<String, FxHashSet<Repeated>>>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification to show for `error` while compiling `key`, if any.
    ///
    /// `executable_path` is the configured executable; generic failures are
    /// not reported while it names a directory, as the user is most likely
    /// still typing the setting.
    pub fn notification(
        &self,
        key: &str,
        error: &CompilerError,
        executable_path: &str,
    ) -> Option<Notification> {
        if matches!(error, CompilerError::Process(ProcessError::Killed)) {
            return None;
        }

        if let Some((kind, command)) = repeated_failure(error) {
            return self.first_time(key, kind).then(|| {
                Notification::error(match kind {
                    Repeated::ExecutableMissing => format!(
                        "Couldn't find the '{command}' executable!\n\
                         If you downloaded it from GitHub, make sure to set its path in the settings!"
                    ),
                    Repeated::PermissionDenied => format!(
                        "No permission to execute '{command}'. Make sure the file is executable!"
                    ),
                })
            });
        }

        if is_directory(executable_path) {
            debug!(target: COMPILER_TARGET, key, "executable path is a directory; not reporting");
            return None;
        }
        Some(Notification::error(failure_message(error)))
    }

    /// Forget what was reported for `key`.
    pub fn reset(&self, key: &str) {
        self.reported.lock().remove(key);
    }

    /// Forget everything reported.
    pub fn clear(&self) {
        self.reported.lock().clear();
    }

    fn first_time(&self, key: &str, kind: Repeated) -> bool {
        self.reported
            .lock()
            .entry(key.to_string())
            .or_default()
            .insert(kind)
    }
}

/// Failures that recur on every compile until the setting is fixed, whether
/// they surface while validating the path or when spawning it.
fn repeated_failure(error: &CompilerError) -> Option<(Repeated, String)> {
    match error {
        CompilerError::Process(ProcessError::ExecutableNotFound { command }) => {
            Some((Repeated::ExecutableMissing, command.clone()))
        }
        CompilerError::Process(ProcessError::PermissionDenied { command }) => {
            Some((Repeated::PermissionDenied, command.clone()))
        }
        CompilerError::InvalidExecutable(ConfigError::NotFound { path, .. }) => {
            Some((Repeated::ExecutableMissing, path.display().to_string()))
        }
        CompilerError::InvalidExecutable(ConfigError::NotExecutable { path }) => {
            Some((Repeated::PermissionDenied, path.display().to_string()))
        }
        _ => None,
    }
}

fn failure_message(error: &CompilerError) -> String {
    let mut message = format!("Error executing pomsky: {error}");
    if let CompilerError::Process(ProcessError::UnexpectedExit { stdout, stderr, .. }) = error {
        for (name, stream) in [("stdout", stdout), ("stderr", stderr)] {
            let stream = stream.trim();
            if !stream.is_empty() {
                message.push_str(&format!("\n\n{name}:\n{stream}"));
            }
        }
    }
    message
}
