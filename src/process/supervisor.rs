//! Keyed, single-flight supervision of child processes.
//!
//! At most one process runs per key. Starting an invocation for a key that
//! already has one cancels the old invocation and waits for its child to be
//! reaped before spawning the new child, so a superseded invocation can never
//! settle after its successor.

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, Command};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::ProcessError;

/// Log target for process supervision.
pub(super) const PROCESS_TARGET: &str = "pomsky_ide::process";

/// Default time limit for an invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How long a new invocation waits for the one it supersedes to wind down.
const SUPERSEDE_GRACE: Duration = Duration::from_secs(5);

// ============================================================================
// INVOCATION
// ============================================================================

/// A command to run, with its limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub timeout: Duration,
    /// Exit codes treated as success.
    pub expected_exit_codes: Vec<i32>,
    /// Extra environment variables, on top of the inherited environment.
    pub env: Vec<(String, String)>,
    /// Text written to the child's standard input.
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            expected_exit_codes: vec![0],
            env: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn expected_exit_codes(mut self, codes: impl Into<Vec<i32>>) -> Self {
        self.expected_exit_codes = codes.into();
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

/// Output of a process that exited with an expected code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

// ============================================================================
// SUPERVISOR
// ============================================================================

struct Slot {
    id: u64,
    /// Fired to kill the invocation.
    cancel: CancellationToken,
    /// Fired once the invocation has settled and its child is reaped.
    finished: CancellationToken,
}

#[derive(Default)]
struct Inner {
    running: Mutex<FxHashMap<String, Slot>>,
    next_id: AtomicU64,
}

/// Runs child processes, at most one per key.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Clone, Default)]
pub struct ProcessSupervisor {
    inner: Arc<Inner>,
}

impl ProcessSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `invocation` as the only process for `key`.
    ///
    /// Any invocation already running for `key` is killed first and settles
    /// with [`ProcessError::Killed`]. The child runs on its own task, so a
    /// cancelled child is killed even if nobody polls its invocation again.
    /// Dropping the returned future cancels the invocation.
    pub async fn invoke(
        &self,
        key: &str,
        invocation: Invocation,
    ) -> Result<ProcessOutput, ProcessError> {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let cancel = CancellationToken::new();
        let finished = CancellationToken::new();

        let previous = self.inner.running.lock().insert(
            key.to_string(),
            Slot {
                id,
                cancel: cancel.clone(),
                finished: finished.clone(),
            },
        );
        let mut guard = SlotGuard {
            inner: &self.inner,
            key,
            id,
            cancel: cancel.clone(),
            finished: finished.clone(),
            spawned: false,
        };

        if let Some(previous) = previous {
            debug!(target: PROCESS_TARGET, key, "superseding previous process");
            previous.cancel.cancel();
            tokio::select! {
                _ = previous.finished.cancelled() => {}
                _ = cancel.cancelled() => return Err(ProcessError::Killed),
                _ = tokio::time::sleep(SUPERSEDE_GRACE) => {
                    warn!(target: PROCESS_TARGET, key, "superseded process did not settle in time");
                }
            }
        }

        if cancel.is_cancelled() {
            return Err(ProcessError::Killed);
        }

        let task = tokio::spawn(async move {
            let _reaped = finished.drop_guard();
            execute(&invocation, &cancel).await
        });
        guard.spawned = true;

        task.await
            .unwrap_or_else(|error| Err(ProcessError::io(std::io::Error::other(error))))
    }

    /// Run `invocation` outside the keyed registry.
    pub async fn run(&self, invocation: Invocation) -> Result<ProcessOutput, ProcessError> {
        execute(&invocation, &CancellationToken::new()).await
    }

    /// Kill the process running for `key`, if any.
    ///
    /// The cancelled invocation settles with [`ProcessError::Killed`]. Its slot
    /// stays until the child is reaped, so the next invocation for `key`
    /// waits for it like any superseded one.
    pub fn cancel(&self, key: &str) -> bool {
        let running = self.inner.running.lock();
        let Some(slot) = running.get(key).filter(|slot| !slot.cancel.is_cancelled()) else {
            return false;
        };
        debug!(target: PROCESS_TARGET, key, "cancelling process");
        slot.cancel.cancel();
        true
    }

    /// Kill every supervised process.
    pub fn cancel_all(&self) {
        for (key, slot) in self.inner.running.lock().iter() {
            if !slot.cancel.is_cancelled() {
                debug!(target: PROCESS_TARGET, key = %key, "cancelling process");
                slot.cancel.cancel();
            }
        }
    }

    /// Whether an invocation for `key` is running and not yet cancelled.
    pub fn is_running(&self, key: &str) -> bool {
        self.inner
            .running
            .lock()
            .get(key)
            .is_some_and(|slot| !slot.cancel.is_cancelled())
    }
}

/// Removes an invocation's slot once it settles, unless a newer invocation
/// has taken the key.
///
/// Dropping the guard cancels the invocation. `finished` is fired here only
/// when no child task was spawned; otherwise the task fires it after reaping.
struct SlotGuard<'a> {
    inner: &'a Inner,
    key: &'a str,
    id: u64,
    cancel: CancellationToken,
    finished: CancellationToken,
    spawned: bool,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.cancel.cancel();
        let mut running = self.inner.running.lock();
        if running.get(self.key).is_some_and(|slot| slot.id == self.id) {
            running.remove(self.key);
        }
        drop(running);
        if !self.spawned {
            self.finished.cancel();
        }
    }
}

// ============================================================================
// EXECUTION
// ============================================================================

enum Settled {
    Exited {
        status: std::io::Result<ExitStatus>,
        stdout: std::io::Result<String>,
        stderr: std::io::Result<String>,
    },
    TimedOut,
    Cancelled,
}

async fn execute(
    invocation: &Invocation,
    cancel: &CancellationToken,
) -> Result<ProcessOutput, ProcessError> {
    debug!(
        target: PROCESS_TARGET,
        command = %invocation.command,
        args = ?invocation.args,
        timeout_ms = invocation.timeout.as_millis() as u64,
        "spawning process"
    );

    let mut command = Command::new(&invocation.command);
    command
        .args(&invocation.args)
        .envs(invocation.env.iter().map(|(key, value)| (key, value)))
        .stdin(if invocation.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command
        .spawn()
        .map_err(|error| ProcessError::from_spawn_error(&invocation.command, error))?;

    let stdin = child.stdin.take();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let settled = {
        let collect = async {
            let ((), status, stdout, stderr) = tokio::join!(
                feed_stdin(stdin, invocation.stdin.as_deref()),
                child.wait(),
                read_pipe(stdout),
                read_pipe(stderr),
            );
            Settled::Exited {
                status,
                stdout,
                stderr,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Settled::Cancelled,
            exited = collect => exited,
            _ = tokio::time::sleep(invocation.timeout) => Settled::TimedOut,
        }
    };

    match settled {
        Settled::Exited {
            status,
            stdout,
            stderr,
        } => {
            let status = status.map_err(ProcessError::io)?;
            let stdout = stdout.map_err(ProcessError::io)?;
            let stderr = stderr.map_err(ProcessError::io)?;
            let code = status.code();
            debug!(target: PROCESS_TARGET, command = %invocation.command, ?code, "process exited");

            match code {
                Some(code) if invocation.expected_exit_codes.contains(&code) => Ok(ProcessOutput {
                    stdout,
                    stderr,
                    exit_code: code,
                }),
                _ => Err(ProcessError::UnexpectedExit {
                    code,
                    stdout,
                    stderr,
                }),
            }
        }
        Settled::TimedOut => {
            warn!(
                target: PROCESS_TARGET,
                command = %invocation.command,
                timeout_ms = invocation.timeout.as_millis() as u64,
                "process timed out; killing"
            );
            kill(&mut child).await;
            Err(ProcessError::Timeout {
                timeout: invocation.timeout,
            })
        }
        Settled::Cancelled => {
            debug!(target: PROCESS_TARGET, command = %invocation.command, "killing cancelled process");
            kill(&mut child).await;
            Err(ProcessError::Killed)
        }
    }
}

async fn kill(child: &mut Child) {
    if let Err(error) = child.kill().await {
        warn!(target: PROCESS_TARGET, %error, "failed to kill process");
    }
}

async fn feed_stdin(stdin: Option<ChildStdin>, input: Option<&str>) {
    let (Some(mut stdin), Some(input)) = (stdin, input) else {
        return;
    };
    // A child that exits without reading its input closes the pipe early.
    if let Err(error) = stdin.write_all(input.as_bytes()).await {
        debug!(target: PROCESS_TARGET, %error, "could not write process input");
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buffer).await?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
