//! Running the Pomsky compiler.
//!
//! The compiler is an external executable invoked as
//! `pomsky -f <flavor> --json [--test=pcre2] <source> [extra args...]`. It
//! prints one JSON document per run and exits with 0, or with 1 when the
//! source has errors. Compiles run through the [`ProcessSupervisor`], so a
//! newer compile of a document replaces an older one that is still running.
//!
//! ## Usage
//!
//! ```ignore
//! let compiler = Compiler::new(Config::default());
//! let response = compiler.compile("file:///a.pomsky", "'hello'+").await?;
//! let diagnostics = to_diagnostics("'hello'+", &response);
//! ```

mod args;
mod config;
mod diagnostics;
mod error;
mod gate;
mod response;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::process::{Invocation, ProcessSupervisor};

pub use args::{compile_args, parse_extra_args};
pub use config::{
    Config, ConfigError, DEFAULT_EXECUTABLE, ExecutableConfig, ExecutableResolver, Flavor,
    expand_home, is_directory, search_path,
};
pub use diagnostics::{
    DIAGNOSTIC_SOURCE, Diagnostic, DiagnosticTag, Severity, to_diagnostics, translate,
};
pub use error::CompilerError;
pub use gate::{MessageLevel, Notification, NotificationGate};
pub use response::{
    ByteSpan, CompileResponse, CompilerDiagnostic, CompilerSeverity, PreviewResult, Timings,
};

/// Log target for compiler operations.
pub(crate) const COMPILER_TARGET: &str = "pomsky_ide::compiler";

pub const COMPILE_TIMEOUT: Duration = Duration::from_secs(30);
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(2);

/// Process key used by preview compiles.
pub const PREVIEW_KEY: &str = "//preview";

/// Runs the compiler with the current configuration.
pub struct Compiler {
    supervisor: ProcessSupervisor,
    config: RwLock<Arc<Config>>,
    resolver: ExecutableResolver,
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        Self::with_supervisor(config, ProcessSupervisor::new())
    }

    pub fn with_supervisor(config: Config, supervisor: ProcessSupervisor) -> Self {
        Self {
            supervisor,
            config: RwLock::new(Arc::new(config)),
            resolver: ExecutableResolver::new(),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.read().clone()
    }

    /// Replace the configuration, forgetting validated executables.
    pub fn set_config(&self, config: Config) {
        *self.config.write() = Arc::new(config);
        self.resolver.clear();
    }

    pub fn supervisor(&self) -> &ProcessSupervisor {
        &self.supervisor
    }

    /// Compile `source` with the configured flavor, as the only compile for `key`.
    pub async fn compile(&self, key: &str, source: &str) -> Result<CompileResponse, CompilerError> {
        let flavor = self.config().default_flavor;
        self.compile_with_flavor(key, source, flavor).await
    }

    /// Compile `source` with an explicit flavor.
    pub async fn compile_with_flavor(
        &self,
        key: &str,
        source: &str,
        flavor: Flavor,
    ) -> Result<CompileResponse, CompilerError> {
        let config = self.config();
        let executable = self.executable(&config)?;
        let args = compile_args(
            flavor,
            config.run_tests,
            source,
            &config.executable.extra_args,
        );

        let invocation = with_search_path(
            Invocation::new(executable.to_string_lossy())
                .args(args)
                .timeout(COMPILE_TIMEOUT)
                .expected_exit_codes([0, 1]),
        );
        let output = self.supervisor.invoke(key, invocation).await?;
        parse_response(output.stdout)
    }

    /// The compiler's trimmed `--version` output.
    pub async fn version(&self) -> Result<String, CompilerError> {
        let config = self.config();
        let executable = self.executable(&config)?;
        let invocation = with_search_path(
            Invocation::new(executable.to_string_lossy())
                .arg("--version")
                .timeout(VERSION_TIMEOUT),
        );
        let output = self.supervisor.run(invocation).await?;
        Ok(output.stdout.trim().to_string())
    }

    /// Compile `source` for the preview panel.
    ///
    /// Preview compiles share one key, so only the latest preview runs.
    pub async fn compile_preview(
        &self,
        uri: &str,
        source: &str,
        flavor: Option<Flavor>,
    ) -> Result<PreviewResult, CompilerError> {
        let flavor = flavor.unwrap_or(self.config().default_flavor);
        let response = self.compile_with_flavor(PREVIEW_KEY, source, flavor).await?;
        let version_info = self.version().await?;
        Ok(PreviewResult {
            uri: uri.to_string(),
            flavor,
            version_info,
            response,
        })
    }

    /// Kill the compile running for `key`, if any.
    pub fn cancel(&self, key: &str) -> bool {
        self.supervisor.cancel(key)
    }

    fn executable(&self, config: &Config) -> Result<PathBuf, CompilerError> {
        Ok(self.resolver.resolve(&config.executable.path)?)
    }
}

fn with_search_path(invocation: Invocation) -> Invocation {
    match search_path() {
        Some(path) => invocation.env("PATH", path.to_string_lossy()),
        None => invocation,
    }
}

/// Parse the compiler's stdout.
pub fn parse_response(stdout: String) -> Result<CompileResponse, CompilerError> {
    match serde_json::from_str(&stdout) {
        Ok(response) => {
            debug!(target: COMPILER_TARGET, "compiler responded");
            Ok(response)
        }
        Err(source) => {
            warn!(target: COMPILER_TARGET, error = %source, "compiler returned invalid JSON");
            Err(CompilerError::MalformedOutput {
                stdout,
                source: Arc::new(source),
            })
        }
    }
}
