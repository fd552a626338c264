//! Compiler configuration and executable validation.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::COMPILER_TARGET;

/// Executable used when none is configured.
pub const DEFAULT_EXECUTABLE: &str = "pomsky";

// ============================================================================
// SETTINGS
// ============================================================================

/// Target regex dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    #[default]
    JavaScript,
    Java,
    DotNet,
    Python,
    #[serde(rename = "PCRE")]
    Pcre,
    Ruby,
    Rust,
    #[serde(rename = "RE2")]
    Re2,
}

impl Flavor {
    pub const ALL: [Flavor; 8] = [
        Flavor::JavaScript,
        Flavor::Java,
        Flavor::DotNet,
        Flavor::Python,
        Flavor::Pcre,
        Flavor::Ruby,
        Flavor::Rust,
        Flavor::Re2,
    ];

    /// The name passed to the compiler's `-f` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::JavaScript => "JavaScript",
            Flavor::Java => "Java",
            Flavor::DotNet => "DotNet",
            Flavor::Python => "Python",
            Flavor::Pcre => "PCRE",
            Flavor::Ruby => "Ruby",
            Flavor::Rust => "Rust",
            Flavor::Re2 => "RE2",
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the compiler lives and what extra arguments it receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutableConfig {
    /// A bare executable name looked up on `PATH`, or an absolute path.
    pub path: String,
    /// Extra arguments, separated by unescaped spaces.
    pub extra_args: String,
}

impl Default for ExecutableConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_EXECUTABLE.to_string(),
            extra_args: String::new(),
        }
    }
}

/// Editor settings for the compiler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_flavor: Flavor,
    pub executable: ExecutableConfig,
    /// Run the document's unit tests while compiling.
    pub run_tests: bool,
}

impl Config {
    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.default_flavor = flavor;
        self
    }

    pub fn with_executable(mut self, path: impl Into<String>) -> Self {
        self.executable.path = path.into();
        self
    }

    pub fn with_extra_args(mut self, extra_args: impl Into<String>) -> Self {
        self.executable.extra_args = extra_args.into();
        self
    }

    pub fn with_run_tests(mut self, run_tests: bool) -> Self {
        self.run_tests = run_tests;
        self
    }
}

// ============================================================================
// EXECUTABLE VALIDATION
// ============================================================================

/// Reasons a configured executable path is rejected.
#[derive(Clone, Debug, Error)]
pub enum ConfigError {
    /// Paths relative to the working directory are ambiguous for an editor.
    #[error("relative paths are not allowed: `{path}`")]
    RelativePath {
        /// Configured path.
        path: String,
    },

    /// The path does not exist or cannot be inspected.
    #[error("can't access `{}`: {source}", .path.display())]
    NotFound {
        /// Path after home expansion.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The path exists but is not a regular file.
    #[error("can't execute `{}` since it is not a file", .path.display())]
    NotAFile {
        /// Path after home expansion.
        path: PathBuf,
    },

    /// The file has no execute permission.
    #[error("`{}` is not executable", .path.display())]
    NotExecutable {
        /// Path after home expansion.
        path: PathBuf,
    },

    /// `~/` was used but there is no home directory.
    #[error("can't expand `~` without a home directory")]
    HomeDirUnavailable,
}

/// Validates configured executables, remembering the paths that passed.
///
/// The cache is keyed by the configured string and must be cleared whenever
/// the configuration changes.
#[derive(Debug, Default)]
pub struct ExecutableResolver {
    validated: Mutex<FxHashMap<String, PathBuf>>,
}

impl ExecutableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The executable to spawn for the configured `path`.
    ///
    /// Bare names are accepted without checking; `PATH` lookup happens at
    /// spawn time.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, ConfigError> {
        let path = if path.is_empty() {
            DEFAULT_EXECUTABLE
        } else {
            path
        };

        if let Some(validated) = self.validated.lock().get(path) {
            return Ok(validated.clone());
        }

        let resolved = if is_bare_name(path) {
            PathBuf::from(path)
        } else {
            if path.starts_with("./")
                || path.starts_with(".\\")
                || path.starts_with("../")
                || path.starts_with("..\\")
            {
                return Err(ConfigError::RelativePath {
                    path: path.to_string(),
                });
            }
            let expanded = expand_home(path)?;
            check_executable(&expanded)?;
            expanded
        };

        debug!(target: COMPILER_TARGET, path, resolved = %resolved.display(), "validated executable");
        self.validated
            .lock()
            .insert(path.to_string(), resolved.clone());
        Ok(resolved)
    }

    pub fn clear(&self) {
        self.validated.lock().clear();
    }
}

fn is_bare_name(path: &str) -> bool {
    !path.contains(['/', '\\'])
}

/// Replace a leading `~/` with the home directory.
pub fn expand_home(path: &str) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}

fn check_executable(path: &Path) -> Result<(), ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|source| ConfigError::NotFound {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })?;

    if !metadata.is_file() {
        return Err(ConfigError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(ConfigError::NotExecutable {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Whether the configured executable path names a directory.
pub fn is_directory(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    expand_home(path)
        .ok()
        .and_then(|path| std::fs::symlink_metadata(path).ok())
        .is_some_and(|metadata| metadata.is_dir())
}

/// The `PATH` given to the compiler: `~/.cargo/bin` followed by the
/// inherited entries.
pub fn search_path() -> Option<OsString> {
    let cargo_bin = dirs::home_dir().map(|home| home.join(".cargo").join("bin"));
    let inherited = std::env::var_os("PATH");
    let entries = cargo_bin.into_iter().chain(
        inherited
            .iter()
            .flat_map(|paths| std::env::split_paths(paths).collect::<Vec<_>>()),
    );
    std::env::join_paths(entries).ok()
}
