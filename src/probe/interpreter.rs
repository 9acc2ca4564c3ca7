//! Locating and querying the workshop interpreter.
//!
//! The notebooks run on whichever Python the learner launches Jupyter from.
//! Resolution order:
//!
//! 1. An explicit path (`--python` or `WORKSHOP_PYTHON`)
//! 2. The active virtual environment (`VIRTUAL_ENV`), if its interpreter exists
//! 3. The default interpreter name, resolved on `PATH` at spawn time

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{CheckError, Result};

use super::version::PythonVersion;
use super::{ModuleProbe, VersionSource};

/// Interpreter name used when nothing more specific is configured.
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "python3";
#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "python";

/// Interpreter location inside a virtual environment.
#[cfg(not(windows))]
const VENV_INTERPRETER: &str = "bin/python";
#[cfg(windows)]
const VENV_INTERPRETER: &str = "Scripts/python.exe";

/// Pick the interpreter to probe.
///
/// `env_fn` is consulted for `VIRTUAL_ENV`; pass `std::env::var` in
/// production and a closure in tests.
pub fn resolve_interpreter<F>(explicit: Option<&Path>, env_fn: F) -> PathBuf
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(venv) = env_fn("VIRTUAL_ENV") {
        let candidate = PathBuf::from(venv).join(VENV_INTERPRETER);
        if candidate.is_file() {
            tracing::debug!("Using virtual environment interpreter {}", candidate.display());
            return candidate;
        }
        tracing::debug!(
            "VIRTUAL_ENV set but {} does not exist",
            candidate.display()
        );
    }

    PathBuf::from(DEFAULT_INTERPRETER)
}

/// A Python interpreter reached by spawning it as a child process.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
}

impl PythonInterpreter {
    /// Wrap an interpreter path or command name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn spawn_error(&self, err: std::io::Error) -> CheckError {
        CheckError::InterpreterUnavailable {
            interpreter: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl VersionSource for PythonInterpreter {
    fn python_version(&self) -> Result<PythonVersion> {
        let output = Command::new(&self.path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        // Python 2 and early 3.x print the version to stderr.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{}{}", stdout, stderr);

        tracing::debug!(
            "{} --version exited with {:?}: {}",
            self.path.display(),
            output.status.code(),
            combined.trim()
        );

        PythonVersion::parse(&combined).ok_or_else(|| CheckError::VersionParse {
            interpreter: self.path.clone(),
            output: combined.trim().to_string(),
        })
    }
}

impl ModuleProbe for PythonInterpreter {
    fn probe(&self, module: &str) -> bool {
        if !is_module_name(module) {
            tracing::warn!("Refusing to probe invalid module name '{}'", module);
            return false;
        }

        let status = Command::new(&self.path)
            .arg("-c")
            .arg(format!("import {}", module))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                tracing::debug!("import {} exited with {:?}", module, status.code());
                status.success()
            }
            Err(e) => {
                tracing::debug!("import {} could not run: {}", module, self.spawn_error(e));
                false
            }
        }
    }
}

/// Whether `name` is a dotted sequence of Python identifiers.
pub fn is_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        })
}
