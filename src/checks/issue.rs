//! Check findings.
//!
//! Every problem a check can detect is an [`Issue`]. Issues are recorded at
//! the point of detection and never abort the remaining checks.

use std::fmt;
use std::path::PathBuf;

use crate::probe::PythonVersion;

/// A single missing precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The interpreter is older than the workshop supports.
    UnsupportedInterpreter { found: PythonVersion },

    /// The interpreter could not be run or did not report a version.
    InterpreterUnavailable { reason: String },

    /// A named module cannot be loaded.
    MissingDependency { module: String },

    /// The configuration file is absent.
    MissingConfigFile { path: PathBuf },

    /// The configuration file exists but could not be loaded.
    MissingConfigCapability { path: PathBuf, reason: String },

    /// A required key is absent or holds a placeholder value.
    UnconfiguredKey { key: String },

    /// A workshop file is absent.
    MissingExpectedFile { name: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedInterpreter { found } => {
                write!(f, "unsupported interpreter {}", found)
            }
            Self::InterpreterUnavailable { reason } => {
                write!(f, "interpreter unavailable: {}", reason)
            }
            Self::MissingDependency { module } => write!(f, "missing dependency {}", module),
            Self::MissingConfigFile { path } => {
                write!(f, "missing config file {}", path.display())
            }
            Self::MissingConfigCapability { path, reason } => {
                write!(f, "cannot load {}: {}", path.display(), reason)
            }
            Self::UnconfiguredKey { key } => write!(f, "unconfigured key {}", key),
            Self::MissingExpectedFile { name } => write!(f, "missing file {}", name),
        }
    }
}

/// Result of one check: the issues it found.
///
/// A check passes iff it found no issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    issues: Vec<Issue>,
}

impl CheckOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self::default()
    }

    /// An outcome with the given issues.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues found by the check.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl From<Issue> for CheckOutcome {
    fn from(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}
