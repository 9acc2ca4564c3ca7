//! Workshop setup validation.
//!
//! The [`Validator`] runs four independent checks in a fixed order, prints
//! a line per item as it goes, and finishes with a summary. Every check runs
//! even when an earlier one fails.
//!
//! # Modules
//!
//! - [`catalog`] - Required packages, credentials and notebooks
//! - [`interpreter`] - Interpreter version check
//! - [`dependencies`] - Dependency presence check
//! - [`configuration`] - Env file and credential check
//! - [`files`] - Notebook presence check
//! - [`summary`] - Closing summary
//! - [`issue`] - Findings and per-check outcomes
//!
//! # Example
//!
//! ```
//! use workshop_check::checks::Validator;
//! use workshop_check::error::Result;
//! use workshop_check::probe::{PythonVersion, VersionSource};
//! use workshop_check::ui::MockUI;
//!
//! struct Python311;
//!
//! impl VersionSource for Python311 {
//!     fn python_version(&self) -> Result<PythonVersion> {
//!         Ok(PythonVersion::new(3, 11, 4))
//!     }
//! }
//!
//! let every_module_loads = |_: &str| true;
//! let project = std::env::temp_dir().join("workshop-check-doc-empty");
//!
//! let validator = Validator::new(&Python311, &every_module_loads, &project)
//!     .with_env(|_| Err(std::env::VarError::NotPresent));
//! let mut ui = MockUI::new();
//! let report = validator.run(&mut ui);
//!
//! assert!(report.version);
//! assert!(report.dependencies);
//! assert!(!report.configuration);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod catalog;
pub mod configuration;
pub mod dependencies;
pub mod files;
pub mod interpreter;
pub mod issue;
pub mod summary;

pub use catalog::{
    RequiredConfigKey, RequiredPackage, EXPECTED_FILES, FIRST_NOTEBOOK, REQUIRED_CONFIG_KEYS,
    REQUIRED_PACKAGES,
};
pub use configuration::{check_configuration, is_configured};
pub use dependencies::check_dependencies;
pub use files::check_expected_files;
pub use interpreter::check_interpreter_version;
pub use issue::{CheckOutcome, Issue};
pub use summary::render_summary;

use std::path::{Path, PathBuf};

use crate::config::{EnvLookup, ENV_FILE_NAME};
use crate::probe::{ModuleProbe, VersionSource};
use crate::ui::UserInterface;

/// Pass/fail per check category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub version: bool,
    pub dependencies: bool,
    pub configuration: bool,
    pub files: bool,
}

impl CheckReport {
    /// Create a report from the four results.
    pub fn new(version: bool, dependencies: bool, configuration: bool, files: bool) -> Self {
        Self {
            version,
            dependencies,
            configuration,
            files,
        }
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.version && self.dependencies && self.configuration && self.files
    }

    /// Process exit code: 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs the workshop checks against a project directory.
pub struct Validator<'a> {
    versions: &'a dyn VersionSource,
    modules: &'a dyn ModuleProbe,
    project_root: PathBuf,
    env_file: PathBuf,
    env_fn: Box<EnvLookup<'a>>,
}

impl<'a> Validator<'a> {
    /// Create a validator for `project_root`.
    ///
    /// The env file defaults to `.env` in the project root and key lookups
    /// consult the process environment first.
    pub fn new(
        versions: &'a dyn VersionSource,
        modules: &'a dyn ModuleProbe,
        project_root: &Path,
    ) -> Self {
        Self {
            versions,
            modules,
            project_root: project_root.to_path_buf(),
            env_file: project_root.join(ENV_FILE_NAME),
            env_fn: Box::new(|key: &str| std::env::var(key)),
        }
    }

    /// Use a different env file. Relative paths resolve against the project root.
    pub fn with_env_file(mut self, path: &Path) -> Self {
        self.env_file = self.project_root.join(path);
        self
    }

    /// Use a custom env var lookup instead of the process environment.
    pub fn with_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError> + 'a,
    {
        self.env_fn = Box::new(env_fn);
        self
    }

    /// Get the env file path.
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// How the env file is named in output: relative to the project when possible.
    pub fn env_label(&self) -> String {
        self.env_file
            .strip_prefix(&self.project_root)
            .unwrap_or(&self.env_file)
            .display()
            .to_string()
    }

    /// Run every check in order, then render the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> CheckReport {
        ui.show_header("LangGraph Workshop - Setup Validation");
        ui.message("This will check if your environment is ready for the workshop.");

        let env_label = self.env_label();
        let outcomes = [
            check_interpreter_version(self.versions, ui),
            check_dependencies(REQUIRED_PACKAGES, self.modules, ui),
            check_configuration(
                &self.env_file,
                &env_label,
                REQUIRED_CONFIG_KEYS,
                self.env_fn.as_ref(),
                ui,
            ),
            check_expected_files(&self.project_root, EXPECTED_FILES, ui),
        ];

        let [version, dependencies, configuration, files] = &outcomes;
        let report = CheckReport::new(
            version.passed(),
            dependencies.passed(),
            configuration.passed(),
            files.passed(),
        );

        for issue in outcomes.iter().flat_map(|o| o.issues()) {
            tracing::debug!("Issue: {}", issue);
        }

        render_summary(&report, &env_label, ui);
        report
    }
}
