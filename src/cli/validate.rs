//! Validation command implementation.
//!
//! Resolves the interpreter, runs every workshop check, and maps the
//! report onto the process exit code.

use std::path::{Path, PathBuf};

use crate::checks::Validator;
use crate::probe::PythonInterpreter;
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// The validation command.
pub struct ValidateCommand {
    project_root: PathBuf,
    interpreter: PathBuf,
    env_file: PathBuf,
}

impl ValidateCommand {
    /// Create a validation command.
    pub fn new(project_root: &Path, interpreter: PathBuf, env_file: PathBuf) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            interpreter,
            env_file,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the interpreter that will be probed.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult {
        tracing::debug!(
            "Validating {} with interpreter {}",
            self.project_root.display(),
            self.interpreter.display()
        );

        let python = PythonInterpreter::new(&self.interpreter);
        let validator =
            Validator::new(&python, &python, &self.project_root).with_env_file(&self.env_file);

        let report = validator.run(ui);
        tracing::debug!("Validation finished: {:?}", report);

        CommandResult::from(&report)
    }
}
