//! Probing the workshop interpreter.
//!
//! The workshop runs on Python, so "is the dependency installed" means "can
//! the interpreter import it". Both questions go through small traits so the
//! checks can be driven by fakes in tests.
//!
//! # Modules
//!
//! - [`interpreter`] - Interpreter resolution and the process-backed probe
//! - [`version`] - Version parsing and the minimum-version policy

pub mod interpreter;
pub mod version;

pub use interpreter::{is_module_name, resolve_interpreter, PythonInterpreter, DEFAULT_INTERPRETER};
pub use version::{PythonVersion, MINIMUM_VERSION};

use crate::error::Result;

/// Reports the version of the interpreter under test.
pub trait VersionSource {
    /// Query the interpreter version.
    fn python_version(&self) -> Result<PythonVersion>;
}

/// Reports whether a named module can be loaded.
///
/// Implementations must not panic; a probe that cannot run reports `false`.
pub trait ModuleProbe {
    /// Whether `module` can be imported.
    fn probe(&self, module: &str) -> bool;
}

impl<F> ModuleProbe for F
where
    F: Fn(&str) -> bool,
{
    fn probe(&self, module: &str) -> bool {
        self(module)
    }
}
