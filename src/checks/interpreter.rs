//! Interpreter version check.

use crate::probe::VersionSource;
use crate::ui::{hints, UserInterface};

use super::{CheckOutcome, Issue};

/// Check that the interpreter is Python 3.10 or newer.
///
/// An interpreter that cannot be run fails the check with the same upgrade
/// hint as an old one.
pub fn check_interpreter_version(
    source: &dyn VersionSource,
    ui: &mut dyn UserInterface,
) -> CheckOutcome {
    ui.show_section("1. Checking Python Version...");

    let version = match source.python_version() {
        Ok(version) => version,
        Err(e) => {
            tracing::debug!("Version query failed: {}", e);
            ui.error(&format!("Python 3.10+ required. Could not determine version: {}", e));
            ui.hint(&hints::upgrade_interpreter());
            return Issue::InterpreterUnavailable {
                reason: e.to_string(),
            }
            .into();
        }
    };

    if !version.is_supported() {
        ui.error(&format!(
            "Python 3.10+ required. Current: {}",
            version.short()
        ));
        ui.hint(&hints::upgrade_interpreter());
        return Issue::UnsupportedInterpreter { found: version }.into();
    }

    ui.success(&format!("Python version: {}", version));
    CheckOutcome::pass()
}
