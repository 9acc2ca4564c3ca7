//! Dependency presence check.

use crate::probe::ModuleProbe;
use crate::ui::{hints, UserInterface};

use super::catalog::RequiredPackage;
use super::{CheckOutcome, Issue};

/// Check that every package in `packages` can be imported.
///
/// Each package is probed independently; a failed probe is recorded and
/// the remaining packages are still checked.
pub fn check_dependencies(
    packages: &[RequiredPackage],
    probe: &dyn ModuleProbe,
    ui: &mut dyn UserInterface,
) -> CheckOutcome {
    ui.show_section("2. Checking Dependencies...");

    let mut missing = Vec::new();
    for package in packages {
        if probe.probe(package.module) {
            ui.success(package.description);
        } else {
            ui.error(&format!("{} - NOT INSTALLED", package.description));
            missing.push(package.module);
        }
    }

    if missing.is_empty() {
        return CheckOutcome::pass();
    }

    tracing::debug!("Missing packages: {}", missing.join(", "));
    ui.message("");
    ui.warning(&format!("Missing {} package(s)", missing.len()));
    ui.hint(&hints::install_dependencies());

    CheckOutcome::from_issues(
        missing
            .into_iter()
            .map(|module| Issue::MissingDependency {
                module: module.to_string(),
            })
            .collect(),
    )
}
