//! Closing summary of a validation run.

use crate::ui::{hints, UserInterface};

use super::catalog::FIRST_NOTEBOOK;
use super::CheckReport;

/// Render the closing summary for `report`.
///
/// `env_label` names the env file in the configuration remediation line.
pub fn render_summary(report: &CheckReport, env_label: &str, ui: &mut dyn UserInterface) {
    ui.show_header("Validation Summary");

    if report.all_passed() {
        ui.success("All checks passed! You're ready for the workshop.");
        ui.message("");
        ui.message("Next steps:");
        ui.message("1. Ensure your virtual environment is activated");
        ui.message(&format!("2. Open the first notebook: {}", FIRST_NOTEBOOK));
        ui.message("3. Follow along with the workshop");
    } else {
        ui.warning("Some issues found. Please fix them before starting.");
        ui.message("");
        ui.message("Issue Summary:");
        if !report.version {
            ui.error(hints::summary_interpreter());
        }
        if !report.dependencies {
            ui.error(&hints::summary_dependencies());
        }
        if !report.configuration {
            ui.error(&hints::summary_configuration(env_label));
        }
        if !report.files {
            ui.error(hints::summary_files());
        }
        ui.message("");
        ui.message(&hints::detailed_help());
    }

    ui.show_rule();
}
