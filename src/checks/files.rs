//! Workshop notebook presence check.

use std::path::Path;

use crate::ui::UserInterface;

use super::{CheckOutcome, Issue};

/// Check that every file in `names` exists under `root`.
///
/// Contents are never opened.
pub fn check_expected_files(
    root: &Path,
    names: &[&str],
    ui: &mut dyn UserInterface,
) -> CheckOutcome {
    ui.show_section("4. Checking Workshop Notebooks...");

    let mut issues = Vec::new();
    for name in names {
        if root.join(name).exists() {
            ui.success(name);
        } else {
            ui.error(&format!("{} - NOT FOUND", name));
            issues.push(Issue::MissingExpectedFile {
                name: name.to_string(),
            });
        }
    }

    CheckOutcome::from_issues(issues)
}
