//! The [`Command`] seam between argument parsing and the checks.

use crate::checks::CheckReport;
use crate::ui::UserInterface;

/// A runnable CLI command.
pub trait Command {
    /// Run the command, writing its report to `ui`.
    ///
    /// Probe and file failures are reported as failed checks, so every run
    /// ends in a [`CommandResult`].
    fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult;
}

/// Outcome of a command, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub exit_code: i32,
}

impl CommandResult {
    /// A result that exits with status 0.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// A failed result that exits with `exit_code`.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

impl From<&CheckReport> for CommandResult {
    fn from(report: &CheckReport) -> Self {
        if report.all_passed() {
            Self::success()
        } else {
            Self::failure(report.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_report_is_success() {
        let result = CommandResult::from(&CheckReport::new(true, true, true, true));
        assert_eq!(result, CommandResult::success());
    }

    #[test]
    fn any_failed_check_exits_one() {
        let result = CommandResult::from(&CheckReport::new(true, true, false, true));
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }
}
