//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing the report to stdout
//! - [`MockUI`] for capturing the report in tests
//! - [`hints`] with the remediation text shared by the checks
//!
//! # Example
//!
//! ```
//! use workshop_check::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("1. Checking Python Version...");
//! ui.success("Python version: 3.11.4");
//! assert!(ui.has_status(StatusKind::Success, "3.11.4"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme, RULE_WIDTH};

/// Trait for report output.
///
/// This trait allows capturing the report in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a line prefixed with a status marker.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display an indented remediation hint.
    fn hint(&mut self, hint: &str);

    /// Show a numbered section title, preceded by a blank line.
    fn show_section(&mut self, title: &str);

    /// Show a banner framed by rules, preceded by a blank line.
    fn show_header(&mut self, title: &str);

    /// Show a closing rule.
    fn show_rule(&mut self);

    /// Display a success line.
    fn success(&mut self, msg: &str) {
        self.status(StatusKind::Success, msg);
    }

    /// Display a failure line.
    fn error(&mut self, msg: &str) {
        self.status(StatusKind::Failed, msg);
    }

    /// Display a warning line.
    fn warning(&mut self, msg: &str) {
        self.status(StatusKind::Warning, msg);
    }
}
