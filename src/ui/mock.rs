//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion, both by category and as the plain text the
//! terminal would have shown.
//!
//! # Example
//!
//! ```
//! use workshop_check::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("4. Checking Workshop Notebooks...");
//! ui.error("Workshop_agent_v1_basic.ipynb - NOT FOUND");
//!
//! assert!(ui.has_error("NOT FOUND"));
//! assert!(ui.output().contains("❌ Workshop_agent_v1_basic.ipynb"));
//! ```

use super::{StatusKind, Theme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    hints: Vec<String>,
    sections: Vec<String>,
    headers: Vec<String>,
    lines: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured status lines with their kind.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured banner titles.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The full report as unstyled text.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Check if a plain message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line of `kind` containing `msg` was shown.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, m)| *k == kind && m.contains(msg))
    }

    /// Check if a success line containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.has_status(StatusKind::Success, msg)
    }

    /// Check if a failure line containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.has_status(StatusKind::Failed, msg)
    }

    /// Check if a warning line containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.has_status(StatusKind::Warning, msg)
    }

    /// Check if a hint containing `msg` was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|h| h.contains(msg))
    }

    /// Number of status lines of `kind`.
    pub fn count_status(&self, kind: StatusKind) -> usize {
        self.statuses.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.lines.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
        self.lines.push(kind.format_plain(msg));
    }

    fn hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
        self.lines.push(Theme::plain().format_hint(hint));
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
        self.lines.push(String::new());
        self.lines.push(title.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.lines.push(String::new());
        self.lines.push(Theme::plain().format_header(title));
    }

    fn show_rule(&mut self) {
        self.lines.push(Theme::plain().format_rule());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_by_category() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("good");
        ui.hint("do this");
        ui.show_section("1. Section");
        ui.show_header("Banner");

        assert_eq!(ui.messages(), ["plain"]);
        assert_eq!(ui.statuses().len(), 1);
        assert_eq!(ui.hints(), ["do this"]);
        assert_eq!(ui.sections(), ["1. Section"]);
        assert_eq!(ui.headers(), ["Banner"]);
    }

    #[test]
    fn output_renders_plain_text() {
        let mut ui = MockUI::new();
        ui.show_section("2. Checking Dependencies...");
        ui.error("Pydantic - NOT INSTALLED");
        ui.hint("To install, run: pip install -r requirements.txt");

        let output = ui.output();
        assert!(output.contains("2. Checking Dependencies..."));
        assert!(output.contains("❌ Pydantic - NOT INSTALLED"));
        assert!(output.contains("   To install, run: pip install -r requirements.txt"));
    }

    #[test]
    fn count_status_counts_kind() {
        let mut ui = MockUI::new();
        ui.success("a");
        ui.success("b");
        ui.error("c");
        assert_eq!(ui.count_status(StatusKind::Success), 2);
        assert_eq!(ui.count_status(StatusKind::Failed), 1);
        assert_eq!(ui.count_status(StatusKind::Warning), 0);
    }
}
