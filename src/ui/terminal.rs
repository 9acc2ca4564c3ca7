//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, StatusKind, Theme, UserInterface};

/// Writes the report to stdout, styled when stdout is a color-capable TTY.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, choosing colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, msg)).ok();
    }

    fn hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_section(title)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn show_rule(&mut self) {
        writeln!(self.term, "{}", self.theme.format_rule()).ok();
    }
}

/// Create the terminal UI, honoring `--no-color`.
pub fn create_ui(no_color: bool) -> TerminalUI {
    if no_color {
        TerminalUI::with_theme(Theme::plain())
    } else {
        TerminalUI::new()
    }
}
