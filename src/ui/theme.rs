//! Visual theme and styling.

use console::Style;

/// Width of the `=` rules framing the report banners.
pub const RULE_WIDTH: usize = 60;

/// The report's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success markers (green).
    pub success: Style,
    /// Style for warning markers (yellow).
    pub warning: Style,
    /// Style for failure markers (red bold).
    pub error: Style,
    /// Style for banner titles (bold).
    pub header: Style,
    /// Style for numbered section titles (bold cyan).
    pub section: Style,
    /// Style for indented remediation hints (dim).
    pub hint: Style,
    /// Style for the `=` rules (dim).
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            section: Style::new().bold().cyan(),
            hint: Style::new().dim(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            section: Style::new(),
            hint: Style::new(),
            border: Style::new(),
        }
    }

    /// A full-width `=` rule.
    pub fn format_rule(&self) -> String {
        self.border.apply_to("=".repeat(RULE_WIDTH)).to_string()
    }

    /// A banner: rule, title, rule.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}\n{}",
            self.format_rule(),
            self.header.apply_to(title),
            self.format_rule()
        )
    }

    /// A numbered section title.
    pub fn format_section(&self, title: &str) -> String {
        self.section.apply_to(title).to_string()
    }

    /// An indented hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("   {}", self.hint.apply_to(hint))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
