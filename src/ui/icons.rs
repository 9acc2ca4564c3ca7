//! Status vocabulary for report lines.
//!
//! Every per-item line of the report starts with one of these markers.

use super::theme::Theme;

/// Canonical status kinds used in the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Item is present and usable.
    Success,
    /// Item is missing or unusable.
    Failed,
    /// Item needs attention; also used for summary banners with issues.
    Warning,
}

impl StatusKind {
    /// Icon printed at the start of the line.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failed => "❌",
            Self::Warning => "⚠️ ",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}
