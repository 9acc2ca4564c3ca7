//! Placeholder detection.
//!
//! The example env file ships values such as `your_google_api_key_here`.
//! A value containing one of [`PLACEHOLDER_MARKERS`], in any letter case, is
//! treated as never having been filled in, regardless of its length.

/// Substrings that mark a value as a template placeholder.
pub const PLACEHOLDER_MARKERS: &[&str] = &["your_", "_here"];

/// Whether `value` still holds template placeholder text.
pub fn is_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}
