//! .env file parsing.
//!
//! Parses dotenv-style files in the standard KEY=value format into an
//! explicit map. Loading never touches the process environment.

use crate::error::{CheckError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parses .env files into a map of variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`, and `KEY=value # trailing` for unquoted values
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use workshop_check::config::EnvFileParser;
///
/// let content = r#"
/// # Workshop credentials
/// GOOGLE_CSE_ID=abc123
/// export MISTRAL_API_KEY="mk-secret"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("GOOGLE_CSE_ID"), Some(&"abc123".to_string()));
/// assert_eq!(vars.get("MISTRAL_API_KEY"), Some(&"mk-secret".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    ///
    /// Later assignments of the same key win.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::parse_value(value.trim())))
    }

    /// Unquote a quoted value, or strip an inline comment from a bare one.
    fn parse_value(value: &str) -> String {
        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) {
                if let Some(end) = value[1..].find(quote) {
                    return value[1..=end].to_string();
                }
            }
        }

        match value.find(" #") {
            Some(pos) => value[..pos].trim_end().to_string(),
            None => value.to_string(),
        }
    }

    /// Load and parse an env file from a path.
    ///
    /// Read failures, including content that is not valid UTF-8, surface as
    /// [`CheckError::EnvFileUnreadable`].
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CheckError::EnvFileUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self::parse(&content))
    }
}
