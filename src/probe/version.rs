//! Interpreter version parsing and the minimum-version policy.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("version regex is valid")
});

/// Oldest interpreter the workshop supports.
pub const MINIMUM_VERSION: PythonVersion = PythonVersion::new(3, 10, 0);

/// An interpreter version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PythonVersion {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Extract the version from `python --version` output.
    ///
    /// A missing micro component parses as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use workshop_check::probe::PythonVersion;
    ///
    /// let v = PythonVersion::parse("Python 3.11.4\n").unwrap();
    /// assert_eq!(v, PythonVersion::new(3, 11, 4));
    /// assert!(PythonVersion::parse("command not found").is_none());
    /// ```
    pub fn parse(output: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let micro = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        Some(Self::new(major, minor, micro))
    }

    /// Whether this version satisfies the workshop minimum of 3.10.
    pub fn is_supported(&self) -> bool {
        self.major > MINIMUM_VERSION.major
            || (self.major == MINIMUM_VERSION.major && self.minor >= MINIMUM_VERSION.minor)
    }

    /// `major.minor`, as shown in upgrade messages.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_triple() {
        assert_eq!(
            PythonVersion::parse("Python 3.12.1"),
            Some(PythonVersion::new(3, 12, 1))
        );
    }

    #[test]
    fn parses_without_micro() {
        assert_eq!(
            PythonVersion::parse("Python 3.13"),
            Some(PythonVersion::new(3, 13, 0))
        );
    }

    #[test]
    fn parses_prerelease_suffix() {
        assert_eq!(
            PythonVersion::parse("Python 3.14.0rc1"),
            Some(PythonVersion::new(3, 14, 0))
        );
    }

    #[test]
    fn parses_python2_stderr_style() {
        assert_eq!(
            PythonVersion::parse("Python 2.7.18\n"),
            Some(PythonVersion::new(2, 7, 18))
        );
    }

    #[test]
    fn rejects_unrelated_output() {
        assert!(PythonVersion::parse("").is_none());
        assert!(PythonVersion::parse("3.11.4").is_none());
    }

    #[test]
    fn supported_from_3_10() {
        assert!(PythonVersion::new(3, 10, 0).is_supported());
        assert!(PythonVersion::new(3, 11, 9).is_supported());
        assert!(PythonVersion::new(3, 13, 0).is_supported());
    }

    #[test]
    fn unsupported_below_3_10() {
        assert!(!PythonVersion::new(3, 9, 18).is_supported());
        assert!(!PythonVersion::new(3, 0, 0).is_supported());
        assert!(!PythonVersion::new(2, 7, 18).is_supported());
    }

    #[test]
    fn later_majors_are_supported_regardless_of_minor() {
        assert!(PythonVersion::new(4, 0, 0).is_supported());
    }

    #[test]
    fn supported_matches_ordering_against_minimum() {
        for major in 0..5 {
            for minor in 0..15 {
                let v = PythonVersion::new(major, minor, 0);
                assert_eq!(v.is_supported(), v >= MINIMUM_VERSION, "{}", v);
            }
        }
    }

    #[test]
    fn display_and_short() {
        let v = PythonVersion::new(3, 11, 4);
        assert_eq!(v.to_string(), "3.11.4");
        assert_eq!(v.short(), "3.11");
    }
}
