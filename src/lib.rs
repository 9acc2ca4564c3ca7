//! workshop-check - setup validation for the LangGraph notebook workshop.
//!
//! Checks the workshop's Python interpreter version, that the required
//! packages import, that the `.env` file holds real API keys, and that the
//! workshop notebooks are present. Prints a report and exits non-zero if
//! anything is missing. Nothing is installed and no API is contacted.
//!
//! # Modules
//!
//! - [`checks`] - The four checks, the summary and the [`checks::Validator`]
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` parsing and effective value resolution
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Interpreter resolution, version and import probes
//! - [`secrets`] - Placeholder detection and display masking
//! - [`ui`] - Report output
//!
//! # Example
//!
//! ```
//! use workshop_check::checks::CheckReport;
//! use workshop_check::secrets::{is_placeholder, mask_value};
//!
//! assert!(is_placeholder("your_key_here"));
//! assert_eq!(mask_value("mk-3f9a2b7c1d8e4f60"), "mk-3...4f60");
//!
//! let report = CheckReport::new(true, true, false, true);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod secrets;
pub mod ui;

pub use error::{CheckError, Result};
