//! Credential display helpers.
//!
//! - [`mask_value`] - Partially masks a configured value for display
//! - [`is_placeholder`] - Detects values left over from the example template
//!
//! # Example
//!
//! ```
//! use workshop_check::secrets::{is_placeholder, mask_value};
//!
//! assert!(is_placeholder("your_google_api_key_here"));
//! assert!(!is_placeholder("AIzaSyD-real-looking-key"));
//!
//! assert_eq!(mask_value("AIzaSyD-real-looking-key"), "AIza...-key");
//! assert_eq!(mask_value("short"), "****");
//! ```

pub mod mask;
pub mod placeholder;

pub use mask::{mask_value, FULL_MASK};
pub use placeholder::{is_placeholder, PLACEHOLDER_MARKERS};
