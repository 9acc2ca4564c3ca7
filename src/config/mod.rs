//! Workshop configuration loading.
//!
//! # Modules
//!
//! - [`env_file`] - dotenv-style file parsing
//! - [`values`] - effective values over file variables and the environment

pub mod env_file;
pub mod values;

pub use env_file::EnvFileParser;
pub use values::{ConfigValues, EnvLookup};

/// Conventional name of the workshop's configuration file.
pub const ENV_FILE_NAME: &str = ".env";

/// Template the configuration file is copied from.
pub const ENV_EXAMPLE_FILE_NAME: &str = ".env.example";
