//! Effective configuration values.
//!
//! Combines variables loaded from the env file with an environment lookup.
//! A variable already present in the environment takes precedence over the
//! file, matching how dotenv loaders leave existing variables untouched.

use std::collections::HashMap;

/// Environment lookup function, shaped like [`std::env::var`].
pub type EnvLookup<'a> = dyn Fn(&str) -> Result<String, std::env::VarError> + 'a;

/// Resolved view over file variables and the environment.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use workshop_check::config::ConfigValues;
///
/// let mut file = HashMap::new();
/// file.insert("GOOGLE_CSE_ID".to_string(), "from-file".to_string());
///
/// let values = ConfigValues::with_env(file, |_| Err(std::env::VarError::NotPresent));
/// assert_eq!(values.get("GOOGLE_CSE_ID"), Some("from-file".to_string()));
/// assert_eq!(values.get("MISTRAL_API_KEY"), None);
/// ```
pub struct ConfigValues<'a> {
    file_vars: HashMap<String, String>,
    env_fn: Box<EnvLookup<'a>>,
}

impl<'a> ConfigValues<'a> {
    /// Resolve against a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env<F>(file_vars: HashMap<String, String>, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError> + 'a,
    {
        Self {
            file_vars,
            env_fn: Box::new(env_fn),
        }
    }

    /// Effective value of `key`, if set anywhere.
    pub fn get(&self, key: &str) -> Option<String> {
        match (self.env_fn)(key) {
            Ok(value) => Some(value),
            Err(_) => self.file_vars.get(key).cloned(),
        }
    }

    /// Number of variables loaded from the file.
    pub fn file_len(&self) -> usize {
        self.file_vars.len()
    }
}
