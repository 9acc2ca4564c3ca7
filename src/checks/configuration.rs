//! Configuration completeness check.
//!
//! The env file is loaded into an explicit map and resolved against an
//! environment lookup; the process environment is never modified.

use std::path::Path;

use crate::config::{ConfigValues, EnvFileParser, EnvLookup, ENV_EXAMPLE_FILE_NAME};
use crate::secrets::{is_placeholder, mask_value};
use crate::ui::{hints, UserInterface};

use super::catalog::RequiredConfigKey;
use super::{CheckOutcome, Issue};

/// Check that the env file exists and every required key holds a real value.
///
/// `label` is how the env file is named in output (usually `.env`).
pub fn check_configuration(
    env_file: &Path,
    label: &str,
    keys: &[RequiredConfigKey],
    env_fn: &EnvLookup<'_>,
    ui: &mut dyn UserInterface,
) -> CheckOutcome {
    ui.show_section("3. Checking Environment Configuration...");

    if !env_file.exists() {
        ui.error(&format!("{} file not found", label));
        for step in hints::create_env_file(label, ENV_EXAMPLE_FILE_NAME) {
            ui.hint(&step);
        }
        return Issue::MissingConfigFile {
            path: env_file.to_path_buf(),
        }
        .into();
    }

    ui.success(&format!("{} file exists", label));

    let file_vars = match EnvFileParser::load(env_file) {
        Ok(vars) => vars,
        Err(e) => {
            tracing::debug!("Env file load failed: {}", e);
            ui.warning(&format!("Cannot load {} file ({})", label, e));
            return Issue::MissingConfigCapability {
                path: env_file.to_path_buf(),
                reason: e.to_string(),
            }
            .into();
        }
    };
    let values = ConfigValues::with_env(file_vars, |key: &str| env_fn(key));
    tracing::debug!(
        "Loaded {} variables from {}",
        values.file_len(),
        env_file.display()
    );

    let unconfigured = check_keys(keys, &values, ui);

    if unconfigured.is_empty() {
        return CheckOutcome::pass();
    }

    ui.message("");
    ui.warning("Some API keys are not configured");
    ui.hint(&format!("Edit {} file and add your actual API keys", label));
    ui.hint("Get keys from:");
    for key in keys {
        ui.hint(&format!("- {}: {}", key.provider, key.source_url));
    }

    CheckOutcome::from_issues(
        unconfigured
            .into_iter()
            .map(|key| Issue::UnconfiguredKey {
                key: key.to_string(),
            })
            .collect(),
    )
}

/// Whether a resolved value counts as configured.
///
/// Absent, empty and placeholder values do not.
pub fn is_configured(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.is_empty() && !is_placeholder(v),
        None => false,
    }
}

/// Print a status line per key; return the keys that are not configured.
fn check_keys(
    keys: &[RequiredConfigKey],
    values: &ConfigValues<'_>,
    ui: &mut dyn UserInterface,
) -> Vec<&'static str> {
    let mut unconfigured = Vec::new();

    for key in keys {
        let value = values.get(key.key);
        match value.as_deref() {
            Some(v) if is_configured(Some(v)) => {
                ui.success(&format!(
                    "{} ({}): {}",
                    key.description,
                    key.key,
                    mask_value(v)
                ));
            }
            _ => {
                ui.warning(&format!("{} ({}) - Not configured", key.description, key.key));
                unconfigured.push(key.key);
            }
        }
    }

    unconfigured
}
