//! Remediation hints for the validation report.
//!
//! Check output and the closing summary draw their advice from here so the
//! two never drift apart.

/// Where to download a newer interpreter.
pub const PYTHON_DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// Command that installs the workshop dependencies.
pub const INSTALL_COMMAND: &str = "pip install -r requirements.txt";

/// Documents to consult when something fails.
pub const HELP_DOCS: &str = "README.md or RECOMMENDATIONS.md";

/// Upgrade hint shown under a failed interpreter check.
pub fn upgrade_interpreter() -> String {
    format!("Please upgrade Python: {}", PYTHON_DOWNLOAD_URL)
}

/// Install hint shown under a failed dependency check.
pub fn install_dependencies() -> String {
    format!("To install, run: {}", INSTALL_COMMAND)
}

/// Steps shown when the env file does not exist.
pub fn create_env_file(env_file: &str, example_file: &str) -> Vec<String> {
    vec![
        "Steps to fix:".to_string(),
        format!("1. Copy {} to {}", example_file, env_file),
        format!("2. Add your API keys to {}", env_file),
    ]
}

/// One-line remediation per failed check, used by the summary.
pub fn summary_interpreter() -> &'static str {
    "Python version: Upgrade to Python 3.10+"
}

/// Summary remediation for missing dependencies.
pub fn summary_dependencies() -> String {
    format!("Dependencies: Run '{}'", INSTALL_COMMAND)
}

/// Summary remediation for incomplete configuration.
pub fn summary_configuration(env_file: &str) -> String {
    format!("Environment: Configure {} file with your API keys", env_file)
}

/// Summary remediation for missing notebooks.
pub fn summary_files() -> &'static str {
    "Notebooks: Ensure all workshop files are present"
}

/// Pointer to more detailed documentation.
pub fn detailed_help() -> String {
    format!("For detailed help, see {}", HELP_DOCS)
}
