//! What the workshop needs.
//!
//! Fixed tables of packages, credentials and notebooks. They are only ever
//! read.

/// A package the notebooks import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredPackage {
    /// Importable module name.
    pub module: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// A credential the notebooks read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredConfigKey {
    /// Environment variable name.
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Service the credential comes from.
    pub provider: &'static str,
    /// Where to obtain it.
    pub source_url: &'static str,
}

/// Packages the notebooks import, probed in this order.
pub const REQUIRED_PACKAGES: &[RequiredPackage] = &[
    RequiredPackage {
        module: "langgraph",
        description: "LangGraph (core framework)",
    },
    RequiredPackage {
        module: "langchain_core",
        description: "LangChain Core",
    },
    RequiredPackage {
        module: "langchain_community",
        description: "LangChain Community",
    },
    RequiredPackage {
        module: "langchain_openai",
        description: "LangChain OpenAI",
    },
    RequiredPackage {
        module: "langchain_google_genai",
        description: "LangChain Google GenAI",
    },
    RequiredPackage {
        module: "google_search_results",
        description: "Google Search Results",
    },
    RequiredPackage {
        module: "dotenv",
        description: "Python dotenv",
    },
    RequiredPackage {
        module: "pydantic",
        description: "Pydantic",
    },
];

/// Credentials the notebooks read from the environment.
pub const REQUIRED_CONFIG_KEYS: &[RequiredConfigKey] = &[
    RequiredConfigKey {
        key: "GOOGLE_API_KEY",
        description: "Google Gemini API",
        provider: "Google Gemini",
        source_url: "https://aistudio.google.com/",
    },
    RequiredConfigKey {
        key: "GOOGLE_CSE_ID",
        description: "Google Custom Search Engine ID",
        provider: "Google Custom Search",
        source_url: "https://programmablesearchengine.google.com/",
    },
    RequiredConfigKey {
        key: "MISTRAL_API_KEY",
        description: "Mistral API",
        provider: "Mistral",
        source_url: "https://console.mistral.ai/",
    },
];

/// Notebooks expected in the project directory, in presentation order.
pub const EXPECTED_FILES: &[&str] = &[
    "Workshop_agent_v1_basic.ipynb",
    "Workshop_agent_v2_enhanced.ipynb",
    "Workshop_agent_v3_complete.ipynb",
    "Workshop_agent_v4_loops.ipynb",
    "Workshop_agent_simple_v1_learner_version.ipynb",
];

/// The notebook learners open first.
pub const FIRST_NOTEBOOK: &str = "Workshop_agent_v1_basic.ipynb";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::is_module_name;
    use std::collections::HashSet;

    #[test]
    fn tables_have_reference_sizes() {
        assert_eq!(REQUIRED_PACKAGES.len(), 8);
        assert_eq!(REQUIRED_CONFIG_KEYS.len(), 3);
        assert_eq!(EXPECTED_FILES.len(), 5);
    }

    #[test]
    fn package_modules_are_importable_names() {
        for package in REQUIRED_PACKAGES {
            assert!(is_module_name(package.module), "{}", package.module);
        }
    }

    #[test]
    fn entries_are_unique() {
        let modules: HashSet<_> = REQUIRED_PACKAGES.iter().map(|p| p.module).collect();
        assert_eq!(modules.len(), REQUIRED_PACKAGES.len());

        let keys: HashSet<_> = REQUIRED_CONFIG_KEYS.iter().map(|k| k.key).collect();
        assert_eq!(keys.len(), REQUIRED_CONFIG_KEYS.len());

        let files: HashSet<_> = EXPECTED_FILES.iter().collect();
        assert_eq!(files.len(), EXPECTED_FILES.len());
    }

    #[test]
    fn first_notebook_leads_the_list() {
        assert_eq!(EXPECTED_FILES[0], FIRST_NOTEBOOK);
    }

    #[test]
    fn config_sources_are_https() {
        for key in REQUIRED_CONFIG_KEYS {
            assert!(key.source_url.starts_with("https://"), "{}", key.key);
        }
    }
}
