//! Generator configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "llmstxt.toml";

/// Tunables for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Extension of the documents to collect (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory names whose contents are never collected
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Branch tried when the requested branch cannot be cloned
    #[serde(default = "default_fallback_branch")]
    pub fallback_branch: String,

    /// Scratch checkout location
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,

    /// Base URL of the repository metadata API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Client identifier sent with metadata requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Metadata request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    vec![
        ".github".to_string(),
        "node_modules".to_string(),
        ".git".to_string(),
    ]
}

fn default_fallback_branch() -> String {
    "master".to_string()
}

fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir().join("docs-repo")
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "llms-txt-generator".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude_dirs: default_exclude_dirs(),
            fallback_branch: default_fallback_branch(),
            scratch_dir: default_scratch_dir(),
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `llmstxt.toml` from `dir` or return defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check whether a directory name is excluded from collection
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|dir| dir == name)
    }
}
