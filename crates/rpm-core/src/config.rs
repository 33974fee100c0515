//! Generator configuration.
//!
//! Settings come from an optional TOML file (explicit path, or
//! `$XDG_CONFIG_HOME/rpmgen/config.toml`) with the API key overridable from
//! the environment. A missing API key is not an error here; it surfaces when a
//! generation is attempted.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::{
    error::{Result, ResultExt, RpmError},
    prompt::DEFAULT_TEMPERATURE,
};

/// Model used unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const CONFIG_PREFIX: &str = "rpmgen";
const CONFIG_FILE: &str = "config.toml";

/// Settings for the generation client.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Credential for the generation service
    pub api_key: Option<String>,

    /// Model identifier, e.g. `gemini-2.5-flash`
    pub model: String,

    /// Base URL of the service
    pub endpoint: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Optional request timeout; none means the network layer decides
    pub timeout_secs: Option<u64>,

    /// Reject replies whose meeting count differs from the form
    pub strict_meeting_count: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: None,
            strict_meeting_count: true,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("strict_meeting_count", &self.strict_meeting_count)
            .finish()
    }
}

impl GeneratorConfig {
    /// Load configuration from `path`, or from the XDG config file if present,
    /// then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `RpmError::FileSystem` if an explicit file cannot be read and
    /// `RpmError::Configuration` if a file is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path(),
        };

        let mut config = match file {
            Some(file) => {
                debug!("Loading configuration from {}", file.display());
                Self::from_file(&file)?
            }
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RpmError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
            .with_context_lazy(|| format!("Invalid configuration file {}", path.display()))
    }

    fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Override settings from environment variables looked up through
    /// `lookup`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = API_KEY_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()));
        if let Some(key) = from_env {
            self.api_key = Some(key);
        }
    }

    /// Returns the XDG config file path if such a file exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_PREFIX).find_config_file(CONFIG_FILE)
    }
}
