//! Builder for creating and configuring Generator instances.

use std::path::{Path, PathBuf};

use super::{GeminiBackend, GenerationBackend, Generator};
use crate::{config::GeneratorConfig, error::Result};

/// Builder for creating and configuring Generator instances.
pub struct GeneratorBuilder {
    config_path: Option<PathBuf>,
    config: Option<GeneratorConfig>,
    backend: Option<Box<dyn GenerationBackend>>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config_path: None,
            config: None,
            backend: None,
        }
    }

    /// Sets a custom configuration file path.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/rpmgen/config.toml` when that
    /// file exists and built-in defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `config` as is, skipping file and environment lookup.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the Gemini backend, e.g. with a test double.
    pub fn with_backend(mut self, backend: Box<dyn GenerationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns `RpmError::FileSystem` or `RpmError::Configuration` if the
    /// configuration file cannot be loaded, and `RpmError::Configuration` if
    /// the HTTP client cannot be created. A missing API key is not an error
    /// here.
    pub fn build(self) -> Result<Generator> {
        let config = match self.config {
            Some(config) => config,
            None => GeneratorConfig::load(self.config_path.as_deref())?,
        };

        let backend = match self.backend {
            Some(backend) => backend,
            None => Box::new(GeminiBackend::new(&config)?),
        };

        Ok(Generator::new(
            backend,
            config.temperature,
            config.strict_meeting_count,
        ))
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
