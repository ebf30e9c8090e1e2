//! Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::CoefficientTable;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Model selection.
    pub model: ModelConfig,
    /// Output formatting.
    pub output: OutputConfig,
}

/// Model selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Built-in coefficient table version.
    pub version: String,
    /// Optional path to a coefficient table TOML overriding the built-in.
    pub table_path: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: "baseline-v1".to_string(),
            table_path: None,
        }
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places when printing probabilities.
    pub decimals: usize,
    /// Colorize the verdict line.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Create a sample configuration file.
    pub fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Config::default();
        config.save_to_file(path)
    }

    /// Resolve the coefficient table this configuration selects.
    ///
    /// A `table_path` wins over the built-in version name.
    pub fn coefficient_table(&self) -> Result<CoefficientTable> {
        if let Some(ref path) = self.model.table_path {
            return CoefficientTable::from_file(path);
        }

        match self.model.version.as_str() {
            "baseline-v1" => Ok(CoefficientTable::baseline()),
            other => anyhow::bail!("Unknown coefficient table version: {}", other),
        }
    }
}

/// Load configuration from file or create default.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    if path.as_ref().exists() {
        Config::from_file(path)
    } else {
        Ok(Config::default())
    }
}
