//! Configuration management for symptomcheck
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.symptomcheck/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{DiagnosisError, Result};
use crate::selector::DEFAULT_MAX_SUGGESTIONS;
use crate::service::DEFAULT_DELAY_MS;

/// Upper bound for the simulated latency
const MAX_DELAY_MS: u64 = 60_000;

/// Complete configuration for symptomcheck
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub classifier: ClassifierConfig,
    pub selector: SelectorConfig,
    pub display: DisplayConfig,
}

/// Diagnosis service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub delay_ms: u64,
}

/// Classifier configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Fixed seed for the random fallback; entropy when unset
    pub seed: Option<u64>,
}

/// Symptom selector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub max_suggestions: usize,
}

/// Terminal display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_verbosity: String,
    pub show_progress: bool,
    pub color_output: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            show_progress: true,
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".symptomcheck").join("config.toml"))
    }

    /// Directory for REPL history and other state
    pub fn state_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".symptomcheck"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.service.delay_ms > MAX_DELAY_MS {
            return Err(DiagnosisError::ConfigError(format!(
                "delay_ms must be at most {}",
                MAX_DELAY_MS
            )));
        }

        if self.selector.max_suggestions == 0 {
            return Err(DiagnosisError::ConfigError(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }

        match self.display.default_verbosity.as_str() {
            "quiet" | "normal" | "verbose" | "very_verbose" => {}
            _ => {
                return Err(DiagnosisError::ConfigError(format!(
                    "Invalid verbosity level: {}",
                    self.display.default_verbosity
                )))
            }
        }

        Ok(())
    }

    /// Apply command-line overrides, then re-validate
    pub fn apply_overrides(&mut self, delay_ms: Option<u64>, seed: Option<u64>) -> Result<()> {
        if let Some(delay_ms) = delay_ms {
            self.service.delay_ms = delay_ms;
        }
        if seed.is_some() {
            self.classifier.seed = seed;
        }
        self.validate()
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.service.delay_ms)
    }
}
