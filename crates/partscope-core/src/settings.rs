//! Engine settings and their resolution.
//!
//! Resolution order (later wins):
//! 1. Built-in defaults
//! 2. `hardware_config.json` (runtime keys only)
//! 3. Environment (`MODEL_DIR`, `LLM_MODEL`)
//! 4. Explicit overrides from the caller (CLI flags)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{RuntimeParams, SamplingParams};

/// Environment variable naming the models directory.
pub const MODEL_DIR_ENV: &str = "MODEL_DIR";

/// Environment variable naming the preferred model (filename prefix).
pub const LLM_MODEL_ENV: &str = "LLM_MODEL";

/// Models directory used when nothing else is configured.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Default hardware configuration filename, looked up in the working directory.
pub const HARDWARE_CONFIG_FILE: &str = "hardware_config.json";

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed hardware config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Settings consumed by the selection engine and the AI engine facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Directory scanned for model files.
    pub models_dir: PathBuf,
    /// Filename prefix that overrides heuristic selection.
    pub preferred_model: Option<String>,
    /// Parameters for the first load attempt.
    pub runtime: RuntimeParams,
    /// Sampling settings for completions.
    pub sampling: SamplingParams,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl EngineSettings {
    /// Create settings with built-in defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            preferred_model: None,
            runtime: RuntimeParams::default(),
            sampling: SamplingParams::default(),
        }
    }

    /// Apply `MODEL_DIR` and `LLM_MODEL` from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` as the variable source.
    ///
    /// Blank values are ignored.
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = non_blank(lookup(MODEL_DIR_ENV)) {
            self.models_dir = PathBuf::from(dir);
        }
        if let Some(model) = non_blank(lookup(LLM_MODEL_ENV)) {
            self.preferred_model = Some(model);
        }
        self
    }

    /// Overlay runtime parameters from a hardware config file.
    ///
    /// A missing file leaves the settings unchanged. A file that cannot be
    /// read or parsed is logged and ignored.
    #[must_use]
    pub fn with_hardware_config(mut self, path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No hardware config found, using defaults");
            return self;
        }
        match load_hardware_config(path) {
            Ok(params) => {
                debug!(path = %path.display(), ?params, "Loaded hardware config");
                self.runtime = params;
            }
            Err(e) => warn!("Could not load hardware config: {e}"),
        }
        self
    }

    /// Override the models directory.
    #[must_use]
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Override the preferred model. Blank names clear the preference.
    #[must_use]
    pub fn with_preferred_model(mut self, name: Option<String>) -> Self {
        self.preferred_model = non_blank(name);
        self
    }

    /// Check that the runtime parameters are usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.runtime.n_ctx == 0 {
            return Err(SettingsError::Invalid("n_ctx must be positive".into()));
        }
        if self.runtime.n_threads == 0 {
            return Err(SettingsError::Invalid("n_threads must be positive".into()));
        }
        if !(0.0..=2.0).contains(&self.sampling.temperature) {
            return Err(SettingsError::Invalid(format!(
                "temperature must be between 0 and 2, got {}",
                self.sampling.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.sampling.top_p) {
            return Err(SettingsError::Invalid(format!(
                "top_p must be between 0 and 1, got {}",
                self.sampling.top_p
            )));
        }
        Ok(())
    }
}

/// Read runtime parameters from a `hardware_config.json` file.
///
/// Recognized keys are `gpu_layers`, `n_ctx` and `n_threads`; missing keys
/// keep their defaults and unknown keys are ignored.
pub fn load_hardware_config(path: &Path) -> Result<RuntimeParams, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
