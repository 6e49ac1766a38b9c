//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Hardware probe and model catalog (via partscope-runtime)
//! - llama-server completion runtime (via partscope-runtime, on demand)
//! - Engine settings and the AI engine (via partscope-core)

use std::path::PathBuf;
use std::sync::Arc;

use partscope_core::{AiEngine, EngineSettings, HardwareProbePort, ModelCatalogPort};
use partscope_runtime::{FsModelCatalog, LlamaServerRuntime, NvidiaSmiProbe};
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI, taken from global flags.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `--models-dir` override.
    pub models_dir: Option<PathBuf>,
    /// Path of the hardware config file.
    pub hardware_config: PathBuf,
}

impl CliConfig {
    /// Resolve engine settings: defaults, hardware config, environment,
    /// then the flags in this config.
    pub fn settings(&self) -> EngineSettings {
        let settings = EngineSettings::with_defaults()
            .with_hardware_config(&self.hardware_config)
            .with_env();
        match &self.models_dir {
            Some(dir) => settings.with_models_dir(dir),
            None => settings,
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub settings: EngineSettings,
    pub probe: Arc<dyn HardwareProbePort>,
    pub catalog: Arc<dyn ModelCatalogPort>,
}

impl CliContext {
    /// Build an AI engine, preferring `model` over the configured model.
    ///
    /// The llama-server binary is resolved here rather than at bootstrap so
    /// that commands without a model work when it is not installed.
    pub fn engine(&self, model: Option<String>) -> Result<AiEngine, CliError> {
        let runtime = LlamaServerRuntime::discover()?;
        debug!(binary = %runtime.binary().display(), "Resolved llama-server");

        let settings = match model {
            Some(name) => self.settings.clone().with_preferred_model(Some(name)),
            None => self.settings.clone(),
        };
        Ok(AiEngine::new(
            Arc::new(runtime),
            Arc::clone(&self.probe),
            Arc::clone(&self.catalog),
            settings,
        ))
    }
}

/// Bootstrap the CLI context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let settings = config.settings();
    settings
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!(?settings, "Resolved engine settings");

    Ok(CliContext {
        settings,
        probe: Arc::new(NvidiaSmiProbe::new()),
        catalog: Arc::new(FsModelCatalog::new()),
    })
}
