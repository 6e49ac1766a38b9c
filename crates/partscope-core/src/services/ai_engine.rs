//! AI engine facade.
//!
//! Owns the single live model of the process. `init` runs the full
//! scan, probe, select and cascade pipeline under the engine lock, so
//! concurrent callers serialize and only the first one loads a model.
//! Completions borrow the live handle through the same lock.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::cascade::InitializationCascade;
use super::selector::select_model;
use crate::domain::{ModelCandidate, RuntimeParams, SelectionOutcome};
use crate::ports::{
    CompletionHandle, CompletionRuntimePort, CoreError, HardwareProbePort, ModelCatalogPort,
};
use crate::question::{
    build_datasheet_prompt, build_prompt, clean_response, extract_component_name,
    is_datasheet_query,
};
use crate::settings::EngineSettings;

/// Summary of the loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStatus {
    pub model: String,
    pub model_path: PathBuf,
    pub params: RuntimeParams,
    pub vram_mb: u64,
    /// Load attempts that failed before the model came up.
    pub failed_attempts: usize,
}

/// Reply to a user question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub answer: String,
    pub model: String,
    /// Part name pulled from a datasheet question, if any.
    pub component: Option<String>,
    pub datasheet_query: bool,
}

#[derive(Debug)]
struct LiveModel {
    handle: Box<dyn CompletionHandle>,
    model: ModelCandidate,
    status: EngineStatus,
}

/// Mutex-guarded owner of the live completion handle.
pub struct AiEngine {
    runtime: Arc<dyn CompletionRuntimePort>,
    probe: Arc<dyn HardwareProbePort>,
    catalog: Arc<dyn ModelCatalogPort>,
    settings: EngineSettings,
    live: Mutex<Option<LiveModel>>,
}

impl AiEngine {
    pub fn new(
        runtime: Arc<dyn CompletionRuntimePort>,
        probe: Arc<dyn HardwareProbePort>,
        catalog: Arc<dyn ModelCatalogPort>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            runtime,
            probe,
            catalog,
            settings,
            live: Mutex::new(None),
        }
    }

    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Bring a model online, or return the status of the one already live.
    pub async fn init(&self) -> Result<EngineStatus, CoreError> {
        let mut live = self.live.lock().await;
        if let Some(current) = live.as_ref() {
            debug!(model = %current.status.model, "AI engine already initialized");
            return Ok(current.status.clone());
        }

        self.settings.validate()?;

        let catalog = self.catalog.scan(&self.settings.models_dir);
        info!(
            dir = %self.settings.models_dir.display(),
            count = catalog.len(),
            "Scanned model catalog"
        );

        let hardware = self.probe.profile();
        if !hardware.has_accelerator() {
            info!("No accelerator memory detected, selecting for CPU");
        }

        let candidate = select_model(
            &catalog,
            hardware,
            self.settings.preferred_model.as_deref(),
        )?;
        let outcome = SelectionOutcome::new(candidate, self.settings.runtime);

        let mut cascade = InitializationCascade::new(self.runtime.as_ref(), self.settings.sampling);
        let ready = cascade.run(&outcome, &catalog).await?;

        let status = EngineStatus {
            model: ready.model.file_name(),
            model_path: ready.model.path().to_path_buf(),
            params: ready.params,
            vram_mb: hardware.vram_mb,
            failed_attempts: ready.failed_attempts(),
        };
        info!(model = %status.model, state = %cascade.state(), "AI engine ready");
        *live = Some(LiveModel {
            handle: ready.handle,
            model: ready.model,
            status: status.clone(),
        });
        Ok(status)
    }

    /// Release the live model. Shutting down an idle engine is a no-op.
    pub async fn shutdown(&self) -> Result<(), CoreError> {
        let taken = self.live.lock().await.take();
        let Some(mut current) = taken else {
            return Ok(());
        };
        info!(model = %current.model.file_name(), "Shutting down AI engine");
        current.handle.shutdown().await?;
        Ok(())
    }

    pub async fn is_ready(&self) -> bool {
        self.live.lock().await.is_some()
    }

    pub async fn status(&self) -> Option<EngineStatus> {
        self.live.lock().await.as_ref().map(|l| l.status.clone())
    }

    /// Complete a raw prompt on the live model.
    pub async fn complete(&self, prompt: &str) -> Result<String, CoreError> {
        let live = self.live.lock().await;
        let current = live.as_ref().ok_or(CoreError::EngineUnavailable)?;
        Ok(current.handle.invoke(prompt).await?)
    }

    /// Answer a user question.
    ///
    /// Datasheet questions get the datasheet prompt with `context` as the
    /// analyzed datasheet text; other questions get the general prompt.
    pub async fn answer(&self, question: &str, context: Option<&str>) -> Result<Answer, CoreError> {
        let datasheet_query = is_datasheet_query(question);
        let component = if datasheet_query {
            extract_component_name(question)
        } else {
            None
        };
        let prompt = if datasheet_query {
            build_datasheet_prompt(question, context, component.as_deref())
        } else {
            build_prompt(question, context)
        };

        let live = self.live.lock().await;
        let current = live.as_ref().ok_or(CoreError::EngineUnavailable)?;
        debug!(model = %current.status.model, datasheet_query, ?component, "Answering question");
        let raw = match current.handle.invoke(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Completion failed: {e}");
                return Err(e.into());
            }
        };

        Ok(Answer {
            answer: clean_response(&raw),
            model: current.status.model.clone(),
            component,
            datasheet_query,
        })
    }
}
