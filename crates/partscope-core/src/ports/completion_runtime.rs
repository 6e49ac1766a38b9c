//! Completion runtime port.
//!
//! The language model runtime is opaque to the engine: it can load a model
//! file with given parameters, and a loaded handle can complete a prompt.
//! Nothing else about the runtime is assumed.

use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{RuntimeParams, SamplingParams};

/// Errors reported by a completion runtime.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The model could not be loaded with the requested parameters.
    #[error("Failed to load {path}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    /// The loaded model failed to produce a completion.
    #[error("Completion failed: {0}")]
    InvocationFailed(String),

    /// The handle was already shut down.
    #[error("Model handle is closed")]
    Closed,
}

impl CompletionError {
    pub fn load_failed(path: &Path, reason: impl fmt::Display) -> Self {
        Self::LoadFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Everything a runtime needs to load a model.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub model_path: PathBuf,
    pub params: RuntimeParams,
    pub sampling: SamplingParams,
    /// Multimodal projection file paired with the model, if any.
    pub aux_projection_path: Option<PathBuf>,
}

impl LoadRequest {
    pub fn new(model_path: impl Into<PathBuf>, params: RuntimeParams, sampling: SamplingParams) -> Self {
        Self {
            model_path: model_path.into(),
            params,
            sampling,
            aux_projection_path: None,
        }
    }

    #[must_use]
    pub fn with_aux_projection(mut self, aux: Option<&Path>) -> Self {
        self.aux_projection_path = aux.map(Path::to_path_buf);
        self
    }
}

/// A loaded model ready to complete prompts.
#[async_trait]
pub trait CompletionHandle: Send + Sync + fmt::Debug {
    /// Complete `prompt` and return the generated text.
    async fn invoke(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Release the runtime resources behind this handle.
    ///
    /// Invoking after shutdown returns [`CompletionError::Closed`].
    async fn shutdown(&mut self) -> Result<(), CompletionError>;
}

/// Port for loading models into a completion runtime.
#[async_trait]
pub trait CompletionRuntimePort: Send + Sync {
    /// Load the model described by `request`.
    async fn load(&self, request: &LoadRequest) -> Result<Box<dyn CompletionHandle>, CompletionError>;
}
