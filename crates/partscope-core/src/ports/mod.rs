//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process spawning or filesystem access in core
//! - Best-effort sensors (probe, catalog) are infallible by signature
//! - The completion runtime is opaque beyond load and invoke

pub mod completion_runtime;
pub mod hardware_probe;
pub mod model_catalog;

use thiserror::Error;

pub use completion_runtime::{CompletionError, CompletionHandle, CompletionRuntimePort, LoadRequest};
pub use hardware_probe::{FixedHardwareProbe, HardwareProbePort};
pub use model_catalog::{
    AUX_PROJECTION_EXTENSION, MODEL_FILE_EXTENSION, ModelCatalogPort, pair_aux_projection,
    pairing_base_token,
};

/// User-visible text for every fatal engine condition.
pub const ENGINE_UNAVAILABLE_MESSAGE: &str = "AI engine not available";

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, HTTP
/// statuses). Only the engine-level variants are fatal to a request.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog scan produced no usable model files.
    #[error("No model candidates found")]
    NoCandidates,

    /// Every initialization attempt in the cascade failed.
    #[error("All {attempts} model initialization attempts failed")]
    InitializationExhausted { attempts: usize },

    /// The engine has no live model (never initialized, or shut down).
    #[error("AI engine not available")]
    EngineUnavailable,

    /// A completion runtime operation failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Settings could not be loaded or are invalid.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}

impl CoreError {
    /// Whether this error means the AI engine cannot serve requests.
    #[must_use]
    pub const fn is_engine_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NoCandidates | Self::InitializationExhausted { .. } | Self::EngineUnavailable
        )
    }

    /// Message safe to show an end user.
    ///
    /// Engine-level failures collapse into a single "not available" message;
    /// everything else keeps its own description.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_engine_unavailable() {
            ENGINE_UNAVAILABLE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
