//! Core of partscope: model selection domain, ports, the initialization
//! cascade, the AI engine facade and question handling.
//!
//! This crate performs no process spawning and no filesystem scanning.
//! Adapters in `partscope-runtime` implement the ports.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod question;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    GpuLayers, HardwareProfile, ModelCandidate, RuntimeParams, SamplingParams, SelectionOutcome,
    detect_quant_tag, estimate_params_b, quant_rank,
};
pub use ports::{
    CompletionError, CompletionHandle, CompletionRuntimePort, CoreError,
    ENGINE_UNAVAILABLE_MESSAGE, FixedHardwareProbe, HardwareProbePort, LoadRequest,
    ModelCatalogPort,
};
pub use services::{
    AiEngine, Answer, CascadeAttempt, CascadeReady, CascadeState, EngineStatus,
    InitializationCascade, select_model,
};
pub use settings::{EngineSettings, HARDWARE_CONFIG_FILE, SettingsError};

#[cfg(test)]
use tokio_test as _;
