//! Domain types for model selection.
//!
//! Pure data and pure functions; no I/O.

pub mod candidate;
pub mod hardware;
pub mod params;
pub mod quant;
pub mod selection;

pub use candidate::ModelCandidate;
pub use hardware::HardwareProfile;
pub use params::estimate_params_b;
pub use quant::{DEFAULT_QUANT_RANK, MAX_QUANT_RANK, detect_quant_tag, quant_rank};
pub use selection::{
    DEFAULT_N_CTX, DEFAULT_N_THREADS, GpuLayers, REDUCED_CTX_CEILING, REDUCED_CTX_FLOOR,
    RuntimeParams, SamplingParams, SelectionOutcome,
};
