//! Runtime parameters and the selector's result.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidate::ModelCandidate;

/// Default context length in tokens.
pub const DEFAULT_N_CTX: u32 = 8192;

/// Default worker thread count.
pub const DEFAULT_N_THREADS: u32 = 4;

/// Upper bound on the context length used by the reduced-context fallback.
pub const REDUCED_CTX_CEILING: u32 = 4096;

/// Lower bound on the context length used by the reduced-context fallback.
pub const REDUCED_CTX_FLOOR: u32 = 2048;

/// How many model layers to offload to the accelerator.
///
/// Serialized as the integer convention used by `hardware_config.json`:
/// `-1` (or any negative value) means all layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum GpuLayers {
    /// Offload every layer the runtime can place on the accelerator.
    #[default]
    All,
    /// Offload exactly this many layers (0 = CPU only).
    Count(u32),
}

impl GpuLayers {
    pub const CPU_ONLY: Self = Self::Count(0);

    pub const fn is_cpu_only(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl From<i64> for GpuLayers {
    fn from(value: i64) -> Self {
        if value < 0 {
            Self::All
        } else {
            Self::Count(u32::try_from(value).unwrap_or(u32::MAX))
        }
    }
}

impl From<GpuLayers> for i64 {
    fn from(value: GpuLayers) -> Self {
        match value {
            GpuLayers::All => -1,
            GpuLayers::Count(n) => Self::from(n),
        }
    }
}

impl fmt::Display for GpuLayers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Parameters handed to the runtime's load operation.
///
/// This is also the schema of `hardware_config.json`; missing keys keep
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeParams {
    pub gpu_layers: GpuLayers,
    pub n_ctx: u32,
    pub n_threads: u32,
}

impl Default for RuntimeParams {
    fn default() -> Self {
        Self {
            gpu_layers: GpuLayers::All,
            n_ctx: DEFAULT_N_CTX,
            n_threads: DEFAULT_N_THREADS,
        }
    }
}

impl RuntimeParams {
    /// Same parameters with accelerator offload disabled.
    #[must_use]
    pub const fn cpu_only(self) -> Self {
        Self {
            gpu_layers: GpuLayers::CPU_ONLY,
            ..self
        }
    }

    /// CPU-only parameters with the context clamped into
    /// `REDUCED_CTX_FLOOR..=REDUCED_CTX_CEILING`.
    #[must_use]
    pub fn reduced_context(self) -> Self {
        Self {
            gpu_layers: GpuLayers::CPU_ONLY,
            n_ctx: self.n_ctx.min(REDUCED_CTX_CEILING).max(REDUCED_CTX_FLOOR),
            n_threads: self.n_threads,
        }
    }
}

/// Sampling settings forwarded with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 0.95,
            top_k: 40,
        }
    }
}

/// The selector's choice plus the parameters used for the first load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub candidate: ModelCandidate,
    pub params: RuntimeParams,
}

impl SelectionOutcome {
    pub const fn new(candidate: ModelCandidate, params: RuntimeParams) -> Self {
        Self { candidate, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_context_clamps() {
        let params = RuntimeParams::default();
        let reduced = params.reduced_context();
        assert_eq!(reduced.n_ctx, 4096);
        assert!(reduced.gpu_layers.is_cpu_only());
        assert_eq!(reduced.n_threads, params.n_threads);

        let small = RuntimeParams {
            n_ctx: 1024,
            ..RuntimeParams::default()
        };
        assert_eq!(small.reduced_context().n_ctx, 2048);

        let mid = RuntimeParams {
            n_ctx: 3000,
            ..RuntimeParams::default()
        };
        assert_eq!(mid.reduced_context().n_ctx, 3000);
    }

    #[test]
    fn test_gpu_layers_integer_convention() {
        assert_eq!(GpuLayers::from(-1), GpuLayers::All);
        assert_eq!(GpuLayers::from(0), GpuLayers::CPU_ONLY);
        assert_eq!(GpuLayers::from(35), GpuLayers::Count(35));
        assert_eq!(i64::from(GpuLayers::All), -1);
    }

    #[test]
    fn test_runtime_params_partial_json() {
        let params: RuntimeParams = serde_json::from_str(r#"{"n_ctx": 4096}"#).unwrap();
        assert_eq!(params.n_ctx, 4096);
        assert_eq!(params.n_threads, DEFAULT_N_THREADS);
        assert_eq!(params.gpu_layers, GpuLayers::All);

        let params: RuntimeParams =
            serde_json::from_str(r#"{"gpu_layers": 20, "n_threads": 8}"#).unwrap();
        assert_eq!(params.gpu_layers, GpuLayers::Count(20));
        assert_eq!(params.n_threads, 8);
    }
}
