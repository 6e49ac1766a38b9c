//! Initialization cascade: bring a selected model online, degrading the
//! load parameters on each failure and finally trying other catalog entries.
//!
//! ```text
//! Idle -> TryPrimary -> TryCpuOnly -> TryReducedContext -> TryAlternative* -> Ready
//!                                                                          \-> Failed
//! ```
//!
//! Every stage runs at most once, except `TryAlternative`, which walks the
//! remaining candidates smallest file first and stops at the first success.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info};

use crate::domain::{ModelCandidate, RuntimeParams, SamplingParams, SelectionOutcome};
use crate::ports::{CompletionHandle, CompletionRuntimePort, CoreError, LoadRequest};

/// States of the cascade state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CascadeState {
    Idle,
    /// Selected model with the configured accelerator offload.
    TryPrimary,
    /// Selected model, accelerator disabled.
    TryCpuOnly,
    /// Selected model, accelerator disabled, clamped context.
    TryReducedContext,
    /// Another catalog entry, accelerator disabled, clamped context.
    TryAlternative,
    Ready,
    Failed,
}

impl CascadeState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TryPrimary => "primary",
            Self::TryCpuOnly => "cpu-only",
            Self::TryReducedContext => "reduced-context",
            Self::TryAlternative => "alternative",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CascadeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeAttempt {
    pub state: CascadeState,
    pub model_path: PathBuf,
    pub params: RuntimeParams,
    /// `None` when the attempt succeeded.
    pub error: Option<String>,
}

impl CascadeAttempt {
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// A successfully initialized model.
#[derive(Debug)]
pub struct CascadeReady {
    pub handle: Box<dyn CompletionHandle>,
    pub model: ModelCandidate,
    pub params: RuntimeParams,
    pub attempts: Vec<CascadeAttempt>,
}

impl CascadeReady {
    /// Number of attempts that failed before the model came up.
    pub fn failed_attempts(&self) -> usize {
        self.attempts.iter().filter(|a| !a.succeeded()).count()
    }
}

/// Single downward-degrading initialization pass over a completion runtime.
pub struct InitializationCascade<'a> {
    runtime: &'a dyn CompletionRuntimePort,
    sampling: SamplingParams,
    state: CascadeState,
    attempts: Vec<CascadeAttempt>,
}

impl<'a> InitializationCascade<'a> {
    pub fn new(runtime: &'a dyn CompletionRuntimePort, sampling: SamplingParams) -> Self {
        Self {
            runtime,
            sampling,
            state: CascadeState::Idle,
            attempts: Vec::new(),
        }
    }

    /// Current state of the machine.
    pub const fn state(&self) -> CascadeState {
        self.state
    }

    /// Attempts made so far, in order.
    pub fn attempts(&self) -> &[CascadeAttempt] {
        &self.attempts
    }

    /// Run the cascade for `outcome`, using `catalog` for alternatives.
    ///
    /// Returns [`CoreError::InitializationExhausted`] when every stage fails.
    pub async fn run(
        &mut self,
        outcome: &SelectionOutcome,
        catalog: &[ModelCandidate],
    ) -> Result<CascadeReady, CoreError> {
        let primary = &outcome.candidate;
        let params = outcome.params;
        let reduced = params.reduced_context();

        let stages = [
            (CascadeState::TryPrimary, params),
            (CascadeState::TryCpuOnly, params.cpu_only()),
            (CascadeState::TryReducedContext, reduced),
        ];
        for (state, stage_params) in stages {
            if let Some(handle) = self.attempt(state, primary, stage_params).await {
                return Ok(self.ready(handle, primary.clone(), stage_params));
            }
        }

        let mut alternatives: Vec<&ModelCandidate> = catalog
            .iter()
            .filter(|c| c.path() != primary.path())
            .collect();
        alternatives.sort_by_key(|c| c.file_size_bytes());

        for alternative in alternatives {
            if let Some(handle) = self
                .attempt(CascadeState::TryAlternative, alternative, reduced)
                .await
            {
                return Ok(self.ready(handle, alternative.clone(), reduced));
            }
        }

        self.state = CascadeState::Failed;
        error!(
            attempts = self.attempts.len(),
            "Failed to initialize any model, AI engine will be unavailable"
        );
        Err(CoreError::InitializationExhausted {
            attempts: self.attempts.len(),
        })
    }

    async fn attempt(
        &mut self,
        state: CascadeState,
        candidate: &ModelCandidate,
        params: RuntimeParams,
    ) -> Option<Box<dyn CompletionHandle>> {
        self.state = state;
        info!(
            stage = %state,
            model = %candidate.file_name(),
            n_ctx = params.n_ctx,
            n_threads = params.n_threads,
            gpu_layers = %params.gpu_layers,
            "Attempting model initialization"
        );

        let request = LoadRequest::new(candidate.path(), params, self.sampling)
            .with_aux_projection(candidate.aux_projection_path());
        match self.runtime.load(&request).await {
            Ok(handle) => {
                info!(stage = %state, model = %candidate.file_name(), "Model initialized");
                self.record(state, candidate, params, None);
                Some(handle)
            }
            Err(e) => {
                error!(stage = %state, model = %candidate.file_name(), "Model initialization failed: {e}");
                self.record(state, candidate, params, Some(e.to_string()));
                None
            }
        }
    }

    fn record(
        &mut self,
        state: CascadeState,
        candidate: &ModelCandidate,
        params: RuntimeParams,
        error: Option<String>,
    ) {
        self.attempts.push(CascadeAttempt {
            state,
            model_path: candidate.path().to_path_buf(),
            params,
            error,
        });
    }

    fn ready(
        &mut self,
        handle: Box<dyn CompletionHandle>,
        model: ModelCandidate,
        params: RuntimeParams,
    ) -> CascadeReady {
        self.state = CascadeState::Ready;
        CascadeReady {
            handle,
            model,
            params,
            attempts: self.attempts.clone(),
        }
    }
}
