//! End-to-end selection tests through the public API: candidates built from
//! filenames, selection against fixed hardware, and the cascade on top.

use async_trait::async_trait;
use partscope_core::{
    CascadeState, CompletionError, CompletionHandle, CompletionRuntimePort, FixedHardwareProbe,
    HardwareProbePort, InitializationCascade, LoadRequest, ModelCandidate, RuntimeParams,
    SamplingParams, SelectionOutcome, select_model,
};

#[derive(Debug)]
struct NullHandle;

#[async_trait]
impl CompletionHandle for NullHandle {
    async fn invoke(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(String::new())
    }

    async fn shutdown(&mut self) -> Result<(), CompletionError> {
        Ok(())
    }
}

/// Accepts loads only when the context fits in `max_ctx`.
struct ContextLimitedRuntime {
    max_ctx: u32,
}

#[async_trait]
impl CompletionRuntimePort for ContextLimitedRuntime {
    async fn load(
        &self,
        request: &LoadRequest,
    ) -> Result<Box<dyn CompletionHandle>, CompletionError> {
        if request.params.n_ctx > self.max_ctx {
            return Err(CompletionError::load_failed(
                &request.model_path,
                "context too large",
            ));
        }
        Ok(Box::new(NullHandle))
    }
}

fn catalog() -> Vec<ModelCandidate> {
    vec![
        ModelCandidate::new("/models/small-4b-Q4_K_M.gguf", 2_500_000_000),
        ModelCandidate::new("/models/mid-7b-Q5_K_M.gguf", 4_500_000_000),
        ModelCandidate::new("/models/large-13b-Q2_K.gguf", 7_000_000_000),
    ]
}

#[test]
fn test_candidate_fields_from_filename() {
    let models = catalog();
    assert_eq!(models[1].quant_tag(), "Q5_K_M");
    assert_eq!(models[1].quant_rank(), 3);
    assert_eq!(models[1].param_size_b(), 7);
    assert_eq!(models[2].quant_rank(), 0);
    assert_eq!(models[2].param_size_b(), 13);
}

#[test]
fn test_selection_across_hardware_tiers() {
    let models = catalog();
    let pick = |vram: u64| {
        let probe = FixedHardwareProbe::new(vram);
        select_model(&models, probe.profile(), None)
            .unwrap()
            .param_size_b()
    };
    assert_eq!(pick(0), 4);
    assert_eq!(pick(6_000), 7);
    assert_eq!(pick(10_000), 7);
    assert_eq!(pick(16_000), 13);
    assert_eq!(pick(24_000), 13);
}

#[tokio::test]
async fn test_select_then_cascade_to_reduced_context() {
    let models = catalog();
    let chosen = select_model(&models, FixedHardwareProbe::new(10_000).profile(), None).unwrap();
    let outcome = SelectionOutcome::new(chosen, RuntimeParams::default());

    let runtime = ContextLimitedRuntime { max_ctx: 4096 };
    let mut cascade = InitializationCascade::new(&runtime, SamplingParams::default());
    let ready = cascade.run(&outcome, &models).await.unwrap();

    assert_eq!(cascade.state(), CascadeState::Ready);
    assert_eq!(ready.model.file_name(), "mid-7b-Q5_K_M.gguf");
    assert_eq!(ready.failed_attempts(), 2);
    assert_eq!(ready.params.n_ctx, 4096);
    assert!(ready.params.gpu_layers.is_cpu_only());
}
