//! Select command handler.

use anyhow::Result;
use partscope_core::{HardwareProfile, SelectionOutcome, select_model};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the model the AI engine would load, without loading it.
pub fn execute(ctx: &CliContext, model: Option<String>, vram: Option<u64>) -> Result<()> {
    let candidates = ctx.catalog.scan(&ctx.settings.models_dir);
    let hardware = vram.map_or_else(|| ctx.probe.profile(), HardwareProfile::new);
    let preferred = model.or_else(|| ctx.settings.preferred_model.clone());

    let candidate =
        select_model(&candidates, hardware, preferred.as_deref()).map_err(CliError::from)?;
    let outcome = SelectionOutcome::new(candidate, ctx.settings.runtime);

    println!("Selected model: {}", outcome.candidate.file_name());
    println!("  path: {}", outcome.candidate.path().display());
    println!(
        "  VRAM: {} MB (target quant rank {}, max {}B params)",
        hardware.vram_mb,
        hardware.target_quant_rank(),
        hardware.max_param_b()
    );
    println!(
        "  GPU layers: {} | ctx: {} | threads: {}",
        outcome.params.gpu_layers, outcome.params.n_ctx, outcome.params.n_threads
    );
    Ok(())
}
