//! Scan command handler.

use anyhow::Result;
use partscope_core::ModelCandidate;

use crate::bootstrap::CliContext;

const BYTES_PER_GB: f64 = 1_000_000_000.0;

/// List the model files in the configured models directory.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let dir = &ctx.settings.models_dir;
    let candidates = ctx.catalog.scan(dir);
    if candidates.is_empty() {
        println!("No .gguf models found under: {}", dir.display());
        return Ok(());
    }

    println!("Models in {}:", dir.display());
    for candidate in &candidates {
        println!("{}", format_candidate(candidate));
    }
    Ok(())
}

/// One listing line for a candidate.
pub fn format_candidate(candidate: &ModelCandidate) -> String {
    let quant = if candidate.quant_tag().is_empty() {
        "-"
    } else {
        candidate.quant_tag()
    };
    #[allow(clippy::cast_precision_loss)]
    let size_gb = candidate.file_size_bytes() as f64 / BYTES_PER_GB;
    let mut line = format!(
        "  {}  quant={} rank={} params={}B size={:.2}GB",
        candidate.file_name(),
        quant,
        candidate.quant_rank(),
        candidate.param_size_b(),
        size_gb
    );
    if let Some(aux) = candidate.aux_projection_path() {
        line.push_str(&format!(" mmproj={}", aux.display()));
    }
    line
}
