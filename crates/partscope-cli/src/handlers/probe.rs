//! Probe command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the detected accelerator memory.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let profile = ctx.probe.profile();
    if profile.has_accelerator() {
        println!("VRAM: {} MB", profile.vram_mb);
    } else {
        println!("VRAM: 0 MB (no GPU detected, CPU only)");
    }
    Ok(())
}
