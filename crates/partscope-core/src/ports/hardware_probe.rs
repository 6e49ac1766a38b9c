//! Hardware probe port for accelerator memory detection.
//!
//! Core owns the trait; the subprocess-backed implementation lives in
//! `partscope-runtime`. Probing is best-effort: implementations report 0 on
//! any failure instead of returning an error.

use crate::domain::HardwareProfile;

/// Port for querying accelerator memory.
pub trait HardwareProbePort: Send + Sync {
    /// Total memory of the first accelerator in MB, or 0 if none is usable.
    fn probe_vram_mb(&self) -> u64;

    /// Convenience wrapper producing a [`HardwareProfile`].
    fn profile(&self) -> HardwareProfile {
        HardwareProfile::new(self.probe_vram_mb())
    }
}

/// Probe that always reports the same amount of memory.
///
/// Used by tests and by callers that already know the hardware (e.g. a
/// `--vram` override on the command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHardwareProbe {
    vram_mb: u64,
}

impl FixedHardwareProbe {
    pub const fn new(vram_mb: u64) -> Self {
        Self { vram_mb }
    }
}

impl HardwareProbePort for FixedHardwareProbe {
    fn probe_vram_mb(&self) -> u64 {
        self.vram_mb
    }
}
