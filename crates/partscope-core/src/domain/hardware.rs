//! Probed hardware capability.

use serde::{Deserialize, Serialize};

/// Accelerator memory available to the model runtime.
///
/// A value of 0 means no accelerator was detected (or probing failed), and
/// the selector then assumes a CPU-only machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub vram_mb: u64,
}

impl HardwareProfile {
    pub const fn new(vram_mb: u64) -> Self {
        Self { vram_mb }
    }

    /// Profile for a machine without an accelerator.
    pub const fn cpu_only() -> Self {
        Self { vram_mb: 0 }
    }

    pub const fn has_accelerator(&self) -> bool {
        self.vram_mb > 0
    }

    /// Quant rank the selector aims for on this hardware.
    pub const fn target_quant_rank(&self) -> u8 {
        match self.vram_mb {
            20_000.. => 4,
            12_000.. => 3,
            8_000.. => 2,
            6_000.. => 1,
            _ => 0,
        }
    }

    /// Largest parameter count (in billions) the selector will consider.
    pub const fn max_param_b(&self) -> u32 {
        match self.vram_mb {
            16_000.. => 13,
            12_000.. => 12,
            6_000.. => 7,
            4_096.. => 4,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_quant_rank_thresholds() {
        assert_eq!(HardwareProfile::new(24_000).target_quant_rank(), 4);
        assert_eq!(HardwareProfile::new(20_000).target_quant_rank(), 4);
        assert_eq!(HardwareProfile::new(19_999).target_quant_rank(), 3);
        assert_eq!(HardwareProfile::new(12_000).target_quant_rank(), 3);
        assert_eq!(HardwareProfile::new(10_000).target_quant_rank(), 2);
        assert_eq!(HardwareProfile::new(8_000).target_quant_rank(), 2);
        assert_eq!(HardwareProfile::new(6_000).target_quant_rank(), 1);
        assert_eq!(HardwareProfile::new(5_999).target_quant_rank(), 0);
        assert_eq!(HardwareProfile::cpu_only().target_quant_rank(), 0);
    }

    #[test]
    fn test_max_param_thresholds() {
        assert_eq!(HardwareProfile::new(16_000).max_param_b(), 13);
        assert_eq!(HardwareProfile::new(15_999).max_param_b(), 12);
        assert_eq!(HardwareProfile::new(12_000).max_param_b(), 12);
        assert_eq!(HardwareProfile::new(8_000).max_param_b(), 7);
        assert_eq!(HardwareProfile::new(6_000).max_param_b(), 7);
        assert_eq!(HardwareProfile::new(5_999).max_param_b(), 4);
        assert_eq!(HardwareProfile::new(4_096).max_param_b(), 4);
        assert_eq!(HardwareProfile::new(4_095).max_param_b(), 3);
        assert_eq!(HardwareProfile::cpu_only().max_param_b(), 3);
    }
}
