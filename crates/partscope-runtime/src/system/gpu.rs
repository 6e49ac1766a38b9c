//! Accelerator memory detection via `nvidia-smi`.

use std::process::Command;

use partscope_core::HardwareProbePort;
use tracing::{debug, warn};

const NVIDIA_SMI: &str = "nvidia-smi";
const QUERY_ARGS: [&str; 2] = ["--query-gpu=memory.total", "--format=csv,noheader,nounits"];

/// Hardware probe backed by the `nvidia-smi` command.
///
/// Only the first reported device counts. Any failure (missing binary,
/// non-zero exit, unparseable output) reports 0 MB.
#[derive(Debug, Clone)]
pub struct NvidiaSmiProbe {
    program: String,
}

impl NvidiaSmiProbe {
    pub fn new() -> Self {
        Self::with_program(NVIDIA_SMI)
    }

    /// Probe using a different executable name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn query(&self) -> Option<u64> {
        let output = match Command::new(&self.program).args(QUERY_ARGS).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(program = %self.program, error = %e, "GPU query could not run");
                return None;
            }
        };

        if !output.status.success() {
            debug!(program = %self.program, status = ?output.status, "GPU query failed");
            return None;
        }

        parse_vram_mb(&String::from_utf8_lossy(&output.stdout))
    }
}

impl Default for NvidiaSmiProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareProbePort for NvidiaSmiProbe {
    fn probe_vram_mb(&self) -> u64 {
        self.query().unwrap_or_else(|| {
            warn!("No usable GPU detected, assuming 0 MB VRAM");
            0
        })
    }
}

/// Memory of the first device from `nvidia-smi` CSV output, in MB.
pub fn parse_vram_mb(stdout: &str) -> Option<u64> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())?
        .parse()
        .ok()
}
