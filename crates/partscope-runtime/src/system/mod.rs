//! System probing for partscope-runtime.
//!
//! Provides the `HardwareProbePort` implementation used by the CLI.

mod gpu;

pub use gpu::{NvidiaSmiProbe, parse_vram_mb};
