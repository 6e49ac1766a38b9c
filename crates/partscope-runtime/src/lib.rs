//! Process runtime and OS-level adapters for partscope.
//!
//! Implements the `partscope-core` ports:
//!
//! - [`NvidiaSmiProbe`]: `HardwareProbePort` via `nvidia-smi`
//! - [`FsModelCatalog`]: `ModelCatalogPort` over a model directory
//! - [`LlamaServerRuntime`]: `CompletionRuntimePort` via llama-server
#![deny(unused_crate_dependencies)]

pub mod llama;
pub mod ports_impl;
pub mod process;
pub mod system;

// Re-export port implementations for the composition root
pub use ports_impl::{FsModelCatalog, LlamaServerHandle, LlamaServerRuntime};

// Re-export system probe implementation
pub use system::NvidiaSmiProbe;

pub use llama::{LlamaServerError, resolve_llama_server};

#[cfg(test)]
use anyhow as _;
#[cfg(test)]
use tokio_test as _;
