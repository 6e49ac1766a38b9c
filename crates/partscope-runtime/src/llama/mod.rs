//! llama-server integration.
//!
//! - `server_availability`: binary resolution
//! - `invocation`: command line construction
//! - `client`: HTTP health and completion calls

mod client;
mod error;
mod invocation;
mod server_availability;

pub use client::{CompletionRequest, LlamaClient};
pub use error::{LlamaServerError, LlamaServerResult};
pub use invocation::{ALL_GPU_LAYERS, LlamaCommandBuilder, SERVER_HOST};
pub use server_availability::{
    LLAMA_SERVER_BIN, LLAMA_SERVER_ENV, resolve_llama_server, resolve_with, validate_binary,
};
