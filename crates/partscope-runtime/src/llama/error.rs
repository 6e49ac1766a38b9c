//! Error type for llama-server management.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while starting or talking to llama-server.
#[derive(Debug, Error)]
pub enum LlamaServerError {
    /// No binary was configured and none was found on `PATH`.
    #[error(
        "llama-server not found on PATH.\n\nInstall llama.cpp or set {env} to the llama-server binary."
    )]
    NotOnPath { env: &'static str },

    /// The configured binary path does not exist.
    #[error("llama-server binary not found at: {path}")]
    NotFound { path: PathBuf },

    /// The binary exists but has no execute permission.
    #[error("llama-server binary exists but is not executable: {path}")]
    NotExecutable { path: PathBuf },

    #[error("Failed to allocate a port for llama-server: {0}")]
    PortAllocation(#[source] io::Error),

    #[error("Failed to spawn llama-server: {0}")]
    Spawn(#[source] io::Error),

    /// The server process exited before reporting healthy.
    #[error("llama-server exited during startup ({status})")]
    ExitedEarly { status: ExitStatus },

    #[error("llama-server on port {port} not healthy after {timeout:?}")]
    HealthTimeout { port: u16, timeout: Duration },

    #[error("HTTP request to llama-server failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("llama-server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type for llama-server operations.
pub type LlamaServerResult<T> = Result<T, LlamaServerError>;
