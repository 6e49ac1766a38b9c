//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use partscope_core::{CoreError, ENGINE_UNAVAILABLE_MESSAGE};
use partscope_runtime::LlamaServerError;
use thiserror::Error;
use tracing::error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The AI engine could not load any model.
    #[error("{}", ENGINE_UNAVAILABLE_MESSAGE)]
    EngineUnavailable,

    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model runtime error after the engine came up.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::EngineUnavailable => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71,        // EX_OSERR
            Self::Io(_) => 74,             // EX_IOERR
            Self::Config(_) => 78,         // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        if err.is_engine_unavailable() {
            error!("{err}");
            return Self::EngineUnavailable;
        }
        match err {
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Completion(completion_err) => Self::Process(completion_err.to_string()),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<LlamaServerError> for CliError {
    fn from(err: LlamaServerError) -> Self {
        error!("{err}");
        Self::EngineUnavailable
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
