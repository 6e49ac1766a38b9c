//! `CompletionRuntimePort` implementation backed by llama-server.
//!
//! Each load spawns one llama-server process on a free loopback port and
//! waits for it to report healthy. The returned handle owns the process.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use partscope_core::{
    CompletionError, CompletionHandle, CompletionRuntimePort, LoadRequest, SamplingParams,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Child;
use tracing::{debug, info, warn};

use crate::llama::{
    LlamaClient, LlamaCommandBuilder, LlamaServerError, LlamaServerResult, resolve_llama_server,
};
use crate::process::{
    DEFAULT_STARTUP_TIMEOUT, SHUTDOWN_GRACE, allocate_port, shutdown_child, wait_for_http_health,
};

/// Loads models by starting llama-server processes.
#[derive(Debug, Clone)]
pub struct LlamaServerRuntime {
    binary: PathBuf,
    startup_timeout: Duration,
}

impl LlamaServerRuntime {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            startup_timeout: DEFAULT_STARTUP_TIMEOUT,
        }
    }

    /// Runtime using the binary found by [`resolve_llama_server`].
    pub fn discover() -> LlamaServerResult<Self> {
        resolve_llama_server().map(Self::new)
    }

    #[must_use]
    pub const fn with_startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = timeout;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self, request: &LoadRequest, port: u16) -> LlamaCommandBuilder {
        let builder = LlamaCommandBuilder::new(&self.binary, &request.model_path)
            .params(request.params)
            .port(port);
        match &request.aux_projection_path {
            Some(aux) => builder.arg("--mmproj", Some(aux.to_string_lossy().into_owned())),
            None => builder,
        }
    }

    async fn start(&self, request: &LoadRequest) -> LlamaServerResult<LlamaServerHandle> {
        let port = allocate_port().map_err(LlamaServerError::PortAllocation)?;
        let mut child = self
            .command(request, port)
            .build()
            .spawn()
            .map_err(LlamaServerError::Spawn)?;
        debug!(
            pid = ?child.id(),
            port = %port,
            model = %request.model_path.display(),
            "Spawned llama-server"
        );
        spawn_stderr_reader(&mut child, port);

        let client = LlamaClient::local(port)?;
        if let Err(e) = wait_for_http_health(&client, &mut child, port, self.startup_timeout).await
        {
            if let Err(stop_err) = shutdown_child(child, SHUTDOWN_GRACE).await {
                warn!(port = %port, "Failed to stop llama-server after startup error: {}", stop_err);
            }
            return Err(e);
        }

        Ok(LlamaServerHandle {
            client,
            sampling: request.sampling,
            port,
            child: Some(child),
        })
    }
}

#[async_trait]
impl CompletionRuntimePort for LlamaServerRuntime {
    async fn load(&self, request: &LoadRequest) -> Result<Box<dyn CompletionHandle>, CompletionError> {
        match self.start(request).await {
            Ok(handle) => Ok(Box::new(handle)),
            Err(e) => Err(CompletionError::load_failed(&request.model_path, e)),
        }
    }
}

/// Forward llama-server's stderr into the debug log.
fn spawn_stderr_reader(child: &mut Child, port: u16) {
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(port = %port, "llama-server: {}", line);
            }
            debug!(port = %port, "stderr reader task exiting");
        });
    }
}

/// A model served by a llama-server process this handle owns.
///
/// Dropping the handle kills the process; [`CompletionHandle::shutdown`]
/// stops it gracefully.
#[derive(Debug)]
pub struct LlamaServerHandle {
    client: LlamaClient,
    sampling: SamplingParams,
    port: u16,
    child: Option<Child>,
}

impl LlamaServerHandle {
    pub const fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl CompletionHandle for LlamaServerHandle {
    async fn invoke(&self, prompt: &str) -> Result<String, CompletionError> {
        if self.child.is_none() {
            return Err(CompletionError::Closed);
        }
        self.client
            .complete(prompt, self.sampling)
            .await
            .map_err(|e| CompletionError::InvocationFailed(e.to_string()))
    }

    async fn shutdown(&mut self) -> Result<(), CompletionError> {
        let Some(child) = self.child.take() else {
            return Ok(());
        };
        let status = shutdown_child(child, SHUTDOWN_GRACE)
            .await
            .map_err(|e| CompletionError::InvocationFailed(format!("llama-server shutdown failed: {e}")))?;
        info!(port = %self.port, status = %status, "llama-server stopped");
        Ok(())
    }
}
