//! Startup health wait for llama-server processes.

use std::time::Duration;

use tokio::process::Child;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::llama::{LlamaClient, LlamaServerError, LlamaServerResult};

/// How long a server may take to load its model and report healthy.
pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(120);

/// Delay between health probes.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Poll `/health` until it returns 200, the child exits, or `timeout` passes.
///
/// A child that exits first is reported as [`LlamaServerError::ExitedEarly`]
/// so that load failures surface without waiting for the full timeout.
pub async fn wait_for_http_health(
    client: &LlamaClient,
    child: &mut Child,
    port: u16,
    timeout: Duration,
) -> LlamaServerResult<()> {
    info!("Waiting for llama-server to be ready at {}", client.base_url());
    let deadline = Instant::now() + timeout;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        if let Some(status) = child.try_wait().map_err(LlamaServerError::Spawn)? {
            return Err(LlamaServerError::ExitedEarly { status });
        }

        if client.is_healthy().await {
            info!(port = %port, attempts = attempt, "llama-server is ready");
            return Ok(());
        }

        if Instant::now() >= deadline {
            return Err(LlamaServerError::HealthTimeout { port, timeout });
        }
        debug!(port = %port, attempt, "llama-server not ready yet");
        sleep(HEALTH_POLL_INTERVAL).await;
    }
}
