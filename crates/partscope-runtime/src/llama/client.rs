//! HTTP client for a running llama-server.
//!
//! Only two endpoints are used: `GET /health` and `POST /completion`.

use std::time::Duration;

use partscope_core::SamplingParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{LlamaServerError, LlamaServerResult};
use super::invocation::SERVER_HOST;

/// Per-request timeout for health probes.
const HEALTH_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Body of `POST /completion`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    pub n_predict: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub stream: bool,
}

impl<'a> CompletionRequest<'a> {
    pub const fn new(prompt: &'a str, sampling: SamplingParams) -> Self {
        Self {
            prompt,
            n_predict: sampling.max_tokens,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            top_k: sampling.top_k,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    content: String,
}

/// Talks to one llama-server instance.
#[derive(Debug, Clone)]
pub struct LlamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl LlamaClient {
    /// Client for a server on the loopback interface.
    pub fn local(port: u16) -> LlamaServerResult<Self> {
        Self::new(format!("http://{SERVER_HOST}:{port}"))
    }

    pub fn new(base_url: impl Into<String>) -> LlamaServerResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether `/health` answers 200. Connection errors count as not ready.
    pub async fn is_healthy(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self
            .http
            .get(&url)
            .timeout(HEALTH_REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!(status = %response.status(), "Health check not ready, retrying");
                false
            }
            Err(e) => {
                debug!("Health check failed: {}, retrying", e);
                false
            }
        }
    }

    /// Complete `prompt` and return the generated text.
    pub async fn complete(&self, prompt: &str, sampling: SamplingParams) -> LlamaServerResult<String> {
        let url = format!("{}/completion", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&CompletionRequest::new(prompt, sampling))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlamaServerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: CompletionResponse = response.json().await?;
        Ok(body.content)
    }
}
