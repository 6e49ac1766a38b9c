//! llama-server command construction.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use partscope_core::{GpuLayers, RuntimeParams};
use tokio::process::Command;

/// Layer count passed for "offload everything"; llama.cpp clamps it to the
/// model's real layer count.
pub const ALL_GPU_LAYERS: u32 = 999;

/// Loopback address the server binds.
pub const SERVER_HOST: &str = "127.0.0.1";

/// Builder for a llama-server invocation.
///
/// ```rust,ignore
/// let cmd = LlamaCommandBuilder::new(llama_path, model_path)
///     .params(params)
///     .port(8081)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct LlamaCommandBuilder {
    binary_path: PathBuf,
    model_path: PathBuf,
    params: RuntimeParams,
    port: u16,
    additional_args: Vec<(String, Option<String>)>,
}

impl LlamaCommandBuilder {
    pub fn new(binary_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            binary_path: binary_path.into(),
            model_path: model_path.into(),
            params: RuntimeParams::default(),
            port: 0,
            additional_args: Vec::new(),
        }
    }

    #[must_use]
    pub const fn params(mut self, params: RuntimeParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Add an additional flag with an optional value.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.additional_args.push((key.into(), value.map(Into::into)));
        self
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Arguments in the order they are passed to the binary.
    pub fn args(&self) -> Vec<OsString> {
        let gpu_layers = match self.params.gpu_layers {
            GpuLayers::All => ALL_GPU_LAYERS,
            GpuLayers::Count(n) => n,
        };

        let mut args: Vec<OsString> = vec![
            "-m".into(),
            self.model_path.clone().into_os_string(),
            "-c".into(),
            self.params.n_ctx.to_string().into(),
            "-t".into(),
            self.params.n_threads.to_string().into(),
            "-ngl".into(),
            gpu_layers.to_string().into(),
            "--host".into(),
            SERVER_HOST.into(),
            "--port".into(),
            self.port.to_string().into(),
        ];

        for (key, value) in &self.additional_args {
            args.push(key.into());
            if let Some(value) = value {
                args.push(value.into());
            }
        }
        args
    }

    /// Build the command. Output is discarded except stderr, which is piped
    /// so startup failures can be logged.
    pub fn build(&self) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(builder: &LlamaCommandBuilder) -> Vec<String> {
        builder
            .args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_args() {
        let builder = LlamaCommandBuilder::new("llama-server", "/models/a.gguf").port(9000);
        assert_eq!(
            strings(&builder),
            vec![
                "-m", "/models/a.gguf", "-c", "8192", "-t", "4", "-ngl", "999", "--host",
                "127.0.0.1", "--port", "9000"
            ]
        );
    }

    #[test]
    fn test_cpu_only_reduced_context() {
        let params = RuntimeParams::default().reduced_context();
        let builder = LlamaCommandBuilder::new("llama-server", "a.gguf")
            .params(params)
            .arg("--mmproj", Some("a.mmproj"))
            .arg("--no-webui", None::<String>);
        let args = strings(&builder);
        assert_eq!(&args[2..8], ["-c", "4096", "-t", "4", "-ngl", "0"]);
        assert_eq!(&args[12..], ["--mmproj", "a.mmproj", "--no-webui"]);
    }
}
