//! llama-server binary path resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{LlamaServerError, LlamaServerResult};

/// Environment variable naming an explicit llama-server binary.
pub const LLAMA_SERVER_ENV: &str = "PARTSCOPE_LLAMA_SERVER";

/// Default executable name searched on `PATH`.
pub const LLAMA_SERVER_BIN: &str = "llama-server";

/// Resolve the llama-server binary from the process environment.
///
/// Precedence:
/// 1. `PARTSCOPE_LLAMA_SERVER` (validated, no fallback if invalid)
/// 2. `llama-server` on `PATH`
pub fn resolve_llama_server() -> LlamaServerResult<PathBuf> {
    resolve_with(std::env::var(LLAMA_SERVER_ENV).ok().as_deref())
}

/// Resolve with an explicit override instead of reading the environment.
pub fn resolve_with(override_path: Option<&str>) -> LlamaServerResult<PathBuf> {
    if let Some(path) = override_path.map(str::trim).filter(|p| !p.is_empty()) {
        debug!(path = %path, "Using llama-server from {}", LLAMA_SERVER_ENV);
        return validate_binary(Path::new(path));
    }

    which::which(LLAMA_SERVER_BIN).map_err(|_| LlamaServerError::NotOnPath {
        env: LLAMA_SERVER_ENV,
    })
}

/// Validate that a binary exists and is executable.
pub fn validate_binary(path: &Path) -> LlamaServerResult<PathBuf> {
    if !path.is_file() {
        return Err(LlamaServerError::NotFound {
            path: path.to_path_buf(),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let executable = std::fs::metadata(path)
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false);
        if !executable {
            return Err(LlamaServerError::NotExecutable {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_binary_not_found() {
        let result = validate_binary(Path::new("/nonexistent/path/to/llama-server"));
        assert!(matches!(result, Err(LlamaServerError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_binary_requires_execute_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("llama-server");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(matches!(
            validate_binary(&path),
            Err(LlamaServerError::NotExecutable { .. })
        ));

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(validate_binary(&path).unwrap(), path);
    }

    #[test]
    fn test_override_does_not_fall_back() {
        let result = resolve_with(Some("/nonexistent/llama-server"));
        assert!(matches!(result, Err(LlamaServerError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_blank_override_uses_path_lookup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("llama-server");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        let from_override = resolve_with(Some(path.to_str().unwrap()));
        assert!(matches!(from_override, Err(LlamaServerError::NotExecutable { .. })));

        // Blank means "not set"; the result then depends on PATH only.
        let blank = resolve_with(Some("  "));
        assert!(!matches!(blank, Err(LlamaServerError::NotFound { .. })));
    }
}
