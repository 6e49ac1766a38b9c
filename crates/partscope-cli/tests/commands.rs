//! Handler behavior over a temporary models directory.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use partscope_cli::handlers;
use partscope_cli::{CliConfig, CliContext, exit_code_for};
use partscope_core::{EngineSettings, FixedHardwareProbe};
use partscope_runtime::FsModelCatalog;
use tempfile::{TempDir, tempdir};

fn context(models: &[&str], vram_mb: u64) -> (TempDir, CliContext) {
    let dir = tempdir().unwrap();
    for name in models {
        fs::write(dir.path().join(name), b"gguf").unwrap();
    }
    let ctx = CliContext {
        settings: EngineSettings::with_defaults().with_models_dir(dir.path()),
        probe: Arc::new(FixedHardwareProbe::new(vram_mb)),
        catalog: Arc::new(FsModelCatalog::new()),
    };
    (dir, ctx)
}

#[test]
fn test_select_with_models() {
    let (_dir, ctx) = context(
        &[
            "gemma-3-4b-it-Q4_K_M.gguf",
            "mistral-7b-instruct-Q5_K_M.gguf",
            "llama-2-13b-Q2_K.gguf",
        ],
        10_000,
    );
    assert!(handlers::select::execute(&ctx, None, None).is_ok());
    assert!(handlers::select::execute(&ctx, Some("GEMMA".into()), Some(0)).is_ok());
}

#[test]
fn test_select_empty_directory_is_engine_unavailable() {
    let (_dir, ctx) = context(&[], 10_000);
    let err = handlers::select::execute(&ctx, None, None).unwrap_err();
    assert_eq!(err.to_string(), "AI engine not available");
    assert_eq!(exit_code_for(&err), 69);
}

#[test]
fn test_scan_and_probe_succeed() {
    let (_dir, ctx) = context(&["phi-3-mini-f16.gguf"], 0);
    assert!(handlers::scan::execute(&ctx).is_ok());
    assert!(handlers::probe::execute(&ctx).is_ok());
}

#[test]
fn test_text_commands_read_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("2n3904.txt");
    fs::write(&path, "2N3904 NPN transistor. Vce: 40V, hFE=120").unwrap();

    assert!(handlers::classify::execute(Some("2N3904"), Some(&path)).is_ok());
    assert!(handlers::extract::execute(Some("2N3904"), None, true, Some(&path)).is_ok());
    assert!(handlers::summarize::execute(None, Some(&path)).is_ok());

    let missing = dir.path().join("missing.txt");
    let err = handlers::extract::execute(None, None, false, Some(&missing)).unwrap_err();
    assert_eq!(exit_code_for(&err), 74);
}

#[test]
fn test_config_settings_resolution() {
    let config = CliConfig {
        models_dir: Some(PathBuf::from("/srv/partscope/models")),
        hardware_config: PathBuf::from("/nonexistent/hardware_config.json"),
    };
    let settings = config.settings();
    assert_eq!(settings.models_dir, PathBuf::from("/srv/partscope/models"));
    assert_eq!(settings.runtime.n_ctx, 8192);
}
