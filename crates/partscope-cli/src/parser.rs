//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use partscope_core::HARDWARE_CONFIG_FILE;

use crate::commands::Commands;

/// Command-line interface for datasheet analysis and local model selection.
#[derive(Parser)]
#[command(name = "partscope")]
#[command(about = "Classify component datasheets and answer questions with a local model")]
#[command(version)]
pub struct Cli {
    /// Override the models directory for this invocation
    #[arg(long = "models-dir", global = true)]
    pub models_dir: Option<PathBuf>,

    /// Hardware config file with gpu_layers, n_ctx and n_threads
    #[arg(long = "hardware-config", global = true, default_value = HARDWARE_CONFIG_FILE)]
    pub hardware_config: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use partscope_extract::ComponentFamily;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "partscope",
            "--verbose",
            "--models-dir",
            "/tmp/models",
            "probe",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.models_dir, Some(PathBuf::from("/tmp/models")));
        assert_eq!(cli.hardware_config, PathBuf::from("hardware_config.json"));
        assert!(matches!(cli.command, Some(Commands::Probe)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "partscope",
            "scan",
            "--hardware-config",
            "/etc/partscope/hw.json",
        ]);
        assert_eq!(cli.hardware_config, PathBuf::from("/etc/partscope/hw.json"));
    }

    #[test]
    fn test_select_args() {
        let cli = Cli::parse_from(["partscope", "select", "--model", "gemma", "--vram", "12288"]);
        match cli.command {
            Some(Commands::Select { model, vram }) => {
                assert_eq!(model.as_deref(), Some("gemma"));
                assert_eq!(vram, Some(12_288));
            }
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn test_extract_family_parses() {
        let cli = Cli::parse_from([
            "partscope",
            "extract",
            "--family",
            "voltage-regulator",
            "--json",
            "lm7805.txt",
        ]);
        match cli.command {
            Some(Commands::Extract {
                family,
                json,
                file,
                name,
            }) => {
                assert_eq!(family, Some(ComponentFamily::VoltageRegulator));
                assert!(json);
                assert_eq!(file, Some(PathBuf::from("lm7805.txt")));
                assert_eq!(name, None);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_extract_rejects_unknown_family() {
        let result = Cli::try_parse_from(["partscope", "extract", "--family", "flux-capacitor"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_args() {
        let cli = Cli::parse_from([
            "partscope",
            "ask",
            "What is the max voltage of 1N4007?",
            "--context",
            "1n4007.txt",
        ]);
        match cli.command {
            Some(Commands::Ask {
                question,
                model,
                context,
            }) => {
                assert_eq!(question, "What is the max voltage of 1N4007?");
                assert_eq!(model, None);
                assert_eq!(context, Some(PathBuf::from("1n4007.txt")));
            }
            _ => panic!("expected ask"),
        }
    }
}
