//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use partscope_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        models_dir: cli.models_dir,
        hardware_config: cli.hardware_config,
    };
    let ctx = bootstrap(&config)?;

    match command {
        Commands::Probe => handlers::probe::execute(&ctx)?,
        Commands::Scan => handlers::scan::execute(&ctx)?,
        Commands::Select { model, vram } => handlers::select::execute(&ctx, model, vram)?,
        Commands::Classify { name, file } => {
            handlers::classify::execute(name.as_deref(), file.as_deref())?;
        }
        Commands::Extract {
            name,
            family,
            json,
            file,
        } => {
            handlers::extract::execute(name.as_deref(), family, json, file.as_deref())?;
        }
        Commands::Summarize { name, file } => {
            handlers::summarize::execute(name.as_deref(), file.as_deref())?;
        }
        Commands::Ask {
            question,
            model,
            context,
        } => {
            handlers::ask::execute(&ctx, &question, model, context.as_deref()).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
