//! Ask command handler.
//!
//! Brings the AI engine up through the initialization cascade, answers one
//! question and shuts the model down again.

use std::path::Path;

use anyhow::Result;
use partscope_core::question::extract_component_name;
use partscope_extract::analyze;
use tracing::{info, warn};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::input::read_input;

/// Execute the ask command.
///
/// With `context`, the datasheet file is analyzed first and its rendered
/// specifications become the prompt context.
pub async fn execute(
    ctx: &CliContext,
    question: &str,
    model: Option<String>,
    context: Option<&Path>,
) -> Result<()> {
    let datasheet_context = match context {
        Some(path) => datasheet_context(question, path)?,
        None => None,
    };

    let engine = ctx.engine(model)?;
    let status = engine.init().await.map_err(CliError::from)?;
    info!(
        model = %status.model,
        failed_attempts = status.failed_attempts,
        "Model loaded"
    );

    let result = engine.answer(question, datasheet_context.as_deref()).await;
    if let Err(e) = engine.shutdown().await {
        warn!("Failed to shut down AI engine: {e}");
    }

    let answer = result.map_err(CliError::from)?;
    println!("{}", answer.answer);
    Ok(())
}

/// Analyze the datasheet at `path`, naming it after the part in `question`.
fn datasheet_context(question: &str, path: &Path) -> Result<Option<String>> {
    let text = read_input(Some(path))?;
    let component = extract_component_name(question).unwrap_or_default();
    Ok(analyze(&text, &component, None).context())
}
