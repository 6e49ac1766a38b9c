//! Datasheet text input from a file or stdin.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::error::CliError;

/// Upper bound on the characters handed to the extraction engine.
pub const MAX_INPUT_CHARS: usize = 200_000;

/// Read text from `file`, or from stdin when no file is given.
///
/// Reading from an interactive terminal is refused. Input longer than
/// [`MAX_INPUT_CHARS`] is truncated with a warning.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };
    Ok(cap_input(text))
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::Arguments(
            "no input: pass a FILE or pipe datasheet text on stdin".into(),
        )
        .into());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .map_err(CliError::from)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

/// Truncate `text` to [`MAX_INPUT_CHARS`] characters.
pub fn cap_input(mut text: String) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(MAX_INPUT_CHARS) {
        warn!(
            limit = MAX_INPUT_CHARS,
            "Input truncated to {} characters", MAX_INPUT_CHARS
        );
        text.truncate(byte_idx);
    }
    text
}
