//! Classify command handler.

use std::path::Path;

use anyhow::Result;
use partscope_extract::{classify_named, normalize};

use crate::utils::input::read_input;

/// Print the component family and its pattern score.
pub fn execute(name: Option<&str>, file: Option<&Path>) -> Result<()> {
    let text = normalize(&read_input(file)?);
    let result = classify_named(name.unwrap_or_default(), &text);
    println!("Type: {}", result.label());
    println!("Confidence: {}", result.confidence);
    Ok(())
}
