//! Summarize command handler.

use std::path::Path;

use anyhow::Result;
use partscope_extract::summarize;

use crate::utils::input::read_input;

pub fn execute(name: Option<&str>, file: Option<&Path>) -> Result<()> {
    let text = read_input(file)?;
    println!("{}", summarize(&text, name.unwrap_or_default()));
    Ok(())
}
