//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//!   (async where the AI engine is involved)
//! - Thin wrappers that:
//!   1. Read CLI-specific input (files, stdin)
//!   2. Call the core or extraction engine
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain selection or extraction logic.

pub mod ask;
pub mod classify;
pub mod extract;
pub mod probe;
pub mod scan;
pub mod select;
pub mod summarize;
