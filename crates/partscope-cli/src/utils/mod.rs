//! Shared helpers for command handlers.

pub mod input;
