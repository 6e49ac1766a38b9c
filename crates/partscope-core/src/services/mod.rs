//! Core services: model selection, the initialization cascade and the AI
//! engine facade built on top of them.

pub mod ai_engine;
pub mod cascade;
pub mod selector;

pub use ai_engine::{AiEngine, Answer, EngineStatus};
pub use cascade::{CascadeAttempt, CascadeReady, CascadeState, InitializationCascade};
pub use selector::select_model;
