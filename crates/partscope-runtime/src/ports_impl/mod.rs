//! Port implementations for the traits defined in `partscope-core`.

mod completion_runtime;
mod model_catalog;

pub use completion_runtime::{LlamaServerHandle, LlamaServerRuntime};
pub use model_catalog::FsModelCatalog;
