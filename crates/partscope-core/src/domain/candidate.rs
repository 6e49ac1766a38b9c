//! Model candidates discovered by a catalog scan.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::params::estimate_params_b;
use super::quant::{detect_quant_tag, quant_rank};

/// One discoverable model file.
///
/// The quant tag, quant rank and parameter estimate are derived from the
/// path and size at construction and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCandidate {
    path: PathBuf,
    file_size_bytes: u64,
    quant_tag: String,
    quant_rank: u8,
    param_size_b: u32,
    aux_projection_path: Option<PathBuf>,
}

impl ModelCandidate {
    /// Create a candidate, deriving quantization and parameter estimates.
    pub fn new(path: impl Into<PathBuf>, file_size_bytes: u64) -> Self {
        let path = path.into();
        let quant_tag = detect_quant_tag(&file_name_of(&path));
        let quant_rank = quant_rank(&quant_tag);
        let param_size_b = estimate_params_b(&path, file_size_bytes);
        Self {
            path,
            file_size_bytes,
            quant_tag,
            quant_rank,
            param_size_b,
            aux_projection_path: None,
        }
    }

    /// Attach the auxiliary projection file paired with this model.
    #[must_use]
    pub fn with_aux_projection(mut self, aux: impl Into<PathBuf>) -> Self {
        self.aux_projection_path = Some(aux.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename without directories (lossy for non-UTF-8 names).
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }

    pub const fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }

    pub fn quant_tag(&self) -> &str {
        &self.quant_tag
    }

    pub const fn quant_rank(&self) -> u8 {
        self.quant_rank
    }

    pub const fn param_size_b(&self) -> u32 {
        self.param_size_b
    }

    pub fn aux_projection_path(&self) -> Option<&Path> {
        self.aux_projection_path.as_deref()
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
