//! `ModelCatalogPort` implementation over a flat directory.
//!
//! Only direct children are considered. Symlinks are followed, so a
//! directory of links into a shared model store scans like the store itself.
//! Extensions are matched case-insensitively, so `Model.GGUF` is a primary
//! file too.

use std::fs;
use std::path::{Path, PathBuf};

use partscope_core::ports::{AUX_PROJECTION_EXTENSION, MODEL_FILE_EXTENSION, pair_aux_projection};
use partscope_core::{ModelCandidate, ModelCatalogPort};
use tracing::{debug, warn};

/// Scans a directory on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsModelCatalog;

impl FsModelCatalog {
    pub const fn new() -> Self {
        Self
    }
}

impl ModelCatalogPort for FsModelCatalog {
    fn scan(&self, directory: &Path) -> Vec<ModelCandidate> {
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %directory.display(), error = %e, "Model directory not readable");
                return Vec::new();
            }
        };

        let mut models: Vec<(PathBuf, u64)> = Vec::new();
        let mut aux: Vec<PathBuf> = Vec::new();

        for entry in entries.flatten() {
            let path = entry.path();
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            if has_extension(&path, MODEL_FILE_EXTENSION) {
                models.push((path, metadata.len()));
            } else if has_extension(&path, AUX_PROJECTION_EXTENSION) {
                aux.push(path);
            }
        }

        let aux_names: Vec<String> = aux.iter().map(|p| file_name(p)).collect();

        let candidates: Vec<ModelCandidate> = models
            .into_iter()
            .map(|(path, size)| {
                let paired = pair_aux_projection(&file_name(&path), &aux_names)
                    .and_then(|name| aux_names.iter().position(|n| n == name))
                    .map(|idx| aux[idx].clone());
                let candidate = ModelCandidate::new(path, size);
                match paired {
                    Some(aux_path) => candidate.with_aux_projection(aux_path),
                    None => candidate,
                }
            })
            .collect();

        debug!(
            dir = %directory.display(),
            models = candidates.len(),
            aux = aux_names.len(),
            "Scanned model directory"
        );
        candidates
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
