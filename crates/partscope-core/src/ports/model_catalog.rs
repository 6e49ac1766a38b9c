//! Model catalog port for discovering candidate model files.
//!
//! Scanning never fails: a missing or unreadable directory is an empty
//! catalog. Implementations log the underlying problem instead.

use std::path::Path;

use crate::domain::ModelCandidate;

/// File extension of primary model files.
pub const MODEL_FILE_EXTENSION: &str = "gguf";

/// File extension of auxiliary projection files.
pub const AUX_PROJECTION_EXTENSION: &str = "mmproj";

/// Port for listing the model files available in a directory.
pub trait ModelCatalogPort: Send + Sync {
    /// Scan `directory` for model files.
    ///
    /// Order follows the underlying enumeration and carries no meaning.
    fn scan(&self, directory: &Path) -> Vec<ModelCandidate>;
}

/// Base token used to pair a model with its projection file.
///
/// This is the lower-cased file stem cut at the first `.` or `-`
/// (`Llava-v1.5-7b-Q4_K_M.gguf` gives `llava`).
pub fn pairing_base_token(model_file_name: &str) -> String {
    let stem = Path::new(model_file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    stem.split(['.', '-']).next().unwrap_or_default().to_string()
}

/// Pick the first auxiliary file whose name contains the model's base token.
pub fn pair_aux_projection<'a>(model_file_name: &str, aux_names: &'a [String]) -> Option<&'a str> {
    let token = pairing_base_token(model_file_name);
    aux_names
        .iter()
        .find(|name| name.to_lowercase().contains(&token))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_base_token() {
        assert_eq!(pairing_base_token("Llava-v1.5-7b-Q4_K_M.gguf"), "llava");
        assert_eq!(pairing_base_token("gemma.3.gguf"), "gemma");
        assert_eq!(pairing_base_token("phi3.gguf"), "phi3");
    }

    #[test]
    fn test_pair_first_match_wins() {
        let aux = vec![
            "other-mmproj.mmproj".to_string(),
            "LLAVA-mmproj-f16.mmproj".to_string(),
            "llava-mmproj-q8.mmproj".to_string(),
        ];
        assert_eq!(
            pair_aux_projection("llava-v1.5-7b.gguf", &aux),
            Some("LLAVA-mmproj-f16.mmproj")
        );
    }

    #[test]
    fn test_pair_no_match() {
        let aux = vec!["llava-mmproj.mmproj".to_string()];
        assert_eq!(pair_aux_projection("gemma-3-4b.gguf", &aux), None);
        assert_eq!(pair_aux_projection("gemma-3-4b.gguf", &[]), None);
    }
}
