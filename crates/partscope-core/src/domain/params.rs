//! Parameter-count estimation for model files.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static PARAM_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})b").unwrap_or_else(|e| panic!("invalid param token pattern: {e}"))
});

/// Size buckets used when the filename carries no `<n>B` token,
/// checked largest first. Thresholds are exclusive.
const SIZE_BUCKETS: &[(u64, u32)] = &[
    (6_000_000_000, 12),
    (3_000_000_000, 7),
    (1_800_000_000, 4),
];

/// Parameter estimate for files below every size bucket.
const SMALLEST_BUCKET_PARAMS_B: u32 = 3;

/// Estimate a model's parameter count in billions.
///
/// A `<1-2 digits>B` token in the filename (e.g. `-13b-`) wins. Without one,
/// the file size is bucketed.
#[must_use]
pub fn estimate_params_b(path: &Path, file_size_bytes: u64) -> u32 {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if let Some(params) = PARAM_TOKEN_RE
        .captures(&file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
    {
        return params;
    }

    SIZE_BUCKETS
        .iter()
        .find(|(threshold, _)| file_size_bytes > *threshold)
        .map_or(SMALLEST_BUCKET_PARAMS_B, |(_, params)| *params)
}
