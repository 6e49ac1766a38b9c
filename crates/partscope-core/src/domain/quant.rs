//! Quantization tag detection and quality ranking.
//!
//! Ranks order quant tags from lowest (0, `Q2_K`) to highest (7, `F32`)
//! precision. Ranking is total: every string, including the empty string,
//! has a rank.

use regex::Regex;
use std::sync::LazyLock;

/// Highest possible quant rank (`F32`).
pub const MAX_QUANT_RANK: u8 = 7;

/// Rank assigned to tags that match neither the exact table nor a prefix.
pub const DEFAULT_QUANT_RANK: u8 = 2;

/// Exact tag table, checked before the prefix fallback.
const QUANT_RANKS: &[(&str, u8)] = &[
    ("F32", 7),
    ("F16", 6),
    ("Q8_0", 5),
    ("Q6_K", 4),
    ("Q5_K_M", 3),
    ("Q5_K", 3),
    ("Q5_0", 3),
    ("Q4_K_M", 2),
    ("Q4_K_S", 2),
    ("Q4_0", 2),
    ("Q3_K", 1),
    ("Q2_K", 0),
];

/// Prefix table for tags missing from [`QUANT_RANKS`] (e.g. `Q4_K_L`).
const QUANT_PREFIX_RANKS: &[(&str, u8)] = &[
    ("Q8", 5),
    ("Q6", 4),
    ("Q5", 3),
    ("Q4", 2),
    ("Q3", 1),
    ("Q2", 0),
];

static QUANT_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(q[0-9](?:_[a-z0-9])?(?:_[a-z0-9])?|f16|f32)")
        .unwrap_or_else(|e| panic!("invalid quant tag pattern: {e}"))
});

/// Map a quant tag to its quality rank in `0..=7`.
///
/// Matching is case-insensitive. Unknown tags fall back to their leading
/// `Q<digit>` prefix, and anything else ranks [`DEFAULT_QUANT_RANK`].
#[must_use]
pub fn quant_rank(tag: &str) -> u8 {
    let upper = tag.trim().to_uppercase();
    if let Some((_, rank)) = QUANT_RANKS.iter().find(|(name, _)| *name == upper) {
        return *rank;
    }
    QUANT_PREFIX_RANKS
        .iter()
        .find(|(prefix, _)| upper.starts_with(prefix))
        .map_or(DEFAULT_QUANT_RANK, |(_, rank)| *rank)
}

/// Detect the quant tag embedded in a model filename.
///
/// Returns the upper-cased tag, or an empty string when the filename carries
/// no recognizable tag.
#[must_use]
pub fn detect_quant_tag(file_name: &str) -> String {
    let lower = file_name.to_lowercase();
    QUANT_TAG_RE
        .find(&lower)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table_ranks() {
        for (tag, expected) in QUANT_RANKS {
            assert_eq!(quant_rank(tag), *expected, "tag {tag}");
        }
    }

    #[test]
    fn test_prefix_fallback() {
        assert_eq!(quant_rank("Q8_1"), 5);
        assert_eq!(quant_rank("Q6_K_L"), 4);
        assert_eq!(quant_rank("Q5_K_S"), 3);
        assert_eq!(quant_rank("Q4_K_XL"), 2);
        assert_eq!(quant_rank("Q3_K_M"), 1);
        assert_eq!(quant_rank("Q2_K_S"), 0);
    }

    #[test]
    fn test_unknown_and_empty_default_to_mid_rank() {
        assert_eq!(quant_rank(""), DEFAULT_QUANT_RANK);
        assert_eq!(quant_rank("BF16"), DEFAULT_QUANT_RANK);
        assert_eq!(quant_rank("IQ2_XXS"), DEFAULT_QUANT_RANK);
        assert_eq!(quant_rank("Q9_X"), DEFAULT_QUANT_RANK);
    }

    #[test]
    fn test_rank_is_case_insensitive() {
        assert_eq!(quant_rank("q4_k_m"), 2);
        assert_eq!(quant_rank("f16"), 6);
    }

    #[test]
    fn test_rank_always_in_range() {
        for tag in ["", "x", "Q", "Q0", "Q1_K", "F64", "Q8_0", "F32", "q7"] {
            assert!(quant_rank(tag) <= MAX_QUANT_RANK);
        }
    }

    #[test]
    fn test_detect_quant_tag() {
        assert_eq!(detect_quant_tag("gemma-3-12b-it-Q4_K_M.gguf"), "Q4_K_M");
        assert_eq!(detect_quant_tag("llama-2-7b.Q8_0.gguf"), "Q8_0");
        assert_eq!(detect_quant_tag("phi-3-mini-f16.gguf"), "F16");
        assert_eq!(detect_quant_tag("mistral-7b-instruct.gguf"), "");
    }
}
