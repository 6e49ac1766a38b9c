//! Text normalization for extracted document text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| panic!("invalid whitespace pattern: {e}"))
});

/// `Page N` plus the separator noise up to the next word character.
static PAGE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Page (\d+)\W*").unwrap_or_else(|e| panic!("invalid page header pattern: {e}"))
});

static SHORT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}/\d{1,2}").unwrap_or_else(|e| panic!("invalid date pattern: {e}"))
});

/// Collapse whitespace, drop page headers and short dates, trim.
///
/// Whitespace is collapsed first so headers split across lines are seen as
/// one run.
pub fn normalize(text: &str) -> String {
    let text = WHITESPACE_RE.replace_all(text, " ");
    let text = strip_page_headers(&text);
    let text = SHORT_DATE_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// Remove `Page N` headers that are followed by a word character.
///
/// A trailing header with no word after it keeps its last page digit:
/// `Page 12` at the end leaves `2`, and a single-digit `Page 5` stays whole.
fn strip_page_headers(text: &str) -> String {
    PAGE_HEADER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                return String::new();
            };
            if whole.end() < text.len() {
                return String::new();
            }
            match digits.as_str().char_indices().last() {
                Some((idx, _)) if idx > 0 => text[digits.start() + idx..whole.end()].to_string(),
                _ => whole.as_str().to_string(),
            }
        })
        .into_owned()
}

/// Capitalize every letter that does not follow another letter and lower
/// the rest, so digits break words: `stm32f103c8` becomes `Stm32F103C8`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        after_letter = ch.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  Forward\n\n voltage\t1.1V  "), "Forward voltage 1.1V");
    }

    #[test]
    fn test_strips_page_headers() {
        assert_eq!(
            normalize("Features Page 3 - Low noise"),
            "Features Low noise"
        );
        assert_eq!(normalize("PAGE 12 of datasheet"), "of datasheet");
    }

    #[test]
    fn test_trailing_page_header_keeps_last_digit() {
        assert_eq!(normalize("Low noise Page 12"), "Low noise 2");
        assert_eq!(normalize("Low noise Page 12 -"), "Low noise 2 -");
        assert_eq!(normalize("Low noise Page 5"), "Low noise Page 5");
        assert_eq!(normalize("Page 3 - intro, Page 47"), "intro, 7");
    }

    #[test]
    fn test_strips_short_dates() {
        assert_eq!(normalize("Rev 3, 04/2019 issue"), "Rev 3, 19 issue");
        assert_eq!(normalize("printed 12/05"), "printed");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let once = normalize("Page 1\nNPN general purpose transistor, Vce = 40V");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_title_case_digits_break_words() {
        assert_eq!(title_case("stm32f103c8"), "Stm32F103C8");
        assert_eq!(title_case("ne555 timer"), "Ne555 Timer");
        assert_eq!(title_case("N-CHANNEL"), "N-Channel");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }
}
