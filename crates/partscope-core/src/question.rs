//! Question parsing, prompt construction and response cleanup for the
//! component assistant.

use partscope_extract::title_case;
use regex::Regex;
use std::sync::LazyLock;

/// Phrases that mark a question as a datasheet/specification lookup.
const DATASHEET_KEYWORDS: &[&str] = &[
    "datasheet",
    "spec",
    "specification",
    "özellik",
    "find",
    "search",
    "where can i find",
];

/// Words dropped when pulling a part name out of a question.
const NAME_STOP_WORDS: &[&str] = &[
    "find",
    "search",
    "where",
    "can",
    "i",
    "get",
    "download",
    "the",
    "a",
    "an",
    "for",
    "datasheet",
    "spec",
    "specs",
    "specification",
    "özellik",
    "of",
    "about",
];

/// Reply used when the model produced nothing usable.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I understand your question. Could you please provide more details?";

static PART_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-_.]+$").unwrap_or_else(|e| panic!("invalid part token pattern: {e}"))
});

static NAME_JUNK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s\-_.]").unwrap_or_else(|e| panic!("invalid name junk pattern: {e}"))
});

/// Whether the question asks for a datasheet or specifications.
pub fn is_datasheet_query(question: &str) -> bool {
    let lower = question.to_lowercase();
    DATASHEET_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Extract a likely part name (e.g. `Lm358N`) from a question.
///
/// Keeps up to three part-like tokens after dropping stop words, and
/// returns them title-cased. Returns `None` when nothing longer than two
/// characters remains.
pub fn extract_component_name(question: &str) -> Option<String> {
    let lower = question.to_lowercase();
    let kept: Vec<&str> = lower
        .split_whitespace()
        .filter(|w| w.chars().count() > 1 && !NAME_STOP_WORDS.contains(w))
        .filter(|w| PART_TOKEN_RE.is_match(w))
        .take(3)
        .collect();
    if kept.is_empty() {
        return None;
    }

    let joined = kept.join(" ");
    let cleaned = NAME_JUNK_RE.replace_all(&joined, "");
    let cleaned = cleaned.trim();
    (cleaned.chars().count() > 2).then(|| title_case(cleaned))
}

/// Strip role markers that leak from chat templates.
pub fn clean_response(raw: &str) -> String {
    let cleaned = raw
        .trim()
        .replace("System:", "")
        .replace("Assistant:", "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        EMPTY_RESPONSE_FALLBACK.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Prompt for a general electronics question.
pub fn build_prompt(question: &str, context: Option<&str>) -> String {
    let context = context.filter(|c| !c.trim().is_empty()).unwrap_or("None");
    format!(
        "You are an expert AI assistant for electronic components.\n\
         You help users find parts, read specifications, choose compatible components \
         and reason about circuits.\n\
         Always be helpful, accurate, and practical.\n\n\
         Context: {context}\n\n\
         User Question: {question}\n\n\
         Provide a helpful, accurate response:"
    )
}

/// Prompt for a datasheet/specification question.
///
/// `datasheet_context` carries the extracted specifications and summary of
/// the relevant datasheet, if one was analyzed.
pub fn build_datasheet_prompt(
    question: &str,
    datasheet_context: Option<&str>,
    component_name: Option<&str>,
) -> String {
    let context = match datasheet_context.filter(|c| !c.trim().is_empty()) {
        Some(c) => format!("I have analyzed this component's datasheet:\n\n{c}"),
        None => "No datasheet was available for this component.".to_string(),
    };
    let focus = component_name.map_or_else(String::new, |name| {
        format!(
            "\n\nIMPORTANT: The user asked specifically about '{name}'. If the datasheet \
             covers several variants, report ONLY the values listed for '{name}'. Do not use \
             generic or averaged values."
        )
    });
    format!(
        "You are an expert AI assistant for electronic components.\n\n\
         User is asking about datasheets/specifications.\n\n\
         {context}{focus}\n\n\
         Given the user's question: \"{question}\", produce a concise, component-type-aware \
         summary of key specifications (voltages, currents, power, package, tolerances, temp \
         range), and practical notes or caveats. Prefer numeric, unit-bearing values. If \
         uncertainties exist, say so briefly."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_datasheet_query() {
        assert!(is_datasheet_query("Where can I find the LM358 datasheet?"));
        assert!(is_datasheet_query("Specs for BC547"));
        assert!(!is_datasheet_query("How does a buck converter work?"));
    }

    #[test]
    fn test_extract_component_name() {
        assert_eq!(
            extract_component_name("find the datasheet for lm358n").as_deref(),
            Some("Lm358N")
        );
        assert_eq!(
            extract_component_name("datasheet of 1n4007 diode").as_deref(),
            Some("1N4007 Diode")
        );
    }

    #[test]
    fn test_extract_component_name_skips_punctuated_and_short_words() {
        // "bc547?" fails the token pattern; "x" is too short
        assert_eq!(extract_component_name("find x bc547?"), None);
        assert_eq!(extract_component_name("datasheet"), None);
    }

    #[test]
    fn test_component_name_is_title_cased() {
        assert_eq!(
            extract_component_name("datasheet for stm32f103c8").as_deref(),
            Some("Stm32F103C8")
        );
    }

    #[test]
    fn test_clean_response() {
        assert_eq!(clean_response("  Assistant: Use a 10k pull-up. "), "Use a 10k pull-up.");
        assert_eq!(clean_response("System: "), EMPTY_RESPONSE_FALLBACK);
        assert_eq!(clean_response(""), EMPTY_RESPONSE_FALLBACK);
    }

    #[test]
    fn test_datasheet_prompt_mentions_component() {
        let prompt = build_datasheet_prompt("specs?", Some("Vf: 1.1V"), Some("1N4007"));
        assert!(prompt.contains("Vf: 1.1V"));
        assert!(prompt.contains("'1N4007'"));

        let bare = build_datasheet_prompt("specs?", None, None);
        assert!(bare.contains("No datasheet was available"));
        assert!(!bare.contains("IMPORTANT"));
    }

    #[test]
    fn test_build_prompt_defaults_context() {
        let prompt = build_prompt("What is ESR?", None);
        assert!(prompt.contains("Context: None"));
        assert!(prompt.contains("User Question: What is ESR?"));
    }
}
