//! One-line datasheet summaries.

use regex::Regex;
use std::sync::LazyLock;

use crate::classifier::classify_named;
use crate::extractor::extract;
use crate::metadata::extract_metadata;
use crate::normalize::normalize;

pub const SUMMARY_UNAVAILABLE: &str = "Datasheet summary not available";

const PART_SEPARATOR: &str = " | ";
const MAX_FEATURES: usize = 3;
const MIN_FEATURE_CHARS: usize = 10;
const MAX_FEATURE_CHARS: usize = 50;
const MAX_APPLICATION_CHARS: usize = 100;
const MIN_SENTENCE_CHARS: usize = 20;
const FALLBACK_SENTENCES: usize = 3;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid summary pattern {pattern}: {e}"))
}

static FEATURE_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:features?|advantages?)[:\-]*\s*"));

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)(?:•|\*|\-)\s*([^•*\-\n]+)"));

static APPLICATIONS_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)applications?[:\-]*\s*"));

/// A word of three or more characters followed by a space, `.` or `:`.
static NEXT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\w{3,}[\s.:]"));

static ELECTRICAL_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        compile(r"(?i)Vcc.*?[:=]\s*([^\s,;]+)"),
        compile(r"(?i)Vdd.*?[:=]\s*([^\s,;]+)"),
        compile(r"(?i)Icc.*?[:=]\s*([^\s,;]+)"),
        compile(r"(?i)Imax.*?[:=]\s*([^\s,;]+)"),
    ]
});

static PACKAGE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(r"(?i)package.*?[:\-]\s*([^\s,;]+)"),
        compile(r"(?i)(SOT|SOIC|DIP|QFN|QFP|BGA)\-?\d*"),
        compile(r"(?i)(TO|DO)\-?\d+"),
    ]
});

/// Build a `" | "`-separated summary of a datasheet.
///
/// Parts, in order and only when found: component line, family
/// specifications, key features, electrical characteristics, metadata,
/// package, applications. With none of them, the first sentences of the
/// text stand in.
pub fn summarize(text: &str, component_name: &str) -> String {
    let text = normalize(text);
    let classification = classify_named(component_name, &text);

    let mut parts = Vec::new();
    if !component_name.is_empty() {
        match classification.family {
            Some(family) => parts.push(format!("Component: {component_name} ({family})")),
            None => parts.push(format!("Component: {component_name}")),
        }
    }
    if let Some(specs) = extract(&text, classification.family).render() {
        parts.push(format!("Specifications: {specs}"));
    }
    if let Some(features) = key_features(&text) {
        parts.push(format!("Key Features: {features}"));
    }
    if let Some(electrical) = electrical_characteristics(&text) {
        parts.push(format!("Electrical Characteristics: {electrical}"));
    }
    if let Some(metadata) = extract_metadata(&text, classification.family).render() {
        parts.push(format!("Additional: {metadata}"));
    }
    if let Some(package) = package_info(&text) {
        parts.push(format!("Package: {package}"));
    }
    if let Some(applications) = applications(&text) {
        parts.push(format!("Applications: {applications}"));
    }

    if parts.is_empty() {
        leading_sentences(&text)
    } else {
        parts.join(PART_SEPARATOR)
    }
}

/// Up to three feature snippets from feature headings and bullet items.
pub fn key_features(text: &str) -> Option<String> {
    let headed = headed_sections(&FEATURE_HEADING_RE, text);
    let bullets = BULLET_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    let features: Vec<String> = headed
        .into_iter()
        .chain(bullets)
        .map(str::trim)
        .filter(|f| f.chars().count() > MIN_FEATURE_CHARS)
        .map(|f| f.chars().take(MAX_FEATURE_CHARS).collect())
        .take(MAX_FEATURES)
        .collect();
    (!features.is_empty()).then(|| features.join("; "))
}

/// First Vcc, Vdd, Icc and Imax values.
pub fn electrical_characteristics(text: &str) -> Option<String> {
    let values: Vec<&str> = ELECTRICAL_RES
        .iter()
        .filter_map(|re| re.captures(text)?.get(1))
        .map(|m| m.as_str())
        .collect();
    (!values.is_empty()).then(|| values.join(", "))
}

/// Package name from the first package pattern that matches.
pub fn package_info(text: &str) -> Option<String> {
    PACKAGE_RES
        .iter()
        .find_map(|re| re.captures(text)?.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text following the first applications heading, up to 100 characters.
pub fn applications(text: &str) -> Option<String> {
    let section = headed_sections(&APPLICATIONS_HEADING_RE, text)
        .into_iter()
        .next()?;
    let section: String = section.chars().take(MAX_APPLICATION_CHARS).collect();
    let section = section.replace('\n', " ");
    let section = section.trim();
    (!section.is_empty()).then(|| section.to_string())
}

/// For every `heading` match, the text after it up to the first position
/// where a word of three or more characters starts a new phrase.
fn headed_sections<'t>(heading: &Regex, text: &'t str) -> Vec<&'t str> {
    let mut sections = Vec::new();
    let mut pos = 0;
    while let Some(m) = heading.find_at(text, pos) {
        let section = section_until_next_word(text, m.end());
        pos = m.end() + section.len();
        sections.push(section);
    }
    sections
}

fn section_until_next_word(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    rest.char_indices()
        .find(|(offset, _)| NEXT_WORD_RE.is_match(&rest[*offset..]))
        .map_or(rest, |(offset, _)| &rest[..offset])
}

fn leading_sentences(text: &str) -> String {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .take(FALLBACK_SENTENCES)
        .collect();
    if sentences.is_empty() {
        SUMMARY_UNAVAILABLE.to_string()
    } else {
        format!("{}.", sentences.join(". "))
    }
}
