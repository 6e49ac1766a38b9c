//! Headline ratings pulled from datasheet text.
//!
//! Each field walks an ordered list of patterns and keeps the first match.
//! Unlike the family rule tables these look for numbers with units, so the
//! values can be compared across parts.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Names that the manufacturer pattern picks up from ordinary prose.
const MANUFACTURER_STOP_WORDS: &[&str] = &["the", "and", "for", "with", "this", "that"];

/// Manufacturer name after a leading word such as `by` or `from`, with an
/// optional corporate suffix.
const MANUFACTURER_TAIL: &str = r"\s+([A-Z][A-Za-z\s&]+?)(?:\s+(?:Inc|Corp|Ltd|GmbH|Co\.?|Technologies?|Semiconductor|Ltd\.?))?(?:\s|$)";

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid key spec pattern {p}: {e}")))
        .collect()
}

static VOLTAGE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)(?:peak\s+)?(?:inverse\s+)?voltage[:\-\s]*([0-9]+(?:\.[0-9]+)?)\s*V",
        r"(?i)voltage\s*rating[:\-\s]*([0-9]+(?:\.[0-9]+)?)\s*V",
        r"(?i)V[Rr]\s*=?\s*([0-9]+(?:\.[0-9]+)?)\s*V",
    ])
});

static CURRENT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)(?:average\s+)?(?:forward\s+)?current[:\-\s]*([0-9]+(?:\.[0-9]+)?)\s*(mA|A)",
        r"(?i)current\s*rating[:\-\s]*([0-9]+(?:\.[0-9]+)?)\s*(mA|A)",
        r"(?i)I[Ff]\s*=?\s*([0-9]+(?:\.[0-9]+)?)\s*(mA|A)",
    ])
});

static POWER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)(?:power\s+)?dissipation[:\-\s]*([0-9]+(?:\.[0-9]+)?)\s*(mW|W)",
        r"(?i)power\s*rating[:\-\s]*([0-9]+(?:\.[0-9]+)?)\s*(mW|W)",
        r"(?i)P[tT]\s*=?\s*([0-9]+(?:\.[0-9]+)?)\s*(mW|W)",
    ])
});

static TEMPERATURE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)temperature[:\-\s]*([\-0-9]+(?:\.[0-9]+)?)[°\s]*[CF]\s*(?:to\s*[+-]?[0-9]+(?:\.[0-9]+)?)[°\s]*[CF]",
        r"(?i)operating\s+temperature[:\-\s]*([\-0-9]+)[°\s]*[CF]\s*(?:to\s*[+-]?[0-9]+)[°\s]*[CF]",
        r"(?i)T[jJ]\s*=?\s*([\-0-9]+)[°\s]*[CF]\s*(?:to\s*[+-]?[0-9]+)[°\s]*[CF]",
    ])
});

static TOLERANCE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)tolerance[:\-\s]*[±]?([0-9]+(?:\.[0-9]+)?)\s*%",
        r"(?i)accuracy[:\-\s]*[±]?([0-9]+(?:\.[0-9]+)?)\s*%",
    ])
});

static PACKAGE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)package[:\-\s]*([A-Z0-9\-]+)",
        r"(?i)case[:\-\s]*([A-Z0-9\-]+)",
        r"(?i)TO-(\d+)",
        r"(?i)DO-(\d+)",
        r"(?i)SOIC-(\d+)",
        r"(?i)DIP-(\d+)",
    ])
});

static MANUFACTURER_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)by{MANUFACTURER_TAIL}"))
        .unwrap_or_else(|e| panic!("invalid manufacturer pattern: {e}"))
});

static MANUFACTURER_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)from{MANUFACTURER_TAIL}"))
        .unwrap_or_else(|e| panic!("invalid manufacturer pattern: {e}"))
});

static MANUFACTURER_ANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)(?:by|from){MANUFACTURER_TAIL}"))
        .unwrap_or_else(|e| panic!("invalid manufacturer pattern: {e}"))
});

/// Headline ratings of a part. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

impl KeySpecs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Extract the headline ratings from `text`.
pub fn extract_key_specs(text: &str) -> KeySpecs {
    KeySpecs {
        voltage_rating: first_capture(&VOLTAGE_RES, text, |c| c[1].to_string()),
        current_rating: first_capture(&CURRENT_RES, text, number_with_unit),
        power_rating: first_capture(&POWER_RES, text, number_with_unit),
        temperature_range: first_capture(&TEMPERATURE_RES, text, |c| c[0].trim().to_string()),
        tolerance: first_capture(&TOLERANCE_RES, text, |c| format!("±{}%", &c[1])),
        package_type: first_capture(&PACKAGE_RES, text, |c| c[1].to_string()),
        manufacturer: manufacturer_from(&MANUFACTURER_ANY_RE, text),
    }
}

/// Manufacturer name, trying `by <Name>` before `from <Name>`.
pub fn extract_manufacturer(text: &str) -> Option<String> {
    manufacturer_from(&MANUFACTURER_BY_RE, text)
        .or_else(|| manufacturer_from(&MANUFACTURER_FROM_RE, text))
}

/// Only the first match of `re` is considered; a short or stop-word name
/// rejects the pattern.
fn manufacturer_from(re: &Regex, text: &str) -> Option<String> {
    let name = re.captures(text)?.get(1)?.as_str().trim();
    let accepted =
        name.chars().count() > 3 && !MANUFACTURER_STOP_WORDS.contains(&name.to_lowercase().as_str());
    accepted.then(|| name.to_string())
}

fn first_capture(
    patterns: &[Regex],
    text: &str,
    render: impl Fn(&Captures<'_>) -> String,
) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| render(&caps))
}

fn number_with_unit(caps: &Captures<'_>) -> String {
    format!("{}{}", &caps[1], caps[2].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectifier_datasheet() {
        let text = "1N4007 general purpose rectifier by Vishay Semiconductor. \
                    Peak inverse voltage: 1000 V. Average forward current 1.0 A. \
                    Operating temperature -65 °C to +175 °C. Package: DO-41";
        let specs = extract_key_specs(text);
        assert_eq!(specs.voltage_rating.as_deref(), Some("1000"));
        assert_eq!(specs.current_rating.as_deref(), Some("1.0a"));
        assert_eq!(specs.temperature_range.as_deref(), Some("temperature -65 °C to +175 °C"));
        assert_eq!(specs.package_type.as_deref(), Some("DO-41"));
        assert_eq!(specs.manufacturer.as_deref(), Some("Vishay"));
        assert_eq!(specs.tolerance, None);
    }

    #[test]
    fn test_power_and_tolerance() {
        let specs = extract_key_specs("Power rating: 250 mW, tolerance ±1 %");
        assert_eq!(specs.power_rating.as_deref(), Some("250mw"));
        assert_eq!(specs.tolerance.as_deref(), Some("±1%"));
    }

    #[test]
    fn test_later_patterns_used_as_fallback() {
        let specs = extract_key_specs("VR = 50 V, IF=200mA, Pt = 1 W, TO-92");
        assert_eq!(specs.voltage_rating.as_deref(), Some("50"));
        assert_eq!(specs.current_rating.as_deref(), Some("200ma"));
        assert_eq!(specs.power_rating.as_deref(), Some("1w"));
        assert_eq!(specs.package_type.as_deref(), Some("92"));
    }

    #[test]
    fn test_manufacturer_rejects_stop_words_and_short_names() {
        assert_eq!(extract_manufacturer("designed for this use"), None);
        assert_eq!(extract_manufacturer("made by the team"), None);
        assert_eq!(extract_manufacturer("by TI and friends"), None);
        assert_eq!(
            extract_manufacturer("available from Microchip Technology"),
            Some("Microchip".to_string())
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_key_specs("").is_empty());
    }
}
