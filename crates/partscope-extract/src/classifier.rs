//! Component type classifier.
//!
//! Each family owns four patterns. A family scores one point per pattern
//! found in the lower-cased `name + " " + text`; the strictly highest score
//! wins and ties go to the family listed first in [`ComponentFamily::ALL`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::family::ComponentFamily;

const PATTERNS_PER_FAMILY: usize = 4;

/// Pattern sets, indexed like [`ComponentFamily::ALL`].
const FAMILY_PATTERNS: [(ComponentFamily, [&str; PATTERNS_PER_FAMILY]); 14] = [
    (
        ComponentFamily::Resistor,
        [
            r"\b(resistor|resistance|r\d{1,4})\b",
            r"\b(ohm|Ω|kΩ|mΩ)\b",
            r"\btolerance\s*[±]?\d+%",
            r"\bpower\s*rating\b",
        ],
    ),
    (
        ComponentFamily::Capacitor,
        [
            r"\b(capacitor|capacitance|c\d{1,4})\b",
            r"\b(μf|nf|pf|farad)\b",
            r"\belectrolytic|ceramic|tantalum\b",
            r"\besr|equivalent\s*series\s*resistance\b",
        ],
    ),
    (
        ComponentFamily::Inductor,
        [
            r"\b(inductor|coil|choke|l\d{1,4})\b",
            r"\b(μh|nh|mh|henry)\b",
            r"\bsaturation\s*current\b",
            r"\bdc\s*resistance|dcr\b",
        ],
    ),
    (
        ComponentFamily::Diode,
        [
            r"\b(diode|rectifier)\b",
            r"\b(vf|forward\s*voltage)\b",
            r"\b(vr|reverse\s*voltage)\b",
            r"\b(1n\d{4}|1smd|schottky|zener)\b",
        ],
    ),
    (
        ComponentFamily::Led,
        [
            r"\b(led|light\s*emitting\s*diode)\b",
            r"\b(luminous|brightness)\b",
            r"\b(wavelength|nm)\b",
            r"\b(viewing\s*angle)\b",
        ],
    ),
    (
        ComponentFamily::Transistor,
        [
            r"\b(transistor|bjt)\b",
            r"\b(npn|pnp)\b",
            r"\b(hfe|beta|gain)\b",
            r"\b(collector|emitter|base)\b",
        ],
    ),
    (
        ComponentFamily::Mosfet,
        [
            r"\b(mosfet|fet)\b",
            r"\b(n-channel|p-channel)\b",
            r"\b(vgs|gate\s*threshold)\b",
            r"\b(rds|drain\s*source)\b",
        ],
    ),
    (
        ComponentFamily::VoltageRegulator,
        [
            r"\b(regulator|ldo)\b",
            r"\b(78\d+|lm\d+|mc\d+)\b",
            r"\b(dropout\s*voltage)\b",
            r"\b(output\s*voltage|vout)\b",
        ],
    ),
    (
        ComponentFamily::OpAmp,
        [
            r"\b(op.?amp|operational\s*amplifier|comparator)\b",
            r"\b(lm\d+|tl\d+|ad\d+)\b",
            r"\b(slew\s*rate|offset\s*voltage)\b",
            r"\b(gain\s*bandwidth)\b",
        ],
    ),
    (
        ComponentFamily::Microcontroller,
        [
            r"\b(microcontroller|microprocessor|ic|chip)\b",
            r"\b(atmega|pic|stm32|esp32|arduino)\b",
            r"\b(flash|ram|eeprom)\b",
            r"\b(mhz|clock)\b",
        ],
    ),
    (
        ComponentFamily::Crystal,
        [
            r"\b(crystal|oscillator|xtal)\b",
            r"\b(hz|mhz)\b",
            r"\b(load\s*capacitance)\b",
            r"\b(frequency\s*tolerance)\b",
        ],
    ),
    (
        ComponentFamily::Relay,
        [
            r"\b(relay|switch)\b",
            r"\b(spdt|dpdt|spst)\b",
            r"\b(coil\s*voltage)\b",
            r"\b(contact\s*rating)\b",
        ],
    ),
    (
        ComponentFamily::Transformer,
        [
            r"\b(transformer)\b",
            r"\b(primary|secondary)\b",
            r"\b(turns\s*ratio)\b",
            r"\b(va|watts?)\b",
        ],
    ),
    (
        ComponentFamily::Sensor,
        [
            r"\b(sensor|detector)\b",
            r"\b(temperature|pressure|motion|light)\b",
            r"\b(analog|digital|i2c|spi)\b",
            r"\b(measurement\s*range)\b",
        ],
    ),
];

static COMPILED_PATTERNS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    FAMILY_PATTERNS
        .iter()
        .map(|(family, patterns)| {
            patterns
                .iter()
                .map(|p| {
                    Regex::new(&format!("(?i){p}")).unwrap_or_else(|e| {
                        panic!("invalid classifier pattern for {family}: {e}")
                    })
                })
                .collect()
        })
        .collect()
});

/// Outcome of classifying a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// `None` when no family pattern matched.
    pub family: Option<ComponentFamily>,
    /// Number of matching patterns of the winning family.
    pub confidence: u32,
}

impl ClassificationResult {
    pub const UNKNOWN: Self = Self {
        family: None,
        confidence: 0,
    };

    pub const fn is_unknown(&self) -> bool {
        self.family.is_none()
    }

    /// Family label, or `"Unknown"`.
    pub fn label(&self) -> &'static str {
        self.family.map_or("Unknown", ComponentFamily::label)
    }
}

/// Per-family scores against `text`, in [`ComponentFamily::ALL`] order.
pub fn family_scores(text: &str) -> [(ComponentFamily, u32); 14] {
    let haystack = text.to_lowercase();
    let mut scores = ComponentFamily::ALL.map(|family| (family, 0));
    for (slot, patterns) in scores.iter_mut().zip(COMPILED_PATTERNS.iter()) {
        // four patterns per family, the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        let hits = patterns.iter().filter(|re| re.is_match(&haystack)).count() as u32;
        slot.1 = hits;
    }
    scores
}

/// Classify free text.
pub fn classify(text: &str) -> ClassificationResult {
    let mut best = ClassificationResult::UNKNOWN;
    for (family, score) in family_scores(text) {
        // strictly greater keeps the earliest family on ties
        if score > best.confidence {
            best = ClassificationResult {
                family: Some(family),
                confidence: score,
            };
        }
    }
    debug!(family = best.label(), confidence = best.confidence, "Classified component");
    best
}

/// Classify a named component, scoring the name together with the text.
pub fn classify_named(name: &str, text: &str) -> ClassificationResult {
    classify(&format!("{name} {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert_eq!(COMPILED_PATTERNS.len(), ComponentFamily::ALL.len());
        for (i, (family, _)) in FAMILY_PATTERNS.iter().enumerate() {
            assert_eq!(family.index(), i);
        }
    }

    #[test]
    fn test_transistor_scenario() {
        let result = classify("Small signal NPN device, Vce = 40V, hFE=120");
        assert_eq!(result.family, Some(ComponentFamily::Transistor));
        assert!(result.confidence >= 1);

        let scores = family_scores("Small signal NPN device, Vce = 40V, hFE=120");
        let transistor = scores[ComponentFamily::Transistor.index()].1;
        for (family, score) in scores {
            if family != ComponentFamily::Transistor {
                assert!(score < transistor, "{family} scored {score}");
            }
        }
    }

    #[test]
    fn test_unknown_when_nothing_matches() {
        let result = classify("lorem ipsum dolor sit amet");
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0);
        assert_eq!(result.label(), "Unknown");
        assert_eq!(classify(""), ClassificationResult::UNKNOWN);
    }

    #[test]
    fn test_tie_goes_to_earliest_family() {
        // one hit each for Resistor ("resistor") and Capacitor ("capacitor")
        let result = classify("resistor capacitor");
        assert_eq!(result.family, Some(ComponentFamily::Resistor));
        assert_eq!(result.confidence, 1);
    }

    #[test]
    fn test_name_contributes_to_score() {
        let result = classify_named("1N4007", "rectifier, forward voltage 1.1 V");
        assert_eq!(result.family, Some(ComponentFamily::Diode));
        assert_eq!(result.confidence, 3);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("N-CHANNEL MOSFET, RDS low").family,
            Some(ComponentFamily::Mosfet)
        );
    }
}
