//! Family-independent metadata: temperature, mounting, maker, standards.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::family::ComponentFamily;
use crate::key_specs::extract_manufacturer;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid metadata pattern {pattern}: {e}"))
}

static OPERATING_TEMP_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile(r"(?i)operating\s+temperature[:\-]\s*([\-+]?\d+°?[CF]\s*(?:to\s*[+-]?\d+°?[CF]|[+-]?\d+°?[CF]))"),
        compile(r"(?i)junction\s+temp[:\-]\s*([\-+]?\d+°?[CF]\s*(?:to\s*[+-]?\d+°?[CF]|[+-]?\d+°?[CF]))"),
    ]
});

static THROUGH_HOLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)through.hole|tht|axial|radial"));

static SURFACE_MOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)surface.mount|smt| gull.wing|j.leaded"));

static STANDARD_RES: LazyLock<[(Standard, Regex); 3]> = LazyLock::new(|| {
    [
        (
            Standard::RoHs,
            compile(r"(?i)rohs\s*(?:compliant|conform|certified)"),
        ),
        (
            Standard::Automotive,
            compile(r"(?i)aec.?q\d+|automotive\s+(?:qualified|grade)"),
        ),
        (
            Standard::Military,
            compile(r"(?i)military|mil.?std|space\s+(?:qualified|grade)"),
        ),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mounting {
    #[serde(rename = "Through Hole")]
    ThroughHole,
    #[serde(rename = "Surface Mount")]
    SurfaceMount,
}

impl Mounting {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThroughHole => "Through Hole",
            Self::SurfaceMount => "Surface Mount",
        }
    }
}

/// Compliance marks, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standard {
    #[serde(rename = "RoHS")]
    RoHs,
    Automotive,
    Military,
}

impl Standard {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RoHs => "RoHS",
            Self::Automotive => "Automotive",
            Self::Military => "Military",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_temp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounting: Option<Mounting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub standards: Vec<Standard>,
}

impl Metadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `"Op Temp: .., Mounting: .., Mfg: .., Standards: a, b"`, or `None`
    /// when nothing was found.
    pub fn render(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(temp) = &self.operating_temp {
            parts.push(format!("Op Temp: {temp}"));
        }
        if let Some(mounting) = self.mounting {
            parts.push(format!("Mounting: {}", mounting.label()));
        }
        if let Some(mfg) = &self.manufacturer {
            parts.push(format!("Mfg: {mfg}"));
        }
        if !self.standards.is_empty() {
            let labels: Vec<_> = self.standards.iter().map(|s| s.label()).collect();
            parts.push(format!("Standards: {}", labels.join(", ")));
        }
        f.write_str(&parts.join(", "))
    }
}

/// Extract metadata. The operating temperature is not reported for
/// microcontrollers.
pub fn extract_metadata(text: &str, family: Option<ComponentFamily>) -> Metadata {
    let operating_temp = if family == Some(ComponentFamily::Microcontroller) {
        None
    } else {
        OPERATING_TEMP_RES
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    let mounting = if THROUGH_HOLE_RE.is_match(text) {
        Some(Mounting::ThroughHole)
    } else if SURFACE_MOUNT_RE.is_match(text) {
        Some(Mounting::SurfaceMount)
    } else {
        None
    };

    let standards = STANDARD_RES
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(standard, _)| *standard)
        .collect();

    Metadata {
        operating_temp,
        mounting,
        manufacturer: extract_manufacturer(text),
        standards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_metadata() {
        let text = "Operating temperature: -55°C to +150°C. Axial leads. \
                    Manufactured by Diodes Incorporated. RoHS compliant, AEC-Q101 qualified.";
        let meta = extract_metadata(text, Some(ComponentFamily::Diode));
        assert_eq!(meta.operating_temp.as_deref(), Some("-55°C to +150°C"));
        assert_eq!(meta.mounting, Some(Mounting::ThroughHole));
        assert_eq!(meta.manufacturer.as_deref(), Some("Diodes"));
        assert_eq!(meta.standards, vec![Standard::RoHs, Standard::Automotive]);
        assert_eq!(
            meta.render().as_deref(),
            Some(
                "Op Temp: -55°C to +150°C, Mounting: Through Hole, Mfg: Diodes, \
                 Standards: RoHS, Automotive"
            )
        );
    }

    #[test]
    fn test_microcontroller_skips_temperature() {
        let text = "Operating temperature: -40°C to 85°C, SMT package";
        let meta = extract_metadata(text, Some(ComponentFamily::Microcontroller));
        assert_eq!(meta.operating_temp, None);
        assert_eq!(meta.mounting, Some(Mounting::SurfaceMount));

        let meta = extract_metadata(text, None);
        assert_eq!(meta.operating_temp.as_deref(), Some("-40°C to 85°C"));
    }

    #[test]
    fn test_through_hole_checked_first() {
        let meta = extract_metadata("radial or surface mount options", None);
        assert_eq!(meta.mounting, Some(Mounting::ThroughHole));
    }

    #[test]
    fn test_empty_metadata_renders_none() {
        let meta = extract_metadata("plain words only", None);
        assert!(meta.is_empty());
        assert_eq!(meta.render(), None);
    }
}
