//! Closed set of component families.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Component family, in the fixed order used for classifier tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentFamily {
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    Led,
    Transistor,
    Mosfet,
    VoltageRegulator,
    OpAmp,
    Microcontroller,
    Crystal,
    Relay,
    Transformer,
    Sensor,
}

impl ComponentFamily {
    /// Every family, in tie-break order.
    pub const ALL: [Self; 14] = [
        Self::Resistor,
        Self::Capacitor,
        Self::Inductor,
        Self::Diode,
        Self::Led,
        Self::Transistor,
        Self::Mosfet,
        Self::VoltageRegulator,
        Self::OpAmp,
        Self::Microcontroller,
        Self::Crystal,
        Self::Relay,
        Self::Transformer,
        Self::Sensor,
    ];

    /// Display label, e.g. `"Voltage Regulator"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resistor => "Resistor",
            Self::Capacitor => "Capacitor",
            Self::Inductor => "Inductor",
            Self::Diode => "Diode",
            Self::Led => "LED",
            Self::Transistor => "Transistor",
            Self::Mosfet => "MOSFET",
            Self::VoltageRegulator => "Voltage Regulator",
            Self::OpAmp => "Op-Amp",
            Self::Microcontroller => "Microcontroller",
            Self::Crystal => "Crystal",
            Self::Relay => "Relay",
            Self::Transformer => "Transformer",
            Self::Sensor => "Sensor",
        }
    }

    /// Position in [`Self::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown component family: {0}")]
pub struct ParseFamilyError(pub String);

impl FromStr for ComponentFamily {
    type Err = ParseFamilyError;

    /// Accepts labels case-insensitively, ignoring spaces, dashes and
    /// underscores (`"op-amp"`, `"OpAmp"`, `"voltage_regulator"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|family| squash(family.label()) == wanted)
            .ok_or_else(|| ParseFamilyError(s.to_string()))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Serialize for ComponentFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ComponentFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, family) in ComponentFamily::ALL.iter().enumerate() {
            assert_eq!(family.index(), i);
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("LED".parse(), Ok(ComponentFamily::Led));
        assert_eq!("op-amp".parse(), Ok(ComponentFamily::OpAmp));
        assert_eq!("OpAmp".parse(), Ok(ComponentFamily::OpAmp));
        assert_eq!(
            "voltage_regulator".parse(),
            Ok(ComponentFamily::VoltageRegulator)
        );
        assert!("flux capacitor".parse::<ComponentFamily>().is_err());
    }

    #[test]
    fn test_every_label_parses_back() {
        for family in ComponentFamily::ALL {
            assert_eq!(family.label().parse(), Ok(family));
        }
    }
}
