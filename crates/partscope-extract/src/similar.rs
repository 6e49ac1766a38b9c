//! Filter analyzed parts by their headline ratings.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::key_specs::KeySpecs;

pub const DEFAULT_SIMILAR_LIMIT: usize = 10;

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .unwrap_or_else(|e| panic!("invalid number pattern: {e}"))
});

/// A part known to the caller, with its extracted ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component_name: String,
    #[serde(default)]
    pub key_specs: KeySpecs,
}

/// Rating bounds for finding comparable parts.
///
/// Bounds are inclusive and compared against the leading number of each
/// rating as written; units are not converted, so `500mA` compares as 500.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityQuery {
    pub voltage_min: Option<f64>,
    pub voltage_max: Option<f64>,
    pub current_min: Option<f64>,
    pub current_max: Option<f64>,
    pub power_min: Option<f64>,
    pub power_max: Option<f64>,
    /// Case-insensitive substring of the component name.
    pub component_type: Option<String>,
    pub limit: usize,
}

impl Default for SimilarityQuery {
    fn default() -> Self {
        Self {
            voltage_min: None,
            voltage_max: None,
            current_min: None,
            current_max: None,
            power_min: None,
            power_max: None,
            component_type: None,
            limit: DEFAULT_SIMILAR_LIMIT,
        }
    }
}

impl SimilarityQuery {
    /// Whether `specs` satisfies every bound that is set.
    ///
    /// A missing or non-numeric rating fails any bound placed on it.
    pub fn matches(&self, specs: &KeySpecs) -> bool {
        within(specs.voltage_rating.as_deref(), self.voltage_min, self.voltage_max)
            && within(specs.current_rating.as_deref(), self.current_min, self.current_max)
            && within(specs.power_rating.as_deref(), self.power_min, self.power_max)
    }

    fn matches_name(&self, name: &str) -> bool {
        self.component_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .is_none_or(|t| name.to_lowercase().contains(&t.to_lowercase()))
    }

    /// Records matching the query, ordered by component name, at most
    /// `limit`. Equal names keep their input order.
    pub fn filter<'a>(
        &self,
        records: impl IntoIterator<Item = &'a ComponentRecord>,
    ) -> Vec<&'a ComponentRecord> {
        let mut found: Vec<&ComponentRecord> = records
            .into_iter()
            .filter(|r| self.matches_name(&r.component_name) && self.matches(&r.key_specs))
            .collect();
        found.sort_by(|a, b| a.component_name.cmp(&b.component_name));
        found.truncate(self.limit);
        found
    }
}

/// Leading number of a rating such as `"25"`, `"1.5a"` or `"-40 °C"`.
pub fn leading_number(rating: &str) -> Option<f64> {
    LEADING_NUMBER_RE
        .find(rating)
        .and_then(|m| m.as_str().trim().parse().ok())
}

fn within(rating: Option<&str>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = rating.and_then(leading_number) else {
        return false;
    };
    min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, voltage: Option<&str>, current: Option<&str>) -> ComponentRecord {
        ComponentRecord {
            component_name: name.to_string(),
            key_specs: KeySpecs {
                voltage_rating: voltage.map(str::to_string),
                current_rating: current.map(str::to_string),
                ..KeySpecs::default()
            },
        }
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("1000"), Some(1000.0));
        assert_eq!(leading_number("1.5a"), Some(1.5));
        assert_eq!(leading_number(" -40 °C"), Some(-40.0));
        assert_eq!(leading_number("±5%"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_voltage_window() {
        let records = vec![
            record("1N4001 diode", Some("50"), Some("1a")),
            record("1N4004 diode", Some("400"), Some("1a")),
            record("1N4007 diode", Some("1000"), Some("1a")),
            record("mystery", None, None),
        ];
        let query = SimilarityQuery {
            voltage_min: Some(100.0),
            voltage_max: Some(1000.0),
            ..SimilarityQuery::default()
        };
        let names: Vec<_> = query
            .filter(&records)
            .into_iter()
            .map(|r| r.component_name.as_str())
            .collect();
        assert_eq!(names, vec!["1N4004 diode", "1N4007 diode"]);
    }

    #[test]
    fn test_no_bounds_matches_everything_up_to_limit() {
        let records: Vec<_> = (0..15)
            .map(|i| record(&format!("part {i}"), None, None))
            .collect();
        assert_eq!(SimilarityQuery::default().filter(&records).len(), 10);
    }

    #[test]
    fn test_results_sorted_by_name_before_limit() {
        let records = vec![
            record("LM7805 regulator", Some("35"), None),
            record("AMS1117 regulator", Some("15"), None),
            record("LM317 regulator", Some("40"), None),
        ];
        let query = SimilarityQuery {
            voltage_min: Some(10.0),
            limit: 2,
            ..SimilarityQuery::default()
        };
        let names: Vec<_> = query
            .filter(&records)
            .into_iter()
            .map(|r| r.component_name.as_str())
            .collect();
        assert_eq!(names, vec!["AMS1117 regulator", "LM317 regulator"]);
    }

    #[test]
    fn test_component_type_substring() {
        let records = vec![
            record("BC547 NPN transistor", None, Some("100ma")),
            record("1N4148 diode", None, Some("200ma")),
        ];
        let query = SimilarityQuery {
            component_type: Some("Transistor".into()),
            current_max: Some(150.0),
            ..SimilarityQuery::default()
        };
        let found = query.filter(&records);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].component_name, "BC547 NPN transistor");
    }

    #[test]
    fn test_units_are_not_normalized() {
        let specs = KeySpecs {
            current_rating: Some("500ma".into()),
            ..KeySpecs::default()
        };
        let query = SimilarityQuery {
            current_max: Some(1.0),
            ..SimilarityQuery::default()
        };
        assert!(!query.matches(&specs));
    }
}
