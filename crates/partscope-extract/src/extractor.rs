//! Specification extractor.

use tracing::debug;

use crate::family::ComponentFamily;
use crate::rules::compiled_rules;
use crate::spec_map::SpecificationMap;

/// Apply the rule table of `family` (generic table for `None`) to `text`.
///
/// Rules run in table order; a rule with no match contributes nothing.
/// Values are kept as matched. Pure: the same input always yields the same
/// map.
pub fn extract(text: &str, family: Option<ComponentFamily>) -> SpecificationMap {
    let mut map = SpecificationMap::new();
    for compiled in compiled_rules(family) {
        for (nth, value) in compiled.values(text).into_iter().enumerate() {
            map.insert(compiled.rule.key(nth), value);
        }
    }
    debug!(
        family = family.map_or("Unknown", ComponentFamily::label),
        fields = map.len(),
        "Extracted specifications"
    );
    map
}
