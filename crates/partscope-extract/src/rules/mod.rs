//! Per-family specification rule tables.
//!
//! A rule names a field, a case-insensitive pattern, the capture group that
//! holds the value and how many matches to keep. Tables are plain data so
//! each rule can be checked on its own.

mod discrete;
mod integrated;
mod passive;

use regex::Regex;
use std::sync::LazyLock;

use crate::family::ComponentFamily;
use crate::normalize::title_case;

/// How a captured value is cased before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCase {
    AsMatched,
    Upper,
    /// Capitalize each letter that does not follow another letter.
    Title,
}

impl ValueCase {
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::AsMatched => value.to_string(),
            Self::Upper => value.to_uppercase(),
            Self::Title => title_case(value),
        }
    }
}

/// One extraction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub label: &'static str,
    /// Pattern without the case-insensitivity flag.
    pub pattern: &'static str,
    pub group: usize,
    /// Matches kept, 1 or 2. The second is stored as `"<label> 2"`.
    pub limit: usize,
    pub case: ValueCase,
}

impl FieldRule {
    pub const fn new(label: &'static str, pattern: &'static str, group: usize) -> Self {
        Self {
            label,
            pattern,
            group,
            limit: 1,
            case: ValueCase::AsMatched,
        }
    }

    /// Same as [`FieldRule::new`] but keeps up to two matches.
    pub const fn repeated(label: &'static str, pattern: &'static str, group: usize) -> Self {
        Self {
            limit: 2,
            ..Self::new(label, pattern, group)
        }
    }

    pub const fn cased(self, case: ValueCase) -> Self {
        Self { case, ..self }
    }

    /// Map key for the `nth` (zero-based) match of this rule.
    pub fn key(&self, nth: usize) -> String {
        if nth == 0 {
            self.label.to_string()
        } else {
            format!("{} {}", self.label, nth + 1)
        }
    }
}

/// A rule with its compiled pattern.
#[derive(Debug)]
pub struct CompiledRule {
    pub rule: FieldRule,
    pub regex: Regex,
}

impl CompiledRule {
    fn compile(rule: FieldRule) -> Self {
        let regex = Regex::new(&format!("(?i){}", rule.pattern))
            .unwrap_or_else(|e| panic!("invalid rule pattern for {}: {e}", rule.label));
        Self { rule, regex }
    }

    /// Values of the first `limit` matches, cased.
    pub fn values(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.rule.group))
            .take(self.rule.limit)
            .map(|m| self.rule.case.apply(m.as_str()))
            .collect()
    }
}

/// Rules used when the family is unknown.
pub const GENERIC_RULES: &[FieldRule] = &[
    FieldRule::repeated("Voltage", r"voltage[:=]\s*([^\s,;]+)", 1),
    FieldRule::repeated("Current", r"current[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("Power", r"power[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("Frequency", r"frequency[:=]\s*([^\s,;]+)", 1),
];

/// Rule table for `family`, or the generic table for `None`.
pub const fn rules_for(family: Option<ComponentFamily>) -> &'static [FieldRule] {
    let Some(family) = family else {
        return GENERIC_RULES;
    };
    match family {
        ComponentFamily::Resistor => passive::RESISTOR,
        ComponentFamily::Capacitor => passive::CAPACITOR,
        ComponentFamily::Inductor => passive::INDUCTOR,
        ComponentFamily::Crystal => passive::CRYSTAL,
        ComponentFamily::Transformer => passive::TRANSFORMER,
        ComponentFamily::Relay => passive::RELAY,
        ComponentFamily::Diode => discrete::DIODE,
        ComponentFamily::Led => discrete::LED,
        ComponentFamily::Transistor => discrete::TRANSISTOR,
        ComponentFamily::Mosfet => discrete::MOSFET,
        ComponentFamily::VoltageRegulator => integrated::VOLTAGE_REGULATOR,
        ComponentFamily::OpAmp => integrated::OP_AMP,
        ComponentFamily::Microcontroller => integrated::MICROCONTROLLER,
        ComponentFamily::Sensor => integrated::SENSOR,
    }
}

/// Compiled tables: one per family in [`ComponentFamily::ALL`] order, then
/// the generic table.
static COMPILED: LazyLock<Vec<Vec<CompiledRule>>> = LazyLock::new(|| {
    ComponentFamily::ALL
        .iter()
        .map(|f| Some(*f))
        .chain(std::iter::once(None))
        .map(|family| {
            rules_for(family)
                .iter()
                .copied()
                .map(CompiledRule::compile)
                .collect()
        })
        .collect()
});

/// Compiled rule table for `family`.
pub fn compiled_rules(family: Option<ComponentFamily>) -> &'static [CompiledRule] {
    let index = family.map_or(ComponentFamily::ALL.len(), ComponentFamily::index);
    &COMPILED[index]
}
