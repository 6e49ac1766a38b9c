//! Full analysis of a datasheet's text.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::{ClassificationResult, classify_named};
use crate::extractor::extract;
use crate::family::ComponentFamily;
use crate::key_specs::{KeySpecs, extract_key_specs};
use crate::metadata::{Metadata, extract_metadata};
use crate::normalize::normalize;
use crate::spec_map::SpecificationMap;

/// Everything extracted from one datasheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasheetAnalysis {
    pub component_name: String,
    pub classification: ClassificationResult,
    pub specifications: SpecificationMap,
    pub metadata: Metadata,
    pub key_specs: KeySpecs,
    /// `Specifications: ...` and `Additional: ...` lines, when either exists.
    pub extracted_specs: Option<String>,
}

impl DatasheetAnalysis {
    pub const fn family(&self) -> Option<ComponentFamily> {
        self.classification.family
    }

    /// Text block handed to the assistant as datasheet context.
    pub fn context(&self) -> Option<String> {
        let mut lines = Vec::new();
        if !self.component_name.is_empty() {
            lines.push(format!(
                "Component: {} ({})",
                self.component_name,
                self.classification.label()
            ));
        }
        if let Some(specs) = &self.extracted_specs {
            lines.push(specs.clone());
        }
        (!lines.is_empty()).then(|| lines.join("\n"))
    }
}

/// Analyze datasheet text, optionally naming the component it describes.
///
/// With `family` set, classification is skipped and that family's rules are
/// used; the confidence is then reported as 0.
pub fn analyze(
    text: &str,
    component_name: &str,
    family: Option<ComponentFamily>,
) -> DatasheetAnalysis {
    let text = normalize(text);
    let classification = match family {
        Some(family) => ClassificationResult {
            family: Some(family),
            confidence: 0,
        },
        None => classify_named(component_name, &text),
    };

    let specifications = extract(&text, classification.family);
    let metadata = extract_metadata(&text, classification.family);
    let key_specs = extract_key_specs(&text);

    let mut lines = Vec::new();
    if let Some(specs) = specifications.render() {
        lines.push(format!("Specifications: {specs}"));
    }
    if let Some(additional) = metadata.render() {
        lines.push(format!("Additional: {additional}"));
    }
    let extracted_specs = (!lines.is_empty()).then(|| lines.join("\n"));

    info!(
        component = component_name,
        family = classification.label(),
        confidence = classification.confidence,
        fields = specifications.len(),
        "Analyzed datasheet"
    );

    DatasheetAnalysis {
        component_name: component_name.to_string(),
        classification,
        specifications,
        metadata,
        key_specs,
        extracted_specs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIODE_TEXT: &str = "1N4007 general purpose rectifier diode\n\
        Page 1\n\
        Vf: 1.1V, Vr: 1000V, If: 1A\n\
        Operating temperature: -65°C to +175°C\n\
        RoHS compliant, axial lead";

    #[test]
    fn test_analyze_diode() {
        let analysis = analyze(DIODE_TEXT, "1N4007", None);
        assert_eq!(analysis.family(), Some(ComponentFamily::Diode));
        assert_eq!(analysis.specifications.get("Vf"), Some("1.1V"));
        assert_eq!(analysis.specifications.get("Vr"), Some("1000V"));
        assert_eq!(analysis.specifications.get("If"), Some("1A"));
        assert_eq!(analysis.metadata.standards.len(), 1);
        assert_eq!(
            analysis.extracted_specs.as_deref(),
            Some(
                "Specifications: Vf: 1.1V, Vr: 1000V, If: 1A\n\
                 Additional: Op Temp: -65°C to +175°C, Mounting: Through Hole, Standards: RoHS"
            )
        );
    }

    #[test]
    fn test_forced_family() {
        let analysis = analyze("Voltage: 5V, Vout: 3.3V", "", Some(ComponentFamily::VoltageRegulator));
        assert_eq!(analysis.classification.confidence, 0);
        assert_eq!(analysis.specifications.get("Vout"), Some("3.3V"));
        assert_eq!(analysis.specifications.get("Voltage"), None);
    }

    #[test]
    fn test_context_block() {
        let analysis = analyze(DIODE_TEXT, "1N4007", None);
        let context = analysis.context().unwrap();
        assert!(context.starts_with("Component: 1N4007 (Diode)\nSpecifications: Vf: 1.1V"));

        let empty = analyze("", "", None);
        assert_eq!(empty.context(), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let analysis = analyze(DIODE_TEXT, "1N4007", None);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["classification"]["family"], "Diode");
        assert_eq!(json["specifications"]["Vf"], "1.1V");
        assert_eq!(json["metadata"]["mounting"], "Through Hole");
    }
}
