//! Pipeline tests through the public API.

use partscope_extract::{
    ComponentFamily, SpecificationMap, analyze, classify, classify_named, extract, normalize,
    summarize,
};

#[test]
fn test_resistor_map_round_trips_through_json() {
    let text = normalize("Carbon film resistor.\n  Resistance: 10k, Tolerance: 5");
    let result = classify(&text);
    assert_eq!(result.family, Some(ComponentFamily::Resistor));

    let map = extract(&text, result.family);
    assert_eq!(map.get("Resistance"), Some("10k"));
    assert_eq!(map.get("Tolerance"), Some("5"));

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"Resistance":"10k","Tolerance":"5"}"#);
    let back: SpecificationMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_transistor_text_classifies_and_extracts() {
    let text = "NPN switching device. Vce: 40V, hFE=120, Ic: 200mA";
    let result = classify_named("2N3904", text);
    assert_eq!(result.family, Some(ComponentFamily::Transistor));

    let map = extract(text, result.family);
    assert_eq!(map.get("Type"), Some("NPN"));
    assert_eq!(map.get("Gain"), Some("120"));
}

#[test]
fn test_extract_is_idempotent_for_every_family() {
    let text = "Vf: 1.1V, Vout: 5V, Flash: 32KB, coil voltage: 12V, \
                frequency: 16MHz, tolerance: 1%, value: 100nF";
    for family in ComponentFamily::ALL.map(Some).into_iter().chain([None]) {
        assert_eq!(extract(text, family), extract(text, family), "{family:?}");
    }
}

#[test]
fn test_analysis_and_summary_agree_on_family() {
    let text = "N-channel MOSFET, Vds: 60V, Rds(on): 0.1ohm, Id: 30A";
    let analysis = analyze(text, "IRFZ44N", None);
    assert_eq!(analysis.family(), Some(ComponentFamily::Mosfet));
    assert_eq!(analysis.specifications.get("Type"), Some("N-Channel"));

    let summary = summarize(text, "IRFZ44N");
    assert!(summary.starts_with("Component: IRFZ44N (MOSFET)"), "{summary}");
}
