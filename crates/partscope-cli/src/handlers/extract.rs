//! Extract command handler.

use std::path::Path;

use anyhow::{Context, Result};
use partscope_extract::{ComponentFamily, DatasheetAnalysis, KeySpecs, analyze};

use crate::utils::input::read_input;

/// Run the full datasheet analysis and print it.
pub fn execute(
    name: Option<&str>,
    family: Option<ComponentFamily>,
    json: bool,
    file: Option<&Path>,
) -> Result<()> {
    let text = read_input(file)?;
    let analysis = analyze(&text, name.unwrap_or_default(), family);

    if json {
        let rendered =
            serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
        println!("{rendered}");
    } else {
        print!("{}", render_text(&analysis));
    }
    Ok(())
}

/// Human-readable report of an analysis.
pub fn render_text(analysis: &DatasheetAnalysis) -> String {
    let mut out = String::new();
    if !analysis.component_name.is_empty() {
        out.push_str(&format!("Component: {}\n", analysis.component_name));
    }
    out.push_str(&format!(
        "Type: {} (confidence {})\n",
        analysis.classification.label(),
        analysis.classification.confidence
    ));

    if analysis.specifications.is_empty() {
        out.push_str("Specifications: none found\n");
    } else {
        out.push_str("Specifications:\n");
        for (key, value) in analysis.specifications.iter() {
            out.push_str(&format!("  {key}: {value}\n"));
        }
    }

    if let Some(metadata) = analysis.metadata.render() {
        out.push_str(&format!("Additional: {metadata}\n"));
    }

    let ratings = key_spec_lines(&analysis.key_specs);
    if !ratings.is_empty() {
        out.push_str("Key Specs:\n");
        for line in ratings {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

fn key_spec_lines(specs: &KeySpecs) -> Vec<String> {
    [
        ("Voltage", &specs.voltage_rating),
        ("Current", &specs.current_rating),
        ("Power", &specs.power_rating),
        ("Temperature", &specs.temperature_range),
        ("Tolerance", &specs.tolerance),
        ("Package", &specs.package_type),
        ("Manufacturer", &specs.manufacturer),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
    .collect()
}
