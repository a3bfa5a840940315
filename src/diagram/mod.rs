//! Mermaid rendering of a DMN decision-table document.
//!
//! The diagram is derived from the XML text, not from the in-memory table,
//! so it only ever sees what survived the round trip through the document.

use crate::document::MODEL_NS;
use crate::error::DiagramError;
use crate::xml;
use itertools::Itertools;

/// Derives a flat Mermaid `graph TD` diagram from a DMN document.
///
/// Every `<input>` and every `<rule>` (document order) becomes one node
/// with a directed edge into a single fixed `Decision` node; no branching
/// or nesting is modeled. An input without a `<text>` element falls back to
/// a positional `Input N` label; a rule without an input-entry text is
/// silently skipped.
///
/// A parse fault on the document is the sole error path of the whole
/// conversion pipeline and is reported, never retried.
pub fn from_dmn(dmn_xml: &str) -> Result<String, DiagramError> {
    let root = xml::parse(dmn_xml)?;

    let mut lines: Vec<String> = vec![
        "graph TD".to_string(),
        r#"    Decision["SQL Decision"]"#.to_string(),
    ];

    for (idx, input) in root.descendants(MODEL_NS, "input").iter().enumerate() {
        let label = match input.find(MODEL_NS, "text") {
            Some(text) => text.text().unwrap_or_default().to_string(),
            None => format!("Input {}", idx + 1),
        };
        lines.push(format!(r#"    Input{idx}["{label}"] --> Decision"#));
    }

    for (idx, rule) in root.descendants(MODEL_NS, "rule").iter().enumerate() {
        let entry = rule
            .find(MODEL_NS, "inputEntry")
            .and_then(|entry| entry.child(MODEL_NS, "text"));
        let Some(entry) = entry else {
            continue;
        };
        let condition = escape_label(entry.text().unwrap_or_default());
        lines.push(format!(r#"    Rule{idx}["{condition}"] --> Decision"#));
    }

    Ok(lines.iter().join("\n"))
}

/// Escapes a condition for a quoted Mermaid node label: double quotes
/// become single quotes, angle brackets their text-safe entity forms.
fn escape_label(condition: &str) -> String {
    condition
        .replace('"', "'")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
