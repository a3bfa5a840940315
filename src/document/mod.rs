use crate::table::{DecisionInput, DecisionRule};

pub mod escape;
pub mod ids;

use escape::{escape_attr, escape_text};
use ids::{IdSource, TimestampIdSource};

/// The DMN model namespace of every generated document.
pub const MODEL_NS: &str = "https://www.omg.org/spec/DMN/20191111/MODEL/";

/// The DMN diagram-interchange namespace of the rendering-metadata block.
pub const DMNDI_NS: &str = "https://www.omg.org/spec/DMN/20191111/DMNDI/";

/// The diagram-commons namespace used for shape bounds.
pub const DC_NS: &str = "http://www.omg.org/spec/DMN/20180521/DC/";

/// Renders extracted inputs and rules as a complete DMN decision-table
/// document.
///
/// Every document contains exactly one decision, one decision table with the
/// `UNIQUE` hit policy, exactly one boolean output column, zero or more
/// inputs and rules, and one diagram-interchange shape referencing the
/// decision, regardless of what the extractor produced. The hit policy is
/// declared for downstream viewers but never enforced against the rules.
pub struct DocumentBuilder {
    id_source: Box<dyn IdSource>,
}

impl DocumentBuilder {
    /// Creates a builder whose identifiers come from the wall clock.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(TimestampIdSource))
    }

    /// Creates a builder with a caller-supplied identifier source.
    pub fn with_id_source(id_source: Box<dyn IdSource>) -> Self {
        Self { id_source }
    }

    /// Builds the XML document text. Infallible: user-derived text is
    /// escaped at this boundary, so the output is well-formed for any
    /// extractor result.
    pub fn build(&self, inputs: &[DecisionInput], rules: &[DecisionRule]) -> String {
        let decision_id = self.id_source.next_id();

        let mut lines: Vec<String> = Vec::new();
        lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
        lines.push(format!(r#"<definitions xmlns="{MODEL_NS}""#));
        lines.push(format!(r#"             xmlns:dmndi="{DMNDI_NS}""#));
        lines.push(format!(r#"             xmlns:dc="{DC_NS}""#));
        lines.push(format!(r#"             id="{decision_id}""#));
        lines.push(r#"             name="SQL to DMN Conversion""#.to_string());
        lines.push(r#"             namespace="http://camunda.org/schema/1.0/dmn">"#.to_string());

        lines.push(format!(
            r#"    <decision id="{decision_id}_decision" name="SQL Conditions">"#
        ));
        lines.push(format!(
            r#"        <decisionTable id="{decision_id}_decisionTable" hitPolicy="UNIQUE">"#
        ));

        for (i, input) in inputs.iter().enumerate() {
            lines.push(format!(
                r#"            <input id="input_{}" label="{}">"#,
                i + 1,
                escape_attr(&input.name)
            ));
            lines.push(format!(
                r#"                <inputExpression typeRef="{}">"#,
                escape_attr(&input.input_type)
            ));
            lines.push(format!(
                "                    <text>{}</text>",
                escape_text(&input.name)
            ));
            lines.push("                </inputExpression>".to_string());
            lines.push("            </input>".to_string());
        }

        lines.push(
            r#"            <output id="output_1" label="Result" name="result" typeRef="boolean" />"#
                .to_string(),
        );

        for (i, rule) in rules.iter().enumerate() {
            lines.push(format!(
                r#"            <rule id="{decision_id}_rule_{}">"#,
                i + 1
            ));
            lines.push("                <inputEntry>".to_string());
            lines.push(format!(
                "                    <text>{}</text>",
                escape_text(&rule.condition)
            ));
            lines.push("                </inputEntry>".to_string());
            lines.push("                <outputEntry>".to_string());
            lines.push(format!(
                "                    <text>{}</text>",
                escape_text(&rule.output)
            ));
            lines.push("                </outputEntry>".to_string());
            lines.push("            </rule>".to_string());
        }

        lines.push("        </decisionTable>".to_string());
        lines.push("    </decision>".to_string());

        lines.push("    <dmndi:DMNDI>".to_string());
        lines.push(format!(
            r#"        <dmndi:DMNDiagram id="{decision_id}_diagram">"#
        ));
        lines.push(format!(
            r#"            <dmndi:DMNShape id="shape_1" dmnElementRef="{decision_id}_decision">"#
        ));
        lines.push(
            r#"                <dc:Bounds height="80" width="180" x="100" y="100" />"#.to_string(),
        );
        lines.push("            </dmndi:DMNShape>".to_string());
        lines.push("        </dmndi:DMNDiagram>".to_string());
        lines.push("    </dmndi:DMNDI>".to_string());
        lines.push("</definitions>".to_string());

        lines.join("\n")
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
