use serde::{Deserialize, Serialize};

/// A decision input column extracted from one `where` clause condition.
///
/// `name` is the first whitespace token of the clause; `input_type` is always
/// the literal `"string"` today and is serialized under the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionInput {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
}

/// A single decision rule paired index-for-index with a `DecisionInput`.
///
/// `condition` is the lower-cased, trimmed clause text exactly as it came out
/// of the extractor; `output` is always the literal `"true"` today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRule {
    pub condition: String,
    pub output: String,
}

/// The complete decision table produced by one conversion call.
///
/// The serde field names reproduce the wire shape consumed by the frontend:
/// `inputs` travels as `input` and `xml` as `dmn_xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTable {
    pub name: String,
    #[serde(rename = "input")]
    pub inputs: Vec<DecisionInput>,
    pub rules: Vec<DecisionRule>,
    pub original_sql: String,
    #[serde(rename = "dmn_xml")]
    pub xml: String,
}
