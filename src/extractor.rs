use crate::table::{DecisionInput, DecisionRule};

/// The ordered decision inputs and rules recognized in one SQL query.
///
/// Both sequences are index-correlated: entry `i` of `inputs` was extracted
/// from the same clause as entry `i` of `rules`, in the order the clauses
/// appear in the query.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub inputs: Vec<DecisionInput>,
    pub rules: Vec<DecisionRule>,
}

/// Scans a SQL query for `where` clause conditions.
///
/// This is deliberately not a SQL parser. The scan lower-cases the query,
/// takes the text after the first `where` occurrence, and splits it on the
/// literal substring `and`; each resulting clause with at least three
/// whitespace tokens (`<column> <operator> <value>`) becomes one
/// input/rule pair. Queries without a `where` produce an empty extraction,
/// which is the defined behavior for unfiltered queries rather than an
/// error. `or`, parentheses and sub-selects are opaque clause text.
///
/// The stored condition is the lower-cased, trimmed clause; the original
/// casing is intentionally not preserved.
pub fn extract(sql: &str) -> Extraction {
    let lowered = sql.to_lowercase();

    // The usable filter text is the segment between the first `where` and
    // the next occurrence (or the end of the string); anything after a
    // second `where` is dropped with the rest of the tail.
    let Some(where_part) = lowered.split("where").nth(1) else {
        return Extraction::default();
    };

    let mut inputs = Vec::new();
    let mut rules = Vec::new();

    for clause in where_part.trim().split("and") {
        let clause = clause.trim();
        let tokens: Vec<&str> = clause.split_whitespace().collect();
        if tokens.len() < 3 {
            // Not shaped like `<column> <operator> <value>`; skip silently.
            continue;
        }

        inputs.push(DecisionInput {
            name: tokens[0].to_string(),
            input_type: "string".to_string(),
        });
        rules.push(DecisionRule {
            condition: clause.to_string(),
            output: "true".to_string(),
        });
    }

    Extraction { inputs, rules }
}
