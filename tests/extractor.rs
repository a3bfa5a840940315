//! Tests for WHERE clause scanning and condition extraction.
mod common;
use common::*;
use sqldmn::extractor::extract;

#[test]
fn test_extracts_one_pair_per_condition() {
    let extraction = extract(ORDERS_QUERY);

    assert_eq!(extraction.inputs.len(), 2);
    assert_eq!(extraction.rules.len(), 2);

    assert_eq!(extraction.inputs[0].name, "status");
    assert_eq!(extraction.inputs[0].input_type, "string");
    assert_eq!(extraction.inputs[1].name, "total");

    assert_eq!(extraction.rules[0].condition, "status = active");
    assert_eq!(extraction.rules[0].output, "true");
    assert_eq!(extraction.rules[1].condition, "total > 100");
    assert_eq!(extraction.rules[1].output, "true");
}

#[test]
fn test_no_where_clause_yields_empty_extraction() {
    let extraction = extract(UNFILTERED_QUERY);

    assert!(extraction.inputs.is_empty());
    assert!(extraction.rules.is_empty());
}

#[test]
fn test_scan_is_case_insensitive() {
    let extraction = extract("SELECT * FROM t Where Status = Active AND Total > 5");

    // The whole query is folded to lower case before scanning, so the
    // stored conditions are lower case as well.
    assert_eq!(extraction.rules.len(), 2);
    assert_eq!(extraction.rules[0].condition, "status = active");
    assert_eq!(extraction.inputs[1].name, "total");
}

#[test]
fn test_clauses_with_fewer_than_three_tokens_are_skipped() {
    let extraction = extract("SELECT * FROM t WHERE status=active AND total > 100");

    // `status=active` is a single token and does not look like
    // `<column> <operator> <value>`, so only the second clause survives.
    assert_eq!(extraction.inputs.len(), 1);
    assert_eq!(extraction.inputs[0].name, "total");
    assert_eq!(extraction.rules[0].condition, "total > 100");
}

#[test]
fn test_inputs_and_rules_stay_index_correlated() {
    let extraction = extract("SELECT * FROM t WHERE a AND x > 1 AND b AND y < 2");

    assert_eq!(extraction.inputs.len(), extraction.rules.len());
    assert_eq!(extraction.inputs[0].name, "x");
    assert_eq!(extraction.rules[0].condition, "x > 1");
    assert_eq!(extraction.inputs[1].name, "y");
    assert_eq!(extraction.rules[1].condition, "y < 2");
}

#[test]
fn test_text_after_a_second_where_is_dropped() {
    let extraction = extract("SELECT * FROM t WHERE a = 1 AND b = 2 WHERE c = 3");

    // Only the segment between the first and second `where` is scanned.
    assert_eq!(extraction.rules.len(), 2);
    assert_eq!(extraction.rules[0].condition, "a = 1");
    assert_eq!(extraction.rules[1].condition, "b = 2");
}

#[test]
fn test_where_is_matched_as_a_substring() {
    // `somewhere` contains a second `where`, so the scanned segment ends
    // inside the value and the stored condition is truncated.
    let extraction = extract("SELECT * FROM t WHERE location = somewhere");

    assert_eq!(extraction.rules.len(), 1);
    assert_eq!(extraction.rules[0].condition, "location = some");
    assert_eq!(extraction.inputs[0].name, "location");
}

#[test]
fn test_and_is_matched_as_a_substring() {
    // `brand` contains `and`; the clause is cut into `br` and `= nike`,
    // neither of which has three tokens.
    let extraction = extract("SELECT * FROM t WHERE brand = nike AND total > 5");

    assert_eq!(extraction.inputs.len(), 1);
    assert_eq!(extraction.inputs[0].name, "total");
}

#[test]
fn test_inner_whitespace_is_preserved_in_conditions() {
    let extraction = extract("SELECT * FROM t WHERE  a   >=   10  ");

    assert_eq!(extraction.rules.len(), 1);
    assert_eq!(extraction.rules[0].condition, "a   >=   10");
    assert_eq!(extraction.inputs[0].name, "a");
}

#[test]
fn test_trailing_where_with_no_conditions() {
    let extraction = extract("SELECT * FROM t WHERE ");

    assert!(extraction.inputs.is_empty());
    assert!(extraction.rules.is_empty());
}

#[test]
fn test_condition_with_more_than_three_tokens_is_kept_whole() {
    let extraction = extract("SELECT * FROM t WHERE created_at > 2024 - 01 - 01");

    assert_eq!(extraction.rules.len(), 1);
    assert_eq!(extraction.rules[0].condition, "created_at > 2024 - 01 - 01");
    assert_eq!(extraction.inputs[0].name, "created_at");
}
