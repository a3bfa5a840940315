//! Integration tests for sqldmn
//!
//! End-to-end tests that verify the complete conversion pipeline works
//! together.
//!
mod common;
use common::*;
use pretty_assertions::assert_eq;
use sqldmn::error::ExtractionError;
use sqldmn::prelude::*;
use std::fs;

#[test]
fn test_full_conversion_of_a_filtered_query() {
    let conversion = convert_fixed(ORDERS_QUERY);
    let table = &conversion.table;

    assert_eq!(table.name, "SQL Decision");
    assert_eq!(table.original_sql, ORDERS_QUERY);

    // One input and one rule per AND-joined condition.
    assert_eq!(table.inputs.len(), 2);
    assert_eq!(table.inputs[0].name, "status");
    assert_eq!(table.inputs[1].name, "total");
    assert_eq!(table.rules[0].condition, "status = active");
    assert_eq!(table.rules[1].condition, "total > 100");

    // The XML is a complete document carrying the pinned identifier.
    assert!(table.xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(table.xml.contains(r#"id="decision_20240101000000""#));
    assert!(table.xml.contains(r#"hitPolicy="UNIQUE""#));
    assert!(table.xml.contains("<text>total &gt; 100</text>"));
    assert!(table.xml.ends_with("</definitions>"));

    // The diagram reflects the same table, node for node.
    let diagram = conversion.diagram.expect("diagram should render");
    assert!(diagram.starts_with("graph TD"));
    assert!(diagram.contains(r#"    Input0["status"] --> Decision"#));
    assert!(diagram.contains(r#"    Input1["total"] --> Decision"#));
    assert!(diagram.contains(r#"    Rule1["total &gt; 100"] --> Decision"#));
}

#[test]
fn test_unfiltered_query_still_converts() {
    let conversion = convert_fixed(UNFILTERED_QUERY);
    let table = &conversion.table;

    assert!(table.inputs.is_empty());
    assert!(table.rules.is_empty());
    assert!(table.xml.contains(r#"<output id="output_1""#));

    let diagram = conversion.diagram.expect("diagram should render");
    assert_eq!(diagram, "graph TD\n    Decision[\"SQL Decision\"]");
}

#[test]
fn test_blank_queries_are_rejected() {
    let converter = fixed_converter();

    assert!(matches!(
        converter.convert(""),
        Err(ExtractionError::EmptyQuery)
    ));
    assert!(matches!(
        converter.convert("   \n\t  "),
        Err(ExtractionError::EmptyQuery)
    ));
}

#[test]
fn test_diagram_keeps_pace_with_growing_queries() {
    let converter = fixed_converter();

    for condition_count in 1..=8usize {
        let conditions: Vec<String> = (0..condition_count)
            .map(|i| format!("col{} = {}", i, i))
            .collect();
        let sql = format!("SELECT * FROM t WHERE {}", conditions.join(" AND "));

        let conversion = converter.convert(&sql).expect("conversion should succeed");
        assert_eq!(conversion.table.rules.len(), condition_count);

        let diagram = conversion.diagram.expect("diagram should render");
        // Header, decision node, one node per input and one per rule.
        assert_eq!(diagram.lines().count(), 2 + 2 * condition_count);
    }
}

#[test]
fn test_generated_documents_survive_their_own_round_trip() {
    // The diagram generator re-parses the XML the builder emits, so any
    // query text that would break the document shows up here.
    let nasty = r#"SELECT * FROM t WHERE note < "a & b" AND x > 'c<d>'"#;
    let conversion = convert_fixed(nasty);

    assert_eq!(conversion.table.rules.len(), 2);
    let diagram = conversion.diagram.expect("diagram should render");
    assert!(diagram.contains("Rule0["));
    assert!(diagram.contains("Rule1["));
}

#[test]
fn test_record_save_and_load_round_trip() {
    let path = test_output_path("roundtrip.dmnrec");
    let conversion = convert_fixed(ORDERS_QUERY);
    let original_table = conversion.table.clone();

    let record = conversion.into_record();
    assert!(record.diagram.is_some());
    assert!(record.diagram_error.is_none());

    record.save(&path).expect("record should save");
    let restored = ConversionRecord::from_file(&path).expect("record should load");

    assert_eq!(restored.table, original_table);
    assert_eq!(restored.diagram, record.diagram);

    // Clean up
    let _ = fs::remove_file(&path);
}

#[test]
fn test_record_round_trip_preserves_a_diagram_failure() {
    let path = test_output_path("failed_diagram.dmnrec");
    let mut conversion = convert_fixed(ORDERS_QUERY);
    conversion.diagram = Err(DiagramError::InvalidXml(XmlError::MissingRoot));
    let original_table = conversion.table.clone();

    let record = conversion.into_record();
    assert_eq!(record.diagram, None);
    assert_eq!(
        record.diagram_error.as_deref(),
        Some("Failed to parse DMN XML: Document contains no root element")
    );

    record.save(&path).expect("record should save");
    let restored = ConversionRecord::from_file(&path).expect("record should load");

    assert_eq!(restored.table, original_table);
    assert_eq!(restored.diagram, None);
    assert_eq!(restored.diagram_error, record.diagram_error);

    // Clean up
    let _ = fs::remove_file(&path);
}

#[test]
fn test_loading_a_missing_record_fails_with_the_path() {
    let path = test_output_path("does_not_exist.dmnrec");
    let error = ConversionRecord::from_file(&path).expect_err("load should fail");

    assert!(error.to_string().contains("does_not_exist.dmnrec"));
}

#[test]
fn test_loading_garbage_bytes_fails_to_decode() {
    let result = ConversionRecord::from_bytes(&[0xff, 0xff, 0xff, 0xff]);
    assert!(result.is_err());
}

#[test]
fn test_converters_can_be_shared_across_threads() {
    let converter = std::sync::Arc::new(fixed_converter());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let converter = converter.clone();
            std::thread::spawn(move || {
                let sql = format!("SELECT * FROM t WHERE col = {}", i);
                converter.convert(&sql).expect("conversion should succeed")
            })
        })
        .collect();

    for handle in handles {
        let conversion = handle.join().expect("thread should finish");
        assert_eq!(conversion.table.rules.len(), 1);
    }
}

#[test]
fn test_wall_clock_converter_output_parses() {
    // Same pipeline, real timestamp identifiers.
    let conversion = Converter::new()
        .convert(ORDERS_QUERY)
        .expect("conversion should succeed");

    assert!(conversion.table.xml.contains(r#"id="decision_"#));
    assert!(conversion.diagram.is_ok());
}
