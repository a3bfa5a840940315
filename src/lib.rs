//! # Sqldmn - SQL to DMN Decision Table Converter
//!
//! **Sqldmn** converts SQL queries into DMN 1.3 decision tables and renders
//! them as Mermaid flow diagrams. The converter reads the `WHERE` clause of a
//! query, turns each `AND`-joined condition into a decision-table input and
//! rule, and emits a standalone DMN XML document with diagram interchange
//! metadata that modeling tools can open directly.
//!
//! ## Core Workflow
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1.  **Extract**: Scan the query text for a `WHERE` clause and split it into
//!     conditions. Each condition of at least three tokens becomes one input
//!     column and one rule.
//! 2.  **Build**: Serialize the extracted table into a DMN XML document. The
//!     document identifier comes from an injectable source, so output can be
//!     made reproducible.
//! 3.  **Render**: Re-parse the finished XML and derive a flat Mermaid graph
//!     with one node per input and per rule. A rendering fault is reported
//!     alongside the table instead of discarding it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqldmn::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new();
//!     let conversion = converter.convert(
//!         "SELECT * FROM orders WHERE status = active AND total > 100",
//!     )?;
//!
//!     // The decision table mirrors the query: one input and one rule per condition
//!     for rule in &conversion.table.rules {
//!         println!("when {} then {}", rule.condition, rule.output);
//!     }
//!
//!     // The DMN XML is a complete document, DMNDI block included
//!     println!("{}", conversion.table.xml);
//!
//!     // The diagram carries its own success or failure
//!     match &conversion.diagram {
//!         Ok(diagram) => println!("{diagram}"),
//!         Err(error) => eprintln!("diagram unavailable: {error}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Deterministic Output
//!
//! Document identifiers default to a wall-clock timestamp. Tests and
//! snapshot-diffing tools can pin them instead:
//!
//! ```rust
//! use sqldmn::prelude::*;
//!
//! let converter = Converter::builder()
//!     .with_id_source(Box::new(FixedIdSource::new("decision_20240101000000")))
//!     .build();
//!
//! let conversion = converter.convert("SELECT 1 WHERE a = 1 AND b = 2").unwrap();
//! assert!(conversion.table.xml.contains(r#"id="decision_20240101000000""#));
//! ```

pub mod converter;
pub mod diagram;
pub mod document;
pub mod error;
pub mod extractor;
pub mod prelude;
pub mod table;
pub mod ui;
pub mod xml;

#[cfg(feature = "python-bindings")]
mod python;
