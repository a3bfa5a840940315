//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the sqldmn crate.
//! Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use sqldmn::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Build a converter with deterministic document identifiers
//! let converter = Converter::builder()
//!     .with_id_source(Box::new(FixedIdSource::new("decision_20240101000000")))
//!     .build();
//!
//! let conversion = converter.convert("SELECT * FROM orders WHERE status = active AND total > 100")?;
//!
//! println!("{}", conversion.table.xml);
//! if let Ok(diagram) = &conversion.diagram {
//!     println!("{diagram}");
//! }
//!
//! // Persist the outcome for later replay
//! conversion.into_record().save("orders.dmnrec")?;
//! # Ok(())
//! # }
//! ```

// Core conversion pipeline
pub use crate::converter::{Conversion, Converter, ConverterBuilder};

// Decision table structures
pub use crate::table::{ConversionRecord, DecisionInput, DecisionRule, DecisionTable};

// Document identifier sources
pub use crate::document::ids::{FixedIdSource, IdSource, TimestampIdSource};

// Wire types for UI frontends
pub use crate::ui::{ConvertRequest, ConvertResponse};

// Error types
pub use crate::error::{DiagramError, ExtractionError, RecordError, XmlError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
