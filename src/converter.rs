//! The conversion pipeline: SQL text in, decision table plus diagram out.

use crate::diagram;
use crate::document::DocumentBuilder;
use crate::document::ids::IdSource;
use crate::error::{DiagramError, ExtractionError};
use crate::extractor;
use crate::table::{ConversionRecord, DecisionTable};

/// The product of one conversion.
///
/// The diagram carries its own success or failure. A diagram fault never
/// invalidates the table or its XML; callers that only want the document
/// can ignore the diagram slot entirely.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The structured decision table, DMN XML included.
    pub table: DecisionTable,
    /// The Mermaid rendering of the XML, or the fault that prevented it.
    pub diagram: Result<String, DiagramError>,
}

impl Conversion {
    /// Flattens the conversion into a serializable record for storage.
    pub fn into_record(self) -> ConversionRecord {
        let (diagram, diagram_error) = match self.diagram {
            Ok(diagram) => (Some(diagram), None),
            Err(error) => (None, Some(error.to_string())),
        };
        ConversionRecord::new(self.table, diagram, diagram_error)
    }
}

/// Converts SQL queries into DMN decision tables.
///
/// A converter is stateless between calls and can be shared freely; only
/// the identifier source distinguishes one converter from another.
pub struct Converter {
    builder: DocumentBuilder,
}

impl Converter {
    /// Creates a converter with wall-clock document identifiers.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a converter with a custom configuration.
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// Runs the full pipeline on one SQL query.
    ///
    /// A blank query is the only fatal input. Everything else converts:
    /// a query without a recognizable `WHERE` clause simply yields a table
    /// with no inputs and no rules.
    pub fn convert(&self, sql: &str) -> Result<Conversion, ExtractionError> {
        if sql.trim().is_empty() {
            return Err(ExtractionError::EmptyQuery);
        }

        let extraction = extractor::extract(sql);
        let xml = self.builder.build(&extraction.inputs, &extraction.rules);

        let table = DecisionTable {
            name: "SQL Decision".to_string(),
            inputs: extraction.inputs,
            rules: extraction.rules,
            original_sql: sql.to_string(),
            xml,
        };

        let diagram = diagram::from_dmn(&table.xml);
        Ok(Conversion { table, diagram })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder for [`Converter`] instances.
pub struct ConverterBuilder {
    id_source: Option<Box<dyn IdSource>>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self { id_source: None }
    }

    /// Overrides the document identifier source, e.g. with a
    /// [`FixedIdSource`](crate::document::ids::FixedIdSource) for
    /// reproducible output.
    pub fn with_id_source(mut self, id_source: Box<dyn IdSource>) -> Self {
        self.id_source = Some(id_source);
        self
    }

    pub fn build(self) -> Converter {
        let builder = match self.id_source {
            Some(source) => DocumentBuilder::with_id_source(source),
            None => DocumentBuilder::new(),
        };
        Converter { builder }
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
