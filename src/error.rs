use thiserror::Error;

/// Errors that can occur while extracting decision rules from a SQL query.
///
/// Extraction itself is infallible for any non-empty query: queries without a
/// `where` clause simply produce an empty rule set. The only failure is the
/// up-front rejection of a blank query.
#[derive(Error, Debug, Clone)]
pub enum ExtractionError {
    #[error("No SQL query provided")]
    EmptyQuery,
}

/// Errors raised by the minimal XML reader.
///
/// Every variant carries the byte offset at which the fault was detected so
/// a caller can point at the offending spot in the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("Unexpected end of document at byte {position}")]
    UnexpectedEof { position: usize },

    #[error(
        "Closing tag '</{found}>' does not match opening tag '<{expected}>' at byte {position}"
    )]
    MismatchedTag {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { message: String, position: usize },

    #[error("Unknown entity '&{entity};' at byte {position}")]
    InvalidEntity { entity: String, position: usize },

    #[error("Unexpected content after the document root at byte {position}")]
    TrailingContent { position: usize },

    #[error("Document contains no root element")]
    MissingRoot,
}

/// Errors that can occur while deriving a diagram from a DMN document.
///
/// A diagram fault never fails the surrounding conversion; the XML and rule
/// tables are still returned and the error travels alongside them.
#[derive(Error, Debug, Clone)]
pub enum DiagramError {
    #[error("Failed to parse DMN XML: {0}")]
    InvalidXml(#[from] XmlError),
}

/// Errors that can occur when saving or loading a `ConversionRecord`.
#[derive(Error, Debug, Clone)]
pub enum RecordError {
    #[error("Failed to encode conversion record: {0}")]
    Encode(String),

    #[error("Failed to decode conversion record: {0}")]
    Decode(String),

    #[error("Could not access record file '{path}': {message}")]
    File { path: String, message: String },
}
