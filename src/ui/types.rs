use serde::{Deserialize, Serialize};

use crate::converter::Conversion;
use crate::error::ExtractionError;
use crate::table::DecisionTable;

/// An incoming conversion request as posted by a UI
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConvertRequest {
    pub sql: String,
}

/// Envelope holding the decision table in a successful response
#[derive(Debug, Serialize, Clone)]
pub struct DmnEnvelope {
    pub decision: DecisionTable,
}

/// The wire shape of a conversion response
///
/// A successful response always carries the `diagram` and `diagram_error`
/// keys, exactly one of them populated. A failed response carries only the
/// error message; no partial table is ever sent.
#[derive(Debug, Serialize, Clone)]
#[serde(untagged)]
pub enum ConvertResponse {
    Success {
        success: bool,
        dmn: DmnEnvelope,
        diagram: Option<String>,
        diagram_error: Option<String>,
    },
    Failure {
        success: bool,
        error: String,
    },
}

impl ConvertResponse {
    /// Marshals a pipeline outcome into the wire shape.
    pub fn from_outcome(outcome: &Result<Conversion, ExtractionError>) -> Self {
        match outcome {
            Ok(conversion) => Self::success(conversion),
            Err(error) => Self::failure(error.to_string()),
        }
    }

    pub fn success(conversion: &Conversion) -> Self {
        let (diagram, diagram_error) = match &conversion.diagram {
            Ok(diagram) => (Some(diagram.clone()), None),
            Err(error) => (None, Some(error.to_string())),
        };
        ConvertResponse::Success {
            success: true,
            dmn: DmnEnvelope {
                decision: conversion.table.clone(),
            },
            diagram,
            diagram_error,
        }
    }

    pub fn failure(error: String) -> Self {
        ConvertResponse::Failure {
            success: false,
            error,
        }
    }
}
