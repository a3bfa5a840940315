use crate::error::RecordError;
use crate::table::DecisionTable;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A finished conversion snapshotted to disk in the bincode format.
///
/// Records capture everything a viewer needs to redisplay a conversion
/// without rerunning it: the decision table (including the DMN XML) and
/// either the diagram text or the diagram failure message.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionRecord {
    pub table: DecisionTable,
    pub diagram: Option<String>,
    pub diagram_error: Option<String>,
}

impl ConversionRecord {
    pub fn new(
        table: DecisionTable,
        diagram: Option<String>,
        diagram_error: Option<String>,
    ) -> Self {
        Self {
            table,
            diagram,
            diagram_error,
        }
    }

    /// Saves the record to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), RecordError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| RecordError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| RecordError::File {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| RecordError::File {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a record from a file.
    pub fn from_file(path: &str) -> Result<Self, RecordError> {
        let mut file = fs::File::open(path).map_err(|e| RecordError::File {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| RecordError::File {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a record from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        decode_from_slice(bytes, standard())
            .map(|(record, _)| record) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| RecordError::Decode(e.to_string()))
    }
}
