//! Layer definitions - one plugin's worth of records.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::CatalogError;
use crate::records::{LayerId, Record};

/// The records one layer defines or overrides, in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Layer {
    /// Create a layer from its records.
    pub fn new(id: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            id: LayerId::new(id),
            records,
        }
    }

    /// Parse a layer from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a JSON layer file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
