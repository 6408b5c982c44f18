//! Source catalog - resolved, read-only access to records across load-ordered layers.

mod layer;

pub use layer::*;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use thiserror::Error;

use crate::records::{LayerId, Record, RecordData, RecordId, RecordKind};

/// Order in which winning records are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrder {
    /// Layers from first to last in load order.
    Listed,
    /// Layers from last to first; the highest-priority layer comes first.
    Priority,
}

/// Read-only view of the resolved record set.
pub trait SourceCatalog {
    /// The winning version of a record.
    fn resolve(&self, id: &RecordId) -> Option<&Record>;

    /// The layer that first defined a record.
    fn origin_layer(&self, id: &RecordId) -> Option<&LayerId>;

    /// Winning versions of every record of a kind, in a stable order.
    fn winning_records(&self, kind: RecordKind, order: RecordOrder) -> Vec<&Record>;

    /// Whether any record in any layer uses this editor ID.
    fn contains_editor_id(&self, editor_id: &str) -> bool;
}

impl dyn SourceCatalog + '_ {
    /// Resolve a record and downcast it to a concrete type.
    pub fn resolve_as<T: RecordData>(&self, id: &RecordId) -> Option<&T> {
        self.resolve(id).and_then(|record| record.as_kind::<T>())
    }

    /// Resolve an optional reference, as found on record fields.
    pub fn resolve_link<T: RecordData>(&self, link: Option<&RecordId>) -> Option<&T> {
        link.and_then(|id| self.resolve_as::<T>(id))
    }

    /// Winning records of a concrete type.
    pub fn winning<T: RecordData>(&self, order: RecordOrder) -> Vec<&T> {
        self.winning_records(T::KIND, order)
            .into_iter()
            .filter_map(|record| record.as_kind::<T>())
            .collect()
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read layer file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layer file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("layer {0} is already in the load order")]
    DuplicateLayer(LayerId),
}

/// Position of a record inside the catalog.
#[derive(Debug, Clone, Copy)]
struct Slot {
    layer: usize,
    record: usize,
}

/// An in-memory catalog built from layers in load order.
///
/// A record defined in several layers resolves to the last one (the winner), while its
/// origin is the first layer that defined it.
#[derive(Debug, Clone, Default)]
pub struct LayeredCatalog {
    layers: Vec<Layer>,

    /// Index: record ID -> every slot defining it, in load order.
    slots: HashMap<RecordId, Vec<Slot>>,

    editor_ids: HashSet<String>,
}

impl LayeredCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer to the end of the load order.
    pub fn push_layer(&mut self, layer: Layer) -> Result<(), CatalogError> {
        if self.has_layer(&layer.id) {
            return Err(CatalogError::DuplicateLayer(layer.id));
        }

        let layer_index = self.layers.len();
        for (record_index, record) in layer.records.iter().enumerate() {
            self.slots.entry(record.id().clone()).or_default().push(Slot {
                layer: layer_index,
                record: record_index,
            });
            if let Some(editor_id) = record.editor_id() {
                self.editor_ids.insert(editor_id.to_string());
            }
        }

        self.layers.push(layer);
        Ok(())
    }

    /// Load a JSON layer file and append it to the load order.
    pub fn load_layer_file(&mut self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let layer = Layer::from_json_file(path)?;
        self.push_layer(layer)
    }

    /// Build a catalog from JSON layer files, in load order.
    pub fn from_layer_files<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for path in paths {
            catalog.load_layer_file(path)?;
        }
        Ok(catalog)
    }

    /// Check if a layer is part of the load order.
    pub fn has_layer(&self, id: &LayerId) -> bool {
        self.layers.iter().any(|layer| &layer.id == id)
    }

    /// Layer IDs in load order.
    pub fn layer_ids(&self) -> impl Iterator<Item = &LayerId> {
        self.layers.iter().map(|layer| &layer.id)
    }

    /// Total number of record definitions across all layers.
    pub fn record_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.records.len()).sum()
    }

    fn record_at(&self, slot: Slot) -> &Record {
        &self.layers[slot.layer].records[slot.record]
    }

    fn collect_winners<'a>(
        &'a self,
        kind: RecordKind,
        layers: impl Iterator<Item = &'a Layer>,
    ) -> Vec<&'a Record> {
        let mut seen: HashSet<&RecordId> = HashSet::new();
        let mut winners = Vec::new();

        for layer in layers {
            for record in layer.records.iter().filter(|r| r.kind() == kind) {
                if !seen.insert(record.id()) {
                    continue;
                }
                if let Some(winner) = self.resolve(record.id()) {
                    winners.push(winner);
                }
            }
        }

        winners
    }
}

impl SourceCatalog for LayeredCatalog {
    fn resolve(&self, id: &RecordId) -> Option<&Record> {
        self.slots
            .get(id)
            .and_then(|slots| slots.last())
            .map(|slot| self.record_at(*slot))
    }

    fn origin_layer(&self, id: &RecordId) -> Option<&LayerId> {
        self.slots
            .get(id)
            .and_then(|slots| slots.first())
            .map(|slot| &self.layers[slot.layer].id)
    }

    fn winning_records(&self, kind: RecordKind, order: RecordOrder) -> Vec<&Record> {
        match order {
            RecordOrder::Listed => self.collect_winners(kind, self.layers.iter()),
            RecordOrder::Priority => self.collect_winners(kind, self.layers.iter().rev()),
        }
    }

    fn contains_editor_id(&self, editor_id: &str) -> bool {
        self.editor_ids.contains(editor_id)
    }
}
