//! Output set - everything a run derives, written to a single output layer.

mod draft;

pub use draft::*;

use std::collections::{HashMap, HashSet};

use magic_records::{FormList, Layer, LayerId, Record, RecordId};
use serde::Serialize;

/// First local ID handed out in the output layer.
pub const FIRST_LOCAL_ID: u32 = 0x800;

/// Derived records, aggregate lists, and overrides produced by a run.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSet {
    layer: LayerId,
    next_local: u32,

    /// Derived records in commit order.
    records: Vec<Record>,

    /// Aggregate membership lists, handed over once a pipeline finishes.
    lists: Vec<FormList>,

    /// Fresh copies of source records that keep their source identity.
    overrides: Vec<Record>,

    #[serde(skip)]
    editor_ids: HashSet<String>,

    #[serde(skip)]
    index: HashMap<RecordId, usize>,
}

impl OutputSet {
    /// Create an empty output set for a layer.
    pub fn new(layer: impl Into<String>) -> Self {
        Self {
            layer: LayerId::new(layer),
            next_local: FIRST_LOCAL_ID,
            records: Vec::new(),
            lists: Vec::new(),
            overrides: Vec::new(),
            editor_ids: HashSet::new(),
            index: HashMap::new(),
        }
    }

    pub fn layer(&self) -> &LayerId {
        &self.layer
    }

    /// The next unallocated local ID.
    pub fn next_local(&self) -> u32 {
        self.next_local
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn lists(&self) -> &[FormList] {
        &self.lists
    }

    pub fn overrides(&self) -> &[Record] {
        &self.overrides
    }

    /// Get a derived record by ID.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Get an override by the source ID it replaces.
    pub fn get_override(&self, id: &RecordId) -> Option<&Record> {
        self.overrides.iter().find(|record| record.id() == id)
    }

    /// Find a derived record by its editor ID.
    pub fn find_by_editor_id(&self, editor_id: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.editor_id() == Some(editor_id))
    }

    /// Find an aggregate list by its editor ID.
    pub fn find_list(&self, editor_id: &str) -> Option<&FormList> {
        self.lists
            .iter()
            .find(|list| list.editor_id.as_deref() == Some(editor_id))
    }

    /// Check if a derived editor ID is already in use.
    pub fn name_taken(&self, editor_id: &str) -> bool {
        self.editor_ids.contains(editor_id)
    }

    /// Check if nothing has been derived.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.lists.is_empty() && self.overrides.is_empty()
    }

    /// Move a finished draft into the output.
    ///
    /// Returns the membership lists the draft created so the caller can cache them.
    pub fn commit(&mut self, staged: StagedGraph) -> Vec<(RecordId, FormList)> {
        self.next_local = self.next_local.max(staged.next_local);
        self.editor_ids.extend(staged.editor_ids);

        for record in staged.records {
            self.index.insert(record.id().clone(), self.records.len());
            self.records.push(record);
        }

        for record in staged.overrides {
            match self.overrides.iter().position(|r| r.id() == record.id()) {
                Some(i) => self.overrides[i] = record,
                None => self.overrides.push(record),
            }
        }

        staged.lists
    }

    /// Take over aggregate lists once a pipeline has filled them.
    pub fn extend_lists(&mut self, lists: impl IntoIterator<Item = FormList>) {
        for list in lists {
            if let Some(editor_id) = &list.editor_id {
                self.editor_ids.insert(editor_id.clone());
            }
            self.lists.push(list);
        }
    }

    /// The output as a layer: derived records, then lists, then overrides.
    pub fn to_layer(&self) -> Layer {
        let records = self
            .records
            .iter()
            .cloned()
            .chain(self.lists.iter().cloned().map(Record::from))
            .chain(self.overrides.iter().cloned())
            .collect();

        Layer {
            id: self.layer.clone(),
            records,
        }
    }
}
