//! Drafts - per-item staging area for derived records.
//!
//! A draft reserves IDs and editor names against the output without touching it. Only
//! a finished draft is committed; dropping a draft releases everything it reserved.

use std::collections::HashSet;

use magic_records::{FormList, Record, RecordData, RecordId, SourceCatalog};

use super::OutputSet;
use crate::membership::MembershipCache;

/// Records staged by one item, ready to commit.
#[derive(Debug, Clone)]
pub struct StagedGraph {
    pub records: Vec<Record>,
    pub overrides: Vec<Record>,
    /// Membership lists created by this item, keyed by originating behavior.
    pub lists: Vec<(RecordId, FormList)>,
    pub editor_ids: HashSet<String>,
    pub next_local: u32,
}

/// Staging area for one item's derived graph.
pub struct Draft<'a> {
    catalog: &'a dyn SourceCatalog,
    output: &'a OutputSet,
    cache: &'a MembershipCache,
    next_local: u32,
    records: Vec<Record>,
    overrides: Vec<Record>,
    lists: Vec<(RecordId, FormList)>,
    editor_ids: HashSet<String>,
}

impl<'a> Draft<'a> {
    pub fn new(
        catalog: &'a dyn SourceCatalog,
        output: &'a OutputSet,
        cache: &'a MembershipCache,
    ) -> Self {
        Self {
            catalog,
            output,
            cache,
            next_local: output.next_local(),
            records: Vec::new(),
            overrides: Vec::new(),
            lists: Vec::new(),
            editor_ids: HashSet::new(),
        }
    }

    pub fn catalog(&self) -> &'a dyn SourceCatalog {
        self.catalog
    }

    /// Reserve a fresh ID in the output layer, skipping IDs the catalog already defines.
    pub fn allocate_id(&mut self) -> RecordId {
        loop {
            let id = RecordId {
                layer: self.output.layer().clone(),
                local: self.next_local,
            };
            self.next_local += 1;
            if self.catalog.resolve(&id).is_none() {
                return id;
            }
        }
    }

    /// Check if an editor ID is used by the catalog, the output, or this draft.
    pub fn name_taken(&self, editor_id: &str) -> bool {
        self.editor_ids.contains(editor_id)
            || self.output.name_taken(editor_id)
            || self.catalog.contains_editor_id(editor_id)
    }

    /// Reserve an editor ID, appending `_2`, `_3`, ... until it is unique.
    pub fn claim_name(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 2;
        while self.name_taken(&candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.editor_ids.insert(candidate.clone());
        candidate
    }

    /// Copy a record under a fresh ID and a claimed editor ID.
    pub fn duplicate<T: RecordData>(&mut self, template: &T, base_name: &str) -> T {
        let mut copy = template.clone();
        let id = self.allocate_id();
        let editor_id = self.claim_name(base_name);
        copy.reidentify(id, editor_id);
        copy
    }

    /// Stage a derived record.
    pub fn add<T: RecordData>(&mut self, record: T) {
        self.records.push(record.into());
    }

    /// Stage a modified copy of a source record under its source identity.
    pub fn add_override<T: RecordData>(&mut self, record: T) {
        self.overrides.push(record.into());
    }

    /// The membership list for a behavior identity, created if absent.
    pub fn membership_list(&mut self, key: &RecordId, base_name: &str) -> RecordId {
        if let Some(id) = self.cache.list_id(key) {
            return id.clone();
        }
        if let Some((_, list)) = self.lists.iter().find(|(k, _)| k == key) {
            return list.id.clone();
        }

        let id = self.allocate_id();
        let editor_id = self.claim_name(base_name);
        let list = FormList::new(id.clone(), editor_id);
        self.lists.push((key.clone(), list));
        id
    }

    /// Number of records staged so far, overrides and lists included.
    pub fn len(&self) -> usize {
        self.records.len() + self.overrides.len() + self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close the draft for committing.
    pub fn finish(self) -> StagedGraph {
        StagedGraph {
            records: self.records,
            overrides: self.overrides,
            lists: self.lists,
            editor_ids: self.editor_ids,
            next_local: self.next_local,
        }
    }
}
