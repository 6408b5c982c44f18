//! Membership cache - one aggregate list per originating behavior, shared by every
//! item of a run.

mod aggregator;

pub use aggregator::*;

use std::collections::HashMap;

use magic_records::{FormList, RecordId};

/// Aggregate lists keyed by the behavior identity they collect spells for.
#[derive(Debug, Clone, Default)]
pub struct MembershipCache {
    lists: Vec<FormList>,

    /// Index: behavior ID -> position in `lists`.
    index: HashMap<RecordId, usize>,
}

impl MembershipCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list for a behavior identity.
    pub fn get(&self, key: &RecordId) -> Option<&FormList> {
        self.index.get(key).map(|&i| &self.lists[i])
    }

    pub fn get_mut(&mut self, key: &RecordId) -> Option<&mut FormList> {
        match self.index.get(key) {
            Some(&i) => self.lists.get_mut(i),
            None => None,
        }
    }

    /// ID of the list for a behavior identity.
    pub fn list_id(&self, key: &RecordId) -> Option<&RecordId> {
        self.get(key).map(|list| &list.id)
    }

    pub fn contains_key(&self, key: &RecordId) -> bool {
        self.index.contains_key(key)
    }

    /// Take in lists created by a committed item. Keys already cached are skipped.
    pub fn absorb(&mut self, lists: impl IntoIterator<Item = (RecordId, FormList)>) {
        for (key, list) in lists {
            if self.index.contains_key(&key) {
                tracing::debug!(key = %key, "membership list already cached");
                continue;
            }
            self.index.insert(key, self.lists.len());
            self.lists.push(list);
        }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Cached lists in creation order.
    pub fn lists(&self) -> &[FormList] {
        &self.lists
    }

    /// Hand the lists over, in creation order.
    pub fn into_lists(self) -> Vec<FormList> {
        self.lists
    }
}
