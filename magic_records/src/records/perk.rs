//! Perks and the conditions that gate them.

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::mechanics::{CompareOperator, EntryPoint, PerkModification, RunOn};

/// A perk made of entry-point modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perk {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub playable: bool,
    #[serde(default)]
    pub num_ranks: u8,
    #[serde(default)]
    pub entries: Vec<PerkEntry>,
}

impl Perk {
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            playable: false,
            num_ranks: 0,
            entries: Vec::new(),
        }
    }
}

/// A rank effect that modifies a value at an entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerkEntry {
    pub rank: u8,
    pub priority: u8,
    pub entry_point: EntryPoint,
    pub modification: PerkModification,
    pub value: f32,
    /// Number of condition tabs the entry point exposes.
    pub condition_tab_count: u8,
    #[serde(default)]
    pub conditions: Vec<PerkCondition>,
}

impl PerkEntry {
    /// The data of the first condition on the given tab.
    pub fn condition_data(&self, tab: usize) -> Option<&ConditionData> {
        self.conditions
            .get(tab)
            .and_then(|group| group.conditions.first())
            .map(|condition| &condition.data)
    }

    /// Mutable variant of [`PerkEntry::condition_data`].
    pub fn condition_data_mut(&mut self, tab: usize) -> Option<&mut ConditionData> {
        self.conditions
            .get_mut(tab)
            .and_then(|group| group.conditions.first_mut())
            .map(|condition| &mut condition.data)
    }
}

/// The conditions evaluated on one tab of a perk entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerkCondition {
    pub run_on_tab_index: u8,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// A single comparison against a condition function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub compare: CompareOperator,
    pub value: f32,
    pub data: ConditionData,
}

impl Condition {
    /// A condition that holds when the function returns 1.
    pub fn is_true(data: ConditionData) -> Self {
        Self {
            compare: CompareOperator::EqualTo,
            value: 1.0,
            data,
        }
    }
}

/// Condition functions understood by the derivation pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionData {
    /// The subject is under the given magic effect.
    HasMagicEffect {
        effect: Option<RecordId>,
        #[serde(default)]
        run_on: RunOn,
    },
    /// The subject is in the given form list.
    IsInList {
        list: Option<RecordId>,
        #[serde(default)]
        run_on: RunOn,
    },
    /// The subject knows the given spell.
    HasSpell {
        spell: Option<RecordId>,
        #[serde(default)]
        run_on: RunOn,
    },
    /// The subject is the given object.
    GetIsId {
        object: Option<RecordId>,
        #[serde(default)]
        run_on: RunOn,
    },
    /// Any other function, kept by name.
    Other {
        function: String,
        #[serde(default)]
        run_on: RunOn,
    },
}
