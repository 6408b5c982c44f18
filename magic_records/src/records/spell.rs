//! Spells, scrolls, enchantments, and the effect entries they carry.

use serde::{Deserialize, Serialize};

use super::{Condition, RecordId};
use crate::mechanics::{CastType, EquipSlot, SpellType, TargetType};

/// One entry of an effect list: a base effect plus its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub base_effect: Option<RecordId>,
    #[serde(default)]
    pub data: EffectData,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Effect {
    /// An unconditional effect entry.
    pub fn new(base_effect: RecordId, data: EffectData) -> Self {
        Self {
            base_effect: Some(base_effect),
            data,
            conditions: Vec::new(),
        }
    }

    /// Check if this entry points at the given base effect.
    pub fn uses(&self, base_effect: &RecordId) -> bool {
        self.base_effect.as_ref() == Some(base_effect)
    }
}

/// Area, magnitude, and duration of an effect entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EffectData {
    pub area: u32,
    pub magnitude: f32,
    /// Seconds.
    pub duration: u32,
}

impl EffectData {
    pub fn new(area: u32, magnitude: f32, duration: u32) -> Self {
        Self {
            area,
            magnitude,
            duration,
        }
    }
}

/// A castable spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub spell_type: SpellType,
    pub equip_slot: Option<EquipSlot>,
    pub half_cost_perk: Option<RecordId>,
    #[serde(default)]
    pub cast_type: CastType,
    #[serde(default)]
    pub target_type: TargetType,
    #[serde(default)]
    pub base_cost: u32,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Spell {
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            spell_type: SpellType::Spell,
            equip_slot: None,
            half_cost_perk: None,
            cast_type: CastType::default(),
            target_type: TargetType::default(),
            base_cost: 0,
            effects: Vec::new(),
        }
    }
}

/// A single-use scroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub keywords: Vec<RecordId>,
    #[serde(default)]
    pub cast_type: CastType,
    #[serde(default)]
    pub target_type: TargetType,
    #[serde(default)]
    pub base_cost: u32,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Scroll {
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            keywords: Vec::new(),
            cast_type: CastType::default(),
            target_type: TargetType::default(),
            base_cost: 0,
            effects: Vec::new(),
        }
    }
}

/// An enchantment (object effect) attached to a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enchantment {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub no_auto_calc: bool,
    #[serde(default)]
    pub cast_type: CastType,
    #[serde(default)]
    pub target_type: TargetType,
    #[serde(default)]
    pub charge_time: f32,
    #[serde(default)]
    pub enchantment_amount: i32,
    #[serde(default)]
    pub enchantment_cost: u32,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Enchantment {
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            no_auto_calc: false,
            cast_type: CastType::default(),
            target_type: TargetType::default(),
            charge_time: 0.0,
            enchantment_amount: 0,
            enchantment_cost: 0,
            effects: Vec::new(),
        }
    }
}
