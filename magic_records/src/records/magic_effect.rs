//! Magic effect definitions - the behavior records every spell points at.

use serde::{Deserialize, Serialize};

use super::{Condition, RecordId, ScriptAdapter, ScriptEntry};
use crate::mechanics::{ActorValue, ArchetypeKind, CastType, SoundSlot, TargetType};

/// A magic effect: the behavior shared by spells, scrolls, and enchantments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicEffect {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,

    // Classification
    #[serde(default)]
    pub magic_skill: ActorValue,
    #[serde(default)]
    pub minimum_skill_level: u32,
    #[serde(default)]
    pub resist_value: ActorValue,
    #[serde(default)]
    pub archetype: Archetype,
    #[serde(default)]
    pub keywords: Vec<RecordId>,
    #[serde(default)]
    pub flags: MagicEffectFlags,

    // Gameplay
    #[serde(default)]
    pub base_cost: f32,
    #[serde(default)]
    pub cast_type: CastType,
    #[serde(default)]
    pub target_type: TargetType,
    #[serde(default)]
    pub spellmaking_casting_time: f32,
    #[serde(default)]
    pub skill_usage_multiplier: f32,
    #[serde(default)]
    pub dual_cast_scale: f32,
    pub projectile: Option<RecordId>,
    pub equip_ability: Option<RecordId>,
    pub perk_to_apply: Option<RecordId>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub scripts: Option<ScriptAdapter>,

    // Visuals and audio
    pub casting_light: Option<RecordId>,
    pub casting_art: Option<RecordId>,
    pub hit_shader: Option<RecordId>,
    pub hit_effect_art: Option<RecordId>,
    pub menu_display_object: Option<RecordId>,
    #[serde(default)]
    pub sounds: Vec<EffectSound>,
}

impl MagicEffect {
    /// Create an empty magic effect with the given identity.
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            description: None,
            magic_skill: ActorValue::None,
            minimum_skill_level: 0,
            resist_value: ActorValue::None,
            archetype: Archetype::default(),
            keywords: Vec::new(),
            flags: MagicEffectFlags::default(),
            base_cost: 0.0,
            cast_type: CastType::default(),
            target_type: TargetType::default(),
            spellmaking_casting_time: 0.0,
            skill_usage_multiplier: 0.0,
            dual_cast_scale: 0.0,
            projectile: None,
            equip_ability: None,
            perk_to_apply: None,
            conditions: Vec::new(),
            scripts: None,
            casting_light: None,
            casting_art: None,
            hit_shader: None,
            hit_effect_art: None,
            menu_display_object: None,
            sounds: Vec::new(),
        }
    }

    /// Check if the effect carries a keyword.
    pub fn has_keyword(&self, keyword: &RecordId) -> bool {
        self.keywords.contains(keyword)
    }

    /// The first attached script, if any.
    pub fn first_script(&self) -> Option<&ScriptEntry> {
        self.scripts.as_ref().and_then(|adapter| adapter.scripts.first())
    }

    /// Mutable access to the first attached script.
    pub fn first_script_mut(&mut self) -> Option<&mut ScriptEntry> {
        self.scripts
            .as_mut()
            .and_then(|adapter| adapter.scripts.first_mut())
    }
}

/// The behavior archetype and the actor value it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Archetype {
    pub kind: ArchetypeKind,
    #[serde(default)]
    pub actor_value: ActorValue,
}

impl Archetype {
    pub fn new(kind: ArchetypeKind, actor_value: ActorValue) -> Self {
        Self { kind, actor_value }
    }
}

/// Magic effect flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MagicEffectFlags {
    pub hostile: bool,
    pub detrimental: bool,
    pub hide_in_ui: bool,
    pub no_area: bool,
    pub no_recast: bool,
    pub no_duration: bool,
    pub no_magnitude: bool,
    pub power_affects_magnitude: bool,
    pub power_affects_duration: bool,
}

/// A sound played by an effect in a given slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSound {
    pub slot: SoundSlot,
    pub sound: RecordId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ScriptProperty;

    #[test]
    fn test_new_effect_is_empty() {
        let effect = MagicEffect::new(RecordId::new("Skyrim.esm", 0x12E4F), "FireDamageFFAimed");
        assert_eq!(effect.editor_id.as_deref(), Some("FireDamageFFAimed"));
        assert!(effect.name.is_none());
        assert!(effect.keywords.is_empty());
        assert!(effect.first_script().is_none());
    }

    #[test]
    fn test_has_keyword() {
        let fire = RecordId::new("Skyrim.esm", 0x01CEAD);
        let mut effect = MagicEffect::new(RecordId::new("Skyrim.esm", 0x12E4F), "FireDamage");
        effect.keywords.push(fire.clone());

        assert!(effect.has_keyword(&fire));
        assert!(!effect.has_keyword(&RecordId::new("Skyrim.esm", 0x01CEAE)));
    }

    #[test]
    fn test_first_script_mut() {
        let mut effect = MagicEffect::new(RecordId::new("Patch.esp", 0x800), "Hook");
        effect.scripts = Some(ScriptAdapter::with_script(ScriptEntry::new("HookScript")));

        effect
            .first_script_mut()
            .unwrap()
            .properties
            .push(ScriptProperty::int("Charges", 2));

        assert_eq!(effect.first_script().unwrap().properties.len(), 1);
    }

    #[test]
    fn test_flags_deserialize_partially() {
        let flags: MagicEffectFlags = serde_json::from_str(r#"{"hide_in_ui": true}"#).unwrap();
        assert!(flags.hide_in_ui);
        assert!(!flags.no_area);
    }
}
