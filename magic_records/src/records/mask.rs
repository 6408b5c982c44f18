//! Field masks for copying magic effect data between records.

use super::MagicEffect;

macro_rules! magic_effect_mask {
    ($($field:ident),* $(,)?) => {
        /// Selects which magic effect fields [`MagicEffect::copy_masked`] copies.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct MagicEffectMask {
            $(pub $field: bool,)*
        }

        impl MagicEffectMask {
            /// A mask with every field set to `value`.
            pub const fn uniform(value: bool) -> Self {
                Self {
                    $($field: value,)*
                }
            }

            /// Names of the fields this mask copies, in declaration order.
            pub fn selected(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(
                    if self.$field {
                        names.push(stringify!($field));
                    }
                )*
                names
            }
        }

        impl MagicEffect {
            /// Copy the fields selected by `mask` from `source` into this effect.
            pub fn copy_masked(&mut self, source: &MagicEffect, mask: &MagicEffectMask) {
                $(
                    if mask.$field {
                        self.$field = source.$field.clone();
                    }
                )*
            }
        }
    };
}

magic_effect_mask!(
    editor_id,
    name,
    description,
    magic_skill,
    minimum_skill_level,
    resist_value,
    archetype,
    keywords,
    flags,
    base_cost,
    cast_type,
    target_type,
    spellmaking_casting_time,
    skill_usage_multiplier,
    dual_cast_scale,
    projectile,
    equip_ability,
    perk_to_apply,
    conditions,
    scripts,
    casting_light,
    casting_art,
    hit_shader,
    hit_effect_art,
    menu_display_object,
    sounds,
);

impl MagicEffectMask {
    /// Visual and audio fields only; never gameplay data.
    pub fn cosmetic() -> Self {
        let mut mask = Self::uniform(false);
        mask.casting_light = true;
        mask.casting_art = true;
        mask.sounds = true;
        mask
    }

    /// Everything except scripts, conditions, and the editor ID.
    pub fn scroll_carry() -> Self {
        let mut mask = Self::uniform(true);
        mask.scripts = false;
        mask.conditions = false;
        mask.editor_id = false;
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::{ActorValue, SoundSlot};
    use crate::records::{EffectSound, RecordId, ScriptAdapter, ScriptEntry};

    fn fire_effect() -> MagicEffect {
        let mut effect = MagicEffect::new(RecordId::new("Skyrim.esm", 0x12E4F), "FireDamage");
        effect.name = Some("Fireball".to_string());
        effect.magic_skill = ActorValue::Destruction;
        effect.base_cost = 2.5;
        effect.casting_light = Some(RecordId::new("Skyrim.esm", 0x1A0));
        effect.casting_art = Some(RecordId::new("Skyrim.esm", 0x1A1));
        effect.hit_shader = Some(RecordId::new("Skyrim.esm", 0x1A2));
        effect.sounds.push(EffectSound {
            slot: SoundSlot::Release,
            sound: RecordId::new("Skyrim.esm", 0x1A3),
        });
        effect.scripts = Some(ScriptAdapter::with_script(ScriptEntry::new("FireScript")));
        effect
    }

    #[test]
    fn test_cosmetic_mask_fields() {
        assert_eq!(
            MagicEffectMask::cosmetic().selected(),
            vec!["casting_light", "casting_art", "sounds"]
        );
    }

    #[test]
    fn test_cosmetic_copy_leaves_gameplay_untouched() {
        let source = fire_effect();
        let mut target = MagicEffect::new(RecordId::new("Patch.esp", 0x800), "Target");

        target.copy_masked(&source, &MagicEffectMask::cosmetic());

        assert_eq!(target.casting_light, source.casting_light);
        assert_eq!(target.casting_art, source.casting_art);
        assert_eq!(target.sounds, source.sounds);
        assert_eq!(target.hit_shader, None);
        assert_eq!(target.magic_skill, ActorValue::None);
        assert_eq!(target.base_cost, 0.0);
        assert_eq!(target.name, None);
        assert_eq!(target.id, RecordId::new("Patch.esp", 0x800));
    }

    #[test]
    fn test_scroll_carry_skips_scripts_conditions_and_editor_id() {
        let source = fire_effect();
        let mut target = MagicEffect::new(RecordId::new("Patch.esp", 0x800), "Target");

        target.copy_masked(&source, &MagicEffectMask::scroll_carry());

        assert_eq!(target.editor_id.as_deref(), Some("Target"));
        assert!(target.scripts.is_none());
        assert_eq!(target.name.as_deref(), Some("Fireball"));
        assert_eq!(target.magic_skill, ActorValue::Destruction);
        assert_eq!(target.hit_shader, source.hit_shader);
    }

    #[test]
    fn test_copy_never_changes_identity() {
        let source = fire_effect();
        let mut target = MagicEffect::new(RecordId::new("Patch.esp", 0x800), "Target");

        target.copy_masked(&source, &MagicEffectMask::uniform(true));

        assert_eq!(target.id, RecordId::new("Patch.esp", 0x800));
        assert_eq!(target.editor_id, source.editor_id);
    }
}
