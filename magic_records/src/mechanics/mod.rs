//! Game mechanics: actor values, archetypes, casting modes, perk entry points, etc.

use serde::{Deserialize, Serialize};

/// Actor values referenced by magic effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActorValue {
    #[default]
    None,

    // Attributes
    Health,
    Magicka,
    Stamina,

    // Magic skills
    Alteration,
    Conjuration,
    Destruction,
    Illusion,
    Restoration,

    // Skill power modifiers
    AlterationPowerModifier,
    ConjurationPowerModifier,
    DestructionPowerModifier,
    IllusionPowerModifier,
    RestorationPowerModifier,

    // Resistances
    PoisonResist,
    ResistDisease,
    ResistFire,
    ResistFrost,
    ResistShock,
    ResistMagic,
}

impl ActorValue {
    /// Whether this value is one of the five schools of magic.
    pub fn is_magic_skill(&self) -> bool {
        matches!(
            self,
            ActorValue::Alteration
                | ActorValue::Conjuration
                | ActorValue::Destruction
                | ActorValue::Illusion
                | ActorValue::Restoration
        )
    }
}

/// Behavior archetypes of a magic effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ArchetypeKind {
    #[default]
    ValueModifier,
    Script,
    Dispel,
    CureDisease,
    Absorb,
    DualValueModifier,
    Calm,
    Demoralize,
    Frenzy,
    Disarm,
    CommandSummoned,
    Invisibility,
    Light,
    Lock,
    Open,
    BoundWeapon,
    SummonCreature,
    DetectLife,
    Telekinesis,
    Paralysis,
    Reanimate,
    SoulTrap,
    TurnUndead,
    Guide,
    Cloak,
    SlowTime,
    Rally,
    Banish,
    Accumulator,
}

/// How a spell or effect is delivered over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CastType {
    ConstantEffect,
    #[default]
    FireAndForget,
    Concentration,
    Scroll,
}

/// Who or what a spell or effect is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TargetType {
    /// Delivered to the caster.
    #[serde(rename = "Self")]
    Caster,
    Touch,
    #[default]
    Aimed,
    TargetActor,
    TargetLocation,
}

/// Equip slots a spell can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    LeftHand,
    RightHand,
    EitherHand,
    BothHands,
    Voice,
    Potion,
}

impl EquipSlot {
    /// Whether a caster can hold this spell in a hand.
    pub fn is_hand_cast(&self) -> bool {
        matches!(
            self,
            EquipSlot::EitherHand | EquipSlot::BothHands | EquipSlot::RightHand
        )
    }
}

/// Spell record subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpellType {
    #[default]
    Spell,
    Disease,
    Power,
    LesserPower,
    Ability,
    Poison,
    Addiction,
    Voice,
}

/// Perk entry points that modify a spell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryPoint {
    ModSpellCost,
    ModSpellMagnitude,
    ModSpellDuration,
    ModSpellRange,
    ModSpellCastingSound,
}

/// How a perk entry applies its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerkModification {
    Set,
    Add,
    Multiply,
}

/// Comparison used by a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompareOperator {
    #[default]
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

/// The reference a condition is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RunOn {
    #[default]
    Subject,
    Target,
    Reference,
    CombatTarget,
}

/// Sound slots on a magic effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundSlot {
    SheatheDraw,
    Charge,
    Ready,
    Release,
    ConcentrationCastLoop,
    OnHit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_skills() {
        assert!(ActorValue::Illusion.is_magic_skill());
        assert!(!ActorValue::IllusionPowerModifier.is_magic_skill());
        assert!(!ActorValue::None.is_magic_skill());
    }

    #[test]
    fn test_hand_cast_slots() {
        assert!(EquipSlot::EitherHand.is_hand_cast());
        assert!(EquipSlot::BothHands.is_hand_cast());
        assert!(EquipSlot::RightHand.is_hand_cast());
        assert!(!EquipSlot::LeftHand.is_hand_cast());
        assert!(!EquipSlot::Voice.is_hand_cast());
    }

    #[test]
    fn test_self_target_serializes_as_self() {
        let json = serde_json::to_string(&TargetType::Caster).unwrap();
        assert_eq!(json, "\"Self\"");
    }
}
