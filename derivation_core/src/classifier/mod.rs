//! Classifier - assigns a staff category to a magic effect from its attributes.
//!
//! Dispatch order:
//! 1. **Skill group**: the effect's school of magic
//! 2. **Archetype**: the behavior subtype within the school
//! 3. **Refinement**: damage keywords (Destruction) or resist value (Restoration)
//! 4. **Fallback**: every known school has a default sub-category
//!
//! Effects outside the five schools have no category.

use magic_records::{ActorValue, ArchetypeKind, MagicEffect};
use serde::{Deserialize, Serialize};

use crate::known::skyrim;

/// The five schools of magic a staff can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillGroup {
    Alteration,
    Conjuration,
    Destruction,
    Illusion,
    Restoration,
}

impl SkillGroup {
    /// Map a magic skill actor value onto its group.
    pub fn from_skill(skill: ActorValue) -> Option<Self> {
        match skill {
            ActorValue::Alteration => Some(SkillGroup::Alteration),
            ActorValue::Conjuration => Some(SkillGroup::Conjuration),
            ActorValue::Destruction => Some(SkillGroup::Destruction),
            ActorValue::Illusion => Some(SkillGroup::Illusion),
            ActorValue::Restoration => Some(SkillGroup::Restoration),
            _ => None,
        }
    }

    /// The power modifier lens effects of this group are associated with.
    pub fn power_modifier(&self) -> ActorValue {
        match self {
            SkillGroup::Alteration => ActorValue::AlterationPowerModifier,
            SkillGroup::Conjuration => ActorValue::ConjurationPowerModifier,
            SkillGroup::Destruction => ActorValue::DestructionPowerModifier,
            SkillGroup::Illusion => ActorValue::IllusionPowerModifier,
            SkillGroup::Restoration => ActorValue::RestorationPowerModifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlterationKind {
    Paralysis,
    Light,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConjurationKind {
    Command,
    Summon,
    Reanimate,
    Banish,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestructionKind {
    Fire,
    Frost,
    Shock,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllusionKind {
    Courage,
    Fear,
    Calm,
    Fury,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestorationKind {
    Poison,
    Sun,
    Turn,
    Other,
}

/// Classification result selecting a template bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Alteration(AlterationKind),
    Conjuration(ConjurationKind),
    Destruction(DestructionKind),
    Illusion(IllusionKind),
    Restoration(RestorationKind),
}

impl Category {
    /// Every category, grouped by school.
    pub const ALL: [Category; 21] = [
        Category::Alteration(AlterationKind::Paralysis),
        Category::Alteration(AlterationKind::Light),
        Category::Alteration(AlterationKind::Other),
        Category::Conjuration(ConjurationKind::Command),
        Category::Conjuration(ConjurationKind::Summon),
        Category::Conjuration(ConjurationKind::Reanimate),
        Category::Conjuration(ConjurationKind::Banish),
        Category::Conjuration(ConjurationKind::Other),
        Category::Destruction(DestructionKind::Fire),
        Category::Destruction(DestructionKind::Frost),
        Category::Destruction(DestructionKind::Shock),
        Category::Destruction(DestructionKind::Other),
        Category::Illusion(IllusionKind::Courage),
        Category::Illusion(IllusionKind::Fear),
        Category::Illusion(IllusionKind::Calm),
        Category::Illusion(IllusionKind::Fury),
        Category::Illusion(IllusionKind::Other),
        Category::Restoration(RestorationKind::Poison),
        Category::Restoration(RestorationKind::Sun),
        Category::Restoration(RestorationKind::Turn),
        Category::Restoration(RestorationKind::Other),
    ];

    /// The school this category belongs to.
    pub fn group(&self) -> SkillGroup {
        match self {
            Category::Alteration(_) => SkillGroup::Alteration,
            Category::Conjuration(_) => SkillGroup::Conjuration,
            Category::Destruction(_) => SkillGroup::Destruction,
            Category::Illusion(_) => SkillGroup::Illusion,
            Category::Restoration(_) => SkillGroup::Restoration,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Alteration(kind) => write!(f, "Alteration/{:?}", kind),
            Category::Conjuration(kind) => write!(f, "Conjuration/{:?}", kind),
            Category::Destruction(kind) => write!(f, "Destruction/{:?}", kind),
            Category::Illusion(kind) => write!(f, "Illusion/{:?}", kind),
            Category::Restoration(kind) => write!(f, "Restoration/{:?}", kind),
        }
    }
}

/// Classify a magic effect. Returns `None` only for effects outside the five schools.
pub fn classify(effect: &MagicEffect) -> Option<Category> {
    let category = match SkillGroup::from_skill(effect.magic_skill)? {
        SkillGroup::Alteration => Category::Alteration(classify_alteration(effect)),
        SkillGroup::Conjuration => Category::Conjuration(classify_conjuration(effect)),
        SkillGroup::Destruction => Category::Destruction(classify_destruction(effect)),
        SkillGroup::Illusion => Category::Illusion(classify_illusion(effect)),
        SkillGroup::Restoration => Category::Restoration(classify_restoration(effect)),
    };
    Some(category)
}

fn classify_alteration(effect: &MagicEffect) -> AlterationKind {
    match effect.archetype.kind {
        ArchetypeKind::Paralysis => AlterationKind::Paralysis,
        ArchetypeKind::Light => AlterationKind::Light,
        _ => AlterationKind::Other,
    }
}

fn classify_conjuration(effect: &MagicEffect) -> ConjurationKind {
    match effect.archetype.kind {
        ArchetypeKind::CommandSummoned => ConjurationKind::Command,
        ArchetypeKind::SummonCreature => ConjurationKind::Summon,
        ArchetypeKind::Reanimate => ConjurationKind::Reanimate,
        ArchetypeKind::Banish => ConjurationKind::Banish,
        _ => ConjurationKind::Other,
    }
}

fn classify_destruction(effect: &MagicEffect) -> DestructionKind {
    // Keyword order decides effects tagged with several elements.
    if effect.has_keyword(&skyrim::MAGIC_DAMAGE_FIRE.id()) {
        DestructionKind::Fire
    } else if effect.has_keyword(&skyrim::MAGIC_DAMAGE_FROST.id()) {
        DestructionKind::Frost
    } else if effect.has_keyword(&skyrim::MAGIC_DAMAGE_SHOCK.id()) {
        DestructionKind::Shock
    } else {
        DestructionKind::Other
    }
}

fn classify_illusion(effect: &MagicEffect) -> IllusionKind {
    match effect.archetype.kind {
        ArchetypeKind::Rally => IllusionKind::Courage,
        ArchetypeKind::Demoralize => IllusionKind::Fear,
        ArchetypeKind::Calm => IllusionKind::Calm,
        ArchetypeKind::Frenzy => IllusionKind::Fury,
        _ => IllusionKind::Other,
    }
}

fn classify_restoration(effect: &MagicEffect) -> RestorationKind {
    let archetype = effect.archetype;
    if archetype.kind == ArchetypeKind::ValueModifier && archetype.actor_value == ActorValue::Health {
        match effect.resist_value {
            ActorValue::PoisonResist | ActorValue::ResistDisease => RestorationKind::Poison,
            ActorValue::None => RestorationKind::Sun,
            _ => RestorationKind::Other,
        }
    } else if archetype.kind == ArchetypeKind::TurnUndead {
        RestorationKind::Turn
    } else {
        RestorationKind::Other
    }
}
