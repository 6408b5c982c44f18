//! Template library - the fixed bundle of template records behind each category.

use magic_records::{ActorValue, KnownRecord};

use crate::classifier::{
    AlterationKind, Category, ConjurationKind, DestructionKind, IllusionKind, RestorationKind,
    SkillGroup,
};
use crate::known::{mdt, skyrim};

/// Template records a staff of one category is synthesized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBundle {
    /// Actor value the lens effect is associated with.
    pub skill: ActorValue,
    /// Magic effect duplicated as the staff's new behavior.
    pub behavior_template: KnownRecord,
    /// Keyword added to the hook effect.
    pub badge_keyword: KnownRecord,
    /// Static shown for the lens effect in menus.
    pub display_object: KnownRecord,
    /// Perk duplicated as the gating perk.
    pub perk_template: KnownRecord,
    /// Hit shader for the lens effect; when absent the template's own is kept.
    pub hit_shader: Option<KnownRecord>,
}

/// Look up the bundle for a category. Total over [`Category::ALL`].
pub fn bundle_for(category: Category) -> TemplateBundle {
    let group = category.group();
    let (badge_keyword, display_object, perk_template, hit_shader) = match category {
        Category::Alteration(kind) => {
            let perk = mdt::TEMPLATE_ALTE_CONJU_NON_SUMMON_OR_COMMAND_STAFF_PERK;
            match kind {
                AlterationKind::Paralysis => {
                    (mdt::PARALYSIS_STAFF_KEYWORD, skyrim::MAGINV_PARALYZE, perk, None)
                }
                AlterationKind::Light => {
                    (mdt::LIGHT_STAFF_KEYWORD, skyrim::MAGINV_ALTERATION, perk, None)
                }
                AlterationKind::Other => {
                    (mdt::LIGHT_STAFF_KEYWORD, skyrim::MAGINV_ALTERATION, perk, None)
                }
            }
        }
        Category::Conjuration(kind) => match kind {
            ConjurationKind::Command => (
                mdt::COMMAND_STAFF_KEYWORD,
                skyrim::MAGINV_SUMMON,
                mdt::TEMPLATE_CONJU_COMMAND_STAFF_PERK,
                None,
            ),
            ConjurationKind::Summon => (
                mdt::BANISH_STAFF_KEYWORD,
                skyrim::MAGINV_SUMMON,
                mdt::TEMPLATE_CONJU_SUMMON_REANIMATE_STAFF_PERK,
                None,
            ),
            ConjurationKind::Reanimate => (
                mdt::REANIMATE_STAFF_KEYWORD,
                skyrim::MAGINV_REANIMATE,
                mdt::TEMPLATE_CONJU_SUMMON_REANIMATE_STAFF_PERK,
                None,
            ),
            ConjurationKind::Banish => (
                mdt::BANISH_STAFF_KEYWORD,
                skyrim::MAGINV_BANISH,
                mdt::TEMPLATE_ALTE_CONJU_NON_SUMMON_OR_COMMAND_STAFF_PERK,
                None,
            ),
            ConjurationKind::Other => (
                mdt::SOUL_TRAP_STAFF_KEYWORD,
                skyrim::MAGINV_REANIMATE,
                mdt::TEMPLATE_ALTE_CONJU_NON_SUMMON_OR_COMMAND_STAFF_PERK,
                None,
            ),
        },
        Category::Destruction(kind) => {
            let perk = mdt::TEMPLATE_DEST_ILLU_RESTO_STAFF_PERK;
            match kind {
                DestructionKind::Fire | DestructionKind::Other => (
                    mdt::FIRE_STAFF_KEYWORD,
                    skyrim::MAGINV_FIREBALL_ART,
                    perk,
                    Some(skyrim::FIRE_FX_SHADER),
                ),
                DestructionKind::Frost => (
                    mdt::FROST_STAFF_KEYWORD,
                    skyrim::MAGINV_ICE_SPELL_ART,
                    perk,
                    Some(skyrim::FROST_FX_SHADER),
                ),
                DestructionKind::Shock => (
                    mdt::SHOCK_STAFF_KEYWORD,
                    skyrim::MAGINV_SHOCK_SPELL_ART,
                    perk,
                    Some(skyrim::SHOCK_FX_SHADER),
                ),
            }
        }
        Category::Illusion(kind) => {
            let perk = mdt::TEMPLATE_DEST_ILLU_RESTO_STAFF_PERK;
            match kind {
                IllusionKind::Courage | IllusionKind::Other => (
                    mdt::CONFIDENCE_STAFF_KEYWORD,
                    skyrim::MAGINV_ILLUSION_LIGHT,
                    perk,
                    None,
                ),
                IllusionKind::Fear => (
                    mdt::CONFIDENCE_STAFF_KEYWORD,
                    skyrim::MAGINV_ILLUSION_DARK,
                    perk,
                    None,
                ),
                IllusionKind::Calm => (
                    mdt::AGGRESSION_STAFF_KEYWORD,
                    skyrim::MAGINV_ILLUSION_LIGHT,
                    perk,
                    None,
                ),
                IllusionKind::Fury => (
                    mdt::AGGRESSION_STAFF_KEYWORD,
                    skyrim::MAGINV_ILLUSION_DARK,
                    perk,
                    None,
                ),
            }
        }
        Category::Restoration(kind) => {
            let perk = mdt::TEMPLATE_DEST_ILLU_RESTO_STAFF_PERK;
            match kind {
                RestorationKind::Poison => {
                    (mdt::POISON_STAFF_KEYWORD, skyrim::MAGINV_ABSORB, perk, None)
                }
                RestorationKind::Sun | RestorationKind::Other => (
                    mdt::SUN_STAFF_KEYWORD,
                    skyrim::MAGINV_HEAL_SPELL_ART,
                    perk,
                    Some(skyrim::HEAL_TARGET_FX_SHADER),
                ),
                RestorationKind::Turn => (
                    mdt::TURN_STAFF_KEYWORD,
                    skyrim::MAGINV_TURN_UNDEAD,
                    perk,
                    Some(skyrim::TURN_UNDEAD_FX_SHADER),
                ),
            }
        }
    };

    TemplateBundle {
        skill: group.power_modifier(),
        behavior_template: behavior_template(group),
        badge_keyword,
        display_object,
        perk_template,
        hit_shader,
    }
}

fn behavior_template(group: SkillGroup) -> KnownRecord {
    match group {
        SkillGroup::Alteration => mdt::TEMPLATE_STAFF_ENCH_ALTERATION_EFFECT,
        SkillGroup::Conjuration => mdt::TEMPLATE_STAFF_ENCH_CONJURATION_EFFECT,
        SkillGroup::Destruction => mdt::TEMPLATE_STAFF_ENCH_DESTRUCTION_EFFECT,
        SkillGroup::Illusion => mdt::TEMPLATE_STAFF_ENCH_ILLUSION_EFFECT,
        SkillGroup::Restoration => mdt::TEMPLATE_STAFF_ENCH_RESTORATION_EFFECT,
    }
}
