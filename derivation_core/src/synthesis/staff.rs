//! Staff graph: container, behavior, hook ability and effect, lens spell and effect,
//! and the gating perk, all wired to each other and to a shared membership list.

use magic_records::{
    CastType, ConditionData, Effect, EffectData, Enchantment, MagicEffect, MagicEffectMask, Perk,
    RecordId, ScriptEntry, Spell, TargetType, Weapon,
};

use super::{compact_name, fill_placeholder, DESCRIPTION_PLACEHOLDER, NAME_PLACEHOLDER};
use crate::classifier::{classify, Category};
use crate::error::{Stage, SynthesisError};
use crate::output::Draft;
use crate::templates::bundle_for;

/// Script property on the hook effect pointing back at the container.
pub const CONTAINER_SLOT: &str = "StaffEnch";

/// Script property on the hook effect pointing at the lens spell.
pub const CHANNEL_SLOT: &str = "ChannelSpell";

/// Single effect entry the container carries.
pub const CONTAINER_EFFECT: EffectData = EffectData {
    area: 0,
    magnitude: 20.0,
    duration: 0,
};

/// Enchantment amount and cost of the container.
pub const CONTAINER_CHARGE: u32 = 9;

/// Identities of one staff's derived graph.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffGraph {
    pub staff: RecordId,
    pub category: Category,
    /// The behavior the source container used; keys the membership list.
    pub source_behavior: RecordId,
    pub container: RecordId,
    pub behavior: RecordId,
    pub hook_ability: RecordId,
    pub hook_effect: RecordId,
    pub lens: RecordId,
    pub lens_effect: RecordId,
    pub perk: RecordId,
    pub membership_list: RecordId,
}

/// Build the derived graph for one staff into `draft`.
///
/// On error the draft holds a partial graph and must be dropped.
pub fn synthesize_staff(draft: &mut Draft<'_>, staff: &Weapon) -> Result<StaffGraph, SynthesisError> {
    let catalog = draft.catalog();

    let source_container: &Enchantment = catalog
        .resolve_link(staff.object_effect.as_ref())
        .ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::Container,
                "object effect",
                &staff.id,
                staff.object_effect.as_ref(),
            )
        })?;
    let first_entry = source_container.effects.first().ok_or_else(|| {
        SynthesisError::shape(Stage::Container, &source_container.id, "container has no effects")
    })?;
    let source: &MagicEffect = catalog
        .resolve_link(first_entry.base_effect.as_ref())
        .ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::Container,
                "base effect",
                &source_container.id,
                first_entry.base_effect.as_ref(),
            )
        })?;

    let category = classify(source).ok_or_else(|| SynthesisError::ClassificationMiss {
        effect: source.id.clone(),
    })?;
    let bundle = bundle_for(category);

    let source_name = source.name.as_deref().unwrap_or_default();
    let compact = compact_name(source_name);

    // Container
    let container_name = format!(
        "_MDTS_{}",
        source_container.editor_id.as_deref().unwrap_or_default()
    );
    let mut container = draft.duplicate(source_container, &container_name);

    // Behavior
    let behavior_template_id = bundle.behavior_template.id();
    let behavior_template: &MagicEffect =
        catalog.resolve_as(&behavior_template_id).ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::Behavior,
                "behavior template",
                &source.id,
                Some(&behavior_template_id),
            )
        })?;
    let mut behavior = draft.duplicate(behavior_template, &format!("_MDTS_{}Effect", compact));
    behavior.name = fill_placeholder(behavior.name.as_deref(), NAME_PLACEHOLDER, source_name);
    behavior.description = fill_placeholder(
        behavior.description.as_deref(),
        DESCRIPTION_PLACEHOLDER,
        source_name,
    );
    behavior.copy_masked(source, &MagicEffectMask::cosmetic());

    container.no_auto_calc = true;
    container.cast_type = CastType::Concentration;
    container.target_type = TargetType::Aimed;
    container.charge_time = 0.0;
    container.enchantment_amount = CONTAINER_CHARGE as i32;
    container.enchantment_cost = CONTAINER_CHARGE;
    container.effects = vec![Effect::new(behavior.id.clone(), CONTAINER_EFFECT)];

    // Hook ability
    let hook_ability_template: &Spell = catalog
        .resolve_link(behavior.equip_ability.as_ref())
        .ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::HookAbility,
                "equip ability",
                &behavior_template.id,
                behavior.equip_ability.as_ref(),
            )
        })?;
    let mut hook_ability =
        draft.duplicate(hook_ability_template, &format!("_MDTS_Hook{}Spell", compact));
    hook_ability.name = fill_placeholder(hook_ability.name.as_deref(), NAME_PLACEHOLDER, source_name);
    behavior.equip_ability = Some(hook_ability.id.clone());

    // Hook effect
    let hook_entry = hook_ability.effects.first_mut().ok_or_else(|| {
        SynthesisError::shape(
            Stage::HookEffect,
            &hook_ability_template.id,
            "hook ability has no effects",
        )
    })?;
    let hook_effect_template: &MagicEffect = catalog
        .resolve_link(hook_entry.base_effect.as_ref())
        .ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::HookEffect,
                "base effect",
                &hook_ability_template.id,
                hook_entry.base_effect.as_ref(),
            )
        })?;
    let mut hook_effect =
        draft.duplicate(hook_effect_template, &format!("_MDTS_Hook{}Effect", compact));
    hook_entry.base_effect = Some(hook_effect.id.clone());
    hook_effect.name = fill_placeholder(hook_effect.name.as_deref(), NAME_PLACEHOLDER, source_name);
    let badge = bundle.badge_keyword.id();
    if !hook_effect.has_keyword(&badge) {
        hook_effect.keywords.push(badge);
    }

    // Script slots
    let script = hook_effect.first_script_mut().ok_or_else(|| {
        SynthesisError::shape(
            Stage::ScriptSlots,
            &hook_effect_template.id,
            "hook effect has no script",
        )
    })?;
    require_slots(script, &hook_effect_template.id)?;
    *object_slot(script, CONTAINER_SLOT, &hook_effect_template.id)? = Some(container.id.clone());
    let channel = object_slot(script, CHANNEL_SLOT, &hook_effect_template.id)?;

    // Lens
    let lens_template: &Spell = catalog.resolve_link(channel.as_ref()).ok_or_else(|| {
        SynthesisError::unresolved(
            Stage::Lens,
            "channel spell",
            &hook_effect_template.id,
            channel.as_ref(),
        )
    })?;
    let mut lens = draft.duplicate(lens_template, &format!("_MDTS_Lens{}Spell", compact));
    *channel = Some(lens.id.clone());
    lens.name = behavior.name.clone();

    let lens_entry = lens.effects.first_mut().ok_or_else(|| {
        SynthesisError::shape(Stage::Lens, &lens_template.id, "lens spell has no effects")
    })?;
    let lens_effect_template: &MagicEffect = catalog
        .resolve_link(lens_entry.base_effect.as_ref())
        .ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::Lens,
                "base effect",
                &lens_template.id,
                lens_entry.base_effect.as_ref(),
            )
        })?;
    let mut lens_effect =
        draft.duplicate(lens_effect_template, &format!("_MDTS_Lens{}Effect", compact));
    lens_entry.base_effect = Some(lens_effect.id.clone());
    lens_effect.name = fill_placeholder(lens_effect.name.as_deref(), NAME_PLACEHOLDER, source_name);
    if let Some(shader) = bundle.hit_shader {
        lens_effect.hit_shader = Some(shader.id());
    }
    lens_effect.archetype.actor_value = bundle.skill;
    lens_effect.menu_display_object = Some(bundle.display_object.id());

    // Gating perk
    let perk_template_id = bundle.perk_template.id();
    let perk_template: &Perk = catalog.resolve_as(&perk_template_id).ok_or_else(|| {
        SynthesisError::unresolved(
            Stage::GatingPerk,
            "perk template",
            &lens_effect_template.id,
            Some(&perk_template_id),
        )
    })?;
    let mut perk = draft.duplicate(perk_template, &format!("_MDTS_{}Perk", compact));
    lens_effect.perk_to_apply = Some(perk.id.clone());

    let membership_list = draft.membership_list(&source.id, &format!("_MDT_{}_FormList", compact));
    gate_perk(&mut perk, &perk_template.id, &lens_effect.id, &membership_list)?;

    let mut staff_override = staff.clone();
    staff_override.object_effect = Some(container.id.clone());

    let graph = StaffGraph {
        staff: staff.id.clone(),
        category,
        source_behavior: source.id.clone(),
        container: container.id.clone(),
        behavior: behavior.id.clone(),
        hook_ability: hook_ability.id.clone(),
        hook_effect: hook_effect.id.clone(),
        lens: lens.id.clone(),
        lens_effect: lens_effect.id.clone(),
        perk: perk.id.clone(),
        membership_list,
    };

    draft.add(container);
    draft.add(behavior);
    draft.add(hook_ability);
    draft.add(hook_effect);
    draft.add(lens);
    draft.add(lens_effect);
    draft.add(perk);
    draft.add_override(staff_override);

    Ok(graph)
}

fn require_slots(script: &ScriptEntry, record: &RecordId) -> Result<(), SynthesisError> {
    let missing: Vec<_> = [CONTAINER_SLOT, CHANNEL_SLOT]
        .into_iter()
        .filter(|slot| script.object_property(slot).is_none())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SynthesisError::shape(
            Stage::ScriptSlots,
            record,
            format!("script {} lacks object properties {}", script.name, missing.join(", ")),
        ))
    }
}

fn object_slot<'s>(
    script: &'s mut ScriptEntry,
    slot: &str,
    record: &RecordId,
) -> Result<&'s mut Option<RecordId>, SynthesisError> {
    let script_name = script.name.clone();
    script.object_property_mut(slot).ok_or_else(|| {
        SynthesisError::shape(
            Stage::ScriptSlots,
            record,
            format!("script {} lacks object property {}", script_name, slot),
        )
    })
}

/// Point every perk entry at the lens effect (tab 0) and the membership list (tab 1).
fn gate_perk(
    perk: &mut Perk,
    template: &RecordId,
    lens_effect: &RecordId,
    list: &RecordId,
) -> Result<(), SynthesisError> {
    if perk.entries.is_empty() {
        return Err(SynthesisError::shape(
            Stage::PerkConditions,
            template,
            "perk has no entries to gate",
        ));
    }
    for (index, entry) in perk.entries.iter_mut().enumerate() {
        match entry.condition_data_mut(0) {
            Some(ConditionData::HasMagicEffect { effect, .. }) => *effect = Some(lens_effect.clone()),
            _ => {
                return Err(SynthesisError::shape(
                    Stage::PerkConditions,
                    template,
                    format!("entry {}: tab 0 does not start with HasMagicEffect", index),
                ))
            }
        }
        match entry.condition_data_mut(1) {
            Some(ConditionData::IsInList { list: target, .. }) => *target = Some(list.clone()),
            _ => {
                return Err(SynthesisError::shape(
                    Stage::PerkConditions,
                    template,
                    format!("entry {}: tab 1 does not start with IsInList", index),
                ))
            }
        }
    }
    Ok(())
}
