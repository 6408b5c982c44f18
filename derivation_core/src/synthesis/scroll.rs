//! Scroll graph: a knowledge-check effect, an amplifier effect, the perk that makes the
//! paired spell free and stronger, and the finalized scroll.

use magic_records::{
    ActorValue, Archetype, ArchetypeKind, CastType, Condition, ConditionData, Effect, EffectData,
    EntryPoint, MagicEffect, MagicEffectMask, Perk, PerkCondition, PerkEntry, PerkModification,
    RecordId, RecordOrder, RunOn, Scroll, ScriptAdapter, ScriptEntry, ScriptProperty,
    SourceCatalog, Spell, SpellType, TargetType,
};

use super::{charges_for, compact_name, scroll_label, COST_ENTRY_TAB_COUNT, SCALE_ENTRY_TAB_COUNT};
use crate::error::{SoftMismatch, Stage, SynthesisError};
use crate::known::{mdt, skyrim};
use crate::output::Draft;

pub const KNOWLEDGE_CHECK_NAME: &str = "Scroll Amplification 2";
pub const AMPLIFIER_NAME: &str = "Scroll Amplification";

pub const KNOWLEDGE_CHECK_SCRIPT: &str = "_MDT_ScrollKnownScript";
pub const AMPLIFIER_SCRIPT: &str = "_MDT_ScrollScript";

/// Base cost of a finalized scroll.
pub const SCROLL_BASE_COST: u32 = 180;

/// Payload of both effect entries on a finalized scroll.
pub const SCROLL_EFFECT: EffectData = EffectData {
    area: 0,
    magnitude: 0.0,
    duration: 600,
};

/// Multiplier applied to the paired spell while the caster knows it.
pub const KNOWN_SPELL_MULTIPLIER: f32 = 1.2;

/// Identities of one scroll's derived graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollGraph {
    pub scroll: RecordId,
    pub label: String,
    pub base_effect: RecordId,
    pub spell: RecordId,
    pub charges: i32,
    /// Stage 1: grants the free casts.
    pub amplifier: RecordId,
    /// Stage 2: active while the caster knows the spell.
    pub knowledge_check: RecordId,
    pub perk: RecordId,
    pub soft_mismatches: Vec<SoftMismatch>,
}

/// Find the first hand-cast spell, in listed order, that uses `base_effect`.
pub fn find_matching_spell<'c>(
    catalog: &'c dyn SourceCatalog,
    base_effect: &RecordId,
) -> Option<&'c Spell> {
    catalog
        .winning::<Spell>(RecordOrder::Listed)
        .into_iter()
        .find(|spell| pairs_with(spell, base_effect))
}

fn pairs_with(spell: &Spell, base_effect: &RecordId) -> bool {
    spell.spell_type == SpellType::Spell
        && spell.half_cost_perk.is_some()
        && spell.equip_slot.is_some_and(|slot| slot.is_hand_cast())
        && spell.effects.iter().any(|effect| effect.uses(base_effect))
}

/// Build the derived graph for one scroll into `draft`.
///
/// On error the draft holds a partial graph and must be dropped.
pub fn synthesize_scroll(
    draft: &mut Draft<'_>,
    scroll: &Scroll,
) -> Result<ScrollGraph, SynthesisError> {
    let catalog = draft.catalog();
    let label = scroll_label(scroll.name.as_deref());
    let compact = compact_name(&label);
    let mut soft_mismatches = Vec::new();

    // Base effect
    let first_entry = scroll.effects.first().ok_or_else(|| {
        SynthesisError::shape(Stage::BaseEffect, &scroll.id, "scroll has no effects")
    })?;
    let base_effect: &MagicEffect = catalog
        .resolve_link(first_entry.base_effect.as_ref())
        .ok_or_else(|| {
            SynthesisError::unresolved(
                Stage::BaseEffect,
                "base effect",
                &scroll.id,
                first_entry.base_effect.as_ref(),
            )
        })?;

    // Paired spell
    let spell = find_matching_spell(catalog, &base_effect.id).ok_or_else(|| {
        SynthesisError::MatchNotFound {
            base_effect: base_effect.id.clone(),
        }
    })?;
    let spell_name = spell.name.as_deref().unwrap_or_default();
    if spell_name != label {
        soft_mismatches.push(SoftMismatch {
            stage: Stage::SpellMatch,
            message: format!(
                "spell {} is named {:?}, scroll label is {:?}",
                spell.id, spell_name, label
            ),
        });
    }

    let charges = charges_for(base_effect.minimum_skill_level);

    // Stage 2
    let knowledge_check_id = draft.allocate_id();
    let knowledge_check_name = draft.claim_name(&format!("_MDTS_ScrollKnown{}Effect", compact));
    let knowledge_check =
        knowledge_check_effect(knowledge_check_id, knowledge_check_name, &spell.id, charges);

    // Stage 1
    let amplifier_id = draft.allocate_id();
    let amplifier_name = draft.claim_name(&format!("_MDTS_Scroll{}Effect", compact));
    let mut amplifier = MagicEffect::new(amplifier_id, amplifier_name);
    amplifier.copy_masked(&knowledge_check, &MagicEffectMask::scroll_carry());
    amplifier.copy_masked(base_effect, &MagicEffectMask::cosmetic());
    amplifier.hit_effect_art = Some(skyrim::ABSORB_SPELL_EFFECT.id());
    amplifier.name = Some(AMPLIFIER_NAME.to_string());
    amplifier.description = Some(format!(
        "You may cast <{label}> a total of <{charges}> times for no cost. If you already know <{label}>, it is <20>% more powerful."
    ));
    amplifier.flags.hide_in_ui = false;
    amplifier.keywords = vec![skyrim::WI_SPELL_COLORFUL.id()];

    let mut amplifier_script = knowledge_check.first_script().cloned().ok_or_else(|| {
        SynthesisError::shape(
            Stage::Amplifier,
            &knowledge_check.id,
            "knowledge check effect has no script",
        )
    })?;
    amplifier_script.name = AMPLIFIER_SCRIPT.to_string();
    amplifier_script
        .properties
        .push(ScriptProperty::object("TheScroll", scroll.id.clone()));
    amplifier.scripts = Some(ScriptAdapter::with_script(amplifier_script));

    // Perk
    let perk_id = draft.allocate_id();
    let perk_name = draft.claim_name(&format!("_MDTS_{}ScrollPerk", compact));
    let scale_entry_point = if base_effect.flags.power_affects_magnitude {
        EntryPoint::ModSpellMagnitude
    } else {
        EntryPoint::ModSpellDuration
    };
    let mut perk = Perk::new(perk_id, perk_name);
    perk.playable = true;
    perk.num_ranks = 1;
    perk.entries = vec![
        PerkEntry {
            rank: 0,
            priority: 98,
            entry_point: EntryPoint::ModSpellCost,
            modification: PerkModification::Set,
            value: 0.0,
            condition_tab_count: COST_ENTRY_TAB_COUNT,
            conditions: spell_gate(&amplifier.id, &spell.id),
        },
        PerkEntry {
            rank: 0,
            priority: 99,
            entry_point: scale_entry_point,
            modification: PerkModification::Multiply,
            value: KNOWN_SPELL_MULTIPLIER,
            condition_tab_count: SCALE_ENTRY_TAB_COUNT,
            conditions: spell_gate(&knowledge_check.id, &spell.id),
        },
    ];
    amplifier.perk_to_apply = Some(perk.id.clone());

    // Finalize
    let mut finalized = scroll.clone();
    finalized.target_type = TargetType::Caster;
    finalized.base_cost = SCROLL_BASE_COST;
    let scroll_keyword = mdt::SCROLL_KEYWORD.id();
    if !finalized.keywords.contains(&scroll_keyword) {
        finalized.keywords.push(scroll_keyword);
    }
    finalized.effects = vec![
        Effect::new(amplifier.id.clone(), SCROLL_EFFECT),
        Effect::new(knowledge_check.id.clone(), SCROLL_EFFECT),
    ];

    let graph = ScrollGraph {
        scroll: scroll.id.clone(),
        label,
        base_effect: base_effect.id.clone(),
        spell: spell.id.clone(),
        charges,
        amplifier: amplifier.id.clone(),
        knowledge_check: knowledge_check.id.clone(),
        perk: perk.id.clone(),
        soft_mismatches,
    };

    draft.add(knowledge_check);
    draft.add(amplifier);
    draft.add(perk);
    draft.add_override(finalized);

    Ok(graph)
}

/// The hidden effect active while the caster knows `spell`.
fn knowledge_check_effect(id: RecordId, editor_id: String, spell: &RecordId, charges: i32) -> MagicEffect {
    let mut effect = MagicEffect::new(id, editor_id);
    effect.name = Some(KNOWLEDGE_CHECK_NAME.to_string());
    effect.menu_display_object = Some(skyrim::MAGIC_HAT_MARKER.id());
    effect.flags.no_area = true;
    effect.flags.hide_in_ui = true;
    effect.flags.no_recast = true;
    effect.flags.power_affects_magnitude = true;
    effect.base_cost = 1.0;
    effect.spellmaking_casting_time = 0.5;
    effect.archetype = Archetype::new(ArchetypeKind::Script, ActorValue::None);
    effect.projectile = Some(skyrim::HEAL_FAKE_PROJECTILE.id());
    effect.cast_type = CastType::FireAndForget;
    effect.target_type = TargetType::Caster;
    effect.skill_usage_multiplier = 1.0;
    effect.dual_cast_scale = 1.0;
    effect.conditions = vec![Condition::is_true(ConditionData::HasSpell {
        spell: Some(spell.clone()),
        run_on: RunOn::Subject,
    })];

    let mut script = ScriptEntry::new(KNOWLEDGE_CHECK_SCRIPT)
        .with_property(ScriptProperty::int("BaseCharges", charges))
        .with_property(ScriptProperty::object("ScrollSpell", spell.clone()));
    script.local = true;
    effect.scripts = Some(ScriptAdapter::with_script(script));
    effect
}

/// Tab 0: the subject is under `effect`. Tab 1: the spell being cast is `spell`.
fn spell_gate(effect: &RecordId, spell: &RecordId) -> Vec<PerkCondition> {
    vec![
        PerkCondition {
            run_on_tab_index: 0,
            conditions: vec![Condition::is_true(ConditionData::HasMagicEffect {
                effect: Some(effect.clone()),
                run_on: RunOn::Subject,
            })],
        },
        PerkCondition {
            run_on_tab_index: 1,
            conditions: vec![Condition::is_true(ConditionData::GetIsId {
                object: Some(spell.clone()),
                run_on: RunOn::Subject,
            })],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, skyrim as source};
    use crate::membership::MembershipCache;
    use crate::output::OutputSet;
    use magic_records::{EquipSlot, Layer, LayeredCatalog, PropertyValue, Record, RecordData};

    fn fireball_scroll(catalog: &dyn SourceCatalog) -> Scroll {
        catalog
            .resolve_as::<Scroll>(&source(fixtures::FIREBALL_SCROLL))
            .unwrap()
            .clone()
    }

    fn staged<'o, T: RecordData>(records: &'o [Record], id: &RecordId) -> &'o T {
        records
            .iter()
            .find(|r| r.id() == id)
            .and_then(|r| r.as_kind::<T>())
            .unwrap()
    }

    #[test]
    fn test_scroll_graph_names_and_order() {
        let catalog = fixtures::catalog();
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();
        let staged_graph = draft.finish();

        assert_eq!(graph.label, "Fireball");
        assert_eq!(graph.spell, source(fixtures::FIREBALL));
        assert_eq!(graph.charges, 3);
        assert!(graph.soft_mismatches.is_empty());

        let names: Vec<_> = staged_graph.records.iter().filter_map(|r| r.editor_id()).collect();
        assert_eq!(
            names,
            vec![
                "_MDTS_ScrollKnownFireballEffect",
                "_MDTS_ScrollFireballEffect",
                "_MDTS_FireballScrollPerk",
            ]
        );
        assert_eq!(graph.knowledge_check, RecordId::new("Patch.esp", 0x800));
        assert_eq!(graph.amplifier, RecordId::new("Patch.esp", 0x801));
        assert_eq!(graph.perk, RecordId::new("Patch.esp", 0x802));
    }

    #[test]
    fn test_knowledge_check_effect() {
        let catalog = fixtures::catalog();
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();
        let staged_graph = draft.finish();
        let effect: &MagicEffect = staged(&staged_graph.records, &graph.knowledge_check);

        assert_eq!(effect.name.as_deref(), Some(KNOWLEDGE_CHECK_NAME));
        assert!(effect.flags.hide_in_ui && effect.flags.no_area && effect.flags.no_recast);
        assert!(effect.flags.power_affects_magnitude);
        assert_eq!(effect.target_type, TargetType::Caster);
        assert_eq!(effect.archetype.kind, ArchetypeKind::Script);
        assert_eq!(
            effect.conditions[0].data,
            ConditionData::HasSpell {
                spell: Some(graph.spell.clone()),
                run_on: RunOn::Subject
            }
        );

        let script = effect.first_script().unwrap();
        assert_eq!(script.name, KNOWLEDGE_CHECK_SCRIPT);
        assert!(script.local);
        assert_eq!(script.properties[0].value, PropertyValue::Int(3));
        assert_eq!(
            script.object_property("ScrollSpell"),
            Some(&Some(graph.spell.clone()))
        );
    }

    #[test]
    fn test_amplifier_effect() {
        let catalog = fixtures::catalog();
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();
        let staged_graph = draft.finish();
        let amplifier: &MagicEffect = staged(&staged_graph.records, &graph.amplifier);
        let base = fixtures::fire_damage(fixtures::FIRE_DAMAGE, "Fireball");

        assert_eq!(amplifier.name.as_deref(), Some(AMPLIFIER_NAME));
        assert_eq!(
            amplifier.description.as_deref(),
            Some("You may cast <Fireball> a total of <3> times for no cost. If you already know <Fireball>, it is <20>% more powerful.")
        );
        assert!(!amplifier.flags.hide_in_ui);
        assert!(amplifier.flags.no_recast);
        assert!(amplifier.conditions.is_empty());
        assert_eq!(amplifier.keywords, vec![skyrim::WI_SPELL_COLORFUL.id()]);
        assert_eq!(amplifier.casting_art, base.casting_art);
        assert_eq!(amplifier.sounds, base.sounds);
        assert_eq!(amplifier.hit_effect_art, Some(skyrim::ABSORB_SPELL_EFFECT.id()));
        assert_eq!(amplifier.menu_display_object, Some(skyrim::MAGIC_HAT_MARKER.id()));
        assert_eq!(amplifier.perk_to_apply, Some(graph.perk.clone()));

        let script = amplifier.first_script().unwrap();
        assert_eq!(script.name, AMPLIFIER_SCRIPT);
        assert_eq!(script.properties.len(), 3);
        assert_eq!(
            script.object_property("TheScroll"),
            Some(&Some(graph.scroll.clone()))
        );
    }

    #[test]
    fn test_scroll_perk_entries() {
        let catalog = fixtures::catalog();
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();
        let staged_graph = draft.finish();
        let perk: &Perk = staged(&staged_graph.records, &graph.perk);

        assert!(perk.playable);
        assert_eq!(perk.num_ranks, 1);

        let cost = &perk.entries[0];
        assert_eq!(cost.entry_point, EntryPoint::ModSpellCost);
        assert_eq!(cost.modification, PerkModification::Set);
        assert_eq!(cost.priority, 98);
        assert_eq!(cost.condition_tab_count, COST_ENTRY_TAB_COUNT);
        assert_eq!(
            cost.condition_data(0),
            Some(&ConditionData::HasMagicEffect {
                effect: Some(graph.amplifier.clone()),
                run_on: RunOn::Subject
            })
        );

        let scale = &perk.entries[1];
        assert_eq!(scale.entry_point, EntryPoint::ModSpellMagnitude);
        assert_eq!(scale.modification, PerkModification::Multiply);
        assert_eq!(scale.value, KNOWN_SPELL_MULTIPLIER);
        assert_eq!(scale.priority, 99);
        assert_eq!(scale.condition_tab_count, SCALE_ENTRY_TAB_COUNT);
        assert_eq!(
            scale.condition_data(0),
            Some(&ConditionData::HasMagicEffect {
                effect: Some(graph.knowledge_check.clone()),
                run_on: RunOn::Subject
            })
        );
        assert_eq!(
            scale.condition_data(1),
            Some(&ConditionData::GetIsId {
                object: Some(graph.spell.clone()),
                run_on: RunOn::Subject
            })
        );
    }

    #[test]
    fn test_duration_entry_without_magnitude_scaling() {
        let mut records = fixtures::source_records();
        if let Record::MagicEffect(effect) =
            fixtures::find_mut(&mut records, &source(fixtures::FIRE_DAMAGE))
        {
            effect.flags.power_affects_magnitude = false;
        }
        let catalog = fixtures::catalog_from(records, fixtures::template_records());
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();
        let staged_graph = draft.finish();
        let perk: &Perk = staged(&staged_graph.records, &graph.perk);

        assert_eq!(perk.entries[1].entry_point, EntryPoint::ModSpellDuration);
    }

    #[test]
    fn test_finalized_scroll_override() {
        let catalog = fixtures::catalog();
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();
        let staged_graph = draft.finish();
        let scroll = staged_graph.overrides[0].as_kind::<Scroll>().unwrap();

        assert_eq!(scroll.id, source(fixtures::FIREBALL_SCROLL));
        assert_eq!(scroll.target_type, TargetType::Caster);
        assert_eq!(scroll.base_cost, SCROLL_BASE_COST);
        assert!(scroll.keywords.contains(&mdt::SCROLL_KEYWORD.id()));
        assert_eq!(
            scroll.effects,
            vec![
                Effect::new(graph.amplifier.clone(), EffectData::new(0, 0.0, 600)),
                Effect::new(graph.knowledge_check.clone(), EffectData::new(0, 0.0, 600)),
            ]
        );
    }

    #[test]
    fn test_name_difference_is_soft_mismatch() {
        let mut records = fixtures::source_records();
        if let Record::Spell(spell) = fixtures::find_mut(&mut records, &source(fixtures::FIREBALL)) {
            spell.name = Some("Fire Ball".to_string());
        }
        let catalog = fixtures::catalog_from(records, fixtures::template_records());
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let graph = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap();

        assert_eq!(graph.soft_mismatches.len(), 1);
        assert_eq!(graph.soft_mismatches[0].stage, Stage::SpellMatch);
        assert!(graph.soft_mismatches[0].message.contains("Fire Ball"));
    }

    #[test]
    fn test_no_paired_spell_is_match_not_found() {
        let mut records = fixtures::source_records();
        if let Record::Spell(spell) = fixtures::find_mut(&mut records, &source(fixtures::FIREBALL)) {
            spell.half_cost_perk = None;
        }
        let catalog = fixtures::catalog_from(records, fixtures::template_records());
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let err = synthesize_scroll(&mut draft, &fireball_scroll(&catalog)).unwrap_err();

        assert_eq!(
            err,
            SynthesisError::MatchNotFound {
                base_effect: source(fixtures::FIRE_DAMAGE)
            }
        );
    }

    #[test]
    fn test_spell_match_filters() {
        let base = source(fixtures::FIRE_DAMAGE);
        let mut left_hand = fixtures::hand_spell(0x10, "Left Fireball", base.clone());
        left_hand.equip_slot = Some(EquipSlot::LeftHand);
        let mut power = fixtures::hand_spell(0x11, "Fire Power", base.clone());
        power.spell_type = SpellType::Power;
        let both_hands = {
            let mut spell = fixtures::hand_spell(0x12, "Twin Fireball", base.clone());
            spell.equip_slot = Some(EquipSlot::BothHands);
            spell
        };
        let later = fixtures::hand_spell(0x13, "Fireball", base.clone());

        let mut catalog = LayeredCatalog::new();
        catalog
            .push_layer(Layer::new(
                "Skyrim.esm",
                vec![left_hand.into(), power.into(), both_hands.into(), later.into()],
            ))
            .unwrap();

        let found = find_matching_spell(&catalog, &base).unwrap();
        assert_eq!(found.id, source(0x12));
        assert!(find_matching_spell(&catalog, &source(0x9999)).is_none());
    }

    #[test]
    fn test_unresolved_base_effect() {
        let catalog = fixtures::catalog();
        let output = OutputSet::new("Patch.esp");
        let cache = MembershipCache::new();
        let mut draft = Draft::new(&catalog, &output, &cache);

        let mut scroll = fireball_scroll(&catalog);
        scroll.effects[0].base_effect = Some(source(0x9999));
        let err = synthesize_scroll(&mut draft, &scroll).unwrap_err();

        assert_eq!(err.stage(), Stage::BaseEffect);
        assert!(matches!(err, SynthesisError::ResolutionFailure { .. }));
    }
}
