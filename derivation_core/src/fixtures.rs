//! Test fixtures: a template layer and a small base-game layer to derive from.

use magic_records::{
    ActorValue, Archetype, ArchetypeKind, CastType, Condition, ConditionData, Effect, EffectData,
    EffectSound, Enchantment, EntryPoint, EquipSlot, Layer, LayeredCatalog, MagicEffect, Perk,
    PerkCondition, PerkEntry, PerkModification, PropertyValue, Record, RecordId, RunOn, Scroll,
    ScriptAdapter, ScriptEntry, ScriptProperty, SoundSlot, Spell, Weapon,
};

use crate::known::{mdt, skyrim, SKYRIM, TEMPLATES};

pub const HOOK_SPELL_TEMPLATE: u32 = 0x840;
pub const HOOK_EFFECT_TEMPLATE: u32 = 0x841;
pub const LENS_SPELL_TEMPLATE: u32 = 0x842;
pub const LENS_EFFECT_TEMPLATE: u32 = 0x843;

pub const FIRE_DAMAGE: u32 = 0x012E4F;
pub const FROST_DAMAGE: u32 = 0x012E50;
pub const FIRE_STAFF_ENCH: u32 = 0x0100;
pub const FIRE_STAFF: u32 = 0x0200;
pub const FIREBALL: u32 = 0x0400;
pub const FIREBALL_SCROLL: u32 = 0x0300;
pub const HALF_COST_PERK: u32 = 0x0500;

pub fn templates(local: u32) -> RecordId {
    RecordId::new(TEMPLATES, local)
}

pub fn skyrim(local: u32) -> RecordId {
    RecordId::new(SKYRIM, local)
}

fn behavior_template(local: u32, editor_id: &str) -> MagicEffect {
    let mut effect = MagicEffect::new(templates(local), editor_id);
    effect.name = Some("X Channeling".to_string());
    effect.description = Some("Channel <Spell> through the staff.".to_string());
    effect.cast_type = CastType::Concentration;
    effect.equip_ability = Some(templates(HOOK_SPELL_TEMPLATE));
    effect
}

fn gated_perk(local: u32, editor_id: &str) -> Perk {
    let entry = |entry_point, priority| PerkEntry {
        rank: 0,
        priority,
        entry_point,
        modification: PerkModification::Multiply,
        value: 1.5,
        condition_tab_count: 3,
        conditions: vec![
            PerkCondition {
                run_on_tab_index: 0,
                conditions: vec![Condition::is_true(ConditionData::HasMagicEffect {
                    effect: None,
                    run_on: RunOn::Subject,
                })],
            },
            PerkCondition {
                run_on_tab_index: 1,
                conditions: vec![Condition::is_true(ConditionData::IsInList {
                    list: None,
                    run_on: RunOn::Subject,
                })],
            },
        ],
    };

    let mut perk = Perk::new(templates(local), editor_id);
    perk.entries = vec![
        entry(EntryPoint::ModSpellMagnitude, 50),
        entry(EntryPoint::ModSpellDuration, 50),
    ];
    perk
}

/// Records of the template plugin.
pub fn template_records() -> Vec<Record> {
    let mut hook_spell = Spell::new(templates(HOOK_SPELL_TEMPLATE), "_MDT_TemplateHookSpell");
    hook_spell.name = Some("X Hook".to_string());
    hook_spell.effects = vec![Effect::new(
        templates(HOOK_EFFECT_TEMPLATE),
        EffectData::default(),
    )];

    let mut hook_effect = MagicEffect::new(templates(HOOK_EFFECT_TEMPLATE), "_MDT_TemplateHookEffect");
    hook_effect.name = Some("X Hook".to_string());
    hook_effect.scripts = Some(ScriptAdapter::with_script(
        ScriptEntry::new("_MDT_StaffHookScript")
            .with_property(ScriptProperty {
                name: "StaffEnch".to_string(),
                edited: false,
                value: PropertyValue::Object(None),
            })
            .with_property(ScriptProperty::object(
                "ChannelSpell",
                templates(LENS_SPELL_TEMPLATE),
            )),
    ));

    let mut lens_spell = Spell::new(templates(LENS_SPELL_TEMPLATE), "_MDT_TemplateLensSpell");
    lens_spell.name = Some("Lens".to_string());
    lens_spell.effects = vec![Effect::new(
        templates(LENS_EFFECT_TEMPLATE),
        EffectData::default(),
    )];

    let mut lens_effect = MagicEffect::new(templates(LENS_EFFECT_TEMPLATE), "_MDT_TemplateLensEffect");
    lens_effect.name = Some("X Lens".to_string());
    lens_effect.hit_shader = Some(templates(0x850));

    vec![
        behavior_template(mdt::TEMPLATE_STAFF_ENCH_ALTERATION_EFFECT.local, "_MDT_TemplateAlteration").into(),
        behavior_template(mdt::TEMPLATE_STAFF_ENCH_CONJURATION_EFFECT.local, "_MDT_TemplateConjuration").into(),
        behavior_template(mdt::TEMPLATE_STAFF_ENCH_DESTRUCTION_EFFECT.local, "_MDT_TemplateDestruction").into(),
        behavior_template(mdt::TEMPLATE_STAFF_ENCH_ILLUSION_EFFECT.local, "_MDT_TemplateIllusion").into(),
        behavior_template(mdt::TEMPLATE_STAFF_ENCH_RESTORATION_EFFECT.local, "_MDT_TemplateRestoration").into(),
        gated_perk(mdt::TEMPLATE_ALTE_CONJU_NON_SUMMON_OR_COMMAND_STAFF_PERK.local, "_MDT_AlteConjuPerk").into(),
        gated_perk(mdt::TEMPLATE_CONJU_COMMAND_STAFF_PERK.local, "_MDT_ConjuCommandPerk").into(),
        gated_perk(mdt::TEMPLATE_CONJU_SUMMON_REANIMATE_STAFF_PERK.local, "_MDT_ConjuSummonPerk").into(),
        gated_perk(mdt::TEMPLATE_DEST_ILLU_RESTO_STAFF_PERK.local, "_MDT_DestIlluRestoPerk").into(),
        hook_spell.into(),
        hook_effect.into(),
        lens_spell.into(),
        lens_effect.into(),
    ]
}

/// A fire damage effect, as used by fire staves, scrolls, and spells.
pub fn fire_damage(local: u32, name: &str) -> MagicEffect {
    let mut effect = MagicEffect::new(skyrim(local), format!("FireDamage{:X}", local));
    effect.name = Some(name.to_string());
    effect.magic_skill = ActorValue::Destruction;
    effect.minimum_skill_level = 50;
    effect.archetype = Archetype::new(ArchetypeKind::ValueModifier, ActorValue::Health);
    effect.resist_value = ActorValue::ResistFire;
    effect.keywords = vec![skyrim::MAGIC_DAMAGE_FIRE.id()];
    effect.flags.hostile = true;
    effect.flags.power_affects_magnitude = true;
    effect.casting_light = Some(skyrim(0x1A0));
    effect.casting_art = Some(skyrim(0x1A1));
    effect.hit_shader = Some(skyrim(0x1A2));
    effect.sounds = vec![EffectSound {
        slot: SoundSlot::Release,
        sound: skyrim(0x1A3),
    }];
    effect
}

/// A staff enchantment with a single effect.
pub fn staff_enchantment(local: u32, editor_id: &str, base_effect: RecordId) -> Enchantment {
    let mut ench = Enchantment::new(skyrim(local), editor_id);
    ench.cast_type = CastType::FireAndForget;
    ench.enchantment_amount = 100;
    ench.effects = vec![Effect::new(base_effect, EffectData::new(10, 25.0, 0))];
    ench
}

pub fn staff(local: u32, editor_id: &str, enchantment: RecordId) -> Weapon {
    let mut weapon = Weapon::new(skyrim(local), editor_id);
    weapon.name = Some(editor_id.to_string());
    weapon.keywords = vec![skyrim::WEAP_TYPE_STAFF.id()];
    weapon.object_effect = Some(enchantment);
    weapon
}

/// A hand-cast spell with a half-cost perk.
pub fn hand_spell(local: u32, name: &str, base_effect: RecordId) -> Spell {
    let mut spell = Spell::new(skyrim(local), name.replace(' ', ""));
    spell.name = Some(name.to_string());
    spell.equip_slot = Some(EquipSlot::EitherHand);
    spell.half_cost_perk = Some(skyrim(HALF_COST_PERK));
    spell.effects = vec![Effect::new(base_effect, EffectData::new(15, 40.0, 0))];
    spell
}

pub fn scroll(local: u32, name: &str, base_effect: RecordId) -> Scroll {
    let mut scroll = Scroll::new(skyrim(local), name.replace(' ', ""));
    scroll.name = Some(name.to_string());
    scroll.effects = vec![Effect::new(base_effect, EffectData::new(15, 40.0, 0))];
    scroll
}

/// Base-game records: one fire staff, its spell, and its scroll.
pub fn source_records() -> Vec<Record> {
    vec![
        fire_damage(FIRE_DAMAGE, "Fireball").into(),
        staff_enchantment(FIRE_STAFF_ENCH, "StaffEnchFireball", skyrim(FIRE_DAMAGE)).into(),
        staff(FIRE_STAFF, "StaffFireball", skyrim(FIRE_STAFF_ENCH)).into(),
        hand_spell(FIREBALL, "Fireball", skyrim(FIRE_DAMAGE)).into(),
        scroll(FIREBALL_SCROLL, "Scroll of Fireball", skyrim(FIRE_DAMAGE)).into(),
    ]
}

/// Mutable access to a record by ID.
pub fn find_mut<'a>(records: &'a mut [Record], id: &RecordId) -> &'a mut Record {
    records
        .iter_mut()
        .find(|record| record.id() == id)
        .unwrap_or_else(|| panic!("fixture has no record {}", id))
}

/// Build a catalog: base game first, then templates.
pub fn catalog_from(sources: Vec<Record>, templates: Vec<Record>) -> LayeredCatalog {
    let mut catalog = LayeredCatalog::new();
    catalog.push_layer(Layer::new(SKYRIM, sources)).unwrap();
    catalog.push_layer(Layer::new(TEMPLATES, templates)).unwrap();
    catalog
}

pub fn catalog() -> LayeredCatalog {
    catalog_from(source_records(), template_records())
}
