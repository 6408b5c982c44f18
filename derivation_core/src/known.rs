//! Record identities the pipelines rely on, from the base game and the template plugin.

use magic_records::KnownRecord;

/// Base game master file.
pub const SKYRIM: &str = "Skyrim.esm";

/// Plugin that ships the staff and scroll templates.
pub const TEMPLATES: &str = "MagicDoesThings.esp";

/// Default layer derived records are written to.
pub const OUTPUT: &str = "MagicDoesThingsPatcher.esp";

/// Base game records.
pub mod skyrim {
    use super::{KnownRecord, SKYRIM};

    // Keywords
    pub const WEAP_TYPE_STAFF: KnownRecord = KnownRecord::new(SKYRIM, 0x01E716);
    pub const MAGIC_DAMAGE_FIRE: KnownRecord = KnownRecord::new(SKYRIM, 0x01CEAD);
    pub const MAGIC_DAMAGE_FROST: KnownRecord = KnownRecord::new(SKYRIM, 0x01CEAE);
    pub const MAGIC_DAMAGE_SHOCK: KnownRecord = KnownRecord::new(SKYRIM, 0x01CEAF);
    pub const WI_SPELL_COLORFUL: KnownRecord = KnownRecord::new(SKYRIM, 0x10F3B8);

    // Inventory display statics
    pub const MAGINV_ALTERATION: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A9A);
    pub const MAGINV_PARALYZE: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A9F);
    pub const MAGINV_SUMMON: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6AA4);
    pub const MAGINV_REANIMATE: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6AA2);
    pub const MAGINV_BANISH: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A9B);
    pub const MAGINV_FIREBALL_ART: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A9D);
    pub const MAGINV_ICE_SPELL_ART: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A9E);
    pub const MAGINV_SHOCK_SPELL_ART: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6AA3);
    pub const MAGINV_ILLUSION_LIGHT: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6AA1);
    pub const MAGINV_ILLUSION_DARK: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6AA0);
    pub const MAGINV_ABSORB: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A99);
    pub const MAGINV_HEAL_SPELL_ART: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6A9C);
    pub const MAGINV_TURN_UNDEAD: KnownRecord = KnownRecord::new(SKYRIM, 0x0E6AA5);
    pub const MAGIC_HAT_MARKER: KnownRecord = KnownRecord::new(SKYRIM, 0x1052A3);

    // Hit shaders
    pub const FIRE_FX_SHADER: KnownRecord = KnownRecord::new(SKYRIM, 0x01B212);
    pub const FROST_FX_SHADER: KnownRecord = KnownRecord::new(SKYRIM, 0x01B213);
    pub const SHOCK_FX_SHADER: KnownRecord = KnownRecord::new(SKYRIM, 0x01B214);
    pub const HEAL_TARGET_FX_SHADER: KnownRecord = KnownRecord::new(SKYRIM, 0x0D6F7C);
    pub const TURN_UNDEAD_FX_SHADER: KnownRecord = KnownRecord::new(SKYRIM, 0x0AE7E5);

    // Projectiles and art
    pub const HEAL_FAKE_PROJECTILE: KnownRecord = KnownRecord::new(SKYRIM, 0x03E1E3);
    pub const ABSORB_SPELL_EFFECT: KnownRecord = KnownRecord::new(SKYRIM, 0x0A7C36);
}

/// Template plugin records.
pub mod mdt {
    use super::{KnownRecord, TEMPLATES};

    // Staff enchantment behavior templates
    pub const TEMPLATE_STAFF_ENCH_ALTERATION_EFFECT: KnownRecord = KnownRecord::new(TEMPLATES, 0x000801);
    pub const TEMPLATE_STAFF_ENCH_CONJURATION_EFFECT: KnownRecord = KnownRecord::new(TEMPLATES, 0x000802);
    pub const TEMPLATE_STAFF_ENCH_DESTRUCTION_EFFECT: KnownRecord = KnownRecord::new(TEMPLATES, 0x000803);
    pub const TEMPLATE_STAFF_ENCH_ILLUSION_EFFECT: KnownRecord = KnownRecord::new(TEMPLATES, 0x000804);
    pub const TEMPLATE_STAFF_ENCH_RESTORATION_EFFECT: KnownRecord = KnownRecord::new(TEMPLATES, 0x000805);

    // Gating perk templates
    pub const TEMPLATE_ALTE_CONJU_NON_SUMMON_OR_COMMAND_STAFF_PERK: KnownRecord = KnownRecord::new(TEMPLATES, 0x000810);
    pub const TEMPLATE_CONJU_COMMAND_STAFF_PERK: KnownRecord = KnownRecord::new(TEMPLATES, 0x000811);
    pub const TEMPLATE_CONJU_SUMMON_REANIMATE_STAFF_PERK: KnownRecord = KnownRecord::new(TEMPLATES, 0x000812);
    pub const TEMPLATE_DEST_ILLU_RESTO_STAFF_PERK: KnownRecord = KnownRecord::new(TEMPLATES, 0x000813);

    // Staff badge keywords
    pub const LIGHT_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000820);
    pub const PARALYSIS_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000821);
    pub const COMMAND_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000822);
    pub const BANISH_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000823);
    pub const REANIMATE_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000824);
    pub const SOUL_TRAP_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000825);
    pub const FIRE_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000826);
    pub const FROST_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000827);
    pub const SHOCK_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000828);
    pub const CONFIDENCE_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000829);
    pub const AGGRESSION_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x00082A);
    pub const POISON_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x00082B);
    pub const SUN_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x00082C);
    pub const TURN_STAFF_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x00082D);

    // Scrolls
    pub const SCROLL_KEYWORD: KnownRecord = KnownRecord::new(TEMPLATES, 0x000830);
}
