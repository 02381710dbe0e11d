//! Opponent activation: level, health, skills, spellbook, equipment, armor

mod build;
mod entity;
mod materials;
mod spells;

pub use build::{BuildOutcome, OpponentBuilder, SKILL_VALUE_CAP};
pub use entity::{ArmorValueUpdater, EquipmentProvider, OpponentEntity};
pub use materials::{
    armor_material_from_tier, random_material_tier, weapon_material_from_tier, MAX_MATERIAL_TIER,
    MIN_MATERIAL_TIER,
};
pub use spells::{
    spellbook_for_level, spellbook_tier, MAGIC_SCHOOL_SKILL_VALUE, SPELLBOOK_TIERS,
};
