//! scaling_core - Level and reward scaling for class enemies and spell effects
//!
//! This library provides:
//! - Spell level derivation from skill, willpower and luck
//! - Chance/magnitude/duration scaling from per-effect settings
//! - Encounter level selection (random encounter, town guard, dungeon)
//! - Full opponent builds: health, skills, spellbook, equipment materials,
//!   armor ratings
//!
//! The host engine owns entities, items and randomness; the models reach
//! them through the capability traits in [`opponent::entity`],
//! [`random`] and [`diagnostics`].

pub mod config;
pub mod diagnostics;
pub mod encounter;
pub mod opponent;
pub mod prelude;
pub mod random;
pub mod spell;
pub mod types;

// Re-export core types for convenience
pub use diagnostics::{DiagnosticCategory, DiagnosticConfig, DiagnosticSink, Diagnostics};
pub use encounter::{encounter_level, EncounterContext};
pub use opponent::{
    ArmorValueUpdater, BuildOutcome, EquipmentProvider, OpponentBuilder, OpponentEntity,
};
pub use random::{thread_random, RandomSource, RngSource};
pub use spell::{
    compute_spell_level, distribute_points_to_equalize, spell_chance, spell_duration,
    spell_magnitude, CasterContext, EffectAmountModifier, EffectProperties, EffectSettings,
    NoModifier, ScalingError,
};
pub use types::{
    ArmorMaterial, ArmorValueTable, BodyPart, EntityKind, EquipSlot, EquipmentItem, Gender,
    ItemGroup, LocationType, MagicSchool, PoisonType, Race, Region, Skill, SpellId,
    WeaponMaterial,
};
pub use config::default_effects;
