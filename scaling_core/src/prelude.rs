//! Convenience re-exports for hosts embedding the scaling models

// Spell scaling
pub use crate::spell::{
    compute_spell_level, spell_chance, spell_duration, spell_magnitude, CasterContext,
    EffectAmountModifier, EffectProperties, EffectSettings, NoModifier, ScalingError,
};

// Encounter and opponent models
pub use crate::encounter::{encounter_level, EncounterContext};
pub use crate::opponent::{
    ArmorValueUpdater, BuildOutcome, EquipmentProvider, OpponentBuilder, OpponentEntity,
};

// Capabilities
pub use crate::diagnostics::{DiagnosticConfig, DiagnosticSink, Diagnostics};
pub use crate::random::{thread_random, RandomSource, RngSource};

// Shared types
pub use crate::types::{
    ArmorMaterial, ArmorValueTable, BodyPart, EntityKind, EquipSlot, EquipmentItem, Gender,
    ItemGroup, LocationType, MagicSchool, Race, Region, Skill, SpellId, WeaponMaterial,
};

// Config
pub use crate::config::default_effects;
