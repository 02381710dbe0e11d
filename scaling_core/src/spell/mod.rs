//! Spell level derivation and chance/magnitude/duration scaling

mod level;
mod scaling;

pub use level::{compute_spell_level, distribute_points_to_equalize, CasterContext};
pub use scaling::{
    spell_chance, spell_duration, spell_magnitude, EffectAmountModifier, EffectProperties,
    EffectSettings, NoModifier,
};

use thiserror::Error;

/// A malformed effect-settings record.
///
/// These signal content-authoring mistakes and fail fast; they are never
/// coerced to a default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScalingError {
    #[error("effect '{key}': {field} must be a positive divisor, got {value}")]
    InvalidPerLevel {
        key: String,
        field: &'static str,
        value: i32,
    },
    #[error("effect '{key}': {field} range is inverted ({min}..={max})")]
    InvalidMagnitudeRange {
        key: String,
        field: &'static str,
        min: i32,
        max: i32,
    },
}
