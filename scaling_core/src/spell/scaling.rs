//! Chance, magnitude and duration of an effect from its spell level

use super::level::{compute_spell_level, CasterContext};
use super::ScalingError;
use crate::diagnostics::{DiagnosticCategory, Diagnostics};
use crate::random::RandomSource;
use crate::types::MagicSchool;
use serde::{Deserialize, Serialize};

/// Shape of an effect: what it scales and whom it targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectProperties {
    pub key: String,
    pub school: MagicSchool,
    pub supports_magnitude: bool,
    pub supports_duration: bool,
    pub targets_caster_only: bool,
}

/// Per-effect tunable numeric knobs, content-authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSettings {
    #[serde(default)]
    pub chance_base: i32,
    #[serde(default)]
    pub chance_plus: i32,
    #[serde(default = "default_per_level")]
    pub chance_per_level: i32,
    #[serde(default)]
    pub magnitude_base_min: i32,
    #[serde(default)]
    pub magnitude_base_max: i32,
    #[serde(default)]
    pub magnitude_plus_min: i32,
    #[serde(default)]
    pub magnitude_plus_max: i32,
    #[serde(default = "default_per_level")]
    pub magnitude_per_level: i32,
    #[serde(default)]
    pub duration_base: i32,
    #[serde(default)]
    pub duration_plus: i32,
    #[serde(default = "default_per_level")]
    pub duration_per_level: i32,
}

fn default_per_level() -> i32 {
    1
}

impl Default for EffectSettings {
    fn default() -> Self {
        EffectSettings {
            chance_base: 0,
            chance_plus: 0,
            chance_per_level: 1,
            magnitude_base_min: 0,
            magnitude_base_max: 0,
            magnitude_plus_min: 0,
            magnitude_plus_max: 0,
            magnitude_per_level: 1,
            duration_base: 0,
            duration_plus: 0,
            duration_per_level: 1,
        }
    }
}

/// Adjusts a raw magnitude for the target's resistances and vulnerabilities.
/// The policy lives with the host; the scaling model only invokes it.
pub trait EffectAmountModifier {
    fn modify(&self, effect: &EffectProperties, magnitude: i32) -> i32;
}

/// Pass-through modifier for hosts without resistance rules
pub struct NoModifier;

impl EffectAmountModifier for NoModifier {
    fn modify(&self, _effect: &EffectProperties, magnitude: i32) -> i32 {
        magnitude
    }
}

fn positive_divisor(key: &str, field: &'static str, value: i32) -> Result<i32, ScalingError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ScalingError::InvalidPerLevel {
            key: key.to_string(),
            field,
            value,
        })
    }
}

fn checked_range(
    key: &str,
    field: &'static str,
    min: i32,
    max: i32,
) -> Result<(i32, i32), ScalingError> {
    if min <= max {
        Ok((min, max))
    } else {
        Err(ScalingError::InvalidMagnitudeRange {
            key: key.to_string(),
            field,
            min,
            max,
        })
    }
}

/// Chance of success: `chance_base + chance_plus * (level / chance_per_level)`
pub fn spell_chance(
    effect: &EffectProperties,
    settings: &EffectSettings,
    caster: Option<&CasterContext>,
    diagnostics: &Diagnostics,
) -> Result<i32, ScalingError> {
    let per_level = positive_divisor(&effect.key, "chance_per_level", settings.chance_per_level)?;
    let level = compute_spell_level(effect, caster, diagnostics);
    let steps = level / per_level;
    let chance = settings.chance_base + settings.chance_plus * steps;

    diagnostics.emit(DiagnosticCategory::Chance, || {
        format!(
            "{}: chance = {} + {} * {} = {}",
            effect.key, settings.chance_base, settings.chance_plus, steps, chance
        )
    });

    Ok(chance)
}

/// Magnitude: `uniform(base_min..=base_max) + uniform(plus_min..=plus_max) * (level / per_level)`.
///
/// Effects that do not support magnitude contribute a raw 0. Unless the
/// effect targets the caster only, the raw value is passed through the
/// external [`EffectAmountModifier`] before being returned.
pub fn spell_magnitude(
    effect: &EffectProperties,
    settings: &EffectSettings,
    caster: Option<&CasterContext>,
    rng: &mut (impl RandomSource + ?Sized),
    modifier: &dyn EffectAmountModifier,
    diagnostics: &Diagnostics,
) -> Result<i32, ScalingError> {
    let mut magnitude = 0;
    let mut roll = None;

    if effect.supports_magnitude {
        let per_level =
            positive_divisor(&effect.key, "magnitude_per_level", settings.magnitude_per_level)?;
        let (base_min, base_max) = checked_range(
            &effect.key,
            "magnitude_base",
            settings.magnitude_base_min,
            settings.magnitude_base_max,
        )?;
        let (plus_min, plus_max) = checked_range(
            &effect.key,
            "magnitude_plus",
            settings.magnitude_plus_min,
            settings.magnitude_plus_max,
        )?;

        let level = compute_spell_level(effect, caster, diagnostics);
        let base = rng.uniform_int(base_min, base_max);
        let plus = rng.uniform_int(plus_min, plus_max);
        let multiplier = level / per_level;
        magnitude = base + plus * multiplier;
        roll = Some((base, plus, multiplier));
    }

    if !effect.targets_caster_only {
        magnitude = modifier.modify(effect, magnitude);
    }

    diagnostics.emit(DiagnosticCategory::Magnitude, || match roll {
        Some((base, plus, multiplier)) => format!(
            "{}: magnitude = {} + {} * {} (final {})",
            effect.key, base, plus, multiplier, magnitude
        ),
        None => format!("{}: no magnitude support (final {})", effect.key, magnitude),
    });

    Ok(magnitude)
}

/// Duration: `duration_base + duration_plus * (level / duration_per_level)`,
/// or exactly 0 when the effect has no duration, whatever the settings say
pub fn spell_duration(
    effect: &EffectProperties,
    settings: &EffectSettings,
    caster: Option<&CasterContext>,
    diagnostics: &Diagnostics,
) -> Result<i32, ScalingError> {
    if !effect.supports_duration {
        diagnostics.emit(DiagnosticCategory::Duration, || {
            format!("{}: duration = 0", effect.key)
        });
        return Ok(0);
    }

    let per_level =
        positive_divisor(&effect.key, "duration_per_level", settings.duration_per_level)?;
    let level = compute_spell_level(effect, caster, diagnostics);
    let steps = level / per_level;
    let duration = settings.duration_base + settings.duration_plus * steps;

    diagnostics.emit(DiagnosticCategory::Duration, || {
        format!(
            "{}: duration = {} + {} * {} = {}",
            effect.key, settings.duration_base, settings.duration_plus, steps, duration
        )
    });

    Ok(duration)
}
