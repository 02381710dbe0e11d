//! Spell level - the power tier driving every spell-scaling formula

use super::scaling::EffectProperties;
use crate::diagnostics::{DiagnosticCategory, Diagnostics};

/// The acting agent behind a cast, read fresh per computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasterContext {
    /// Player casters derive their level from live skill, willpower and luck
    Player {
        skill_value: i32,
        willpower: i32,
        luck: i32,
    },
    /// Non-player casters use their own level stat directly
    NonPlayer { level: i32 },
}

/// Compute the effective spell level of a caster for one effect.
///
/// Player formula:
/// - skill level = floor((skill - 9) / 3)
/// - willpower level = 10 + floor(willpower / 5)
/// - luck points = floor((luck - 50) / 10), possibly negative
///
/// Positive luck points are handed out one at a time to whichever of the two
/// levels is currently lower; a non-positive amount is applied in one step to
/// the lower level. The result is the lesser of the two adjusted levels,
/// floored at 1.
///
/// A missing caster is a non-fatal condition: the computation reports it and
/// falls back to level 1.
pub fn compute_spell_level(
    effect: &EffectProperties,
    caster: Option<&CasterContext>,
    diagnostics: &Diagnostics,
) -> i32 {
    let Some(caster) = caster else {
        diagnostics.emit(DiagnosticCategory::NonPlayerSpellLevel, || {
            format!("{}: no caster, using spell level 1", effect.key)
        });
        return 1;
    };

    match *caster {
        CasterContext::NonPlayer { level } => {
            diagnostics.emit(DiagnosticCategory::NonPlayerSpellLevel, || {
                format!(
                    "non-player-cast {} ({}) level: {}",
                    effect.key,
                    effect.school.abbrev(),
                    level
                )
            });
            level
        }
        CasterContext::Player {
            skill_value,
            willpower,
            luck,
        } => {
            let skill_level = (skill_value - 9).div_euclid(3);
            let willpower_level = 10 + willpower.div_euclid(5);
            let luck_points = (luck - 50).div_euclid(10);

            let (to_skill, to_willpower) = if luck_points > 0 {
                distribute_points_to_equalize(skill_level, willpower_level, luck_points)
            } else if skill_level < willpower_level {
                (luck_points, 0)
            } else {
                (0, luck_points)
            };

            let level = (skill_level + to_skill)
                .min(willpower_level + to_willpower)
                .max(1);

            diagnostics.emit(DiagnosticCategory::PlayerSpellLevel, || {
                format!(
                    "player-cast {} ({}) level calculated: OVERALL = {}, SKILL = {}{:+}, WILLPOWER = {}{:+}",
                    effect.key,
                    effect.school.abbrev(),
                    level,
                    skill_level,
                    to_skill,
                    willpower_level,
                    to_willpower
                )
            });

            level
        }
    }
}

/// Spend `points` unit increments narrowing the gap between `a` and `b`.
///
/// Each increment goes to whichever side is currently lower, ties favoring
/// side A. Returns the additions for each side; their sum equals
/// `points.max(0)`. With enough points the adjusted values end up equal or
/// one apart, after which further points alternate.
pub fn distribute_points_to_equalize(a: i32, b: i32, points: i32) -> (i32, i32) {
    let mut add_a = 0;
    let mut add_b = 0;
    for _ in 0..points.max(0) {
        if a + add_a <= b + add_b {
            add_a += 1;
        } else {
            add_b += 1;
        }
    }
    (add_a, add_b)
}
