//! Level selection over the three encounter branches
//!
//! Dungeon opponents draw around the dungeon's quality level, town guards
//! around a town-tier base, everything else around the player's level. A
//! shared 1-in-20 exceptional roll then shifts the result five levels either
//! way, and the final level is floored at 1.

use super::context::EncounterContext;
use crate::random::RandomSource;
use crate::types::LocationType;

/// Random encounters stop scaling past this player level
pub const PLAYER_LEVEL_CAP: i32 = 23;

/// Time-and-place fluctuation of a town's guard quality, indexed by
/// `(x + y + year*4 + month/3) mod 8`
const PLACE_FLUCTUATION: [i32; 8] = [0, 1, 2, 1, 0, -1, -2, -1];

/// Per-guard deviation from the town's guard quality
const INDIVIDUAL_FLUCTUATION: [i32; 10] = [-2, -1, -1, 0, 0, 0, 0, 1, 1, 2];

/// Resolve an opponent's level from context.
///
/// Branch selection: inside a dungeon the dungeon branch applies; otherwise
/// town guards use the town-tier branch and everyone else the
/// random-encounter branch. The result includes the exceptional-agent
/// adjustment and the final floor at 1.
pub fn encounter_level(
    ctx: &EncounterContext,
    is_town_guard: bool,
    rng: &mut (impl RandomSource + ?Sized),
) -> i32 {
    let raw = if ctx.inside_dungeon {
        dungeon_level(ctx.dungeon_quality, rng)
    } else if is_town_guard {
        town_guard_level(ctx, rng)
    } else {
        random_encounter_level(ctx.player_level, rng)
    };

    (raw + exceptional_adjustment(rng)).max(1)
}

/// Random-encounter branch: mostly within [p-4, p+3] of the capped player
/// level, with a 1-in-10 tail well below and a 1-in-10 tail well above
pub fn random_encounter_level(player_level: i32, rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    let p = player_level.min(PLAYER_LEVEL_CAP);
    match rng.uniform_int(0, 9) {
        0 => p - 10 + rng.uniform_int(0, 5),
        9 => p + 4 + rng.uniform_int(0, 5),
        r => p - 4 + r - 1,
    }
}

/// Town-guard branch: a base tier from the town's prominence, a deterministic
/// time-and-place fluctuation, and a per-guard fluctuation
pub fn town_guard_level(ctx: &EncounterContext, rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    let mut level = match ctx.location_type {
        LocationType::TownCity => 15,
        LocationType::TownVillage => 7,
        LocationType::TownHamlet | LocationType::Other => 11,
    };
    if ctx.is_regional_capital() {
        level = 18;
    }
    if ctx.is_top_tier_capital() {
        level = 21;
    }

    let sequence = (ctx.map_x + ctx.map_y + ctx.year * 4 + ctx.month / 3).rem_euclid(8);
    level += PLACE_FLUCTUATION[sequence as usize];
    level += INDIVIDUAL_FLUCTUATION[rng.uniform_int(0, 9) as usize];

    level
}

/// Dungeon branch: 10% q-2, 20% q-1, 40% q, 20% q+1, 10% q+2
pub fn dungeon_level(quality: i32, rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    match rng.uniform_int(0, 9) {
        0 => quality - 2,
        1 | 2 => quality - 1,
        7 | 8 => quality + 1,
        9 => quality + 2,
        _ => quality,
    }
}

/// One opponent in twenty is exceptionally weak or strong
pub fn exceptional_adjustment(rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    match rng.uniform_int(0, 19) {
        0 => -5,
        19 => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    fn town(location_type: LocationType) -> EncounterContext {
        EncounterContext {
            player_level: 10,
            inside_dungeon: false,
            dungeon_quality: 0,
            location_type,
            location_name: "Aldingbury".to_string(),
            region_name: "Anticlere".to_string(),
            map_x: 0,
            map_y: 0,
            year: 0,
            month: 0,
        }
    }

    #[test]
    fn test_random_encounter_low_tail() {
        for sub in 0..=5 {
            let mut rng = SequenceSource::new([0, sub]);
            let level = random_encounter_level(23, &mut rng);
            assert!((13..=18).contains(&level), "got {level}");
        }
    }

    #[test]
    fn test_random_encounter_high_tail() {
        for sub in 0..=5 {
            let mut rng = SequenceSource::new([9, sub]);
            let level = random_encounter_level(23, &mut rng);
            assert!((27..=32).contains(&level), "got {level}");
        }
    }

    #[test]
    fn test_random_encounter_midband() {
        // r = 1..=8 spans p-4 through p+3 deterministically
        for r in 1..=8 {
            let mut rng = SequenceSource::new([r]);
            assert_eq!(random_encounter_level(10, &mut rng), 10 - 4 + r - 1);
        }
    }

    #[test]
    fn test_random_encounter_caps_player_level() {
        let mut rng = SequenceSource::new([4]);
        // p capped at 23 even for a level-40 player
        assert_eq!(random_encounter_level(40, &mut rng), 23 - 4 + 4 - 1);
    }

    #[test]
    fn test_town_guard_base_tiers() {
        // sequence 0 -> place modifier 0; scripted draw 3 -> individual 0
        for (location_type, expected) in [
            (LocationType::TownCity, 15),
            (LocationType::TownHamlet, 11),
            (LocationType::TownVillage, 7),
            (LocationType::Other, 11),
        ] {
            let mut rng = SequenceSource::new([3]);
            assert_eq!(town_guard_level(&town(location_type), &mut rng), expected);
        }
    }

    #[test]
    fn test_town_guard_regional_capital_overrides_tier() {
        let mut ctx = town(LocationType::TownCity);
        ctx.location_name = "Anticlere".to_string();
        let mut rng = SequenceSource::new([3]);
        assert_eq!(town_guard_level(&ctx, &mut rng), 18);
    }

    #[test]
    fn test_town_guard_top_capital_overrides_all() {
        let mut ctx = town(LocationType::TownCity);
        ctx.location_name = "Daggerfall".to_string();
        ctx.region_name = "Daggerfall".to_string();
        let mut rng = SequenceSource::new([3]);
        assert_eq!(town_guard_level(&ctx, &mut rng), 21);
    }

    #[test]
    fn test_town_guard_place_fluctuation() {
        // x=2 -> sequence 2 -> +2
        let mut ctx = town(LocationType::TownHamlet);
        ctx.map_x = 2;
        let mut rng = SequenceSource::new([3]);
        assert_eq!(town_guard_level(&ctx, &mut rng), 13);

        // x=6 -> sequence 6 -> -2
        ctx.map_x = 6;
        let mut rng = SequenceSource::new([3]);
        assert_eq!(town_guard_level(&ctx, &mut rng), 9);
    }

    #[test]
    fn test_town_guard_individual_fluctuation() {
        let mut rng = SequenceSource::new([0]);
        assert_eq!(town_guard_level(&town(LocationType::TownHamlet), &mut rng), 9);
        let mut rng = SequenceSource::new([9]);
        assert_eq!(town_guard_level(&town(LocationType::TownHamlet), &mut rng), 13);
    }

    #[test]
    fn test_dungeon_distribution_mapping() {
        let expected = [-2, -1, -1, 0, 0, 0, 0, 1, 1, 2];
        for (r, offset) in expected.iter().enumerate() {
            let mut rng = SequenceSource::new([r as i32]);
            assert_eq!(dungeon_level(12, &mut rng), 12 + offset);
        }
    }

    #[test]
    fn test_exceptional_adjustment_edges() {
        let mut rng = SequenceSource::new([0]);
        assert_eq!(exceptional_adjustment(&mut rng), -5);
        let mut rng = SequenceSource::new([19]);
        assert_eq!(exceptional_adjustment(&mut rng), 5);
        let mut rng = SequenceSource::new([10]);
        assert_eq!(exceptional_adjustment(&mut rng), 0);
    }

    #[test]
    fn test_encounter_level_floors_at_one() {
        let mut ctx = town(LocationType::TownVillage);
        ctx.inside_dungeon = true;
        ctx.dungeon_quality = 1;
        // dungeon draw 0 -> q-2 = -1, exceptional draw 0 -> -5, floored to 1
        let mut rng = SequenceSource::new([0, 0]);
        assert_eq!(encounter_level(&ctx, false, &mut rng), 1);
    }

    #[test]
    fn test_encounter_level_branch_selection() {
        // Dungeon wins over town guard
        let mut ctx = town(LocationType::TownCity);
        ctx.inside_dungeon = true;
        ctx.dungeon_quality = 9;
        let mut rng = SequenceSource::new([5, 10]);
        assert_eq!(encounter_level(&ctx, true, &mut rng), 9);

        // Town guard outside a dungeon
        ctx.inside_dungeon = false;
        let mut rng = SequenceSource::new([3, 10]);
        assert_eq!(encounter_level(&ctx, true, &mut rng), 15);

        // Everyone else is a random encounter
        let mut rng = SequenceSource::new([4, 10]);
        assert_eq!(encounter_level(&ctx, false, &mut rng), 10 - 4 + 4 - 1);
    }
}
