//! Material tier lottery and tier-to-material mappings
//!
//! An opponent's level picks a dominant material category (three levels per
//! category); the lottery then lands on, below or above that category with
//! roughly equal weight at the category center, skewed towards the nearer
//! side one level off-center. The deviation distance itself decays
//! geometrically, so a lucky draw can land many tiers away.

use crate::random::RandomSource;
use crate::types::{ArmorMaterial, Region, WeaponMaterial};

pub const MIN_MATERIAL_TIER: i32 = 1;
pub const MAX_MATERIAL_TIER: i32 = 13;

/// Chance in 100 of landing below the category, indexed by deviation + 1
const MAX_LOW: [i32; 3] = [47, 33, 26];

/// First roll in 100 landing above the category, indexed by deviation + 1
const MIN_HIGH: [i32; 3] = [74, 67, 53];

fn clamp_tier(tier: i32) -> i32 {
    tier.clamp(MIN_MATERIAL_TIER, MAX_MATERIAL_TIER)
}

/// Deviation distance over a 1024-point table: 1 half the time, then halving
/// weights out to 11. Fixed calibration data, not a formula.
fn material_deviation(rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    let roll = rng.uniform_int(0, 1023);
    if roll < 512 {
        1
    } else if roll < 768 {
        2
    } else if roll < 896 {
        3
    } else if roll < 960 {
        4
    } else if roll < 992 {
        5
    } else if roll < 1008 {
        6
    } else if roll < 1016 {
        7
    } else if roll < 1020 {
        8
    } else if roll < 1022 {
        9
    } else if roll < 1023 {
        10
    } else {
        11
    }
}

/// Draw a material tier in [1, 13] for an opponent of the given level.
///
/// Level 2 is the center of the first category (levels 1-3), level 5 of the
/// second, and so on; the deviation from the center skews the lottery's
/// boundaries.
pub fn random_material_tier(level: i32, rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    let level = level.max(1);
    let category = (level - 1) / 3 + 1;
    let deviation = ((level - 1) % 3) - 1;
    let index = (deviation + 1) as usize;

    let roll = rng.uniform_int(0, 99);
    if roll < MAX_LOW[index] {
        clamp_tier(category - material_deviation(rng))
    } else if roll < MIN_HIGH[index] {
        clamp_tier(category)
    } else {
        clamp_tier(category + material_deviation(rng))
    }
}

/// Map a tier to a weapon material. In an orc stronghold, tiers 7 through 11
/// shift one step so Orcish gear substitutes at that tier.
pub fn weapon_material_from_tier(tier: i32, region: Region) -> WeaponMaterial {
    let orcish = region == Region::OrcStronghold;
    match tier {
        1 => WeaponMaterial::Iron,
        2 | 3 => WeaponMaterial::Steel,
        4 => WeaponMaterial::Silver,
        5 => WeaponMaterial::Elven,
        6 => WeaponMaterial::Dwarven,
        7 => {
            if orcish {
                WeaponMaterial::Orcish
            } else {
                WeaponMaterial::Mithril
            }
        }
        8 => {
            if orcish {
                WeaponMaterial::Mithril
            } else {
                WeaponMaterial::Adamantium
            }
        }
        9 => {
            if orcish {
                WeaponMaterial::Adamantium
            } else {
                WeaponMaterial::Ebony
            }
        }
        10 | 11 => {
            if orcish {
                WeaponMaterial::Ebony
            } else {
                WeaponMaterial::Orcish
            }
        }
        12 | 13 => WeaponMaterial::Daedric,
        _ => WeaponMaterial::Iron,
    }
}

/// Map a tier to an armor material. The armor remap boundaries sit one tier
/// above the weapon ones (tiers 8 through 12); the offset is deliberate and
/// matches the classic tables.
pub fn armor_material_from_tier(tier: i32, region: Region) -> ArmorMaterial {
    let orcish = region == Region::OrcStronghold;
    match tier {
        1 => ArmorMaterial::Leather,
        2 => ArmorMaterial::Chain,
        3 => ArmorMaterial::Iron,
        4 => ArmorMaterial::Steel,
        5 => ArmorMaterial::Silver,
        6 => ArmorMaterial::Elven,
        7 => ArmorMaterial::Dwarven,
        8 => {
            if orcish {
                ArmorMaterial::Orcish
            } else {
                ArmorMaterial::Mithril
            }
        }
        9 => {
            if orcish {
                ArmorMaterial::Mithril
            } else {
                ArmorMaterial::Adamantium
            }
        }
        10 => {
            if orcish {
                ArmorMaterial::Adamantium
            } else {
                ArmorMaterial::Ebony
            }
        }
        11 | 12 => {
            if orcish {
                ArmorMaterial::Ebony
            } else {
                ArmorMaterial::Orcish
            }
        }
        13 => ArmorMaterial::Daedric,
        _ => ArmorMaterial::Leather,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_deviation_table_breakpoints() {
        let cases = [
            (0, 1),
            (511, 1),
            (512, 2),
            (767, 2),
            (768, 3),
            (895, 3),
            (896, 4),
            (959, 4),
            (960, 5),
            (991, 5),
            (992, 6),
            (1007, 6),
            (1008, 7),
            (1015, 7),
            (1016, 8),
            (1019, 8),
            (1020, 9),
            (1021, 9),
            (1022, 10),
            (1023, 11),
        ];
        for (roll, expected) in cases {
            let mut rng = SequenceSource::new([roll]);
            assert_eq!(material_deviation(&mut rng), expected, "roll {roll}");
        }
    }

    #[test]
    fn test_exact_category_band() {
        // Level 5 sits at its category center (d = 0): rolls 33..=66 stay exact
        for roll in [33, 50, 66] {
            let mut rng = SequenceSource::new([roll]);
            assert_eq!(random_material_tier(5, &mut rng), 2);
        }
    }

    #[test]
    fn test_low_and_high_bands() {
        // Roll below max_low goes down by the deviation draw
        let mut rng = SequenceSource::new([0, 0]);
        assert_eq!(random_material_tier(5, &mut rng), 1);
        // Roll at or above min_high goes up
        let mut rng = SequenceSource::new([99, 0]);
        assert_eq!(random_material_tier(5, &mut rng), 3);
        // Long deviations clamp at the tier bounds
        let mut rng = SequenceSource::new([99, 1023]);
        assert_eq!(random_material_tier(5, &mut rng), 13);
        let mut rng = SequenceSource::new([0, 1023]);
        assert_eq!(random_material_tier(5, &mut rng), 1);
    }

    #[test]
    fn test_off_center_levels_skew_the_bands() {
        // Level 4 (d = -1): max_low 47, min_high 74
        let mut rng = SequenceSource::new([46, 0]);
        assert_eq!(random_material_tier(4, &mut rng), 1);
        let mut rng = SequenceSource::new([47]);
        assert_eq!(random_material_tier(4, &mut rng), 2);
        // Level 6 (d = +1): max_low 26, min_high 53
        let mut rng = SequenceSource::new([26]);
        assert_eq!(random_material_tier(6, &mut rng), 2);
        let mut rng = SequenceSource::new([53, 0]);
        assert_eq!(random_material_tier(6, &mut rng), 3);
    }

    #[test]
    fn test_lottery_distribution_at_category_center() {
        // At d = 0 the lower/exact/higher outcomes split roughly in thirds.
        let mut rng = RngSource(ChaCha8Rng::seed_from_u64(42));
        let draws = 100_000;
        let mut lower = 0u32;
        let mut exact = 0u32;
        let mut higher = 0u32;
        for _ in 0..draws {
            // Level 8: category 3, d = 0; clamping cannot fold outcomes together
            match random_material_tier(8, &mut rng) {
                tier if tier < 3 => lower += 1,
                3 => exact += 1,
                _ => higher += 1,
            }
        }
        let ratio = |count: u32| count as f64 / draws as f64;
        assert!((ratio(lower) - 0.33).abs() < 0.02, "lower {}", ratio(lower));
        assert!((ratio(exact) - 0.34).abs() < 0.02, "exact {}", ratio(exact));
        assert!((ratio(higher) - 0.33).abs() < 0.02, "higher {}", ratio(higher));
    }

    #[test]
    fn test_every_tier_maps_for_both_groups() {
        for tier in MIN_MATERIAL_TIER..=MAX_MATERIAL_TIER {
            for region in [Region::Standard, Region::OrcStronghold] {
                let _ = weapon_material_from_tier(tier, region);
                let _ = armor_material_from_tier(tier, region);
            }
        }
    }

    #[test]
    fn test_orc_stronghold_remap_boundaries() {
        for tier in MIN_MATERIAL_TIER..=MAX_MATERIAL_TIER {
            let weapons_differ = weapon_material_from_tier(tier, Region::Standard)
                != weapon_material_from_tier(tier, Region::OrcStronghold);
            assert_eq!(weapons_differ, (7..=11).contains(&tier), "weapon tier {tier}");

            let armor_differs = armor_material_from_tier(tier, Region::Standard)
                != armor_material_from_tier(tier, Region::OrcStronghold);
            assert_eq!(armor_differs, (8..=12).contains(&tier), "armor tier {tier}");
        }
    }

    #[test]
    fn test_stronghold_substitutes_orcish() {
        assert_eq!(
            weapon_material_from_tier(7, Region::OrcStronghold),
            WeaponMaterial::Orcish
        );
        assert_eq!(
            armor_material_from_tier(8, Region::OrcStronghold),
            ArmorMaterial::Orcish
        );
    }
}
