//! Fixed spellbook tiers for casting class enemies
//!
//! Seven spell sets ordered by power, taken from the classic class-enemy
//! tables. An opponent gets exactly the set for its tier; the host's spell
//! catalog resolves the ids.

use crate::types::SpellId;

/// Flat value applied to all six magic-school skills of a caster
pub const MAGIC_SCHOOL_SKILL_VALUE: i16 = 80;

const TIER_0: &[SpellId] = &[SpellId(0x10), SpellId(0x14)];
const TIER_1: &[SpellId] = &[SpellId(0x16), SpellId(0x17), SpellId(0x1F)];
const TIER_2: &[SpellId] = &[
    SpellId(0x06),
    SpellId(0x07),
    SpellId(0x16),
    SpellId(0x19),
    SpellId(0x1F),
];
const TIER_3: &[SpellId] = &[SpellId(0x08), SpellId(0x32)];
const TIER_4: &[SpellId] = &[
    SpellId(0x08),
    SpellId(0x0A),
    SpellId(0x0E),
    SpellId(0x3C),
    SpellId(0x43),
];
const TIER_5: &[SpellId] = &[
    SpellId(0x08),
    SpellId(0x0A),
    SpellId(0x0E),
    SpellId(0x22),
    SpellId(0x3C),
];
const TIER_6: &[SpellId] = &[
    SpellId(0x08),
    SpellId(0x0A),
    SpellId(0x0E),
    SpellId(0x1D),
    SpellId(0x1F),
    SpellId(0x22),
    SpellId(0x3C),
];

/// Spell sets indexed by tier 0..=6
pub const SPELLBOOK_TIERS: [&[SpellId]; 7] = [
    TIER_0, TIER_1, TIER_2, TIER_3, TIER_4, TIER_5, TIER_6,
];

/// Tier for an opponent level: one tier per three levels, capped at 6
pub fn spellbook_tier(level: i32) -> usize {
    (level / 3).clamp(0, 6) as usize
}

/// The spell set an opponent of this level carries
pub fn spellbook_for_level(level: i32) -> &'static [SpellId] {
    SPELLBOOK_TIERS[spellbook_tier(level)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_progression() {
        assert_eq!(spellbook_tier(1), 0);
        assert_eq!(spellbook_tier(3), 1);
        assert_eq!(spellbook_tier(8), 2);
        assert_eq!(spellbook_tier(18), 6);
        assert_eq!(spellbook_tier(35), 6);
    }

    #[test]
    fn test_sets_are_nonempty_and_distinct() {
        for (tier, set) in SPELLBOOK_TIERS.iter().enumerate() {
            assert!(!set.is_empty(), "tier {tier}");
        }
        assert_ne!(SPELLBOOK_TIERS[0], SPELLBOOK_TIERS[6]);
    }

    #[test]
    fn test_top_tier_contents() {
        let top = spellbook_for_level(30);
        assert_eq!(top.len(), 7);
        assert!(top.contains(&SpellId(0x22)));
    }
}
