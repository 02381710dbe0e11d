//! Opponent level selection from encounter context

mod context;
mod level;

pub use context::{EncounterContext, TOP_TIER_CAPITALS};
pub use level::{
    dungeon_level, encounter_level, exceptional_adjustment, random_encounter_level,
    town_guard_level, PLAYER_LEVEL_CAP,
};
