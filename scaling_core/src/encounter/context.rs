//! Contextual inputs for opponent level selection

use crate::types::LocationType;
use serde::{Deserialize, Serialize};

/// Towns whose guards get the top-tier base level
pub const TOP_TIER_CAPITALS: [&str; 3] = ["Daggerfall", "Wayrest", "Sentinel"];

/// Everything the level models read about the world, supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterContext {
    pub player_level: i32,
    pub inside_dungeon: bool,
    /// Difficulty tier of the current dungeon; only read inside dungeons
    pub dungeon_quality: i32,
    pub location_type: LocationType,
    pub location_name: String,
    pub region_name: String,
    pub map_x: i32,
    pub map_y: i32,
    pub year: i32,
    pub month: i32,
}

impl EncounterContext {
    /// The location is its region's namesake
    pub fn is_regional_capital(&self) -> bool {
        !self.location_name.is_empty() && self.location_name == self.region_name
    }

    pub fn is_top_tier_capital(&self) -> bool {
        TOP_TIER_CAPITALS.contains(&self.location_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(name: &str, region: &str) -> EncounterContext {
        EncounterContext {
            player_level: 1,
            inside_dungeon: false,
            dungeon_quality: 0,
            location_type: LocationType::TownCity,
            location_name: name.to_string(),
            region_name: region.to_string(),
            map_x: 0,
            map_y: 0,
            year: 0,
            month: 0,
        }
    }

    #[test]
    fn test_regional_capital_is_region_namesake() {
        assert!(context("Anticlere", "Anticlere").is_regional_capital());
        assert!(!context("Aldingbury", "Anticlere").is_regional_capital());
        assert!(!context("", "").is_regional_capital());
    }

    #[test]
    fn test_top_tier_capitals() {
        assert!(context("Wayrest", "Wayrest").is_top_tier_capital());
        assert!(!context("Anticlere", "Anticlere").is_top_tier_capital());
    }
}
