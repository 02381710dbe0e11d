//! Effect settings loading

use super::ConfigError;
use crate::spell::{EffectProperties, EffectSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One content-authored effect: its shape plus its tunable settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectDefinition {
    #[serde(flatten)]
    pub properties: EffectProperties,
    #[serde(flatten)]
    pub settings: EffectSettings,
}

impl EffectDefinition {
    /// Reject records that would trip the fail-fast guards at cast time
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = &self.properties.key;
        let check_divisor = |field: &str, value: i32| {
            if value > 0 {
                Ok(())
            } else {
                Err(ConfigError::ValidationError(format!(
                    "effect '{key}': {field} must be a positive divisor, got {value}"
                )))
            }
        };

        check_divisor("chance_per_level", self.settings.chance_per_level)?;
        if self.properties.supports_magnitude {
            check_divisor("magnitude_per_level", self.settings.magnitude_per_level)?;
            if self.settings.magnitude_base_min > self.settings.magnitude_base_max {
                return Err(ConfigError::ValidationError(format!(
                    "effect '{key}': magnitude_base range is inverted"
                )));
            }
            if self.settings.magnitude_plus_min > self.settings.magnitude_plus_max {
                return Err(ConfigError::ValidationError(format!(
                    "effect '{key}': magnitude_plus range is inverted"
                )));
            }
        }
        if self.properties.supports_duration {
            check_divisor("duration_per_level", self.settings.duration_per_level)?;
        }
        Ok(())
    }
}

/// Container for effect configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub effects: Vec<EffectDefinition>,
}

fn into_map(config: EffectsConfig) -> Result<HashMap<String, EffectDefinition>, ConfigError> {
    let mut map = HashMap::new();
    for effect in config.effects {
        effect.validate()?;
        map.insert(effect.properties.key.clone(), effect);
    }
    Ok(map)
}

/// Load effect configurations from a TOML file
pub fn load_effect_configs(path: &Path) -> Result<HashMap<String, EffectDefinition>, ConfigError> {
    let config: EffectsConfig = super::load_toml(path)?;
    into_map(config)
}

/// Load effect configurations from a TOML string
pub fn parse_effect_configs(content: &str) -> Result<HashMap<String, EffectDefinition>, ConfigError> {
    let config: EffectsConfig = super::parse_toml(content)?;
    into_map(config)
}

/// Get the built-in effect configurations
pub fn default_effects() -> HashMap<String, EffectDefinition> {
    let toml = include_str!("../../config/effects.toml");
    parse_effect_configs(toml).unwrap_or_default()
}
