//! Optional diagnostic tracing for the scaling formulas
//!
//! The sink is a host-injected capability with per-category enable flags.
//! Messages are formatted only when their category is live, so a disabled
//! handle costs a flag check. Emission never affects a computed value.

use serde::{Deserialize, Serialize};

/// Categories that can be toggled independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    PlayerSpellLevel,
    NonPlayerSpellLevel,
    Magnitude,
    Chance,
    Duration,
}

/// Per-category enable flags, all off by default
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    pub player_spell_level: bool,
    pub non_player_spell_level: bool,
    pub magnitude: bool,
    pub chance: bool,
    pub duration: bool,
}

impl DiagnosticConfig {
    pub fn all_enabled() -> Self {
        DiagnosticConfig {
            player_spell_level: true,
            non_player_spell_level: true,
            magnitude: true,
            chance: true,
            duration: true,
        }
    }

    fn enabled(&self, category: DiagnosticCategory) -> bool {
        match category {
            DiagnosticCategory::PlayerSpellLevel => self.player_spell_level,
            DiagnosticCategory::NonPlayerSpellLevel => self.non_player_spell_level,
            DiagnosticCategory::Magnitude => self.magnitude,
            DiagnosticCategory::Chance => self.chance,
            DiagnosticCategory::Duration => self.duration,
        }
    }
}

/// Receives diagnostic messages from the scaling formulas.
///
/// Implementations must not block or fail; emission is best-effort.
pub trait DiagnosticSink {
    fn emit(&self, message: &str);
}

/// Enable flags bundled with an optional sink.
///
/// An absent sink means every category is a no-op, never an error.
pub struct Diagnostics {
    config: DiagnosticConfig,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Diagnostics {
    pub fn new(config: DiagnosticConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        Diagnostics {
            config,
            sink: Some(sink),
        }
    }

    /// Handle that drops every message
    pub fn disabled() -> Self {
        Diagnostics {
            config: DiagnosticConfig::default(),
            sink: None,
        }
    }

    pub fn is_enabled(&self, category: DiagnosticCategory) -> bool {
        self.sink.is_some() && self.config.enabled(category)
    }

    /// Emit to the sink if the category is live; the message is built lazily
    pub fn emit(&self, category: DiagnosticCategory, message: impl FnOnce() -> String) {
        if let Some(sink) = &self.sink {
            if self.config.enabled(category) {
                sink.emit(&message());
            }
        }
    }
}
