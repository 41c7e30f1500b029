//! Quick style presets
//!
//! The classic single-style reticles are just configurations where one layer
//! is switched on. Each preset is a batch of layer toggles pushed through the
//! normal apply path, so the rest of the user's tuning is kept.

use std::fmt;
use std::str::FromStr;

use crate::config::keys::SettingKey;
use crate::config::store::ConfigurationStore;
use crate::sync::{ApplyOutcome, RenderSurface, SettingsSyncEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Inner lines only
    Cross,
    /// Centre dot only
    Dot,
    /// Default layer toggles (inner + outer lines, no dot)
    Layered,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Cross, Preset::Dot, Preset::Layered];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Cross => "cross",
            Preset::Dot => "dot",
            Preset::Layered => "layered",
        }
    }

    /// Field values this preset writes
    pub fn fields(self) -> Vec<(SettingKey, &'static str)> {
        let (inner, outer, dot) = match self {
            Preset::Cross => ("true", "false", "false"),
            Preset::Dot => ("false", "false", "true"),
            Preset::Layered => (
                SettingKey::InnerEnabled.default_value(),
                SettingKey::OuterEnabled.default_value(),
                SettingKey::CenterDotEnabled.default_value(),
            ),
        };

        vec![
            (SettingKey::InnerEnabled, inner),
            (SettingKey::OuterEnabled, outer),
            (SettingKey::CenterDotEnabled, dot),
        ]
    }

    pub fn apply<S, R>(self, engine: &mut SettingsSyncEngine<S, R>) -> ApplyOutcome
    where
        S: ConfigurationStore,
        R: RenderSurface,
    {
        engine.apply_batch(self.fields().into_iter().map(|(key, value)| (key.as_str(), value)))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown preset '{s}' (expected cross, dot or layered)"))
    }
}
