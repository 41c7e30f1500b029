//! Live-apply pipeline
//!
//! Every edit reaches the configuration through [`SettingsSyncEngine`]:
//! validate against a scratch copy, swap it in, persist, re-render. A value
//! that fails validation drops the whole call and leaves the last good
//! configuration untouched; a failed save is logged and the in-memory
//! configuration stays authoritative.
//!
//! All entry points take `&mut self`, so one apply always completes before
//! the next begins even if the engine is shared behind a lock.

use tracing::{debug, error};

use crate::color::{Channel, Opacity};
use crate::compositor::{LayeredPrimitive, compose};
use crate::config::keys::{ColorGroup, SettingKey};
use crate::config::reticle::ReticleConfiguration;
use crate::config::store::{ConfigurationStore, initialize};
use crate::constants::validation::{MAX_OPACITY_PERCENT, MIN_OPACITY_PERCENT};
use crate::error::ApplyError;

/// Whatever draws the reticle. Receives a complete frame each time; it is
/// expected to clear the previous one and paint in the given order.
pub trait RenderSurface {
    fn on_configuration_changed(&mut self, primitives: &[LayeredPrimitive], opacity: f32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// Written and re-rendered; `persisted` is false when the store write failed
    Applied { persisted: bool },
    /// Nothing was written
    Rejected(ApplyError),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

pub struct SettingsSyncEngine<S, R> {
    config: ReticleConfiguration,
    store: S,
    surface: R,
}

impl<S: ConfigurationStore, R: RenderSurface> SettingsSyncEngine<S, R> {
    /// Load (and backfill) the store, then paint the first frame
    pub fn new(mut store: S, surface: R) -> Self {
        let config = initialize(&mut store);
        let mut engine = Self {
            config,
            store,
            surface,
        };
        engine.render();
        engine
    }

    pub fn config(&self) -> &ReticleConfiguration {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Opacity as shown on controls (percent)
    pub fn opacity_percent(&self) -> u8 {
        self.config.opacity.percent()
    }

    /// Whole-snapshot apply: every field validates or none is written
    pub fn apply_batch<I, K, V>(&mut self, fields: I) -> ApplyOutcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut candidate = self.config.clone();
        let mut count = 0usize;

        for (key, raw) in fields {
            let result = key
                .as_ref()
                .parse::<SettingKey>()
                .and_then(|key| candidate.set(key, raw.as_ref()));
            if let Err(err) = result {
                return reject(err);
            }
            count += 1;
        }

        debug!(fields = count, "Batch validated");
        self.commit(candidate)
    }

    /// Single-field apply
    pub fn apply_field(&mut self, key: SettingKey, raw: &str) -> ApplyOutcome {
        let mut candidate = self.config.clone();
        match candidate.set(key, raw) {
            Ok(()) => self.commit(candidate),
            Err(err) => reject(err),
        }
    }

    /// One colour channel changed: rebuild the group's hex value from all
    /// three channels and apply that
    pub fn apply_channel(&mut self, group: ColorGroup, channel: Channel, raw: &str) -> ApplyOutcome {
        let key = group.key();
        let value = match parse_channel(key, raw) {
            Ok(value) => value,
            Err(err) => return reject(err),
        };

        let hex = self.config.color(group).with_channel(channel, value).to_hex_string();
        self.apply_field(key, &hex)
    }

    /// Display-side opacity (integer percent); the stored float is derived
    pub fn apply_opacity_percent(&mut self, raw: &str) -> ApplyOutcome {
        let key = SettingKey::Opacity;
        let trimmed = raw.trim();
        let percent: i64 = match trimmed.parse() {
            Ok(percent) => percent,
            Err(_) => {
                return reject(ApplyError::Malformed {
                    key,
                    value: trimmed.to_string(),
                    expected: "integer percent",
                });
            }
        };

        let opacity = u8::try_from(percent).ok().and_then(Opacity::from_percent);
        match opacity {
            Some(opacity) => self.apply_field(key, &opacity.to_stored_string()),
            None => reject(ApplyError::OutOfRange {
                key,
                value: trimmed.to_string(),
                min: MIN_OPACITY_PERCENT.to_string(),
                max: MAX_OPACITY_PERCENT.to_string(),
            }),
        }
    }

    /// Put every key back to its default value
    pub fn reset_to_defaults(&mut self) -> ApplyOutcome {
        self.apply_batch(SettingKey::ALL.iter().map(|key| (key.as_str(), key.default_value())))
    }

    /// Recompose the current configuration and hand it to the surface
    pub fn render(&mut self) {
        let frame = compose(&self.config);
        self.surface
            .on_configuration_changed(&frame, self.config.opacity.as_f32());
    }

    fn commit(&mut self, candidate: ReticleConfiguration) -> ApplyOutcome {
        self.config = candidate;

        let persisted = match self.store.save(&self.config.to_map()) {
            Ok(()) => true,
            Err(e) => {
                error!(error = ?e, "Failed to persist settings, keeping in-memory configuration");
                false
            }
        };

        self.render();
        ApplyOutcome::Applied { persisted }
    }
}

fn reject(err: ApplyError) -> ApplyOutcome {
    debug!(kind = err.kind(), error = %err, "Discarded apply");
    ApplyOutcome::Rejected(err)
}

fn parse_channel(key: SettingKey, raw: &str) -> Result<u8, ApplyError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| ApplyError::Malformed {
        key,
        value: trimmed.to_string(),
        expected: "colour channel",
    })?;

    u8::try_from(value).map_err(|_| ApplyError::OutOfRange {
        key,
        value: trimmed.to_string(),
        min: u8::MIN.to_string(),
        max: u8::MAX.to_string(),
    })
}

/// Surface that keeps every frame it was handed
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<(Vec<LayeredPrimitive>, f32)>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&(Vec<LayeredPrimitive>, f32)> {
        self.frames.last()
    }
}

impl RenderSurface for RecordingSurface {
    fn on_configuration_changed(&mut self, primitives: &[LayeredPrimitive], opacity: f32) {
        debug!(primitives = primitives.len(), opacity, "Frame recorded");
        self.frames.push((primitives.to_vec(), opacity));
    }
}
