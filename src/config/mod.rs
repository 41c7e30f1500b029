//! Reticle settings: canonical keys, the typed configuration and its stores
//!
//! - **keys**: the flat key names and their defaults
//! - **reticle**: ReticleConfiguration parsed from (and written back to) the key map
//! - **store**: where the key map lives (TOML file or memory)

pub mod keys;
pub mod reticle;
pub mod store;

// Re-export commonly used types
pub use keys::{ColorGroup, SettingKey};
pub use reticle::{DotLayer, LineLayer, Outline, ReticleConfiguration};
pub use store::{ConfigurationStore, FileStore, MemoryStore, SettingsMap, initialize};
