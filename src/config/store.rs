//! Settings persistence
//!
//! The store only deals in flat `key -> string` maps. On disk that map is a
//! single TOML table of string values, e.g. `inner_length = "15"`.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::keys::SettingKey;
use crate::config::reticle::ReticleConfiguration;

pub type SettingsMap = BTreeMap<String, String>;

/// Persistence boundary for the flat settings map
pub trait ConfigurationStore {
    /// May return an empty or partial map
    fn load(&self) -> Result<SettingsMap>;

    fn save(&mut self, values: &SettingsMap) -> Result<()>;
}

/// Settings file under the user's config directory
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/reticle-overlay/reticle.toml` (or platform equivalent)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigurationStore for FileStore {
    fn load(&self) -> Result<SettingsMap> {
        if !self.path.exists() {
            return Ok(SettingsMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .context(format!("Failed to read config file {}", self.path.display()))?;
        let table: toml::Table = toml::from_str(&contents)
            .context(format!("Failed to parse config file {}", self.path.display()))?;

        // Hand-edited files may use bare TOML scalars (`inner_length = 15`)
        Ok(table
            .into_iter()
            .map(|(key, value)| match value {
                toml::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect())
    }

    fn save(&mut self, values: &SettingsMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = toml::to_string(values).context("Failed to serialize config to TOML")?;
        fs::write(&self.path, contents)
            .context(format!("Failed to write config file to {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store, used by tests and dry runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub values: SettingsMap,
    pub saves: usize,
    /// When set, every `save` fails and leaves `values` untouched
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ..Self::default()
        }
    }
}

impl ConfigurationStore for MemoryStore {
    fn load(&self) -> Result<SettingsMap> {
        Ok(self.values.clone())
    }

    fn save(&mut self, values: &SettingsMap) -> Result<()> {
        if self.fail_saves {
            anyhow::bail!("memory store configured to fail saves");
        }
        self.values = values.clone();
        self.saves += 1;
        Ok(())
    }
}

/// Load the store, backfill defaults for missing or invalid keys, persist the
/// repaired full set and return the typed configuration.
///
/// Never fails: an unreadable store yields the defaults and a failed save only
/// leaves the file stale until the next successful apply.
pub fn initialize<S: ConfigurationStore>(store: &mut S) -> ReticleConfiguration {
    let loaded = store.load().unwrap_or_else(|e| {
        error!(error = ?e, "Failed to load settings, using defaults");
        SettingsMap::new()
    });

    let (config, repaired) = ReticleConfiguration::from_map(&loaded);
    let stale_keys = loaded
        .keys()
        .any(|k| k.parse::<SettingKey>().is_err());

    if !repaired.is_empty() {
        let names: Vec<&str> = repaired.iter().map(|k| k.as_str()).collect();
        info!(added_keys = ?names, "Backfilled default(s) for settings");
    }

    if !repaired.is_empty() || stale_keys {
        if let Err(e) = store.save(&config.to_map()) {
            error!(error = ?e, "Failed to persist backfilled settings");
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_initialize_empty_store_writes_every_key() {
        let mut store = MemoryStore::default();
        let config = initialize(&mut store);

        assert_eq!(config, ReticleConfiguration::default());
        assert_eq!(store.saves, 1);
        assert_eq!(store.values.len(), SettingKey::ALL.len());
        for key in SettingKey::ALL {
            assert_eq!(store.values.get(key.as_str()).map(String::as_str), Some(key.default_value()));
        }
    }

    #[test]
    fn test_initialize_partial_store_keeps_existing_values() {
        let mut store = MemoryStore::with_values([("inner_color", "#00FF00"), ("opacity", "0.5")]);
        let config = initialize(&mut store);

        assert_eq!(config.inner.color, Rgb::new(0, 255, 0));
        assert_eq!(config.opacity.percent(), 50);
        assert_eq!(store.values["inner_color"], "#00FF00");
        assert_eq!(store.values["opacity"], "0.5");
        assert_eq!(store.values["outer_length"], "25");
        assert_eq!(store.values.len(), SettingKey::ALL.len());
    }

    #[test]
    fn test_initialize_complete_store_does_not_rewrite() {
        let mut store = MemoryStore {
            values: ReticleConfiguration::default().to_map(),
            ..MemoryStore::default()
        };
        initialize(&mut store);
        assert_eq!(store.saves, 0);
    }

    #[test]
    fn test_initialize_drops_unknown_keys() {
        let mut values = ReticleConfiguration::default().to_map();
        values.insert("style".to_string(), "cross".to_string());
        let mut store = MemoryStore {
            values,
            ..MemoryStore::default()
        };

        initialize(&mut store);
        assert_eq!(store.saves, 1);
        assert!(!store.values.contains_key("style"));
    }

    #[test]
    fn test_initialize_survives_failed_save() {
        let mut store = MemoryStore {
            fail_saves: true,
            ..MemoryStore::default()
        };
        let config = initialize(&mut store);
        assert_eq!(config, ReticleConfiguration::default());
        assert!(store.values.is_empty());
    }

    #[test]
    fn test_file_store_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.toml"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/dir/reticle.toml"));
        let values = ReticleConfiguration::default().to_map();

        store.save(&values).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("inner_color = \"#FF0000\""));
        assert!(contents.contains("center_dot_enabled = \"false\""));

        assert_eq!(store.load().unwrap(), values);
    }

    #[test]
    fn test_file_store_accepts_bare_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reticle.toml");
        fs::write(&path, "inner_length = 40\nouter_enabled = false\nopacity = 0.5\n").unwrap();

        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(loaded["inner_length"], "40");
        assert_eq!(loaded["outer_enabled"], "false");
        assert_eq!(loaded["opacity"], "0.5");
    }

    #[test]
    fn test_file_store_unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reticle.toml");
        fs::write(&path, "inner_length = [unterminated").unwrap();

        let mut store = FileStore::new(&path);
        assert!(store.load().is_err());

        // Initialization still yields a usable configuration and rewrites the file
        let config = initialize(&mut store);
        assert_eq!(config, ReticleConfiguration::default());
        assert_eq!(store.load().unwrap().len(), SettingKey::ALL.len());
    }
}
