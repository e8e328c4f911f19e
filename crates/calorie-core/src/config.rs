use serde::Deserialize;

/// How ids are rebuilt when stored items are loaded into memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Keep the ids that were stored
    #[default]
    Restore,
    /// Replay stored items through `add_item`, numbering them from 0
    Reassign,
}

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Durable storage key holding the item list
    pub storage_key: String,
    /// Id handling on page load
    pub id_policy: IdPolicy,
    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "items".to_string(),
            id_policy: IdPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse configuration JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
