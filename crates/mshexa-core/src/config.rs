//! Widget Configuration
//!
//! Tunables for the calculator, timer and both live lists. Every field has a
//! default, so a partial (or empty) config object is valid.

use serde::{Deserialize, Deserializer, Serialize};

/// Rate inputs are entered in units of ten thousand
pub const DEFAULT_UNIT_MULTIPLIER: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Scale applied to the entered rate before conversion
    pub unit_multiplier: f64,
    pub timer: TimerConfig,
    /// Measurement history list
    #[serde(deserialize_with = "history_config")]
    pub history: CollectionConfig,
    /// To-do list
    #[serde(deserialize_with = "todos_config")]
    pub todos: CollectionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            unit_multiplier: DEFAULT_UNIT_MULTIPLIER,
            timer: TimerConfig::default(),
            history: CollectionConfig::history(),
            todos: CollectionConfig::todos(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config object, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimerConfig {
    /// Seconds per burning level
    pub cycle_seconds: u32,
    /// Level on start and after reset
    pub max_level: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            cycle_seconds: 15 * 60,
            max_level: 10,
        }
    }
}

/// A remote collection and how much of it is kept / shown locally
///
/// Each list has its own defaults; a partial object in the config only
/// overrides the fields it names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    pub collection: String,
    /// Snapshot size requested from the store (None = unbounded)
    pub fetch_limit: Option<usize>,
    /// Rows rendered from the snapshot (None = all)
    pub display_limit: Option<usize>,
}

impl CollectionConfig {
    /// Newest 20 records, 7 shown
    pub fn history() -> Self {
        Self {
            collection: "records".to_string(),
            fetch_limit: Some(20),
            display_limit: Some(7),
        }
    }

    /// Every to-do, all shown
    pub fn todos() -> Self {
        Self {
            collection: "todos".to_string(),
            fetch_limit: None,
            display_limit: None,
        }
    }

    fn merge(mut self, overrides: CollectionOverrides) -> Self {
        if let Some(collection) = overrides.collection {
            self.collection = collection;
        }
        if let Some(fetch_limit) = overrides.fetch_limit {
            self.fetch_limit = fetch_limit;
        }
        if let Some(display_limit) = overrides.display_limit {
            self.display_limit = display_limit;
        }
        self
    }
}

/// Fields present in a config object. An explicit `null` limit means
/// unbounded; a missing one keeps the list default.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionOverrides {
    #[serde(default)]
    collection: Option<String>,
    #[serde(default, deserialize_with = "present")]
    fetch_limit: Option<Option<usize>>,
    #[serde(default, deserialize_with = "present")]
    display_limit: Option<Option<usize>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn history_config<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CollectionConfig, D::Error> {
    CollectionOverrides::deserialize(deserializer).map(|o| CollectionConfig::history().merge(o))
}

fn todos_config<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CollectionConfig, D::Error> {
    CollectionOverrides::deserialize(deserializer).map(|o| CollectionConfig::todos().merge(o))
}
