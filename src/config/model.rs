//! The merged configuration model.
//!
//! A [`ZooCfg`] is built in three layers:
//! 1. The fixed defaults from [`defaults`]
//! 2. The overlay parsed from source text (overlay wins)
//! 3. Derived keys (`dataLogDir` falls back to `dataDir`)
//!
//! Once built, the model is never mutated.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::parser::{self, Overlay};
use crate::config::server::{extract_servers, Server};
use crate::config::value::ConfigValue;
use crate::error::{Result, ZooCfgError};

/// Key holding the snapshot directory.
pub const DATA_DIR: &str = "dataDir";

/// Key holding the transaction log directory.
pub const DATA_LOG_DIR: &str = "dataLogDir";

/// Built-in defaults applied beneath every parsed configuration.
///
/// `preAllocSize` is expressed in kilobytes.
pub fn defaults() -> BTreeMap<String, ConfigValue> {
    [
        ("globalOutstandingLimit", ConfigValue::Integer(1000)),
        ("preAllocSize", ConfigValue::Integer(65536)),
        ("snapCount", ConfigValue::Integer(100_000)),
        ("maxClientCnxns", ConfigValue::Integer(10)),
        ("minSessionTimeout", ConfigValue::Integer(2)),
        ("maxSessionTimeout", ConfigValue::Integer(20)),
        ("electionAlg", ConfigValue::Integer(3)),
        ("leaderServers", ConfigValue::from("yes")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// A fully merged, read-only configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZooCfg {
    data: BTreeMap<String, ConfigValue>,
}

impl ZooCfg {
    /// Parse source text and merge it over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ZooCfgError::DuplicateKey`] if the text repeats a key.
    pub fn parse(text: &str) -> Result<Self> {
        let overlay = parser::parse(text)?;
        Ok(Self::build(defaults(), overlay))
    }

    /// Merge `overlay` over `defaults` and apply derived keys.
    pub fn build(defaults: BTreeMap<String, ConfigValue>, overlay: Overlay) -> Self {
        let mut data = defaults;

        for (key, value) in overlay {
            if let Some(previous) = data.insert(key.clone(), value) {
                debug!(key = %key, default = %previous, "overlay replaced default");
            }
        }

        if !data.contains_key(DATA_LOG_DIR) {
            if let Some(data_dir) = data.get(DATA_DIR).cloned() {
                debug!(value = %data_dir, "deriving dataLogDir from dataDir");
                data.insert(DATA_LOG_DIR.to_string(), data_dir);
            }
        }

        Self { data }
    }

    /// Get a value, failing if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ZooCfgError::MissingKey`] if the key is not present.
    pub fn get(&self, key: &str) -> Result<&ConfigValue> {
        self.data.get(key).ok_or_else(|| ZooCfgError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get a value as an integer, if present and integral.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(ConfigValue::as_int)
    }

    /// Get a value as a string, if present and not integral.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(ConfigValue::as_str)
    }

    /// Servers declared through `server.<id>` keys, sorted by id.
    ///
    /// # Errors
    ///
    /// Fails on out-of-range ids, duplicate ids and malformed addresses.
    pub fn servers(&self) -> Result<Vec<Server>> {
        extract_servers(&self.data)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Number of entries, including defaults and derived keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the configuration holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for ZooCfg {
    fn default() -> Self {
        Self::build(defaults(), Overlay::new())
    }
}
