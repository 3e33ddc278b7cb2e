//! Ensemble members declared through `server.<id>` keys.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::value::ConfigValue;
use crate::error::{Result, ZooCfgError};

/// Matches `server.<id>` keys; the sign is captured so `server.-1` is a range fault.
static SERVER_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^server\.([+-]?[0-9]+)$").expect("SERVER_KEY_REGEX must compile")
});

/// Lowest valid server id.
pub const MIN_SERVER_ID: i64 = 1;

/// Highest valid server id.
pub const MAX_SERVER_ID: i64 = 255;

/// A single ensemble member parsed from `server.<id>=host:port:electionPort`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Server {
    pub id: u8,
    pub host: String,
    pub port: u16,
    pub election_port: u16,
}

impl Server {
    /// Parse the colon-delimited address of a `server.<id>` entry.
    fn from_value(key: &str, id: u8, value: &ConfigValue) -> Result<Self> {
        let invalid = || ZooCfgError::InvalidServerAddress {
            key: key.to_string(),
            value: value.to_string(),
        };

        let raw = value.as_str().ok_or_else(invalid)?;
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        let [host, port, election_port] = parts.as_slice() else {
            return Err(invalid());
        };

        if host.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            id,
            host: host.to_string(),
            port: port.parse().map_err(|_| invalid())?,
            election_port: election_port.parse().map_err(|_| invalid())?,
        })
    }
}

/// Return the raw id suffix if `key` names a server entry.
pub fn server_key_id(key: &str) -> Option<&str> {
    SERVER_KEY_REGEX
        .captures(key)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract all servers from configuration entries, sorted by id.
///
/// # Errors
///
/// - [`ZooCfgError::InvalidServerId`] if an id lies outside 1..=255
/// - [`ZooCfgError::DuplicateServerId`] if two keys resolve to the same id
/// - [`ZooCfgError::InvalidServerAddress`] if a value is not `host:port:electionPort`
pub fn extract_servers<'a, I>(entries: I) -> Result<Vec<Server>>
where
    I: IntoIterator<Item = (&'a String, &'a ConfigValue)>,
{
    let mut servers: BTreeMap<u8, Server> = BTreeMap::new();

    for (key, value) in entries {
        let Some(raw_id) = server_key_id(key) else {
            continue;
        };

        let id = raw_id
            .parse::<i64>()
            .ok()
            .filter(|id| (MIN_SERVER_ID..=MAX_SERVER_ID).contains(id))
            .and_then(|id| u8::try_from(id).ok())
            .ok_or_else(|| ZooCfgError::InvalidServerId {
                id: raw_id.to_string(),
            })?;

        if servers.contains_key(&id) {
            return Err(ZooCfgError::DuplicateServerId { id });
        }

        servers.insert(id, Server::from_value(key, id, value)?);
    }

    Ok(servers.into_values().collect())
}
