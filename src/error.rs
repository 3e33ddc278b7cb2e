//! Error types for zoocfg operations.
//!
//! This module defines [`ZooCfgError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural parse faults ([`ZooCfgError::DuplicateKey`]) are fatal to
//!   building a configuration and propagate to the caller
//! - Model-access faults (missing keys, bad server entries) are raised on
//!   demand by accessors
//! - Rule findings are never errors; they are collected as strings
//! - Use `anyhow::Error` (via `ZooCfgError::Other`) for contextual I/O failures

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for zoocfg operations.
#[derive(Debug, Error)]
pub enum ZooCfgError {
    /// The same key appears twice in one source text.
    #[error("Duplicate key in config: {key}")]
    DuplicateKey { key: String },

    /// A key was requested that the configuration does not contain.
    #[error("Missing config key: {key}")]
    MissingKey { key: String },

    /// A `server.<id>` key uses an id outside 1..=255.
    #[error("Server id out of range (1-255): {id}")]
    InvalidServerId { id: String },

    /// Two `server.<id>` keys resolve to the same numeric id.
    #[error("Duplicate server id: {id}")]
    DuplicateServerId { id: u8 },

    /// A `server.<id>` value is not `host:port:electionPort`.
    #[error("Invalid server address for {key}: '{value}' (expected host:port:electionPort)")]
    InvalidServerAddress { key: String, value: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for zoocfg operations.
pub type Result<T> = std::result::Result<T, ZooCfgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_displays_key() {
        let err = ZooCfgError::DuplicateKey {
            key: "server.2".into(),
        };
        assert!(err.to_string().contains("server.2"));
    }

    #[test]
    fn missing_key_displays_key() {
        let err = ZooCfgError::MissingKey {
            key: "clientPort".into(),
        };
        assert_eq!(err.to_string(), "Missing config key: clientPort");
    }

    #[test]
    fn invalid_server_id_displays_id() {
        let err = ZooCfgError::InvalidServerId { id: "256".into() };
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn invalid_server_address_displays_key_and_value() {
        let err = ZooCfgError::InvalidServerAddress {
            key: "server.1".into(),
            value: "zoo1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("server.1"));
        assert!(msg.contains("'zoo1'"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ZooCfgError::ConfigNotFound {
            path: PathBuf::from("/etc/zookeeper/zoo.cfg"),
        };
        assert!(err.to_string().contains("/etc/zookeeper/zoo.cfg"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ZooCfgError = io_err.into();
        assert!(matches!(err, ZooCfgError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ZooCfgError = anyhow::anyhow!("reading zoo.cfg").into();
        assert_eq!(err.to_string(), "reading zoo.cfg");
    }
}
