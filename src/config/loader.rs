//! Configuration file loading.
//!
//! Reads a `zoo.cfg`-style file fully into memory and hands the text to
//! [`ZooCfg::parse`]. All parsing and merging stays I/O-free.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::config::model::ZooCfg;
use crate::error::{Result, ZooCfgError};

/// Load and parse a configuration file.
///
/// # Errors
///
/// - [`ZooCfgError::ConfigNotFound`] if the path does not exist
/// - [`ZooCfgError::Other`] if the file cannot be read
/// - [`ZooCfgError::DuplicateKey`] if the file repeats a key
pub fn load_config_file(path: &Path) -> Result<ZooCfg> {
    if !path.exists() {
        return Err(ZooCfgError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    debug!(path = %path.display(), bytes = text.len(), "loaded config file");

    ZooCfg::parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo.cfg");
        fs::write(&path, "tickTime=2000\nclientPort=2181\n").unwrap();

        let cfg = load_config_file(&path).unwrap();

        assert_eq!(cfg.get_int("tickTime"), Some(2000));
        assert_eq!(cfg.get_int("clientPort"), Some(2181));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.cfg");

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, ZooCfgError::ConfigNotFound { .. }));
    }

    #[test]
    fn directory_is_a_read_error() {
        let temp = TempDir::new().unwrap();

        let err = load_config_file(temp.path()).unwrap_err();

        assert!(matches!(err, ZooCfgError::Other(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn duplicate_key_propagates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo.cfg");
        fs::write(&path, "a=1\na=2\n").unwrap();

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, ZooCfgError::DuplicateKey { .. }));
    }
}
