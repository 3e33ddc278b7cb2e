//! Snapshot and transaction log directory rules.
//!
//! `dataLogDir` is derived from `dataDir` when absent, so a configuration
//! that only sets `dataDir` gets a warning from [`DataLogDirRule`]: the
//! transaction log should live on its own device.

use crate::config::{ZooCfg, DATA_DIR, DATA_LOG_DIR};
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

/// Validates the snapshot directory.
pub struct DataDirRule;

impl Rule for DataDirRule {
    fn id(&self) -> RuleId {
        RuleId::new("data-dir")
    }

    fn name(&self) -> &str {
        "DataDir"
    }

    fn description(&self) -> &str {
        "Ensures dataDir is set to an absolute path"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        match config.get(DATA_DIR) {
            Err(_) => outcome.error(format!("`{DATA_DIR}` is missing")),
            Ok(value) => {
                let path = value.to_string();
                if !path.starts_with('/') {
                    outcome.warn(format!(
                        "`{DATA_DIR}` should be an absolute path, found '{path}'"
                    ));
                }
            }
        }

        Ok(outcome)
    }
}

/// Validates the transaction log directory.
pub struct DataLogDirRule;

impl Rule for DataLogDirRule {
    fn id(&self) -> RuleId {
        RuleId::new("data-log-dir")
    }

    fn name(&self) -> &str {
        "DataLogDir"
    }

    fn description(&self) -> &str {
        "Recommends a transaction log directory separate from dataDir"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        match config.get(DATA_LOG_DIR) {
            Err(_) => outcome.error(format!("`{DATA_LOG_DIR}` is missing")),
            Ok(log_dir) => {
                if config.get(DATA_DIR).is_ok_and(|data_dir| data_dir == log_dir) {
                    outcome.warn(format!(
                        "`{DATA_LOG_DIR}` is the same as `{DATA_DIR}`; \
                         use a dedicated device for the transaction log"
                    ));
                }
            }
        }

        Ok(outcome)
    }
}
