//! Client port validation.
//!
//! `clientPort` must be a valid TCP port. Ports below 1024 are privileged
//! and usually require the server to run as root.

use super::require_int;
use crate::config::ZooCfg;
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

const KEY: &str = "clientPort";

/// Validates the port clients connect to.
pub struct ClientPortRule;

impl Rule for ClientPortRule {
    fn id(&self) -> RuleId {
        RuleId::new("client-port")
    }

    fn name(&self) -> &str {
        "ClientPort"
    }

    fn description(&self) -> &str {
        "Ensures clientPort is a valid, unprivileged TCP port"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        if let Some(port) = require_int(config, KEY, &mut outcome) {
            if !(0..=65535).contains(&port) {
                outcome.error(format!("`{KEY}` should be in range 0-65535, found {port}"));
            } else if port < 1024 {
                outcome.warn(format!(
                    "`{KEY}` is {port}; ports below 1024 require root privileges"
                ));
            }
        }

        Ok(outcome)
    }
}
