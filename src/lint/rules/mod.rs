//! Built-in rules.
//!
//! This module contains the fixed rule catalog. The shared helpers below
//! record the "missing" and "not an integer" errors so individual rules
//! only express their own range policy.

pub mod client_port;
pub mod data_dirs;
pub mod ensemble;
pub mod limits;
pub mod session_timeout;
pub mod snap_count;
pub mod tick_time;
pub mod trace_file;

pub use client_port::ClientPortRule;
pub use data_dirs::{DataDirRule, DataLogDirRule};
pub use ensemble::{ElectionAlgRule, LeaderServersRule};
pub use limits::{GlobalOutstandingLimitRule, InitLimitRule, MaxClientCnxnsRule, PreAllocSizeRule};
pub use session_timeout::SessionTimeoutRule;
pub use snap_count::SnapCountRule;
pub use tick_time::TickTimeRule;
pub use trace_file::TraceFileRule;

use crate::config::{ConfigValue, ZooCfg};
use crate::lint::RuleOutcome;

/// Read an integer setting, recording an error if it is missing or not an integer.
pub(crate) fn require_int(config: &ZooCfg, key: &str, outcome: &mut RuleOutcome) -> Option<i64> {
    match config.get(key) {
        Ok(ConfigValue::Integer(n)) => Some(*n),
        Ok(other) => {
            outcome.error(format!("`{key}` should be an integer, found '{other}'"));
            None
        }
        Err(_) => {
            outcome.error(format!("`{key}` is missing"));
            None
        }
    }
}

/// Like [`require_int`], additionally rejecting negative values.
pub(crate) fn require_non_negative(
    config: &ZooCfg,
    key: &str,
    outcome: &mut RuleOutcome,
) -> Option<i64> {
    let value = require_int(config, key, outcome)?;
    if value < 0 {
        outcome.error(format!("`{key}` should be a non-negative integer, found {value}"));
        return None;
    }
    Some(value)
}
