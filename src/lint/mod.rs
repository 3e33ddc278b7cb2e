//! Configuration validation.
//!
//! This module validates a merged [`ZooCfg`](crate::config::ZooCfg)
//! through a fixed catalog of independent rules.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`Rule`] trait)
//! - **Registry** - The ordered rule catalog and its runner ([`RuleRegistry`])
//! - **Result** - Aggregated warnings and errors ([`RuleResult`])
//! - **Output** - Human and JSON renderers ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use zoocfg::config::ZooCfg;
//! use zoocfg::lint::RuleRegistry;
//!
//! let config = ZooCfg::parse("clientPort=2181\ndataDir=/var/zookeeper").unwrap();
//! let result = RuleRegistry::with_builtins().check_all(&config);
//!
//! // tickTime and initLimit have no defaults
//! assert!(result.has_errors());
//! // dataLogDir was derived from dataDir
//! assert!(result.has_warnings());
//! ```

pub mod output;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;

pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use result::RuleResult;
pub use rule::{Rule, RuleId, RuleOutcome};
pub use rules::{
    ClientPortRule, DataDirRule, DataLogDirRule, ElectionAlgRule, GlobalOutstandingLimitRule,
    InitLimitRule, LeaderServersRule, MaxClientCnxnsRule, PreAllocSizeRule, SessionTimeoutRule,
    SnapCountRule, TickTimeRule, TraceFileRule,
};
