//! zoocfg - ZooKeeper config parser and validator.
//!
//! zoocfg reads a `zoo.cfg`-style `key=value` file, layers it over the
//! built-in defaults, derives implicit keys and runs a fixed catalog of
//! rules that each report warnings and errors independently.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Parsing, defaults and the merged configuration model
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Validation rules, the rule registry and output formatters
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```
//! use zoocfg::config::ZooCfg;
//! use zoocfg::lint::RuleRegistry;
//!
//! let config = ZooCfg::parse(
//!     "tickTime=2000\nclientPort=2181\ninitLimit=5\ndataDir=/var/zk/data\ndataLogDir=/var/zk/log",
//! )
//! .unwrap();
//!
//! let result = RuleRegistry::with_builtins().check_all(&config);
//! assert!(!result.has_errors());
//! assert!(!result.has_warnings());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod ui;

pub use error::{Result, ZooCfgError};
