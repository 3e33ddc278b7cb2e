//! Configuration parsing and the merged configuration model.
//!
//! This module handles everything up to rule evaluation:
//! - Scalar values in [`value`]
//! - Tolerant `key=value` parsing in [`parser`]
//! - Defaults, overlay merge and derived keys in [`model`]
//! - Ensemble extraction in [`server`]
//! - File reading in [`loader`]
//!
//! # Example
//!
//! ```
//! use zoocfg::config::ZooCfg;
//!
//! let cfg = ZooCfg::parse("tickTime=2000\ndataDir=/var/zookeeper").unwrap();
//! assert_eq!(cfg.get_int("tickTime"), Some(2000));
//! assert_eq!(cfg.get_int("snapCount"), Some(100000));
//! assert_eq!(cfg.get_str("dataLogDir"), Some("/var/zookeeper"));
//! ```

pub mod loader;
pub mod model;
pub mod parser;
pub mod server;
pub mod value;

pub use loader::load_config_file;
pub use model::{defaults, ZooCfg, DATA_DIR, DATA_LOG_DIR};
pub use parser::{parse, Overlay};
pub use server::{server_key_id, Server, MAX_SERVER_ID, MIN_SERVER_ID};
pub use value::ConfigValue;
