//! Scalar configuration values.

use serde::Serialize;
use std::fmt;

/// A single parsed configuration value.
///
/// Values that read as a base-10 integer become [`ConfigValue::Integer`];
/// everything else (paths, comma lists, `yes`/`no` flags) stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Integer(i64),
    String(String),
}

impl ConfigValue {
    /// Interpret a trimmed token, preferring an integer reading.
    pub fn from_token(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::String(token.to_string()),
        }
    }

    /// Get as an integer if this is an Integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::String(_) => None,
        }
    }

    /// Get as a string slice if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(s) => Some(s),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
