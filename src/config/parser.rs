//! Line-oriented `key=value` parser.
//!
//! The parser is deliberately tolerant: comments are stripped, blank lines
//! are ignored and lines that do not split into exactly one key and one
//! value are dropped. The only hard failure is a key appearing twice.
//!
//! # Rules
//!
//! - Everything from the first `#` to the end of the line is a comment
//! - A line must contain exactly one `=`; `a=b=c` and `broken-line` are dropped
//! - Key and value are trimmed; an empty key or value is kept as is
//! - Values that read as base-10 integers become integers

use std::collections::HashMap;

use tracing::debug;

use crate::config::value::ConfigValue;
use crate::error::{Result, ZooCfgError};

/// Keys parsed from source text, applied on top of the defaults.
pub type Overlay = HashMap<String, ConfigValue>;

/// Parse source text into an overlay mapping.
///
/// # Errors
///
/// Returns [`ZooCfgError::DuplicateKey`] if a key occurs on two lines.
pub fn parse(text: &str) -> Result<Overlay> {
    let mut overlay = Overlay::new();

    for (index, line) in text.lines().enumerate() {
        let Some((key, value)) = parse_line(line) else {
            continue;
        };

        if overlay.contains_key(key) {
            return Err(ZooCfgError::DuplicateKey {
                key: key.to_string(),
            });
        }

        debug!(line = index + 1, key, "parsed config entry");
        overlay.insert(key.to_string(), value);
    }

    Ok(overlay)
}

/// Parse a single physical line, returning `None` for anything skippable.
fn parse_line(line: &str) -> Option<(&str, ConfigValue)> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    if content.trim().is_empty() {
        return None;
    }

    let parts: Vec<&str> = content.split('=').map(str::trim).collect();
    let [key, value] = parts.as_slice() else {
        debug!(line, "skipping malformed line");
        return None;
    };

    Some((*key, ConfigValue::from_token(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_lines() {
        let overlay = parse("a=23\nb=asd").unwrap();

        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay["a"], ConfigValue::Integer(23));
        assert_eq!(overlay["b"], ConfigValue::from("asd"));
    }

    #[test]
    fn skips_broken_lines() {
        let overlay = parse("broken-line\na=3").unwrap();

        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay["a"], ConfigValue::Integer(3));
    }

    #[test]
    fn drops_values_containing_equals() {
        let overlay = parse("jvmFlags=-Dx=y\na=1").unwrap();

        assert!(!overlay.contains_key("jvmFlags"));
        assert_eq!(overlay["a"], ConfigValue::Integer(1));
    }

    #[test]
    fn full_line_comment_is_dropped() {
        let overlay = parse("#a=5\nb=6").unwrap();

        assert!(!overlay.contains_key("a"));
        assert_eq!(overlay["b"], ConfigValue::Integer(6));
    }

    #[test]
    fn inline_comment_is_stripped() {
        let overlay = parse("a=5 # ignored\nb=6").unwrap();

        assert_eq!(overlay["a"], ConfigValue::Integer(5));
        assert_eq!(overlay["b"], ConfigValue::Integer(6));
    }

    #[test]
    fn comment_hiding_the_equals_drops_line() {
        let overlay = parse("a # =5").unwrap();
        assert!(overlay.is_empty());
    }

    #[test]
    fn trims_whitespace_around_key_and_value() {
        let overlay = parse("  dataDir  =   /var/zookeeper  \r\n").unwrap();
        assert_eq!(overlay["dataDir"], ConfigValue::from("/var/zookeeper"));
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let overlay = parse("\n   \n\t\na=1\n\n").unwrap();
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn empty_key_is_kept() {
        let overlay = parse("=5\na=1").unwrap();
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay[""], ConfigValue::Integer(5));
    }

    #[test]
    fn empty_value_is_kept_as_string() {
        let overlay = parse("traceFile=").unwrap();
        assert_eq!(overlay["traceFile"], ConfigValue::from(""));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let overlay = parse("ticktime=1\ntickTime=2").unwrap();
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn duplicate_key_is_an_error() {
        let err = parse("server.2=a:1:2\nserver.2=b:1:2").unwrap_err();

        assert!(matches!(
            err,
            ZooCfgError::DuplicateKey { ref key } if key == "server.2"
        ));
    }

    #[test]
    fn duplicate_after_comment_strip_is_an_error() {
        let err = parse("a=1\na=2 # again").unwrap_err();
        assert!(matches!(err, ZooCfgError::DuplicateKey { .. }));
    }

    #[test]
    fn empty_input_yields_empty_overlay() {
        assert!(parse("").unwrap().is_empty());
    }
}
