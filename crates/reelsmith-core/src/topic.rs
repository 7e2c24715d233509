//! Topic input validation.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A trimmed, non-empty topic string.
///
/// The only way to build one is [`Topic::parse`], so holding a `Topic` means
/// the input already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Trim raw user input and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyTopic);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated topic text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Topic {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let topic = Topic::parse("  the history of tea \n").unwrap();
        assert_eq!(topic.as_str(), "the history of tea");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Topic::parse(""), Err(Error::EmptyTopic));
    }

    #[test]
    fn test_parse_rejects_whitespace_only() {
        for raw in [" ", "\t", "\n\r  ", "\u{3000}"] {
            assert_eq!(Topic::parse(raw), Err(Error::EmptyTopic), "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let topic = Topic::parse("deep  sea").unwrap();
        assert_eq!(topic.to_string(), "deep  sea");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let topic = Topic::parse("cats").unwrap();
        assert_eq!(serde_json::to_string(&topic).unwrap(), "\"cats\"");
    }
}
