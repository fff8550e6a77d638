//! TCM URI identifiers
//!
//! Every CMS item is addressed as `tcm:{publication}-{item}[-{type}]`.
//! The type segment is omitted for components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::ContentError;

/// Item type of a component
pub const ITEM_TYPE_COMPONENT: u32 = 16;
/// Item type of a page
pub const ITEM_TYPE_PAGE: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TcmUri {
    pub publication_id: u32,
    pub item_id: u32,
    pub item_type: u32,
}

impl TcmUri {
    pub fn new(publication_id: u32, item_id: u32, item_type: u32) -> Self {
        Self {
            publication_id,
            item_id,
            item_type,
        }
    }

    pub fn component(publication_id: u32, item_id: u32) -> Self {
        Self::new(publication_id, item_id, ITEM_TYPE_COMPONENT)
    }

    pub fn is_component(&self) -> bool {
        self.item_type == ITEM_TYPE_COMPONENT
    }
}

impl fmt::Display for TcmUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_component() {
            write!(f, "tcm:{}-{}", self.publication_id, self.item_id)
        } else {
            write!(
                f,
                "tcm:{}-{}-{}",
                self.publication_id, self.item_id, self.item_type
            )
        }
    }
}

impl FromStr for TcmUri {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ContentError::InvalidUri(s.to_string());

        let rest = s.trim().strip_prefix("tcm:").ok_or_else(invalid)?;
        let parts: Vec<&str> = rest.split('-').collect();
        let number = |p: &str| p.parse::<u32>().map_err(|_| invalid());

        match parts.as_slice() {
            [publication, item] => Ok(Self::component(number(publication)?, number(item)?)),
            [publication, item, item_type] => Ok(Self::new(
                number(publication)?,
                number(item)?,
                number(item_type)?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for TcmUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TcmUri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_component_uri() {
        let uri: TcmUri = "tcm:5-123".parse().unwrap();
        assert_eq!(uri, TcmUri::component(5, 123));
        assert!(uri.is_component());
    }

    #[test]
    fn parses_typed_uri() {
        let uri: TcmUri = "tcm:5-77-64".parse().unwrap();
        assert_eq!(uri.item_type, ITEM_TYPE_PAGE);
        assert_eq!(uri.to_string(), "tcm:5-77-64");
    }

    #[test]
    fn component_type_is_omitted_on_display() {
        let uri: TcmUri = "tcm:1-2-16".parse().unwrap();
        assert_eq!(uri.to_string(), "tcm:1-2");
    }

    #[test]
    fn rejects_malformed_uris() {
        for raw in ["", "tcm:", "tcm:5", "tcm:a-1", "5-1", "tcm:1-2-3-4", "tcm:-1-2"] {
            assert_eq!(
                raw.parse::<TcmUri>(),
                Err(ContentError::InvalidUri(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&TcmUri::component(3, 9)).unwrap();
        assert_eq!(json, "\"tcm:3-9\"");
        let back: TcmUri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TcmUri::component(3, 9));
    }
}
