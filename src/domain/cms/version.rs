//! CMS server version
//!
//! Defines the content delivery server versions that have a query adapter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported CMS content delivery versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CmsVersion {
    /// Tridion 2013 SP1
    #[serde(rename = "2013sp1")]
    Tridion2013Sp1,
    /// SDL Web 8
    #[serde(rename = "web8")]
    Web8,
    /// SDL Web 8.5
    #[serde(rename = "web8.5")]
    Web85,
}

impl CmsVersion {
    /// All supported versions, ordered from newest to oldest.
    pub const ALL: &'static [CmsVersion] = &[Self::Web85, Self::Web8, Self::Tridion2013Sp1];

    /// Identifier used in configuration files and on the command line.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Tridion2013Sp1 => "2013sp1",
            Self::Web8 => "web8",
            Self::Web85 => "web8.5",
        }
    }

    /// Parse a version from its identifier (case-insensitive).
    pub fn from_identifier(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.identifier().eq_ignore_ascii_case(s))
    }

    /// Human-readable product name.
    pub fn product_name(&self) -> &'static str {
        match self {
            Self::Tridion2013Sp1 => "Tridion 2013 SP1",
            Self::Web8 => "SDL Web 8",
            Self::Web85 => "SDL Web 8.5",
        }
    }
}

impl fmt::Display for CmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.product_name())
    }
}

impl FromStr for CmsVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| format!("unknown CMS version '{}'", s))
    }
}
