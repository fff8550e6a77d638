//! Localization context
//!
//! A localization scopes queries to one publication (site + language).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    /// Publication ID backing this localization
    pub publication_id: u32,
    /// Base path of the site, e.g. `/` or `/fr`
    pub path: String,
    /// Culture name, e.g. `en-US`
    pub culture: String,
}

impl Localization {
    pub fn new(publication_id: u32, path: impl Into<String>, culture: impl Into<String>) -> Self {
        Self {
            publication_id,
            path: path.into(),
            culture: culture.into(),
        }
    }

    /// Language part of the culture (`en` for `en-US`).
    pub fn language(&self) -> &str {
        self.culture.split('-').next().unwrap_or(&self.culture)
    }
}
