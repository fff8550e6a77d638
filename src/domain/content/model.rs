//! Component metadata entity

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cms::TcmUri;
use crate::domain::ports::ContentModel;
use crate::domain::query::{Criteria, SortColumn, SortDirection, VendorSort};

/// Keyword a component is classified with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRef {
    pub category: String,
    pub key: String,
}

impl KeywordRef {
    pub fn new(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            key: key.into(),
        }
    }
}

/// Published component as indexed by the content broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub id: TcmUri,
    pub title: String,
    pub schema_id: u32,
    #[serde(default)]
    pub keywords: Vec<KeywordRef>,
    pub last_published_date: DateTime<Utc>,
    /// Custom metadata fields (e.g. `dateCreated`, `author`)
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl ContentModel for ComponentMeta {}

impl ComponentMeta {
    pub fn new(id: TcmUri, title: impl Into<String>, schema_id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            schema_id,
            keywords: Vec::new(),
            last_published_date: Utc::now(),
            custom: BTreeMap::new(),
        }
    }

    pub fn with_keyword(mut self, category: &str, key: &str) -> Self {
        self.keywords.push(KeywordRef::new(category, key));
        self
    }

    pub fn with_custom(mut self, field: &str, value: impl Into<String>) -> Self {
        self.custom.insert(field.to_string(), value.into());
        self
    }

    pub fn published_at(mut self, date: DateTime<Utc>) -> Self {
        self.last_published_date = date;
        self
    }

    /// Evaluate a criteria tree against this component.
    pub fn matches(&self, criteria: &Criteria) -> bool {
        match criteria {
            Criteria::And { children } => children.iter().all(|c| self.matches(c)),
            Criteria::Or { children } => children.iter().any(|c| self.matches(c)),
            Criteria::Publication { id } => self.id.publication_id == *id,
            Criteria::Schema { id } => self.schema_id == *id,
            Criteria::ItemType { item_type } => self.id.item_type == *item_type,
            Criteria::Keyword { category, key } => self
                .keywords
                .iter()
                .any(|k| k.category == *category && k.key == *key),
        }
    }

    /// Ordering of two components under a sort parameter.
    ///
    /// Ties fall back to the item ID so results are deterministic.
    pub fn compare(&self, other: &Self, sort: &VendorSort) -> Ordering {
        let ordering = match sort.column {
            SortColumn::Title => self.title.cmp(&other.title),
            SortColumn::LastPublishedDate => self.last_published_date.cmp(&other.last_published_date),
            SortColumn::ItemId => self.id.item_id.cmp(&other.id.item_id),
            SortColumn::DateCreated => self.custom.get("dateCreated").cmp(&other.custom.get("dateCreated")),
        }
        .then_with(|| self.id.cmp(&other.id));

        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> ComponentMeta {
        ComponentMeta::new(TcmUri::component(5, 100), "Article", 12)
            .with_keyword("Topics", "rust")
            .with_keyword("Region", "emea")
    }

    #[test]
    fn matches_leaf_criteria() {
        let c = article();
        assert!(c.matches(&Criteria::Schema { id: 12 }));
        assert!(!c.matches(&Criteria::Schema { id: 13 }));
        assert!(c.matches(&Criteria::Publication { id: 5 }));
        assert!(c.matches(&Criteria::ItemType { item_type: 16 }));
        assert!(c.matches(&Criteria::Keyword {
            category: "Topics".into(),
            key: "rust".into()
        }));
        // key alone is not enough, the category must match too
        assert!(!c.matches(&Criteria::Keyword {
            category: "Region".into(),
            key: "rust".into()
        }));
    }

    #[test]
    fn matches_composite_criteria() {
        let c = article();
        let and = Criteria::And {
            children: vec![Criteria::Schema { id: 12 }, Criteria::Publication { id: 6 }],
        };
        let or = Criteria::Or {
            children: vec![Criteria::Schema { id: 99 }, Criteria::Publication { id: 5 }],
        };
        assert!(!c.matches(&and));
        assert!(c.matches(&or));
    }

    #[test]
    fn compare_descending_reverses() {
        let a = ComponentMeta::new(TcmUri::component(1, 1), "Alpha", 1);
        let b = ComponentMeta::new(TcmUri::component(1, 2), "Beta", 1);
        let asc = VendorSort { column: SortColumn::Title, direction: SortDirection::Ascending };
        let desc = VendorSort { column: SortColumn::Title, direction: SortDirection::Descending };
        assert_eq!(a.compare(&b, &asc), Ordering::Less);
        assert_eq!(a.compare(&b, &desc), Ordering::Greater);
    }

    #[test]
    fn compare_ties_break_on_id() {
        let a = ComponentMeta::new(TcmUri::component(1, 1), "Same", 1);
        let b = ComponentMeta::new(TcmUri::component(1, 2), "Same", 1);
        let sort = VendorSort { column: SortColumn::Title, direction: SortDirection::Ascending };
        assert_eq!(a.compare(&b, &sort), Ordering::Less);
    }
}
