//! Query domain models
//!
//! `Query` holds the locale context and pagination knobs shared by every
//! query kind. It has no execution behaviour of its own: concrete queries
//! embed it and expose it through [`PagedQuery`].

use serde::{Deserialize, Serialize};

use crate::domain::error::QueryError;
use crate::domain::localization::Localization;

/// Pagination state and locale context of a query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Localization scoping the query
    pub localization: Option<Localization>,
    /// Maximum number of results; 0 means unlimited
    pub max_results: u32,
    /// Offset of the first result
    pub start: u32,
    /// Number of results per page
    pub page_size: u32,
}

impl Query {
    pub fn new(start: u32, page_size: u32) -> Self {
        Self {
            start,
            page_size,
            ..Self::default()
        }
    }

    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = Some(localization);
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// 1-based page the start offset falls on (truncating division).
    ///
    /// Saturates at `u32::MAX` for a page size of one at the maximum offset.
    pub fn current_page(&self) -> Result<u32, QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok((self.start / self.page_size).saturating_add(1))
    }
}

/// A query kind that carries pagination state.
pub trait PagedQuery {
    fn pagination(&self) -> &Query;

    fn pagination_mut(&mut self) -> &mut Query;

    fn current_page(&self) -> Result<u32, QueryError> {
        self.pagination().current_page()
    }
}

impl PagedQuery for Query {
    fn pagination(&self) -> &Query {
        self
    }

    fn pagination_mut(&mut self) -> &mut Query {
        self
    }
}

/// Restricts results to items tagged with a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFilter {
    /// Category (taxonomy) name
    pub category: String,
    /// Keyword key within the category
    pub key: String,
}

impl KeywordFilter {
    pub fn new(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Title,
    LastPublishedDate,
    ItemId,
    /// Custom metadata field `dateCreated`
    DateCreated,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::LastPublishedDate => "last_published_date",
            Self::ItemId => "item_id",
            Self::DateCreated => "date_created",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParameter {
    pub column: SortColumn,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Component query against the content broker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerQuery {
    #[serde(flatten)]
    pub base: Query,
    /// Publication to search; falls back to the localization's publication
    pub publication_id: Option<u32>,
    pub schema_id: Option<u32>,
    #[serde(default)]
    pub keyword_filters: Vec<KeywordFilter>,
    pub sort: Option<SortParameter>,
}

impl BrokerQuery {
    pub fn new(base: Query) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn with_schema(mut self, schema_id: u32) -> Self {
        self.schema_id = Some(schema_id);
        self
    }

    pub fn with_publication(mut self, publication_id: u32) -> Self {
        self.publication_id = Some(publication_id);
        self
    }

    pub fn with_keyword(mut self, filter: KeywordFilter) -> Self {
        self.keyword_filters.push(filter);
        self
    }

    pub fn sorted_by(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort = Some(SortParameter { column, direction });
        self
    }

    /// Publication the query targets: explicit ID first, then localization.
    pub fn effective_publication(&self) -> Option<u32> {
        self.publication_id.or_else(|| {
            self.base
                .localization
                .as_ref()
                .map(|l| l.publication_id)
        })
    }
}

impl PagedQuery for BrokerQuery {
    fn pagination(&self) -> &Query {
        &self.base
    }

    fn pagination_mut(&mut self) -> &mut Query {
        &mut self.base
    }
}
