//! Vendor query object
//!
//! The version-specific query representation a content delivery server
//! executes. Adapters build it from a `BrokerQuery`; brokers evaluate it.

use serde::{Deserialize, Serialize};

use crate::domain::cms::CmsVersion;
use crate::domain::query::{SortColumn, SortDirection};

/// Criteria tree of a vendor query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criteria {
    And { children: Vec<Criteria> },
    Or { children: Vec<Criteria> },
    Publication { id: u32 },
    Schema { id: u32 },
    ItemType { item_type: u32 },
    Keyword { category: String, key: String },
}

impl Criteria {
    /// `And` of the given criteria, collapsing trivial cases.
    pub fn all(mut children: Vec<Criteria>) -> Option<Criteria> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Criteria::And { children }),
        }
    }

    /// `Or` of the given criteria, collapsing trivial cases.
    pub fn any(mut children: Vec<Criteria>) -> Option<Criteria> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Criteria::Or { children }),
        }
    }
}

/// Window of results to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Position of the first result, in the server's own base (0 or 1)
    pub first: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilter {
    /// 0 means unlimited
    pub max_results: u32,
    pub paging: Option<Paging>,
    /// Whether `paging.first` counts from 1
    pub one_based: bool,
}

impl ResultFilter {
    /// Zero-based offset of the first result.
    pub fn offset(&self) -> u32 {
        match self.paging {
            Some(p) if self.one_based => p.first.saturating_sub(1),
            Some(p) => p.first,
            None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Query object handed to a content delivery server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorQuery {
    pub version: CmsVersion,
    /// `None` matches everything
    pub criteria: Option<Criteria>,
    pub sort: Option<VendorSort>,
    pub filter: ResultFilter,
}
