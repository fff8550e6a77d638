//! SDL Web 8.5 query adapter and factory
//!
//! Same query shape as Web 8, restricted to component items. The 8.5
//! broker can't sort on custom metadata.

use tracing::debug;

use crate::domain::cms::ITEM_TYPE_COMPONENT;
use crate::domain::{
    BrokerQuery, CmsVersion, Criteria, QueryAdapter, QueryAdapterFactory, QueryError,
    ResultFilter, SortColumn, VendorQuery,
};
use crate::interfaces::cms::criteria;

// ── Web85QueryAdapter ──────────────────────────────────────────

pub struct Web85QueryAdapter {
    query: BrokerQuery,
}

impl Web85QueryAdapter {
    pub fn new(query: BrokerQuery) -> Self {
        Self { query }
    }
}

impl QueryAdapter for Web85QueryAdapter {
    fn query(&self) -> &BrokerQuery {
        &self.query
    }

    fn version(&self) -> CmsVersion {
        CmsVersion::Web85
    }

    fn to_vendor_query(&self) -> Result<VendorQuery, QueryError> {
        let sort = criteria::sort(&self.query);
        if let Some(s) = sort {
            if s.column == SortColumn::DateCreated {
                return Err(QueryError::UnsupportedSort {
                    version: self.version(),
                    column: s.column.as_str(),
                });
            }
        }

        let mut parts = vec![Criteria::ItemType {
            item_type: ITEM_TYPE_COMPONENT,
        }];
        parts.extend(criteria::scope_criteria(&self.query));
        parts.extend(self.query.keyword_filters.iter().map(criteria::keyword));

        let vendor = VendorQuery {
            version: self.version(),
            criteria: Criteria::all(parts),
            sort,
            filter: ResultFilter {
                max_results: self.query.base.max_results,
                paging: criteria::paging(&self.query, false)?,
                one_based: false,
            },
        };
        debug!(
            version = %vendor.version,
            paged = vendor.filter.paging.is_some(),
            "Built vendor query"
        );
        Ok(vendor)
    }
}

// ── Web85AdapterFactory ────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Web85AdapterFactory;

impl QueryAdapterFactory for Web85AdapterFactory {
    fn create_adapter(&self, query: BrokerQuery) -> Box<dyn QueryAdapter> {
        Box::new(Web85QueryAdapter::new(query))
    }

    fn version(&self) -> CmsVersion {
        CmsVersion::Web85
    }
}
