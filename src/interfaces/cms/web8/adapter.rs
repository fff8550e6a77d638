//! SDL Web 8 query adapter and factory
//!
//! Web 8 pages from 0 and requires every keyword filter to match.

use tracing::debug;

use crate::domain::{
    BrokerQuery, CmsVersion, Criteria, QueryAdapter, QueryAdapterFactory, QueryError,
    ResultFilter, VendorQuery,
};
use crate::interfaces::cms::criteria;

// ── Web8QueryAdapter ───────────────────────────────────────────

pub struct Web8QueryAdapter {
    query: BrokerQuery,
}

impl Web8QueryAdapter {
    pub fn new(query: BrokerQuery) -> Self {
        Self { query }
    }
}

impl QueryAdapter for Web8QueryAdapter {
    fn query(&self) -> &BrokerQuery {
        &self.query
    }

    fn version(&self) -> CmsVersion {
        CmsVersion::Web8
    }

    fn to_vendor_query(&self) -> Result<VendorQuery, QueryError> {
        let mut parts = criteria::scope_criteria(&self.query);
        parts.extend(self.query.keyword_filters.iter().map(criteria::keyword));

        let vendor = VendorQuery {
            version: self.version(),
            criteria: Criteria::all(parts),
            sort: criteria::sort(&self.query),
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

// ── Web8AdapterFactory ─────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Web8AdapterFactory;

impl QueryAdapterFactory for Web8AdapterFactory {
    fn create_adapter(&self, query: BrokerQuery) -> Box<dyn QueryAdapter> {
        Box::new(Web8QueryAdapter::new(query))
    }

    fn version(&self) -> CmsVersion {
        CmsVersion::Web8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KeywordFilter, Paging, Query};

    #[test]
    fn pages_from_zero() {
        let vendor = Web8QueryAdapter::new(BrokerQuery::new(Query::new(20, 10)))
            .to_vendor_query()
            .unwrap();
        assert_eq!(vendor.filter.paging, Some(Paging { first: 20, count: 10 }));
        assert_eq!(vendor.filter.offset(), 20);
    }

    #[test]
    fn keywords_must_all_match() {
        let query = BrokerQuery::new(Query::new(0, 10))
            .with_keyword(KeywordFilter::new("Topic", "a"))
            .with_keyword(KeywordFilter::new("Topic", "b"));
        let vendor = Web8QueryAdapter::new(query).to_vendor_query().unwrap();
        assert!(matches!(vendor.criteria, Some(Criteria::And { children }) if children.len() == 2));
    }

    #[test]
    fn zero_page_size_is_unpaged_but_capped() {
        let query = BrokerQuery::new(Query::new(0, 0).with_max_results(50));
        let vendor = Web8QueryAdapter::new(query).to_vendor_query().unwrap();
        assert_eq!(vendor.filter.paging, None);
        assert_eq!(vendor.filter.max_results, 50);
    }
}
