//! Tridion 2013 SP1 query adapter and factory
//!
//! The 2013 SP1 broker pages from 1 and expects keyword criteria grouped
//! per category: any keyword of a category matches, all categories must.

use tracing::debug;

use crate::domain::{
    BrokerQuery, CmsVersion, Criteria, QueryAdapter, QueryAdapterFactory, QueryError,
    ResultFilter, VendorQuery,
};
use crate::interfaces::cms::criteria;

// ── Tridion2013Sp1QueryAdapter ─────────────────────────────────

pub struct Tridion2013Sp1QueryAdapter {
    query: BrokerQuery,
}

impl Tridion2013Sp1QueryAdapter {
    pub fn new(query: BrokerQuery) -> Self {
        Self { query }
    }
}

impl QueryAdapter for Tridion2013Sp1QueryAdapter {
    fn query(&self) -> &BrokerQuery {
        &self.query
    }

    fn version(&self) -> CmsVersion {
        CmsVersion::Tridion2013Sp1
    }

    fn to_vendor_query(&self) -> Result<VendorQuery, QueryError> {
        let mut parts = criteria::scope_criteria(&self.query);
        parts.extend(criteria::keywords_by_category(&self.query.keyword_filters));

        let vendor = VendorQuery {
            version: self.version(),
            criteria: Criteria::all(parts),
            sort: criteria::sort(&self.query),
            filter: ResultFilter {
                max_results: self.query.base.max_results,
                paging: criteria::paging(&self.query, true)?,
                one_based: true,
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

// ── Tridion2013Sp1AdapterFactory ───────────────────────────────

#[derive(Debug, Default)]
pub struct Tridion2013Sp1AdapterFactory;

impl QueryAdapterFactory for Tridion2013Sp1AdapterFactory {
    fn create_adapter(&self, query: BrokerQuery) -> Box<dyn QueryAdapter> {
        Box::new(Tridion2013Sp1QueryAdapter::new(query))
    }

    fn version(&self) -> CmsVersion {
        CmsVersion::Tridion2013Sp1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KeywordFilter, Paging, Query};

    #[test]
    fn pages_from_one() {
        let adapter = Tridion2013Sp1QueryAdapter::new(BrokerQuery::new(Query::new(20, 10)));
        let vendor = adapter.to_vendor_query().unwrap();
        assert_eq!(vendor.filter.paging, Some(Paging { first: 21, count: 10 }));
        assert!(vendor.filter.one_based);
        assert_eq!(vendor.filter.offset(), 20);
        assert_eq!(vendor.criteria, None);
    }

    #[test]
    fn start_past_last_position_is_invalid() {
        let adapter = Tridion2013Sp1QueryAdapter::new(BrokerQuery::new(Query::new(u32::MAX, 10)));
        assert!(matches!(adapter.to_vendor_query(), Err(QueryError::Invalid(_))));

        // unpaged queries don't need a one-based position
        let unpaged = Tridion2013Sp1QueryAdapter::new(BrokerQuery::new(Query::new(u32::MAX, 0)));
        assert_eq!(unpaged.to_vendor_query().unwrap().filter.paging, None);
    }

    #[test]
    fn same_category_keywords_are_alternatives() {
        let query = BrokerQuery::new(Query::new(0, 10))
            .with_schema(4)
            .with_keyword(KeywordFilter::new("Topic", "a"))
            .with_keyword(KeywordFilter::new("Topic", "b"));
        let vendor = Tridion2013Sp1QueryAdapter::new(query).to_vendor_query().unwrap();

        let Some(Criteria::And { children }) = vendor.criteria else {
            panic!("expected And criteria");
        };
        assert_eq!(children[0], Criteria::Schema { id: 4 });
        assert!(matches!(&children[1], Criteria::Or { children } if children.len() == 2));
    }

    #[test]
    fn factory_wraps_query() {
        let factory = Tridion2013Sp1AdapterFactory;
        let adapter = factory.create_adapter(BrokerQuery::new(Query::new(5, 5)));
        assert_eq!(adapter.version(), CmsVersion::Tridion2013Sp1);
        assert_eq!(adapter.query().base.start, 5);
    }
}
