//! Content query service
//!
//! Runs broker queries through the adapter of the configured CMS version
//! and executes the resulting vendor query against the content broker.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use crate::config::DeliveryConfig;
use crate::domain::{BrokerQuery, CmsVersion, ComponentMeta, ContentBroker, VendorQuery};
use crate::interfaces::cms::QueryAdapters;
use crate::shared::{AppResult, PaginatedResult};

pub struct ContentQueryService {
    adapters: Arc<QueryAdapters>,
    broker: Arc<dyn ContentBroker>,
    version: CmsVersion,
    default_page_size: u32,
    max_results: u32,
    publication_id: Option<u32>,
}

impl ContentQueryService {
    pub fn new(
        adapters: Arc<QueryAdapters>,
        broker: Arc<dyn ContentBroker>,
        config: &DeliveryConfig,
    ) -> Self {
        Self {
            adapters,
            broker,
            version: config.cms_version,
            default_page_size: config.default_page_size,
            max_results: config.max_results,
            publication_id: config.publication_id,
        }
    }

    pub fn version(&self) -> CmsVersion {
        self.version
    }

    /// Fill in configured defaults the query leaves unset.
    fn apply_defaults(&self, mut query: BrokerQuery) -> BrokerQuery {
        if query.base.page_size == 0 {
            query.base.page_size = self.default_page_size;
        }
        if self.max_results > 0
            && (query.base.max_results == 0 || query.base.max_results > self.max_results)
        {
            query.base.max_results = self.max_results;
        }
        if query.effective_publication().is_none() {
            query.publication_id = self.publication_id;
        }
        query
    }

    /// Materialize the vendor query without executing it.
    pub fn prepare(&self, query: BrokerQuery) -> AppResult<VendorQuery> {
        let query = self.apply_defaults(query);
        let adapter = self.adapters.adapter_for(self.version, query)?;
        let vendor = adapter.to_vendor_query().map_err(|e| {
            warn!(version = %self.version, error = %e, "Failed to build vendor query");
            e
        })?;
        debug!(version = %self.version, ?vendor, "Prepared vendor query");
        Ok(vendor)
    }

    /// Execute one query and return the requested page.
    pub async fn execute(&self, query: BrokerQuery) -> AppResult<PaginatedResult<ComponentMeta>> {
        let vendor = self.prepare(query)?;
        let page = self.broker.execute(&vendor).await?;
        info!(
            version = %self.version,
            total = page.total,
            page = page.current_page,
            returned = page.items.len(),
            "Query executed"
        );
        Ok(page)
    }

    /// Execute several queries concurrently; fails on the first error.
    pub async fn execute_many(
        &self,
        queries: Vec<BrokerQuery>,
    ) -> AppResult<Vec<PaginatedResult<ComponentMeta>>> {
        try_join_all(queries.into_iter().map(|q| self.execute(q))).await
    }
}
