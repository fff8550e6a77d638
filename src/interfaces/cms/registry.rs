//! Query adapter registry
//!
//! Maps CMS versions to adapter factories. The configured version picks
//! the factory that wraps each query.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::{Tridion2013Sp1AdapterFactory, Web85AdapterFactory, Web8AdapterFactory};
use crate::domain::{BrokerQuery, CmsVersion, QueryAdapter, QueryAdapterFactory, QueryError};

pub struct QueryAdapters {
    factories: HashMap<CmsVersion, Arc<dyn QueryAdapterFactory>>,
}

impl QueryAdapters {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with an adapter for every built-in CMS version.
    pub fn with_defaults() -> Self {
        let mut adapters = Self::new();
        adapters.register(Arc::new(Tridion2013Sp1AdapterFactory));
        adapters.register(Arc::new(Web8AdapterFactory));
        adapters.register(Arc::new(Web85AdapterFactory));
        adapters
    }

    /// Register a factory under the version it reports.
    pub fn register(&mut self, factory: Arc<dyn QueryAdapterFactory>) {
        let version = factory.version();
        info!(%version, "Registered query adapter");
        self.factories.insert(version, factory);
    }

    /// Wrap a query in the adapter for the given version.
    pub fn adapter_for(
        &self,
        version: CmsVersion,
        query: BrokerQuery,
    ) -> Result<Box<dyn QueryAdapter>, QueryError> {
        let factory = self
            .factories
            .get(&version)
            .ok_or(QueryError::UnsupportedVersion(version))?;
        debug!(%version, "Creating query adapter");
        Ok(factory.create_adapter(query))
    }

    pub fn supports(&self, version: CmsVersion) -> bool {
        self.factories.contains_key(&version)
    }

    /// Registered versions, newest first.
    pub fn supported_versions(&self) -> Vec<CmsVersion> {
        CmsVersion::ALL
            .iter()
            .copied()
            .filter(|v| self.supports(*v))
            .collect()
    }
}

impl Default for QueryAdapters {
    fn default() -> Self {
        Self::new()
    }
}
