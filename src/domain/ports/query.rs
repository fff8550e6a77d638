//! Query adapter ports
//!
//! Each supported CMS version provides an adapter that implements
//! `QueryAdapter` to turn a local `BrokerQuery` into the vendor query
//! object its delivery server understands.

use crate::domain::cms::CmsVersion;
use crate::domain::error::QueryError;
use crate::domain::query::{BrokerQuery, VendorQuery};

// ── QueryAdapter ───────────────────────────────────────────────

/// A local query backed by a version-specific vendor query.
///
/// An adapter is created **per query** and lives until that query has
/// been executed.
pub trait QueryAdapter: Send + Sync {
    /// The local query this adapter wraps.
    fn query(&self) -> &BrokerQuery;

    /// The CMS version this adapter targets.
    fn version(&self) -> CmsVersion;

    /// Materialize the vendor query object for execution.
    fn to_vendor_query(&self) -> Result<VendorQuery, QueryError>;
}

// ── QueryAdapterFactory ────────────────────────────────────────

/// Factory for creating per-query adapters.
///
/// One factory is registered per CMS version; the configured version picks
/// which one serves a query.
pub trait QueryAdapterFactory: Send + Sync {
    /// Wrap a query in an adapter for this factory's version.
    fn create_adapter(&self, query: BrokerQuery) -> Box<dyn QueryAdapter>;

    /// The CMS version this factory creates adapters for.
    fn version(&self) -> CmsVersion;
}
