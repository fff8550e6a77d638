//! # Content Delivery
//!
//! Delivery-side integration layer for a component-based CMS: pageable
//! broker queries, per-server-version query adapters, content model
//! serialization and navigation (breadcrumb / link lists).
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, query types and port traits
//! - **application**: Use cases (query execution, navigation building)
//! - **infrastructure**: In-memory content broker, serializer backends
//! - **interfaces**: CMS-version-specific query adapters and their registry
//! - **shared**: Cross-cutting types (paging results, application errors)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod runtime;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export the pieces most callers need
pub use application::services::{ContentQueryService, NavigationBuilder};
pub use domain::{
    Breadcrumb, BrokerQuery, CmsVersion, ContentModel, Link, ModelSerializer, NavigationLinks,
    PagedQuery, Query, QueryError, SerializationError,
};
pub use infrastructure::{InMemoryBroker, SerializerBackend};
pub use interfaces::cms::QueryAdapters;
pub use runtime::{init_tracing, DeliveryRuntime};
pub use shared::{AppError, AppResult, PaginatedResult};
