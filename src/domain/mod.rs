pub mod cms;
pub mod content;
pub mod error;
pub mod localization;
pub mod navigation;
pub mod ports;
pub mod query;

// Re-export commonly used types
pub use cms::{CmsVersion, TcmUri};
pub use content::{ComponentMeta, ContentBroker, KeywordRef};
pub use error::{ContentError, ContentResult, QueryError, SerializationError};
pub use localization::Localization;
pub use navigation::{Breadcrumb, Link, NavigationLinks, SitemapItem, SitemapItemType};
pub use ports::{ContentModel, ModelSerializer, QueryAdapter, QueryAdapterFactory};
pub use query::{
    BrokerQuery, Criteria, KeywordFilter, PagedQuery, Paging, Query, ResultFilter, SortColumn,
    SortDirection, SortParameter, VendorQuery, VendorSort,
};
