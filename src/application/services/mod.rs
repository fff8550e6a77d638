pub mod content_query;
pub mod navigation;

pub use content_query::ContentQueryService;
pub use navigation::{normalize_url, NavigationBuilder};
