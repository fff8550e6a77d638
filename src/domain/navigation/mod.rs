pub mod model;

pub use model::{Breadcrumb, Link, NavigationLinks, SitemapItem, SitemapItemType};
