//! Application layer - use cases over the domain ports

pub mod services;

pub use services::{ContentQueryService, NavigationBuilder};
