//! Domain ports (hexagonal architecture boundaries)

pub mod query;
pub mod serializer;

pub use query::{QueryAdapter, QueryAdapterFactory};
pub use serializer::{ContentModel, ModelSerializer};
