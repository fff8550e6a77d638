pub mod model;
pub mod repository;

pub use model::{ComponentMeta, KeywordRef};
pub use repository::ContentBroker;
