//! Content model serializer backends

pub mod backend;
pub mod json;
pub mod xml;

pub use backend::{select_available, SerializerBackend, SerializerFormat};
pub use json::JsonModelSerializer;
pub use xml::XmlModelSerializer;
