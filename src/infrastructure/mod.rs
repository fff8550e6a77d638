//! Infrastructure layer - external concerns

pub mod serialization;
pub mod storage;

pub use serialization::{
    select_available, JsonModelSerializer, SerializerBackend, SerializerFormat,
    XmlModelSerializer,
};
pub use storage::InMemoryBroker;
