//! Content broker implementations

mod memory;

pub use memory::InMemoryBroker;
