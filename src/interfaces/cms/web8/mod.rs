//! SDL Web 8 adapter

pub mod adapter;

pub use adapter::{Web8AdapterFactory, Web8QueryAdapter};
