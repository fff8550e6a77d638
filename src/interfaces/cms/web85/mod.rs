//! SDL Web 8.5 adapter

pub mod adapter;

pub use adapter::{Web85AdapterFactory, Web85QueryAdapter};
