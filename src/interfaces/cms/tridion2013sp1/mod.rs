//! Tridion 2013 SP1 adapter

pub mod adapter;

pub use adapter::{Tridion2013Sp1AdapterFactory, Tridion2013Sp1QueryAdapter};
