//! CMS query adapters
//!
//! - `registry`: Version-keyed adapter factory registry
//! - `tridion2013sp1`: Tridion 2013 SP1 adapter
//! - `web8`: SDL Web 8 adapter
//! - `web85`: SDL Web 8.5 adapter

mod criteria;
pub mod registry;
pub mod tridion2013sp1;
pub mod web8;
pub mod web85;

pub use registry::QueryAdapters;
pub use tridion2013sp1::Tridion2013Sp1AdapterFactory;
pub use web8::Web8AdapterFactory;
pub use web85::Web85AdapterFactory;
