//! Interfaces to external systems

pub mod cms;
