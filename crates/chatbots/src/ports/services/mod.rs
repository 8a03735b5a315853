//! Service Ports
//!
//! Interfaces for collaborators outside the document store.

mod page_cache;

pub use page_cache::*;
