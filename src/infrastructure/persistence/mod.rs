//! # Persistence Layer
//!
//! Reference store port and its in-memory implementation.
//!
//! - [`ReferenceStore`]: currency reference data, keyed by code
//! - `in_memory`: [`InMemoryReferenceStore`]

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryReferenceStore;
pub use traits::{ReferenceStore, RepositoryError, RepositoryResult};
