//! # In-Memory Repositories
//!
//! In-memory implementations without database dependencies.
//!
//! ## Thread Safety
//!
//! Storage is an `Arc<RwLock<BTreeMap>>`, so clones share state.

pub mod reference_store;

pub use reference_store::InMemoryReferenceStore;
