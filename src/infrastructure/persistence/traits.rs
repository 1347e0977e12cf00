//! # Repository Traits
//!
//! Port definition for the currency reference store.
//!
//! The quote transformer consumes only [`ReferenceStore::get_all`]; the
//! remaining operations back the currency management endpoints.
//!
//! # Examples
//!
//! ```ignore
//! use quote_relay::infrastructure::persistence::traits::ReferenceStore;
//!
//! async fn local_names(store: &impl ReferenceStore) {
//!     let records = store.get_all().await?;
//!     println!("Loaded {} reference records", records.len());
//! }
//! ```

use crate::domain::entities::ReferenceRecord;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Store of currency reference records keyed by currency code.
#[async_trait]
pub trait ReferenceStore: Send + Sync + fmt::Debug {
    /// Returns every record, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend fails.
    async fn get_all(&self) -> RepositoryResult<Vec<ReferenceRecord>>;

    /// Gets a record by id. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend fails.
    async fn get(&self, id: &str) -> RepositoryResult<Option<ReferenceRecord>>;

    /// Inserts a new record, stamping its timestamps.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the id is taken.
    async fn create(&self, record: ReferenceRecord) -> RepositoryResult<ReferenceRecord>;

    /// Replaces an existing record, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id does not exist.
    async fn update(&self, record: ReferenceRecord) -> RepositoryResult<ReferenceRecord>;

    /// Deletes a record. Returns false if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend fails.
    async fn delete(&self, id: &str) -> RepositoryResult<bool>;

    /// Returns true if a record with this id exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend fails.
    async fn exists(&self, id: &str) -> RepositoryResult<bool>;
}
