//! # In-Memory Reference Store
//!
//! In-memory implementation of [`ReferenceStore`].
//!
//! Records live in a `BTreeMap` keyed by currency code, so `get_all`
//! returns them ascending by id without an extra sort.

use crate::domain::entities::ReferenceRecord;
use crate::infrastructure::persistence::traits::{
    ReferenceStore, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const ENTITY: &str = "Currency";

/// In-memory implementation of [`ReferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceStore {
    storage: Arc<RwLock<BTreeMap<String, ReferenceRecord>>>,
}

impl InMemoryReferenceStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    ///
    /// Later records with a repeated id replace earlier ones.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = ReferenceRecord>) -> Self {
        let storage = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Returns the number of records.
    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ReferenceStore for InMemoryReferenceStore {
    async fn get_all(&self) -> RepositoryResult<Vec<ReferenceRecord>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<ReferenceRecord>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn create(&self, mut record: ReferenceRecord) -> RepositoryResult<ReferenceRecord> {
        let mut storage = self.storage.write().await;
        if storage.contains_key(&record.id) {
            return Err(RepositoryError::duplicate(ENTITY, record.id));
        }

        let now = Utc::now();
        record.created_at = now;
        record.updated_at = now;
        storage.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, mut record: ReferenceRecord) -> RepositoryResult<ReferenceRecord> {
        let mut storage = self.storage.write().await;
        let Some(existing) = storage.get_mut(&record.id) else {
            return Err(RepositoryError::not_found(ENTITY, record.id));
        };

        record.created_at = existing.created_at;
        record.updated_at = Utc::now();
        *existing = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let storage = self.storage.read().await;
        Ok(storage.contains_key(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemoryReferenceStore::new();
        assert!(store.is_empty().await);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let store = InMemoryReferenceStore::with_records([
            ReferenceRecord::new("USD", "美元"),
            ReferenceRecord::new("EUR", "歐元"),
            ReferenceRecord::new("GBP", "英鎊"),
        ]);

        let ids: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["EUR", "GBP", "USD"]);
    }

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemoryReferenceStore::new();
        store
            .create(ReferenceRecord::new("JPY", "日圓"))
            .await
            .unwrap();

        let found = store.get("JPY").await.unwrap().unwrap();
        assert_eq!(found.local_name, "日圓");
        assert!(store.exists("JPY").await.unwrap());
        assert!(store.get("CHF").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_duplicate_fails() {
        let store = InMemoryReferenceStore::with_records(ReferenceRecord::defaults());
        let err = store
            .create(ReferenceRecord::new("USD", "dup"))
            .await
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let store = InMemoryReferenceStore::new();
        let created = store
            .create(ReferenceRecord::new("JPY", "日圓"))
            .await
            .unwrap();

        let mut changed = created.clone();
        changed.local_name = "日元".to_string();
        let updated = store.update(changed).await.unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.get("JPY").await.unwrap().unwrap().local_name, "日元");
    }

    #[tokio::test]
    async fn update_missing_fails() {
        let store = InMemoryReferenceStore::new();
        let err = store
            .update(ReferenceRecord::new("XXX", "none"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete() {
        let store = InMemoryReferenceStore::with_records(ReferenceRecord::defaults());
        assert_eq!(store.len().await, 3);

        assert!(store.delete("GBP").await.unwrap());
        assert!(!store.delete("GBP").await.unwrap());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryReferenceStore::new();
        let other = store.clone();
        store
            .create(ReferenceRecord::new("JPY", "日圓"))
            .await
            .unwrap();
        assert!(other.exists("JPY").await.unwrap());
    }
}
