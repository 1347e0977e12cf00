//! # Quote Service
//!
//! Orchestrates fetch, reference lookup and transformation.

use crate::application::error::ServiceResult;
use crate::application::services::quote_transformer::transform;
use crate::domain::entities::{ExternalQuote, TransformedQuote};
use crate::infrastructure::persistence::ReferenceStore;
use crate::infrastructure::quote_source::QuoteSource;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{Span, error, info};

/// Serves the original and transformed quote reports.
#[derive(Debug, Clone)]
pub struct QuoteService {
    source: Arc<dyn QuoteSource>,
    store: Arc<dyn ReferenceStore>,
    span: Span,
}

impl QuoteService {
    /// Creates a new QuoteService logging under `span`.
    #[must_use]
    pub fn new(source: Arc<dyn QuoteSource>, store: Arc<dyn ReferenceStore>, span: Span) -> Self {
        Self {
            source,
            store,
            span,
        }
    }

    /// Returns the quote exactly as fetched (or the fallback snapshot).
    pub async fn original_quote(&self) -> ExternalQuote {
        self.source.fetch_quote().await
    }

    /// Fetches the quote and localizes it against the reference store.
    ///
    /// # Errors
    ///
    /// Returns the store failure converted to a `ServiceError` (`Internal`
    /// for an unavailable store). Fetch failures never surface here.
    pub async fn transformed_quote(&self) -> ServiceResult<TransformedQuote> {
        let quote = self.source.fetch_quote().await;

        let records = self.store.get_all().await.inspect_err(|e| {
            error!(parent: &self.span, error = %e, "failed to load reference records");
        })?;
        let reference: HashMap<String, String> = records
            .into_iter()
            .map(|record| (record.id, record.local_name))
            .collect();

        let report = transform(&quote, &reference);
        info!(
            parent: &self.span,
            currencies = report.currencies.len(),
            update_time = %report.update_time,
            "quote transformed"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::error::ServiceError;
    use crate::domain::entities::ReferenceRecord;
    use crate::infrastructure::persistence::{InMemoryReferenceStore, RepositoryError, RepositoryResult};
    use crate::infrastructure::quote_source::fallback_snapshot;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct FixedSource;

    #[async_trait]
    impl QuoteSource for FixedSource {
        async fn fetch_quote(&self) -> ExternalQuote {
            fallback_snapshot()
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl ReferenceStore for BrokenStore {
        async fn get_all(&self) -> RepositoryResult<Vec<ReferenceRecord>> {
            Err(RepositoryError::internal("store offline"))
        }
        async fn get(&self, _id: &str) -> RepositoryResult<Option<ReferenceRecord>> {
            Err(RepositoryError::internal("store offline"))
        }
        async fn create(&self, _record: ReferenceRecord) -> RepositoryResult<ReferenceRecord> {
            Err(RepositoryError::internal("store offline"))
        }
        async fn update(&self, _record: ReferenceRecord) -> RepositoryResult<ReferenceRecord> {
            Err(RepositoryError::internal("store offline"))
        }
        async fn delete(&self, _id: &str) -> RepositoryResult<bool> {
            Err(RepositoryError::internal("store offline"))
        }
        async fn exists(&self, _id: &str) -> RepositoryResult<bool> {
            Err(RepositoryError::internal("store offline"))
        }
    }

    fn service(store: Arc<dyn ReferenceStore>) -> QuoteService {
        QuoteService::new(Arc::new(FixedSource), store, Span::none())
    }

    #[tokio::test]
    async fn original_is_source_output() {
        let svc = service(Arc::new(InMemoryReferenceStore::new()));
        assert_eq!(svc.original_quote().await, fallback_snapshot());
    }

    #[tokio::test]
    async fn transformed_joins_reference_data() {
        let store = InMemoryReferenceStore::with_records([ReferenceRecord::new("USD", "美元")]);
        let report = service(Arc::new(store)).transformed_quote().await.unwrap();

        assert_eq!(report.update_time, "2022/08/03 20:25:00");
        let codes: Vec<_> = report.currencies.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["EUR", "GBP", "USD"]);
        assert_eq!(report.currencies[0].local_name, "Euro");
        assert_eq!(report.currencies[2].local_name, "美元");
    }

    #[tokio::test]
    async fn store_failure_is_internal() {
        let err = service(Arc::new(BrokenStore)).transformed_quote().await.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
        assert!(err.to_string().contains("store offline"));
    }
}
