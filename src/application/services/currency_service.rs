//! # Currency Service
//!
//! CRUD operations over the reference store.
//!
//! Every operation returns a [`ResponseEnvelope`]; store failures and
//! domain misses (unknown id, duplicate id) are logged and reported in the
//! envelope rather than returned as errors. Input validation happens in the
//! handler before these methods are called.

use crate::application::dto::{CreateCurrencyRequest, CurrencyDto, UpdateCurrencyRequest};
use crate::application::envelope::ResponseEnvelope;
use crate::infrastructure::persistence::ReferenceStore;
use std::sync::Arc;
use tracing::{Span, error, info};

/// Currency management service.
#[derive(Debug, Clone)]
pub struct CurrencyService {
    store: Arc<dyn ReferenceStore>,
    span: Span,
}

impl CurrencyService {
    /// Creates a new CurrencyService logging under `span`.
    #[must_use]
    pub fn new(store: Arc<dyn ReferenceStore>, span: Span) -> Self {
        Self { store, span }
    }

    /// Lists all currencies ordered by code.
    pub async fn get_all(&self) -> ResponseEnvelope<Vec<CurrencyDto>> {
        info!(parent: &self.span, "getting all currencies");
        match self.store.get_all().await {
            Ok(records) => ResponseEnvelope::success(
                records.into_iter().map(CurrencyDto::from).collect(),
                "Currencies retrieved successfully",
            ),
            Err(e) => {
                error!(parent: &self.span, error = %e, "error getting all currencies");
                ResponseEnvelope::error_message("Failed to retrieve currencies")
            }
        }
    }

    /// Gets a single currency.
    pub async fn get(&self, id: &str) -> ResponseEnvelope<CurrencyDto> {
        info!(parent: &self.span, currency_id = id, "getting currency");
        match self.store.get(id).await {
            Ok(Some(record)) => {
                ResponseEnvelope::success(record.into(), "Currency retrieved successfully")
            }
            Ok(None) => not_found(id),
            Err(e) => {
                error!(parent: &self.span, currency_id = id, error = %e, "error getting currency");
                ResponseEnvelope::error_message("Failed to retrieve currency")
            }
        }
    }

    /// Creates a currency. Fails if the code already exists.
    pub async fn create(&self, request: CreateCurrencyRequest) -> ResponseEnvelope<CurrencyDto> {
        let id = request.id().to_string();
        info!(parent: &self.span, currency_id = %id, "creating currency");

        match self.store.exists(&id).await {
            Ok(true) => {
                return ResponseEnvelope::error_message(format!(
                    "Currency with ID '{id}' already exists"
                ));
            }
            Ok(false) => {}
            Err(e) => {
                error!(parent: &self.span, currency_id = %id, error = %e, "error creating currency");
                return ResponseEnvelope::error_message("Failed to create currency");
            }
        }

        match self.store.create(request.into_record()).await {
            Ok(record) => ResponseEnvelope::success(record.into(), "Currency created successfully"),
            Err(e) if e.is_duplicate() => {
                ResponseEnvelope::error_message(format!("Currency with ID '{id}' already exists"))
            }
            Err(e) => {
                error!(parent: &self.span, currency_id = %id, error = %e, "error creating currency");
                ResponseEnvelope::error_message("Failed to create currency")
            }
        }
    }

    /// Updates an existing currency.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateCurrencyRequest,
    ) -> ResponseEnvelope<CurrencyDto> {
        info!(parent: &self.span, currency_id = id, "updating currency");

        let mut record = match self.store.get(id).await {
            Ok(Some(record)) => record,
            Ok(None) => return not_found(id),
            Err(e) => {
                error!(parent: &self.span, currency_id = id, error = %e, "error updating currency");
                return ResponseEnvelope::error_message("Failed to update currency");
            }
        };

        request.apply_to(&mut record);
        match self.store.update(record).await {
            Ok(record) => ResponseEnvelope::success(record.into(), "Currency updated successfully"),
            Err(e) if e.is_not_found() => not_found(id),
            Err(e) => {
                error!(parent: &self.span, currency_id = id, error = %e, "error updating currency");
                ResponseEnvelope::error_message("Failed to update currency")
            }
        }
    }

    /// Deletes a currency.
    pub async fn delete(&self, id: &str) -> ResponseEnvelope<bool> {
        info!(parent: &self.span, currency_id = id, "deleting currency");
        match self.store.delete(id).await {
            Ok(true) => ResponseEnvelope::success(true, "Currency deleted successfully"),
            Ok(false) => not_found(id),
            Err(e) => {
                error!(parent: &self.span, currency_id = id, error = %e, "error deleting currency");
                ResponseEnvelope::error_message("Failed to delete currency")
            }
        }
    }
}

fn not_found<T>(id: &str) -> ResponseEnvelope<T> {
    ResponseEnvelope::error_message(format!("Currency with ID '{id}' not found"))
}
