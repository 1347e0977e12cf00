//! # Data Transfer Objects
//!
//! Request and response bodies for the currency management endpoints.
//!
//! Request fields are optional at the serde level so that a missing field
//! reaches [`validate`](CreateCurrencyRequest::validate) and is reported in
//! the envelope instead of being rejected by the JSON extractor.

use crate::domain::entities::ReferenceRecord;
use crate::domain::entities::reference_record::{
    MAX_ENGLISH_NAME_LEN, MAX_ID_LEN, MAX_LOCAL_NAME_LEN, MAX_SYMBOL_LEN,
};
use serde::{Deserialize, Serialize};

/// Currency as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDto {
    /// Currency code.
    pub id: String,
    /// Localized name.
    pub local_name: String,
    /// English name.
    pub english_name: Option<String>,
    /// Symbol.
    pub symbol: Option<String>,
}

impl From<ReferenceRecord> for CurrencyDto {
    fn from(record: ReferenceRecord) -> Self {
        Self {
            id: record.id,
            local_name: record.local_name,
            english_name: record.english_name,
            symbol: record.symbol,
        }
    }
}

/// Body of `POST /currencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurrencyRequest {
    /// Currency code.
    pub id: Option<String>,
    /// Localized name.
    pub local_name: Option<String>,
    /// English name.
    pub english_name: Option<String>,
    /// Symbol.
    pub symbol: Option<String>,
}

impl CreateCurrencyRequest {
    /// Checks required fields and length limits.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        check_required(&mut errors, "Id", self.id.as_deref(), MAX_ID_LEN);
        check_required(
            &mut errors,
            "LocalName",
            self.local_name.as_deref(),
            MAX_LOCAL_NAME_LEN,
        );
        check_optional(
            &mut errors,
            "EnglishName",
            self.english_name.as_deref(),
            MAX_ENGLISH_NAME_LEN,
        );
        check_optional(&mut errors, "Symbol", self.symbol.as_deref(), MAX_SYMBOL_LEN);
        finish(errors)
    }

    /// Currency code, or empty if absent.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Converts the request into a new record.
    #[must_use]
    pub fn into_record(self) -> ReferenceRecord {
        ReferenceRecord {
            english_name: self.english_name,
            symbol: self.symbol,
            ..ReferenceRecord::new(self.id.unwrap_or_default(), self.local_name.unwrap_or_default())
        }
    }
}

/// Body of `PUT /currencies/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurrencyRequest {
    /// Localized name.
    pub local_name: Option<String>,
    /// English name.
    pub english_name: Option<String>,
    /// Symbol.
    pub symbol: Option<String>,
}

impl UpdateCurrencyRequest {
    /// Checks required fields and length limits.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        check_required(
            &mut errors,
            "LocalName",
            self.local_name.as_deref(),
            MAX_LOCAL_NAME_LEN,
        );
        check_optional(
            &mut errors,
            "EnglishName",
            self.english_name.as_deref(),
            MAX_ENGLISH_NAME_LEN,
        );
        check_optional(&mut errors, "Symbol", self.symbol.as_deref(), MAX_SYMBOL_LEN);
        finish(errors)
    }

    /// Applies the update to an existing record.
    pub fn apply_to(self, record: &mut ReferenceRecord) {
        record.local_name = self.local_name.unwrap_or_default();
        record.english_name = self.english_name;
        record.symbol = self.symbol;
    }
}

fn check_required(errors: &mut Vec<String>, field: &str, value: Option<&str>, max: usize) {
    match value {
        None => errors.push(format!("The {field} field is required.")),
        Some(v) if v.trim().is_empty() => errors.push(format!("The {field} field is required.")),
        Some(v) => check_optional(errors, field, Some(v), max),
    }
}

fn check_optional(errors: &mut Vec<String>, field: &str, value: Option<&str>, max: usize) {
    if let Some(v) = value
        && v.chars().count() > max
    {
        errors.push(format!(
            "The field {field} must be a string with a maximum length of {max}."
        ));
    }
}

fn finish(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
