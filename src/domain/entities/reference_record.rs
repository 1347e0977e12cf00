//! # Reference Record
//!
//! Locally held currency reference data, keyed by currency code.
//!
//! The quote transformer only needs `id -> local_name`; the remaining fields
//! belong to the currency management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a currency code.
pub const MAX_ID_LEN: usize = 10;
/// Maximum length of a localized name.
pub const MAX_LOCAL_NAME_LEN: usize = 50;
/// Maximum length of an English name.
pub const MAX_ENGLISH_NAME_LEN: usize = 100;
/// Maximum length of a currency symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

/// A currency reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    /// Currency code, the record key.
    pub id: String,
    /// Localized display name.
    pub local_name: String,
    /// English name.
    pub english_name: Option<String>,
    /// Currency symbol.
    pub symbol: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl ReferenceRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(id: impl Into<String>, local_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            local_name: local_name.into(),
            english_name: None,
            symbol: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the English name.
    #[must_use]
    pub fn with_english_name(mut self, name: impl Into<String>) -> Self {
        self.english_name = Some(name.into());
        self
    }

    /// Sets the symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Default records seeded at startup.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("EUR", "歐元")
                .with_english_name("Euro")
                .with_symbol("€"),
            Self::new("GBP", "英鎊")
                .with_english_name("British Pound Sterling")
                .with_symbol("£"),
            Self::new("USD", "美元")
                .with_english_name("US Dollar")
                .with_symbol("$"),
        ]
    }
}
