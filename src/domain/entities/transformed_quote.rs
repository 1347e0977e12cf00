//! # Transformed Quote
//!
//! The localized report built from an [`ExternalQuote`](super::quote::ExternalQuote).

use serde::{Deserialize, Serialize};

/// Output format of [`TransformedQuote::update_time`], always UTC.
pub const UPDATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One currency line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyLine {
    /// ISO currency code.
    pub code: String,
    /// Localized currency name, or the source description when no
    /// reference record exists.
    pub local_name: String,
    /// Formatted rate as published by the source.
    #[serde(rename = "rate")]
    pub rate_text: String,
}

/// Localized, code-sorted quote report.
///
/// # Invariants
///
/// - `currencies` is sorted ascending by `code`
/// - `update_time` is formatted with [`UPDATE_TIME_FORMAT`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedQuote {
    /// Update time of the underlying quote, in UTC.
    pub update_time: String,
    /// Currency lines, ascending by code.
    pub currencies: Vec<CurrencyLine>,
}

impl TransformedQuote {
    /// Returns true if the currency lines are strictly ascending by code.
    #[must_use]
    pub fn is_sorted_by_code(&self) -> bool {
        self.currencies
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.code < b.code))
    }
}
