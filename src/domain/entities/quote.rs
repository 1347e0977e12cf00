//! # External Quote Entity
//!
//! The price snapshot published by the quote source.
//!
//! [`ExternalQuote`] mirrors the source's wire shape: a `time` block, a
//! disclaimer, the chart name and a `bpi` map from currency code to
//! [`QuoteLine`]. It serializes back out in the same shape so the
//! `/quote/original` endpoint relays what the source sent.
//!
//! Field matching on the way in is case-insensitive; see
//! [`ExternalQuote::from_json`].
//!
//! # Examples
//!
//! ```
//! use quote_relay::domain::entities::quote::ExternalQuote;
//! use serde_json::json;
//!
//! let quote = ExternalQuote::from_json(json!({
//!     "Time": { "UpdatedISO": "2018-03-22T23:30:00+00:00" },
//!     "ChartName": "Bitcoin",
//!     "BPI": { "USD": { "Code": "USD", "Rate": "1.0", "Rate_Float": 1.0 } }
//! }))
//! .unwrap();
//!
//! assert_eq!(quote.chart_name, "Bitcoin");
//! assert_eq!(quote.bpi["USD"].rate_text, "1.0");
//! ```

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Update timestamps reported by the quote source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteTime {
    /// Human-readable update time (e.g. `Aug 3, 2022 20:25:00 UTC`).
    #[serde(rename = "updated")]
    pub updated_display: String,
    /// ISO-8601 update time with offset.
    #[serde(rename(serialize = "updatedISO", deserialize = "updatediso"))]
    pub updated_iso: String,
    /// UK-formatted update time.
    #[serde(rename = "updateduk")]
    pub updated_uk: String,
}

/// One currency's rate within a quote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteLine {
    /// ISO currency code.
    pub code: String,
    /// Currency symbol (HTML-escaped by some sources).
    pub symbol: String,
    /// Formatted rate, e.g. `23,342.0112`.
    #[serde(rename = "rate")]
    pub rate_text: String,
    /// English description of the currency.
    pub description: String,
    /// Numeric rate.
    #[serde(rename = "rate_float", with = "rust_decimal::serde::float")]
    pub rate_value: Decimal,
}

impl QuoteLine {
    /// Creates a quote line.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        rate_text: impl Into<String>,
        description: impl Into<String>,
        rate_value: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            rate_text: rate_text.into(),
            description: description.into(),
            rate_value,
        }
    }
}

/// A full price snapshot from the quote source.
///
/// # Invariants
///
/// For well-formed data every key of [`bpi`](Self::bpi) equals the
/// [`QuoteLine::code`] it maps to. The transformer keys its output on the
/// map key, so a source that violates this still produces one line per
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalQuote {
    /// Update timestamps.
    pub time: QuoteTime,
    /// Source disclaimer text.
    pub disclaimer: String,
    /// Name of the quoted asset.
    #[serde(rename(serialize = "chartName", deserialize = "chartname"))]
    pub chart_name: String,
    /// Rates keyed by currency code, in the order the source sent them.
    pub bpi: IndexMap<String, QuoteLine>,
}

impl ExternalQuote {
    /// Deserializes a quote from a JSON value, matching field names
    /// case-insensitively.
    ///
    /// Currency codes used as `bpi` keys keep their case. A JSON `null`
    /// or any non-object top level is rejected.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the value is not an object or a
    /// field has the wrong type.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(fold_field_names(value))
    }

    /// Returns true if every map key equals its line's code.
    #[must_use]
    pub fn keys_match_codes(&self) -> bool {
        self.bpi.iter().all(|(key, line)| key == &line.code)
    }

    /// Number of currencies in the quote.
    #[must_use]
    pub fn currency_count(&self) -> usize {
        self.bpi.len()
    }
}

/// Lowercases field names at every struct level of the quote shape.
fn fold_field_names(value: Value) -> Value {
    let Value::Object(top) = value else {
        return value;
    };

    let top = lowercase_keys(top)
        .into_iter()
        .map(|(key, inner)| {
            let inner = match (key.as_str(), inner) {
                ("time", Value::Object(time)) => Value::Object(lowercase_keys(time)),
                ("bpi", Value::Object(lines)) => Value::Object(
                    lines
                        .into_iter()
                        .map(|(code, line)| match line {
                            Value::Object(fields) => (code, Value::Object(lowercase_keys(fields))),
                            other => (code, other),
                        })
                        .collect(),
                ),
                (_, other) => other,
            };
            (key, inner)
        })
        .collect();

    Value::Object(top)
}

fn lowercase_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}
