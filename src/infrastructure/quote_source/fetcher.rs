//! # Quote Fetcher
//!
//! Retrieves the live quote and degrades to a fixed snapshot on failure.
//!
//! Availability wins over freshness here: a bad status, an unreadable body
//! and a transport error all collapse into the same deterministic
//! [`fallback_snapshot`]. Each fetch logs which branch it took under the
//! span handed to [`QuoteFetcher::new`].
//!
//! # Examples
//!
//! ```ignore
//! use quote_relay::infrastructure::quote_source::{HttpClient, QuoteFetcher, QuoteSource};
//!
//! let fetcher = QuoteFetcher::new(
//!     HttpClient::new(10_000)?,
//!     "https://api.coindesk.com/v1/bpi/currentprice.json",
//!     tracing::info_span!("quote_fetcher"),
//! );
//! let quote = fetcher.fetch_quote().await;
//! ```

use crate::domain::entities::{ExternalQuote, QuoteLine, QuoteTime};
use crate::infrastructure::quote_source::error::{SourceError, SourceResult};
use crate::infrastructure::quote_source::http_client::HttpClient;
use crate::infrastructure::quote_source::traits::QuoteSource;
use async_trait::async_trait;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::{Span, error, info, warn};

/// Default quote source address.
pub const DEFAULT_QUOTE_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice.json";

const FALLBACK_DISCLAIMER: &str = "This data was produced from the CoinDesk Bitcoin Price Index (USD). Non-USD currency data converted using hourly conversion rate from openexchangerates.org";

/// Builds the fixed quote served whenever the live fetch fails.
///
/// Contains exactly USD, GBP and EUR with `chart_name == "Bitcoin"`.
#[must_use]
pub fn fallback_snapshot() -> ExternalQuote {
    let lines = [
        QuoteLine::new(
            "USD",
            "$",
            "23,342.0112",
            "US Dollar",
            Decimal::new(233_420_112, 4),
        ),
        QuoteLine::new(
            "GBP",
            "£",
            "19,504.3978",
            "British Pound Sterling",
            Decimal::new(195_043_978, 4),
        ),
        QuoteLine::new(
            "EUR",
            "€",
            "22,738.5269",
            "Euro",
            Decimal::new(227_385_269, 4),
        ),
    ];

    ExternalQuote {
        time: QuoteTime {
            updated_display: "Aug 3, 2022 20:25:00 UTC".to_string(),
            updated_iso: "2022-08-03T20:25:00+00:00".to_string(),
            updated_uk: "Aug 3, 2022 at 21:25 BST".to_string(),
        },
        disclaimer: FALLBACK_DISCLAIMER.to_string(),
        chart_name: "Bitcoin".to_string(),
        bpi: lines
            .into_iter()
            .map(|line| (line.code.clone(), line))
            .collect::<IndexMap<_, _>>(),
    }
}

/// Fetches quotes from a fixed HTTP address.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: HttpClient,
    url: String,
    span: Span,
}

impl QuoteFetcher {
    /// Creates a fetcher for `url`, logging under `span`.
    #[must_use]
    pub fn new(client: HttpClient, url: impl Into<String>, span: Span) -> Self {
        Self {
            client,
            url: url.into(),
            span,
        }
    }

    /// Returns the quote source address.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn try_fetch(&self) -> SourceResult<ExternalQuote> {
        let body = self.client.get_json(self.url()).await?;
        ExternalQuote::from_json(body).map_err(|e| SourceError::malformed_body(e.to_string()))
    }
}

#[async_trait]
impl QuoteSource for QuoteFetcher {
    async fn fetch_quote(&self) -> ExternalQuote {
        info!(parent: &self.span, url = self.url(), "calling quote source");

        match self.try_fetch().await {
            Ok(quote) => {
                info!(
                    parent: &self.span,
                    branch = "success",
                    currencies = quote.currency_count(),
                    "quote source responded"
                );
                quote
            }
            Err(err) => {
                match &err {
                    SourceError::BadStatus { status } => warn!(
                        parent: &self.span,
                        branch = err.branch(),
                        status,
                        "quote source call failed, using fallback snapshot"
                    ),
                    SourceError::MalformedBody { .. } => warn!(
                        parent: &self.span,
                        branch = err.branch(),
                        error = %err,
                        "quote source body unreadable, using fallback snapshot"
                    ),
                    SourceError::Timeout { .. }
                    | SourceError::Connection { .. }
                    | SourceError::Client { .. } => error!(
                        parent: &self.span,
                        branch = err.branch(),
                        error = %err,
                        "error calling quote source, using fallback snapshot"
                    ),
                }
                fallback_snapshot()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(url: String, timeout_ms: u64) -> QuoteFetcher {
        QuoteFetcher::new(HttpClient::new(timeout_ms).unwrap(), url, Span::none())
    }

    fn assert_fallback(quote: &ExternalQuote) {
        assert_eq!(quote, &fallback_snapshot());
        assert_eq!(quote.chart_name, "Bitcoin");
        assert_eq!(quote.currency_count(), 3);
    }

    #[test]
    fn fallback_has_three_lines() {
        let quote = fallback_snapshot();
        assert_eq!(quote.chart_name, "Bitcoin");
        assert_eq!(quote.bpi["USD"].rate_text, "23,342.0112");
        assert_eq!(quote.bpi["GBP"].rate_text, "19,504.3978");
        assert_eq!(quote.bpi["EUR"].rate_text, "22,738.5269");
        assert_eq!(quote.bpi["EUR"].rate_value, Decimal::new(227_385_269, 4));
        let codes: Vec<_> = quote.bpi.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["USD", "GBP", "EUR"]);
        assert!(quote.keys_match_codes());
    }

    #[tokio::test]
    async fn success_returns_live_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/bpi/currentprice.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "time": { "updatedISO": "2024-01-01T00:00:00+00:00" },
                "chartName": "Bitcoin",
                "bpi": {
                    "JPY": { "code": "JPY", "rate": "1", "description": "Yen", "rate_float": 1.0 }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = fetcher(format!("{}/v1/bpi/currentprice.json", server.uri()), 2000)
            .fetch_quote()
            .await;

        assert_eq!(quote.currency_count(), 1);
        assert_eq!(quote.bpi["JPY"].description, "Yen");
    }

    #[tokio::test]
    async fn bad_status_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let quote = fetcher(server.uri(), 2000).fetch_quote().await;
        assert_fallback(&quote);
    }

    #[tokio::test]
    async fn malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let quote = fetcher(server.uri(), 2000).fetch_quote().await;
        assert_fallback(&quote);
    }

    #[tokio::test]
    async fn null_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let quote = fetcher(server.uri(), 2000).fetch_quote().await;
        assert_fallback(&quote);
    }

    #[tokio::test]
    async fn wrong_shape_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"bpi": 42}"#))
            .mount(&server)
            .await;

        let quote = fetcher(server.uri(), 2000).fetch_quote().await;
        assert_fallback(&quote);
    }

    #[tokio::test]
    async fn timeout_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let quote = fetcher(server.uri(), 50).fetch_quote().await;
        assert_fallback(&quote);
    }

    #[tokio::test]
    async fn connection_refused_falls_back() {
        let quote = fetcher("http://127.0.0.1:9/unreachable".to_string(), 1000)
            .fetch_quote()
            .await;
        assert_fallback(&quote);
    }
}
