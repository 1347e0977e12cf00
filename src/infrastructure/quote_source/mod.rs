//! # Quote Source
//!
//! Outbound integration with the third-party price feed.
//!
//! - [`QuoteSource`]: port implemented by the fetcher
//! - [`QuoteFetcher`]: one HTTP call per fetch, fallback on any failure
//! - [`HttpClient`]: reqwest wrapper with timeout and error mapping
//! - [`fallback_snapshot`]: the fixed degraded quote

pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod traits;

pub use error::{SourceError, SourceResult};
pub use fetcher::{DEFAULT_QUOTE_URL, QuoteFetcher, fallback_snapshot};
pub use http_client::HttpClient;
pub use traits::QuoteSource;
