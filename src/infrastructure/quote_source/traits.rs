//! # Quote Source Trait
//!
//! Port for anything that can produce an [`ExternalQuote`].
//!
//! Implementations must not fail outward: degraded data is returned instead
//! of an error.

use crate::domain::entities::ExternalQuote;
use async_trait::async_trait;
use std::fmt;

/// Source of price quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync + fmt::Debug {
    /// Fetches the current quote.
    async fn fetch_quote(&self) -> ExternalQuote;
}
