//! # Domain Entities
//!
//! - [`ExternalQuote`]: price snapshot from the quote source
//! - [`TransformedQuote`]: localized, sorted report
//! - [`ReferenceRecord`]: locally held currency reference data

pub mod quote;
pub mod reference_record;
pub mod transformed_quote;

pub use quote::{ExternalQuote, QuoteLine, QuoteTime};
pub use reference_record::ReferenceRecord;
pub use transformed_quote::{CurrencyLine, TransformedQuote, UPDATE_TIME_FORMAT};
