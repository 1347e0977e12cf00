//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`QuoteService`]: fetch, localize and report quotes
//! - [`transform`]: pure quote-to-report transformation
//! - [`CurrencyService`]: reference data management
//! - [`CipherService`]: AES and RSA helpers

pub mod cipher_service;
pub mod currency_service;
pub mod quote_service;
pub mod quote_transformer;

pub use cipher_service::{CipherConfig, CipherService, RsaKeyPair};
pub use currency_service::CurrencyService;
pub use quote_service::QuoteService;
pub use quote_transformer::{format_update_time, transform};
