//! # Quote Relay
//!
//! JSON HTTP service that relays a third-party price quote, enriches it with
//! locally stored currency names, manages that reference data, and exposes
//! AES and RSA helpers.
//!
//! # Architecture
//!
//! - **Domain**: quote documents and currency reference records
//! - **Application**: services, response envelope, classified errors
//! - **Infrastructure**: upstream HTTP client, in-memory store, telemetry
//! - **API**: axum router with two-tier error classification
//!
//! # Failure handling
//!
//! The upstream quote source never fails a request: any transport error,
//! bad status or malformed body yields a bundled snapshot instead. Cipher
//! failures are answered with fixed messages that never echo the input or
//! the underlying error.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
