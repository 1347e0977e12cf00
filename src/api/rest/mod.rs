//! # REST API
//!
//! JSON endpoints using axum.
//!
//! Every response body is a [`ResponseEnvelope`](crate::application::ResponseEnvelope),
//! except the bare 507 returned when a cipher input is too large.
//!
//! # Endpoints
//!
//! ## Quotes
//! - `GET /quote/original` - Upstream quote, or the bundled fallback snapshot
//! - `GET /quote/transformed` - Sorted currency lines with local names
//!
//! ## Currencies
//! - `GET /currencies` - List all currencies
//! - `GET /currencies/{id}` - Get currency by code
//! - `POST /currencies` - Create currency
//! - `PUT /currencies/{id}` - Update currency
//! - `DELETE /currencies/{id}` - Delete currency
//!
//! ## Encryption
//! - `POST /encryption/aes/encrypt` - AES-256-CBC encrypt
//! - `POST /encryption/aes/decrypt` - AES-256-CBC decrypt
//! - `POST /encryption/rsa/generate-keys` - Generate an RSA key pair
//! - `POST /encryption/rsa/encrypt` - RSA-OAEP encrypt
//! - `POST /encryption/rsa/decrypt` - RSA-OAEP decrypt
//!
//! # Usage
//!
//! ```ignore
//! use quote_relay::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     quotes: /* ... */,
//!     currencies: /* ... */,
//!     cipher: CipherService::default(),
//! });
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod classifier;
pub mod handlers;
pub mod routes;

pub use classifier::{ApiError, Classified, CryptoApiError, crypto_tier, global_tier};
pub use handlers::{AppState, DecryptRequest, EncryptRequest};
pub use routes::create_router;
