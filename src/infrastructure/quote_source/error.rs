//! # Quote Source Errors
//!
//! Failures talking to the quote source.
//!
//! These never leave the infrastructure layer: [`QuoteFetcher`] absorbs
//! every variant and serves the fallback snapshot instead. They exist so the
//! fetcher can log which branch it took.
//!
//! [`QuoteFetcher`]: super::fetcher::QuoteFetcher
//!
//! # Examples
//!
//! ```
//! use quote_relay::infrastructure::quote_source::error::SourceError;
//!
//! let error = SourceError::timeout("Request timed out");
//! assert!(error.is_transport());
//! assert_eq!(error.branch(), "exception");
//! ```

use thiserror::Error;

/// Error type for quote source calls.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Request timed out.
    #[error("quote source timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("quote source connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The source answered with a non-success status.
    #[error("quote source returned status {status}")]
    BadStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The body could not be read or did not match the quote shape.
    #[error("quote source malformed body: {message}")]
    MalformedBody {
        /// Error message.
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("quote source client error: {message}")]
    Client {
        /// Error message.
        message: String,
    },
}

impl SourceError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a bad status error.
    #[must_use]
    pub fn bad_status(status: u16) -> Self {
        Self::BadStatus { status }
    }

    /// Creates a malformed body error.
    #[must_use]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Creates a client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns true if the request never produced a response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Short label of the fetch branch this error leads to, for logging.
    #[must_use]
    pub fn branch(&self) -> &'static str {
        match self {
            Self::BadStatus { .. } => "bad-status",
            Self::MalformedBody { .. } => "malformed-body",
            Self::Timeout { .. } | Self::Connection { .. } | Self::Client { .. } => "exception",
        }
    }
}

/// Result type for quote source calls.
pub type SourceResult<T> = Result<T, SourceError>;
