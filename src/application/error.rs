//! # Application Errors
//!
//! Error categories raised by service operations and HTTP handlers.
//!
//! Every failure site produces a tagged [`ServiceError`] variant. The REST
//! layer's classifier turns these into an envelope and a status code by
//! matching on the variant, so the category is decided where the failure
//! happens rather than inferred later.
//!
//! # Error Hierarchy
//!
//! ```text
//! ServiceError
//! ├── MissingArgument    - Required input was not supplied
//! ├── InvalidKey         - Key material cannot be used
//! ├── MalformedData      - Input is not in the expected encoding
//! ├── CipherFailure      - Underlying cipher rejected the operation
//! ├── ResourceExhausted  - Input exceeds what the service will process
//! ├── InvalidArgument    - Generic input validation failure
//! ├── NotFound           - Resource or key lookup miss
//! ├── MethodNotAllowed   - Known route, unsupported HTTP method
//! ├── Unauthorized       - Access denied
//! ├── Timeout            - Operation exceeded its deadline
//! └── Internal           - Anything else
//! ```
//!
//! # Examples
//!
//! ```
//! use quote_relay::application::error::ServiceError;
//!
//! let err = ServiceError::invalid_key("key must not be empty");
//! assert!(err.is_crypto());
//! assert_eq!(err.to_string(), "key must not be empty");
//! ```

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Classified service error.
///
/// The `Display` output of each variant is the raw failure message. The
/// global classifier copies it into the envelope's `errors`; the
/// cryptography classifier never exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A required argument or reference was absent.
    #[error("{0}")]
    MissingArgument(String),

    /// Key material is empty, undecodable or of the wrong shape.
    #[error("{0}")]
    InvalidKey(String),

    /// Input data is not in the expected format (e.g. bad base64).
    #[error("{0}")]
    MalformedData(String),

    /// The cipher itself failed (bad padding, message too long, ...).
    #[error("{0}")]
    CipherFailure(String),

    /// Input is larger than the service is willing to process.
    #[error("{0}")]
    ResourceExhausted(String),

    /// Request parameters failed validation.
    #[error("{0}")]
    InvalidArgument(String),

    /// Resource or key not found.
    #[error("{0}")]
    NotFound(String),

    /// The route exists but does not accept the request method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Access denied.
    #[error("{0}")]
    Unauthorized(String),

    /// Operation timed out.
    #[error("{0}")]
    Timeout(String),

    /// Unclassified failure.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(name: impl AsRef<str>) -> Self {
        Self::MissingArgument(format!("missing required field '{}'", name.as_ref()))
    }

    /// Creates an invalid key error.
    #[must_use]
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey(message.into())
    }

    /// Creates a malformed data error.
    #[must_use]
    pub fn malformed_data(message: impl Into<String>) -> Self {
        Self::MalformedData(message.into())
    }

    /// Creates a cipher failure error.
    #[must_use]
    pub fn cipher_failure(message: impl Into<String>) -> Self {
        Self::CipherFailure(message.into())
    }

    /// Creates a resource exhausted error.
    #[must_use]
    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        Self::ResourceExhausted(message.into())
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a method not allowed error.
    #[must_use]
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this error originates from a cryptographic operation.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument(_)
                | Self::InvalidKey(_)
                | Self::MalformedData(_)
                | Self::CipherFailure(_)
                | Self::ResourceExhausted(_)
        )
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound(err.to_string()),
            RepositoryError::Duplicate { .. } => Self::InvalidArgument(err.to_string()),
            RepositoryError::Internal(_) => Self::Internal(err.to_string()),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
