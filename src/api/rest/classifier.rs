//! # Error Classification
//!
//! Two-tier conversion of [`ServiceError`] into an HTTP response.
//!
//! - **Cryptography tier** ([`crypto_tier`]): attached to `/encryption`
//!   routes only. Maps cipher-related categories to fixed, sanitized
//!   messages; the raw error text is never included. Anything it does not
//!   recognise falls through.
//! - **Global tier** ([`global_tier`]): the backstop for every route. Always
//!   produces an envelope; the raw error text goes in `errors` and the
//!   `message` is a category label.
//!
//! Handlers return [`ApiError`] or [`CryptoApiError`]; their `IntoResponse`
//! impls run the cascade. Unknown routes, unsupported methods, JSON body
//! rejections and handler panics are funnelled into the global tier as well.

use crate::application::envelope::ResponseEnvelope;
use crate::application::error::ServiceError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::any::Any;
use tracing::{error, warn};

/// Insufficient Storage, returned when an input is too large to process.
pub const INSUFFICIENT_STORAGE: StatusCode = StatusCode::INSUFFICIENT_STORAGE;

/// Outcome of classifying an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Status plus an error envelope body.
    Envelope(StatusCode, ResponseEnvelope<()>),
    /// Bare status with an empty body.
    StatusOnly(StatusCode),
}

impl Classified {
    /// Status code of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Envelope(status, _) | Self::StatusOnly(status) => *status,
        }
    }

    /// The envelope body, if any.
    #[must_use]
    pub fn envelope(&self) -> Option<&ResponseEnvelope<()>> {
        match self {
            Self::Envelope(_, envelope) => Some(envelope),
            Self::StatusOnly(_) => None,
        }
    }
}

impl IntoResponse for Classified {
    fn into_response(self) -> Response {
        match self {
            Self::Envelope(status, envelope) => (status, Json(envelope)).into_response(),
            Self::StatusOnly(status) => status.into_response(),
        }
    }
}

fn sanitized(message: &str, detail: &str) -> Classified {
    Classified::Envelope(
        StatusCode::BAD_REQUEST,
        ResponseEnvelope::error(message, vec![detail.to_string()]),
    )
}

/// Cryptography tier. Returns `None` for errors it does not handle.
#[must_use]
pub fn crypto_tier(error: &ServiceError) -> Option<Classified> {
    match error {
        ServiceError::MissingArgument(_) => Some(sanitized(
            "Required parameter is missing",
            "Please provide all required fields for encryption/decryption",
        )),
        ServiceError::InvalidKey(_) => Some(sanitized(
            "Invalid encryption key",
            "The provided encryption key is invalid or has incorrect format",
        )),
        ServiceError::MalformedData(_) => Some(sanitized(
            "Invalid data format",
            "The provided data format is incorrect for the requested operation",
        )),
        ServiceError::CipherFailure(_) => Some(sanitized(
            "Cryptographic operation failed",
            "The encryption/decryption operation could not be completed. Please check your input data.",
        )),
        ServiceError::ResourceExhausted(_) => Some(Classified::StatusOnly(INSUFFICIENT_STORAGE)),
        ServiceError::InvalidArgument(_)
        | ServiceError::NotFound(_)
        | ServiceError::MethodNotAllowed(_)
        | ServiceError::Unauthorized(_)
        | ServiceError::Timeout(_)
        | ServiceError::Internal(_) => None,
    }
}

/// Global tier. Always produces an envelope.
#[must_use]
pub fn global_tier(error: &ServiceError) -> Classified {
    let (status, message) = match error {
        ServiceError::InvalidArgument(_)
        | ServiceError::MissingArgument(_)
        | ServiceError::InvalidKey(_) => (StatusCode::BAD_REQUEST, "Invalid request parameters"),
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
        ServiceError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
        ServiceError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "Unauthorized access"),
        ServiceError::Timeout(_) => (StatusCode::REQUEST_TIMEOUT, "Request timeout"),
        ServiceError::MalformedData(_)
        | ServiceError::CipherFailure(_)
        | ServiceError::ResourceExhausted(_)
        | ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    };
    Classified::Envelope(status, ResponseEnvelope::error(message, vec![error.to_string()]))
}

/// Runs the full cascade: cryptography tier first, then the global tier.
#[must_use]
pub fn classify_crypto_route(error: &ServiceError) -> Classified {
    crypto_tier(error).unwrap_or_else(|| global_tier(error))
}

/// Error returned by handlers on ordinary routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ServiceError::invalid_argument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log_global(&self.0);
        global_tier(&self.0).into_response()
    }
}

fn log_global(error: &ServiceError) {
    if error.is_not_found() {
        warn!(error = %error, "resource not found");
    } else {
        error!(error = %error, "an unhandled error occurred");
    }
}

/// Error returned by handlers on cryptography routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoApiError {
    /// Name of the failing operation, for logging.
    pub operation: &'static str,
    /// The underlying error.
    pub error: ServiceError,
}

impl CryptoApiError {
    /// Creates a new CryptoApiError.
    #[must_use]
    pub fn new(operation: &'static str, error: ServiceError) -> Self {
        Self { operation, error }
    }
}

impl IntoResponse for CryptoApiError {
    fn into_response(self) -> Response {
        if self.error.is_crypto() {
            // The raw text stays in the log and out of the response.
            warn!(
                operation = self.operation,
                error = %self.error,
                "encryption operation failed"
            );
        } else {
            log_global(&self.error);
        }
        classify_crypto_route(&self.error).into_response()
    }
}

/// Fallback handler for known routes called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError(ServiceError::method_not_allowed(format!(
        "Method {method} is not allowed on {}",
        uri.path()
    )))
}

/// Fallback handler for unmatched routes.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError(ServiceError::not_found(format!(
        "No route matches {method} {}",
        uri.path()
    )))
}

/// Converts a caught handler panic into a global-tier response.
#[must_use]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError(ServiceError::internal(detail)).into_response()
}
