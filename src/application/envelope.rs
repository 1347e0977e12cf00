//! # Response Envelope
//!
//! Uniform `{success, message, data, errors}` wrapper returned by every
//! service operation and every error response.
//!
//! The envelope is the only channel a service uses to report a domain
//! failure. It carries no status code; the handler picks one from the
//! operation's semantics.
//!
//! # Examples
//!
//! ```
//! use quote_relay::application::envelope::ResponseEnvelope;
//!
//! let ok = ResponseEnvelope::success(42, "done");
//! assert!(ok.success && ok.errors.is_empty());
//!
//! let err: ResponseEnvelope<i32> = ResponseEnvelope::error("nope", vec!["bad".into()]);
//! assert!(!err.success && err.data.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Success/error wrapper around an optional payload.
///
/// # Invariants
///
/// - `success == true` implies `errors` is empty
/// - `success == false` implies `data` is `None`
///
/// Both constructors uphold these; the fields are public for reading and
/// for deserializing responses in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Payload, present only on success.
    pub data: Option<T>,
    /// Error details, present only on failure.
    pub errors: Vec<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Creates a successful envelope.
    #[must_use]
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Creates a failed envelope.
    #[must_use]
    pub fn error(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
        }
    }

    /// Creates a failed envelope with no error details.
    #[must_use]
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::error(message, Vec::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope() {
        let env = ResponseEnvelope::success("payload", "ok");
        assert!(env.success);
        assert_eq!(env.message, "ok");
        assert_eq!(env.data, Some("payload"));
        assert!(env.errors.is_empty());
    }

    #[test]
    fn error_envelope() {
        let env: ResponseEnvelope<()> =
            ResponseEnvelope::error("failed", vec!["one".into(), "two".into()]);
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.errors, vec!["one", "two"]);
    }

    #[test]
    fn error_message_has_no_details() {
        let env: ResponseEnvelope<()> = ResponseEnvelope::error_message("failed");
        assert!(env.errors.is_empty());
    }

    #[test]
    fn wire_format() {
        let env: ResponseEnvelope<u8> = ResponseEnvelope::error("boom", vec!["x".into()]);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({ "success": false, "message": "boom", "data": null, "errors": ["x"] })
        );

        let env = ResponseEnvelope::success(7u8, "fine");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({ "success": true, "message": "fine", "data": 7, "errors": [] })
        );
    }
}
