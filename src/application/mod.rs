//! # Application Layer
//!
//! Use-case services, the response envelope and the classified error type.

pub mod dto;
pub mod envelope;
pub mod error;
pub mod services;

pub use envelope::ResponseEnvelope;
pub use error::{ServiceError, ServiceResult};
