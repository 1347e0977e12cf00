//! # Infrastructure Layer
//!
//! Adapters to the outside world: the upstream quote source, the reference
//! data store and the log subscriber.

pub mod persistence;
pub mod quote_source;
pub mod telemetry;
