//! # Domain Layer
//!
//! Quote documents and currency reference records.

pub mod entities;
