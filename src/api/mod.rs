//! # API Layer
//!
//! HTTP surface of the relay.

pub mod rest;
