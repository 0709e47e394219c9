//! Concierge Core - Shared identity types.
//!
//! This crate provides the types shared by the Concierge identity components:
//! - `identity` - Identity resolution, authentication freshness, addresses
//! - the assistant dialogue engine, which consumes the identity library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. Anything
//! that touches a store or the network lives in `concierge-identity`.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, email addresses, authentication methods,
//!   flexible-identity kinds, and address labels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
