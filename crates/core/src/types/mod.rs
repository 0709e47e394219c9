//! Core types for Concierge identity.
//!
//! Type-safe wrappers for the domain concepts shared across the backend.

pub mod address;
pub mod auth;
pub mod email;
pub mod flex;
pub mod id;

pub use address::AddressLabel;
pub use auth::AuthMethod;
pub use email::{Email, EmailError};
pub use flex::FlexIdType;
pub use id::*;
