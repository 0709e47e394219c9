//! Concierge Identity - identity resolution and profile library.
//!
//! This crate is the identity-and-profile core of the Concierge assistant
//! backend. It resolves a user from a numeric id or a flexible id (email,
//! phone), decides whether a prior authentication is still fresh under a
//! policy window, matches free-text utterances to stored addresses, and
//! tracks pending authorization challenges.
//!
//! The crate owns no request/response surface; the dialogue engine that
//! consumes it does. All persistence goes through the [`db::RecordStore`]
//! contract, with a Postgres implementation ([`db::PgStore`]) and an
//! in-memory one ([`db::MemoryStore`]) for tests and embedding.
//!
//! # Modules
//!
//! - [`db`] - Record store contract and implementations
//! - [`models`] - Domain types: users, cards, addresses
//! - [`services`] - Resolver, freshness evaluator, address book,
//!   authorization tracker, profile pass-throughs
//! - [`error`] - The library error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use db::{MemoryStore, PgStore, RecordStore, StoreError};
pub use error::IdentityError;
pub use models::{Address, Card, Contactable, NewAddress, User};
pub use services::{
    AddressBook, AuthorizationTracker, FreshnessPolicy, IdentityResolver, Profile, ResolverPolicy,
    normalize_label,
};
