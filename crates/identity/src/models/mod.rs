//! Domain models.
//!
//! Validated domain objects, separate from database row types. Row decoding
//! lives with the store implementations.

pub mod address;
pub mod card;
pub mod user;

pub use address::{Address, NewAddress};
pub use card::Card;
pub use user::{Contactable, User};
