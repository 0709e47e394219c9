//! Identity services.
//!
//! Each service borrows a [`crate::db::RecordStore`] and owns one concern:
//!
//! - [`resolver`] - numeric and flexible-id resolution
//! - [`freshness`] - authentication staleness policy
//! - [`addresses`] - utterance-to-address matching
//! - [`authorization`] - outstanding-challenge tracking
//! - [`profile`] - card and session pass-throughs

pub mod addresses;
pub mod authorization;
pub mod freshness;
pub mod profile;
pub mod resolver;

pub use addresses::{AddressBook, normalize_label};
pub use authorization::AuthorizationTracker;
pub use freshness::FreshnessPolicy;
pub use profile::Profile;
pub use resolver::{IdentityResolver, ResolverPolicy};
