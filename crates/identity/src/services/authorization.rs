//! Outstanding-authorization tracking.

use crate::db::RecordStore;
use crate::error::Result;
use crate::models::User;

/// Observes pending authorization challenges.
///
/// This service only reads the challenge reference; the
/// authorization-completion workflow clears it once the user responds.
pub struct AuthorizationTracker<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> AuthorizationTracker<'a, S> {
    /// Create a tracker over a store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Whether the user has an authorization challenge outstanding.
    ///
    /// Reads the reference fresh from the store rather than trusting the
    /// in-memory [`User`], which may predate a challenge being raised or
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the lookup fails.
    pub async fn has_outstanding(&self, user: &User) -> Result<bool> {
        let authorization = self.store.authorization_ref(user.id).await?;
        Ok(authorization.is_some())
    }
}
