//! Profile pass-throughs.
//!
//! Thin reads and writes over a user's owned records: payment cards and
//! active sessions. No decision logic lives here.

use crate::db::RecordStore;
use crate::error::Result;
use crate::models::{Card, User};

/// Card and session access for one record store.
pub struct Profile<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> Profile<'a, S> {
    /// Create a profile view over a store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All cards on file for the user.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the lookup fails.
    pub async fn cards(&self, user: &User) -> Result<Vec<Card>> {
        tracing::debug!(user_id = %user.id, "fetching cards");
        Ok(self.store.cards_for_user(user.id).await?)
    }

    /// The user's primary card, if one is flagged.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the lookup fails.
    pub async fn primary_card(&self, user: &User) -> Result<Option<Card>> {
        Ok(self.store.primary_card(user.id).await?)
    }

    /// Invalidate all of the user's sessions. Fire-and-forget: deleting
    /// zero rows is success.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the delete fails.
    pub async fn invalidate_sessions(&self, user: &User) -> Result<()> {
        let removed = self.store.delete_sessions(user.id).await?;
        tracing::debug!(user_id = %user.id, removed, "invalidated sessions");
        Ok(())
    }
}
