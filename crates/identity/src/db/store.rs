//! The record store contract.

use async_trait::async_trait;

use concierge_core::{AddressId, AuthorizationId, FlexIdType, UserId};

use super::StoreError;
use crate::models::{Address, Card, NewAddress, User};

/// Read/write contract between the identity services and the backing store.
///
/// Point lookups return `Ok(None)` when no row matches, a distinct outcome
/// from failure. All operations are short-lived and independent; uniqueness
/// of the primary card and clearing of authorization challenges belong to
/// the store and external workflows, not to implementors of this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load a user by canonical id.
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Resolve a flexible id to a user id via the most recently created
    /// mapping for `(flex_id, kind)`.
    async fn latest_flex_id_mapping(
        &self,
        flex_id: &str,
        kind: FlexIdType,
    ) -> Result<Option<UserId>, StoreError>;

    /// Read a user's authorization-challenge reference directly from the
    /// store. Fails with [`StoreError::NotFound`] if the user row is gone.
    async fn authorization_ref(
        &self,
        user_id: UserId,
    ) -> Result<Option<AuthorizationId>, StoreError>;

    /// All cards on file for a user.
    async fn cards_for_user(&self, user_id: UserId) -> Result<Vec<Card>, StoreError>;

    /// The user's primary card, if one is flagged.
    async fn primary_card(&self, user_id: UserId) -> Result<Option<Card>, StoreError>;

    /// Insert a direct (non-card) address for a user, forcing the country
    /// to "USA". Returns the generated id.
    async fn insert_address(
        &self,
        user_id: UserId,
        address: &NewAddress,
    ) -> Result<AddressId, StoreError>;

    /// The user's most recent direct (non-card) address with the given
    /// label.
    async fn direct_address_by_label(
        &self,
        user_id: UserId,
        label: &str,
    ) -> Result<Option<Address>, StoreError>;

    /// Load an address by id.
    async fn address_by_id(&self, id: AddressId) -> Result<Option<Address>, StoreError>;

    /// Update the stored label of an address. Fails with
    /// [`StoreError::NotFound`] if the address does not exist.
    async fn update_address_label(&self, id: AddressId, label: &str) -> Result<(), StoreError>;

    /// Delete all sessions for a user. Zero rows deleted is success;
    /// returns the number of rows removed.
    async fn delete_sessions(&self, user_id: UserId) -> Result<u64, StoreError>;
}
