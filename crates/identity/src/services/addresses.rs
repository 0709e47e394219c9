//! Address matching and management.
//!
//! Normalizes free-text utterances onto canonical labels ("home",
//! "office") and reads or updates the user's direct (non-card) addresses
//! through the store.

use concierge_core::{AddressId, AddressLabel};

use crate::db::{RecordStore, StoreError};
use crate::error::{IdentityError, Result};
use crate::models::{Address, NewAddress, User};

/// Normalize free text to a canonical label.
///
/// # Errors
///
/// Returns `NoAddressMatch` when no token of the text maps to a label.
pub fn normalize_label(text: &str) -> Result<AddressLabel> {
    AddressLabel::from_utterance(text).ok_or_else(|| {
        tracing::debug!(text, "no address label in utterance");
        IdentityError::NoAddressMatch
    })
}

/// Address lookup and management for one record store.
pub struct AddressBook<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> AddressBook<'a, S> {
    /// Create an address book over a store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Find the user's direct address matching a free-text utterance.
    ///
    /// # Errors
    ///
    /// Returns `NoAddressMatch` when the text normalizes to no label or no
    /// stored row carries the label, and `Store` for other store failures.
    pub async fn find(&self, user: &User, text: &str) -> Result<Address> {
        let label = normalize_label(text)?;
        self.store
            .direct_address_by_label(user.id, label.as_str())
            .await?
            .ok_or(IdentityError::NoAddressMatch)
    }

    /// Rename a stored address, returning the full updated record.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the update or the re-read fails, including when
    /// the address id does not exist.
    pub async fn rename(&self, id: AddressId, new_label: &str) -> Result<Address> {
        self.store.update_address_label(id, new_label).await?;
        // Re-read so the caller sees exactly what was stored.
        self.store
            .address_by_id(id)
            .await?
            .ok_or(IdentityError::Store(StoreError::DataCorruption(format!(
                "address {id} vanished after label update"
            ))))
    }

    /// Create a direct (non-card) address for the user. The country is
    /// fixed to "USA" in the current scope. Returns the generated id.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the insert fails.
    pub async fn create(&self, user: &User, address: &NewAddress) -> Result<AddressId> {
        Ok(self.store.insert_address(user.id, address).await?)
    }
}
