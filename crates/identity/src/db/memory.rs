//! In-memory record store.
//!
//! Backs the library's tests and lets the dialogue engine run without a
//! database in development. Behavior mirrors [`super::PgStore`]: lookups
//! that miss return `Ok(None)`, flexible-id resolution takes the most
//! recently created mapping, and label lookups take the most recent row.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use concierge_core::{AddressId, AuthorizationId, FlexIdType, UserId};

use super::store::RecordStore;
use super::StoreError;
use crate::models::{Address, Card, NewAddress, User};

struct FlexIdMapping {
    flex_id: String,
    kind: FlexIdType,
    user_id: UserId,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, User>,
    flex_ids: Vec<FlexIdMapping>,
    cards: Vec<Card>,
    addresses: HashMap<AddressId, Address>,
    sessions: Vec<UserId>,
    next_address_id: i64,
}

/// Record store held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace a user record.
    pub fn add_user(&self, user: User) {
        self.lock().users.insert(user.id, user);
    }

    /// Append a flexible-id mapping.
    pub fn add_flex_id(
        &self,
        flex_id: impl Into<String>,
        kind: FlexIdType,
        user_id: UserId,
        created_at: DateTime<Utc>,
    ) {
        self.lock().flex_ids.push(FlexIdMapping {
            flex_id: flex_id.into(),
            kind,
            user_id,
            created_at,
        });
    }

    /// Insert a card record.
    pub fn add_card(&self, card: Card) {
        self.lock().cards.push(card);
    }

    /// Set or clear a user's authorization-challenge reference, standing in
    /// for the external authorization workflow. No-op for unknown users.
    pub fn set_authorization(&self, user_id: UserId, authorization: Option<AuthorizationId>) {
        if let Some(user) = self.lock().users.get_mut(&user_id) {
            user.authorization_id = authorization;
        }
    }

    /// Open a session for a user.
    pub fn add_session(&self, user_id: UserId) {
        self.lock().sessions.push(user_id);
    }

    /// Number of open sessions for a user.
    #[must_use]
    pub fn session_count(&self, user_id: UserId) -> usize {
        self.lock()
            .sessions
            .iter()
            .filter(|s| **s == user_id)
            .count()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn latest_flex_id_mapping(
        &self,
        flex_id: &str,
        kind: FlexIdType,
    ) -> Result<Option<UserId>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .flex_ids
            .iter()
            .filter(|m| m.flex_id == flex_id && m.kind == kind)
            .max_by_key(|m| m.created_at)
            .map(|m| m.user_id))
    }

    async fn authorization_ref(
        &self,
        user_id: UserId,
    ) -> Result<Option<AuthorizationId>, StoreError> {
        self.lock()
            .users
            .get(&user_id)
            .map(|u| u.authorization_id)
            .ok_or(StoreError::NotFound)
    }

    async fn cards_for_user(&self, user_id: UserId) -> Result<Vec<Card>, StoreError> {
        Ok(self
            .lock()
            .cards
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn primary_card(&self, user_id: UserId) -> Result<Option<Card>, StoreError> {
        Ok(self
            .lock()
            .cards
            .iter()
            .find(|c| c.user_id == user_id && c.is_primary)
            .cloned())
    }

    async fn insert_address(
        &self,
        user_id: UserId,
        address: &NewAddress,
    ) -> Result<AddressId, StoreError> {
        let mut inner = self.lock();
        inner.next_address_id += 1;
        let id = AddressId::new(inner.next_address_id);
        inner.addresses.insert(
            id,
            Address {
                id,
                user_id,
                card_id: None,
                label: address.label.clone(),
                line1: address.line1.clone(),
                line2: address.line2.clone(),
                city: address.city.clone(),
                state: address.state.clone(),
                country: "USA".to_owned(),
                zip5: address.zip5.clone(),
                zip4: address.zip4.clone(),
            },
        );
        Ok(id)
    }

    async fn direct_address_by_label(
        &self,
        user_id: UserId,
        label: &str,
    ) -> Result<Option<Address>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .addresses
            .values()
            .filter(|a| a.user_id == user_id && a.card_id.is_none() && a.label == label)
            .max_by_key(|a| a.id)
            .cloned())
    }

    async fn address_by_id(&self, id: AddressId) -> Result<Option<Address>, StoreError> {
        Ok(self.lock().addresses.get(&id).cloned())
    }

    async fn update_address_label(&self, id: AddressId, label: &str) -> Result<(), StoreError> {
        self.lock()
            .addresses
            .get_mut(&id)
            .map(|a| a.label = label.to_owned())
            .ok_or(StoreError::NotFound)
    }

    async fn delete_sessions(&self, user_id: UserId) -> Result<u64, StoreError> {
        let mut inner = self.lock();
        let before = inner.sessions.len();
        inner.sessions.retain(|s| *s != user_id);
        Ok((before - inner.sessions.len()) as u64)
    }
}
