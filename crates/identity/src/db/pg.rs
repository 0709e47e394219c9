//! `PostgreSQL` record store.
//!
//! Uses the sqlx runtime query API so the crate builds without a live
//! database. Row structs decode raw column types; conversion into domain
//! models happens here, and bad stored data surfaces as
//! [`StoreError::DataCorruption`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use concierge_core::{
    AddressId, AuthMethod, AuthorizationId, CardId, Email, FlexIdType, LocationId, UserId,
};

use super::store::RecordStore;
use super::StoreError;
use crate::models::{Address, Card, NewAddress, User};

/// Record store backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for callers that need raw access.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    location_id: Option<i64>,
    payment_customer_id: String,
    authorization_id: Option<i64>,
    last_authenticated: Option<DateTime<Utc>>,
    last_authentication_method: i16,
    trainer: bool,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(r: UserRow) -> Result<Self, StoreError> {
        let email = Email::parse(&r.email).map_err(|e| {
            StoreError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let method = AuthMethod::from_i16(r.last_authentication_method).ok_or_else(|| {
            StoreError::DataCorruption(format!(
                "unknown authentication method discriminant {}",
                r.last_authentication_method
            ))
        })?;

        Ok(Self {
            id: UserId::new(r.id),
            name: r.name,
            email,
            location_id: r.location_id.map(LocationId::new),
            payment_customer_id: r.payment_customer_id,
            authorization_id: r.authorization_id.map(AuthorizationId::new),
            last_authenticated: r.last_authenticated,
            last_authentication_method: method,
            trainer: r.trainer,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CardRow {
    id: i64,
    user_id: i64,
    address_id: Option<i64>,
    last4: String,
    holder_name: String,
    exp_month: i16,
    exp_year: i16,
    brand: String,
    vault_token: String,
    is_primary: bool,
}

impl From<CardRow> for Card {
    fn from(r: CardRow) -> Self {
        Self {
            id: CardId::new(r.id),
            user_id: UserId::new(r.user_id),
            address_id: r.address_id.map(AddressId::new),
            last4: r.last4,
            holder_name: r.holder_name,
            exp_month: r.exp_month,
            exp_year: r.exp_year,
            brand: r.brand,
            vault_token: r.vault_token,
            is_primary: r.is_primary,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: i64,
    user_id: i64,
    card_id: Option<i64>,
    label: String,
    line1: String,
    line2: String,
    city: String,
    state: String,
    country: String,
    zip5: String,
    zip4: String,
}

impl From<AddressRow> for Address {
    fn from(r: AddressRow) -> Self {
        Self {
            id: AddressId::new(r.id),
            user_id: UserId::new(r.user_id),
            card_id: r.card_id.map(CardId::new),
            label: r.label,
            line1: r.line1,
            line2: r.line2,
            city: r.city,
            state: r.state,
            country: r.country,
            zip5: r.zip5,
            zip4: r.zip4,
        }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, name, email, location_id, payment_customer_id,
                   authorization_id, last_authenticated,
                   last_authentication_method, trainer
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn latest_flex_id_mapping(
        &self,
        flex_id: &str,
        kind: FlexIdType,
    ) -> Result<Option<UserId>, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id
            FROM user_flex_ids
            WHERE flex_id = $1 AND flex_id_type = $2
            ORDER BY created_at DESC
            LIMIT 1
            ",
        )
        .bind(flex_id)
        .bind(kind.as_i16())
        .fetch_optional(&self.pool)
        .await?;

        Ok(id.map(UserId::new))
    }

    async fn authorization_ref(
        &self,
        user_id: UserId,
    ) -> Result<Option<AuthorizationId>, StoreError> {
        let row = sqlx::query_scalar::<_, Option<i64>>(
            r"
            SELECT authorization_id
            FROM users
            WHERE id = $1
            ",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(auth) => Ok(auth.map(AuthorizationId::new)),
            None => Err(StoreError::NotFound),
        }
    }

    async fn cards_for_user(&self, user_id: UserId) -> Result<Vec<Card>, StoreError> {
        let rows = sqlx::query_as::<_, CardRow>(
            r"
            SELECT id, user_id, address_id, last4, holder_name,
                   exp_month, exp_year, brand, vault_token, is_primary
            FROM cards
            WHERE user_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Card::from).collect())
    }

    async fn primary_card(&self, user_id: UserId) -> Result<Option<Card>, StoreError> {
        let row = sqlx::query_as::<_, CardRow>(
            r"
            SELECT id, user_id, address_id, last4, holder_name,
                   exp_month, exp_year, brand, vault_token, is_primary
            FROM cards
            WHERE user_id = $1 AND is_primary = TRUE
            ",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Card::from))
    }

    async fn insert_address(
        &self,
        user_id: UserId,
        address: &NewAddress,
    ) -> Result<AddressId, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO addresses
            (user_id, card_id, label, line1, line2, city, state, country,
             zip5, zip4)
            VALUES ($1, NULL, $2, $3, $4, $5, $6, 'USA', $7, $8)
            RETURNING id
            ",
        )
        .bind(user_id.as_i64())
        .bind(&address.label)
        .bind(&address.line1)
        .bind(&address.line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip5)
        .bind(&address.zip4)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddressId::new(id))
    }

    async fn direct_address_by_label(
        &self,
        user_id: UserId,
        label: &str,
    ) -> Result<Option<Address>, StoreError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r"
            SELECT id, user_id, card_id, label, line1, line2, city, state,
                   country, zip5, zip4
            FROM addresses
            WHERE user_id = $1 AND label = $2 AND card_id IS NULL
            ORDER BY id DESC
            LIMIT 1
            ",
        )
        .bind(user_id.as_i64())
        .bind(label)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Address::from))
    }

    async fn address_by_id(&self, id: AddressId) -> Result<Option<Address>, StoreError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r"
            SELECT id, user_id, card_id, label, line1, line2, city, state,
                   country, zip5, zip4
            FROM addresses
            WHERE id = $1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Address::from))
    }

    async fn update_address_label(&self, id: AddressId, label: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r"
            UPDATE addresses
            SET label = $1
            WHERE id = $2
            ",
        )
        .bind(label)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_sessions(&self, user_id: UserId) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r"
            DELETE FROM sessions
            WHERE user_id = $1
            ",
        )
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
