//! Identity resolution.
//!
//! Maps a numeric id, or a flexible id (email, phone) plus kind, to a user
//! record. Flexible ids are alternate lookup paths; the numeric id is the
//! canonical key, and a flexible id resolves through the most recently
//! created mapping so reassigned handles land on their current owner.

use concierge_core::{FlexIdType, UserId};

use crate::db::RecordStore;
use crate::error::{IdentityError, Result};
use crate::models::User;

/// Policy for flexible-id resolution.
#[derive(Debug, Clone)]
pub struct ResolverPolicy {
    /// When set, every flexible-id lookup is coerced to this kind,
    /// ignoring the caller's supplied kind.
    ///
    /// The default is `Some(Phone)`: a known narrowing carried over from
    /// the source system, where only phone identities were ever populated.
    /// Deployments that backfill email mappings should construct a policy
    /// with `forced_flex_id_type: None`.
    pub forced_flex_id_type: Option<FlexIdType>,
    /// Flexible-id kinds this deployment accepts. A kind outside this set
    /// fails resolution rather than silently missing.
    pub enabled_flex_id_types: Vec<FlexIdType>,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            forced_flex_id_type: Some(FlexIdType::Phone),
            enabled_flex_id_types: vec![FlexIdType::Email, FlexIdType::Phone],
        }
    }
}

/// Resolves user identities against a record store. Read-only.
pub struct IdentityResolver<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    policy: ResolverPolicy,
}

impl<'a, S: RecordStore + ?Sized> IdentityResolver<'a, S> {
    /// Create a resolver with the default policy.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            policy: ResolverPolicy::default(),
        }
    }

    /// Create a resolver with an explicit policy.
    #[must_use]
    pub const fn with_policy(store: &'a S, policy: ResolverPolicy) -> Self {
        Self { store, policy }
    }

    /// Resolve a user from a numeric id, or from a flexible id when no
    /// numeric id is supplied.
    ///
    /// # Errors
    ///
    /// Returns `MissingFlexId` when no numeric id and an empty flexible id
    /// are supplied, `InvalidFlexIdType` when the (post-policy) kind is
    /// unset or not enabled, `UserNotFound` when no mapping or user record
    /// matches, and `Store` for any other store failure.
    pub async fn resolve(
        &self,
        user_id: Option<UserId>,
        flex_id: &str,
        flex_id_type: Option<FlexIdType>,
    ) -> Result<User> {
        let id = match user_id {
            Some(id) => id,
            None => self.resolve_flex_id(flex_id, flex_id_type).await?,
        };

        self.store
            .user_by_id(id)
            .await?
            .ok_or(IdentityError::UserNotFound)
    }

    async fn resolve_flex_id(
        &self,
        flex_id: &str,
        flex_id_type: Option<FlexIdType>,
    ) -> Result<UserId> {
        let kind = self.policy.forced_flex_id_type.or(flex_id_type);

        if flex_id.is_empty() {
            return Err(IdentityError::MissingFlexId);
        }
        let kind = kind.ok_or(IdentityError::InvalidFlexIdType)?;
        if !self.policy.enabled_flex_id_types.contains(&kind) {
            return Err(IdentityError::InvalidFlexIdType);
        }

        tracing::debug!(flex_id, %kind, "resolving flexible id");
        self.store
            .latest_flex_id_mapping(flex_id, kind)
            .await?
            .ok_or(IdentityError::UserNotFound)
    }
}
