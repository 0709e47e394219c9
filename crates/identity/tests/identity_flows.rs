//! Service flows against the in-memory store.

use chrono::{Duration, Utc};

use concierge_core::{AddressLabel, AuthMethod, AuthorizationId, CardId, Email, FlexIdType, UserId};
use concierge_identity::{
    AddressBook, AuthorizationTracker, Card, IdentityError, IdentityResolver, MemoryStore,
    NewAddress, Profile, ResolverPolicy, User, normalize_label,
};

fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id: UserId::new(id),
        name: name.to_owned(),
        email: Email::parse(email).expect("valid email"),
        location_id: None,
        payment_customer_id: format!("cus_{id}"),
        authorization_id: None,
        last_authenticated: Some(Utc::now() - Duration::hours(1)),
        last_authentication_method: AuthMethod::Password,
        trainer: false,
    }
}

fn home_address() -> NewAddress {
    NewAddress {
        label: "home".to_owned(),
        line1: "12 Elm St".to_owned(),
        line2: "Apt 4".to_owned(),
        city: "Portland".to_owned(),
        state: "OR".to_owned(),
        zip5: "97201".to_owned(),
        zip4: "1234".to_owned(),
    }
}

/// Policy that passes the caller's flexible-id kind through unchanged.
fn open_policy() -> ResolverPolicy {
    ResolverPolicy {
        forced_flex_id_type: None,
        enabled_flex_id_types: vec![FlexIdType::Email, FlexIdType::Phone],
    }
}

#[tokio::test]
async fn resolve_by_numeric_id_skips_flexible_lookup() {
    let store = MemoryStore::new();
    store.add_user(user(1, "Ada", "ada@example.com"));

    let resolver = IdentityResolver::new(&store);
    // Garbage flexible-id arguments are ignored when a numeric id is given.
    let resolved = resolver
        .resolve(Some(UserId::new(1)), "", None)
        .await
        .expect("resolve");
    assert_eq!(resolved.name, "Ada");
}

#[tokio::test]
async fn resolve_unknown_numeric_id_is_user_not_found() {
    let store = MemoryStore::new();
    let resolver = IdentityResolver::new(&store);
    let err = resolver
        .resolve(Some(UserId::new(99)), "", None)
        .await
        .expect_err("should miss");
    assert!(matches!(err, IdentityError::UserNotFound));
}

#[tokio::test]
async fn resolve_flexible_id_takes_latest_mapping() {
    let store = MemoryStore::new();
    store.add_user(user(1, "Ada", "ada@example.com"));
    store.add_user(user(2, "Grace", "grace@example.com"));

    // A recycled phone number: mapped to Ada first, then to Grace.
    let now = Utc::now();
    store.add_flex_id("+15551234567", FlexIdType::Phone, UserId::new(1), now - Duration::days(30));
    store.add_flex_id("+15551234567", FlexIdType::Phone, UserId::new(2), now);

    let resolver = IdentityResolver::new(&store);
    let resolved = resolver
        .resolve(None, "+15551234567", Some(FlexIdType::Phone))
        .await
        .expect("resolve");
    assert_eq!(resolved.id, UserId::new(2));
}

#[tokio::test]
async fn resolve_empty_flexible_id_is_missing_flex_id() {
    let store = MemoryStore::new();
    let resolver = IdentityResolver::new(&store);
    let err = resolver
        .resolve(None, "", Some(FlexIdType::Phone))
        .await
        .expect_err("should reject");
    assert!(matches!(err, IdentityError::MissingFlexId));

    // An unset kind doesn't change the outcome; the empty id wins.
    let err = resolver.resolve(None, "", None).await.expect_err("should reject");
    assert!(matches!(err, IdentityError::MissingFlexId));
}

#[tokio::test]
async fn resolve_unset_kind_without_forcing_is_invalid() {
    let store = MemoryStore::new();
    let resolver = IdentityResolver::with_policy(&store, open_policy());
    let err = resolver
        .resolve(None, "ada@example.com", None)
        .await
        .expect_err("should reject");
    assert!(matches!(err, IdentityError::InvalidFlexIdType));
}

#[tokio::test]
async fn resolve_disabled_kind_is_invalid() {
    let store = MemoryStore::new();
    store.add_user(user(1, "Ada", "ada@example.com"));
    store.add_flex_id("ada@example.com", FlexIdType::Email, UserId::new(1), Utc::now());

    let policy = ResolverPolicy {
        forced_flex_id_type: None,
        enabled_flex_id_types: vec![FlexIdType::Phone],
    };
    let resolver = IdentityResolver::with_policy(&store, policy);
    let err = resolver
        .resolve(None, "ada@example.com", Some(FlexIdType::Email))
        .await
        .expect_err("should reject");
    assert!(matches!(err, IdentityError::InvalidFlexIdType));
}

#[tokio::test]
async fn default_policy_forces_phone_kind() {
    let store = MemoryStore::new();
    store.add_user(user(1, "Ada", "ada@example.com"));
    // Only an email mapping exists, but the default policy coerces the
    // supplied kind to phone, so resolution misses.
    store.add_flex_id("ada@example.com", FlexIdType::Email, UserId::new(1), Utc::now());

    let resolver = IdentityResolver::new(&store);
    let err = resolver
        .resolve(None, "ada@example.com", Some(FlexIdType::Email))
        .await
        .expect_err("forced to phone");
    assert!(matches!(err, IdentityError::UserNotFound));

    // Opting out of the forcing restores email resolution.
    let resolver = IdentityResolver::with_policy(&store, open_policy());
    let resolved = resolver
        .resolve(None, "ada@example.com", Some(FlexIdType::Email))
        .await
        .expect("resolve");
    assert_eq!(resolved.id, UserId::new(1));
}

#[tokio::test]
async fn resolve_unmapped_flexible_id_is_user_not_found() {
    let store = MemoryStore::new();
    let resolver = IdentityResolver::with_policy(&store, open_policy());
    let err = resolver
        .resolve(None, "nobody@example.com", Some(FlexIdType::Email))
        .await
        .expect_err("should miss");
    assert!(matches!(err, IdentityError::UserNotFound));
}

#[test]
fn normalize_label_maps_synonyms() {
    assert!(matches!(
        normalize_label("I'm at the office now"),
        Ok(AddressLabel::Office)
    ));
    assert!(matches!(normalize_label("at my flat"), Ok(AddressLabel::Home)));
    assert!(matches!(
        normalize_label("downtown"),
        Err(IdentityError::NoAddressMatch)
    ));
}

#[tokio::test]
async fn find_address_from_utterance() {
    let store = MemoryStore::new();
    let u = user(1, "Ada", "ada@example.com");
    store.add_user(u.clone());

    let book = AddressBook::new(&store);
    let id = book.create(&u, &home_address()).await.expect("create");

    let found = book.find(&u, "take it to my flat please").await.expect("find");
    assert_eq!(found.id, id);
    assert_eq!(found.label, "home");
    assert_eq!(found.country, "USA");

    let err = book.find(&u, "downtown").await.expect_err("no label");
    assert!(matches!(err, IdentityError::NoAddressMatch));

    // A label that normalizes but has no stored row also misses.
    let err = book.find(&u, "the office").await.expect_err("no row");
    assert!(matches!(err, IdentityError::NoAddressMatch));
}

#[tokio::test]
async fn rename_address_round_trip() {
    let store = MemoryStore::new();
    let u = user(1, "Ada", "ada@example.com");
    store.add_user(u.clone());

    let book = AddressBook::new(&store);
    let id = book.create(&u, &home_address()).await.expect("create");
    let before = book.find(&u, "home").await.expect("find");

    let renamed = book.rename(id, "office").await.expect("rename");
    assert_eq!(renamed.label, "office");
    // Everything except the label is untouched.
    assert_eq!(renamed.line1, before.line1);
    assert_eq!(renamed.line2, before.line2);
    assert_eq!(renamed.city, before.city);
    assert_eq!(renamed.state, before.state);
    assert_eq!(renamed.zip5, before.zip5);
    assert_eq!(renamed.zip4, before.zip4);

    let found = book.find(&u, "at work").await.expect("find renamed");
    assert_eq!(found.id, id);
}

#[tokio::test]
async fn authorization_tracker_reads_current_store_state() {
    let store = MemoryStore::new();
    let u = user(1, "Ada", "ada@example.com");
    store.add_user(u.clone());

    let tracker = AuthorizationTracker::new(&store);
    assert!(!tracker.has_outstanding(&u).await.expect("check"));

    // The external workflow raises a challenge; the stale in-memory `u`
    // still has no reference, but the tracker sees the store.
    store.set_authorization(u.id, Some(AuthorizationId::new(7)));
    assert!(tracker.has_outstanding(&u).await.expect("check"));

    store.set_authorization(u.id, None);
    assert!(!tracker.has_outstanding(&u).await.expect("check"));
}

#[tokio::test]
async fn profile_cards_and_primary() {
    let store = MemoryStore::new();
    let u = user(1, "Ada", "ada@example.com");
    store.add_user(u.clone());
    store.add_card(Card {
        id: CardId::new(10),
        user_id: u.id,
        address_id: None,
        last4: "4242".to_owned(),
        holder_name: "Ada Lovelace".to_owned(),
        exp_month: 12,
        exp_year: 2030,
        brand: "Visa".to_owned(),
        vault_token: "tok_a".to_owned(),
        is_primary: false,
    });
    store.add_card(Card {
        id: CardId::new(11),
        user_id: u.id,
        address_id: None,
        last4: "1881".to_owned(),
        holder_name: "Ada Lovelace".to_owned(),
        exp_month: 3,
        exp_year: 2031,
        brand: "Mastercard".to_owned(),
        vault_token: "tok_b".to_owned(),
        is_primary: true,
    });

    let profile = Profile::new(&store);
    let cards = profile.cards(&u).await.expect("cards");
    assert_eq!(cards.len(), 2);

    let primary = profile.primary_card(&u).await.expect("primary").expect("flagged");
    assert_eq!(primary.id, CardId::new(11));
}

#[tokio::test]
async fn session_invalidation_is_idempotent() {
    let store = MemoryStore::new();
    let u = user(1, "Ada", "ada@example.com");
    store.add_user(u.clone());
    store.add_session(u.id);
    store.add_session(u.id);

    let profile = Profile::new(&store);
    profile.invalidate_sessions(&u).await.expect("invalidate");
    assert_eq!(store.session_count(u.id), 0);

    // Nothing left to delete is still success.
    profile.invalidate_sessions(&u).await.expect("invalidate again");
}
