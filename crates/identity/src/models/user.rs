//! User domain type.

use chrono::{DateTime, Utc};

use concierge_core::{AuthMethod, AuthorizationId, Email, LocationId, UserId};

/// A resolved user identity.
///
/// Created by the registration service (out of scope here); this library
/// reads it and selectively updates owned records, never deletes it.
#[derive(Debug, Clone)]
pub struct User {
    /// Canonical numeric id. The single stable key; flexible ids are
    /// alternate lookup paths onto it.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: Email,
    /// Reference to the user's location, when one is on file.
    pub location_id: Option<LocationId>,
    /// Customer reference at the payment processor.
    pub payment_customer_id: String,
    /// Outstanding authorization challenge, cleared by the
    /// authorization-completion workflow once the user responds.
    pub authorization_id: Option<AuthorizationId>,
    /// When the user last authenticated. `None` means never.
    pub last_authenticated: Option<DateTime<Utc>>,
    /// How the user last authenticated.
    pub last_authentication_method: AuthMethod,
    /// Whether the user has access to the training interface and is
    /// notified by email when new training is required.
    pub trainer: bool,
}

/// Anything that can be reached by the notification service.
pub trait Contactable {
    /// Display name for the salutation line.
    fn contact_name(&self) -> &str;
    /// Destination address.
    fn contact_email(&self) -> &Email;
}

impl Contactable for User {
    fn contact_name(&self) -> &str {
        &self.name
    }

    fn contact_email(&self) -> &Email {
        &self.email
    }
}
