//! Address domain types.

use concierge_core::{AddressId, CardId, UserId};

/// A stored shipping or billing address.
///
/// Owned by a user, or by one of the user's cards when `card_id` is set.
/// Within a user's direct (non-card) addresses the label acts as a
/// soft-unique lookup key; lookups take the most recent matching row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Address record id.
    pub id: AddressId,
    /// Owning user.
    pub user_id: UserId,
    /// Owning card, when this is a card billing address rather than a
    /// direct user address.
    pub card_id: Option<CardId>,
    /// Stored label, conventionally "home" or "office".
    pub label: String,
    /// Street address, first line.
    pub line1: String,
    /// Street address, second line (unit, floor). Empty when unused.
    pub line2: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Country. Fixed to "USA" in the current scope.
    pub country: String,
    /// Five-digit ZIP component.
    pub zip5: String,
    /// Four-digit ZIP extension. Empty when unused.
    pub zip4: String,
}

/// Fields for creating a direct (non-card) address.
///
/// The country is not a field; the store forces it to "USA".
#[derive(Debug, Clone)]
pub struct NewAddress {
    /// Label to store, conventionally "home" or "office".
    pub label: String,
    /// Street address, first line.
    pub line1: String,
    /// Street address, second line. Empty when unused.
    pub line2: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Five-digit ZIP component.
    pub zip5: String,
    /// Four-digit ZIP extension. Empty when unused.
    pub zip4: String,
}
