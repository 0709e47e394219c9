//! Payment card domain type.

use concierge_core::{AddressId, CardId, UserId};

/// A payment card on file.
///
/// Card numbers never touch this system; the store holds only the masked
/// tail and the processor's vault token. At most one card per user carries
/// `is_primary`, enforced by the store.
#[derive(Debug, Clone)]
pub struct Card {
    /// Card record id.
    pub id: CardId,
    /// Owning user.
    pub user_id: UserId,
    /// Billing address attached to this card, when one is on file.
    pub address_id: Option<AddressId>,
    /// Last four digits of the card number.
    pub last4: String,
    /// Name embossed on the card.
    pub holder_name: String,
    /// Expiry month (1-12).
    pub exp_month: i16,
    /// Expiry year (four digits).
    pub exp_year: i16,
    /// Card brand ("Visa", "Mastercard", ...) as reported by the processor.
    pub brand: String,
    /// Tokenized id at the payment processor.
    pub vault_token: String,
    /// Whether this is the user's primary card.
    pub is_primary: bool,
}
