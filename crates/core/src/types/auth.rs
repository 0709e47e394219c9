//! Authentication method strength.

use serde::{Deserialize, Serialize};

/// How rigorously a user proved their identity.
///
/// Variants are ordered weakest to strongest; the derived `Ord` is the
/// total order used when deciding whether a prior authentication satisfies
/// a required level. Select the required level per action depending on your
/// fraud risk tolerance versus user-experience friction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// A remembered device or long-lived session cookie.
    #[default]
    Remembered,
    /// An interactive password entry.
    Password,
    /// Password plus a second factor (SMS code, TOTP).
    TwoFactor,
}

impl AuthMethod {
    /// Storage discriminant (`SMALLINT` column).
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Remembered => 1,
            Self::Password => 2,
            Self::TwoFactor => 3,
        }
    }

    /// Decode a storage discriminant. Returns `None` for unknown values.
    #[must_use]
    pub const fn from_i16(v: i16) -> Option<Self> {
        match v {
            1 => Some(Self::Remembered),
            2 => Some(Self::Password),
            3 => Some(Self::TwoFactor),
            _ => None,
        }
    }
}
