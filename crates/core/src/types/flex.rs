//! Flexible-identity kinds.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a flexible identity: an alternate, non-numeric handle
/// (email address, phone number) mapped to a canonical user id.
///
/// Storage reserves discriminant `0` for "unset"; that value never decodes
/// to a variant, so an unset kind is representable only as
/// `Option::<FlexIdType>::None` at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexIdType {
    /// An email address.
    Email,
    /// A phone number in E.164 form.
    Phone,
}

impl FlexIdType {
    /// Storage discriminant (`SMALLINT` column).
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Email => 1,
            Self::Phone => 2,
        }
    }

    /// Decode a storage discriminant. Returns `None` for zero or unknown
    /// values.
    #[must_use]
    pub const fn from_i16(v: i16) -> Option<Self> {
        match v {
            1 => Some(Self::Email),
            2 => Some(Self::Phone),
            _ => None,
        }
    }
}

impl fmt::Display for FlexIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}
