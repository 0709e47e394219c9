//! Canonical address labels and utterance normalization.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A canonical address label.
///
/// Stored address names are free-form, but lookups from dialogue go through
/// this normalization so "my flat" and "the house" both land on the `home`
/// row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressLabel {
    /// A residential address.
    Home,
    /// A workplace address.
    Office,
}

impl AddressLabel {
    /// Map a free-text utterance to a canonical label.
    ///
    /// Tokenizes on whitespace, lower-cases each token, and matches tokens
    /// against a fixed synonym table. Tokens outside the table are ignored.
    /// When tokens map to different labels ("leaving work heading home"),
    /// the last matching token in scan order wins. Returns `None` when no
    /// token matches.
    #[must_use]
    pub fn from_utterance(text: &str) -> Option<Self> {
        let mut label = None;
        for token in text.split_whitespace() {
            match token.to_lowercase().as_str() {
                "home" | "place" | "apartment" | "flat" | "house" | "condo" => {
                    label = Some(Self::Home);
                }
                "work" | "office" | "biz" | "business" => {
                    label = Some(Self::Office);
                }
                _ => {}
            }
        }
        label
    }

    /// The canonical stored label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
        }
    }
}

impl fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
