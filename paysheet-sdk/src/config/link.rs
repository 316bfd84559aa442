//! Link configuration.

use serde::{Deserialize, Serialize};

/// Controls how Link is surfaced in the payment sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfiguration {
    pub display: LinkDisplay,
}

/// Link display policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDisplay {
    /// Offer Link whenever it is available for the session.
    #[default]
    Automatic,
    /// Never surface Link.
    Never,
}

impl LinkDisplay {
    /// Map a wire name to a variant. The match is exact and case-sensitive;
    /// unknown names map to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "automatic" => Some(Self::Automatic),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

impl std::fmt::Display for LinkDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkDisplay::Automatic => write!(f, "automatic"),
            LinkDisplay::Never => write!(f, "never"),
        }
    }
}
