//! Customer identity configuration.

use serde::{Deserialize, Serialize};

/// Scopes a payment sheet session to an existing customer.
///
/// Carries exactly one of the two secret mechanisms; which one is encoded
/// in [`CustomerSecret`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerConfiguration {
    /// The customer identifier (`cus_...`).
    pub id: String,
    /// The secret authorizing customer-scoped operations.
    pub secret: CustomerSecret,
}

/// The two mutually exclusive customer secret mechanisms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSecret {
    /// Legacy ephemeral key issued for the customer.
    #[serde(rename_all = "camelCase")]
    EphemeralKey { secret: String },
    /// Server-issued customer session client secret.
    #[serde(rename_all = "camelCase")]
    CustomerSession { client_secret: String },
}

impl CustomerConfiguration {
    /// Customer scoped through the legacy ephemeral-key mechanism.
    pub fn with_ephemeral_key(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: CustomerSecret::EphemeralKey {
                secret: secret.into(),
            },
        }
    }

    /// Customer scoped through a server-issued customer session.
    pub fn with_customer_session(id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: CustomerSecret::CustomerSession {
                client_secret: client_secret.into(),
            },
        }
    }
}
