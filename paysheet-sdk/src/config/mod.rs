//! Payment sheet configuration objects.
//!
//! These types are the strongly-typed counterparts of the loosely-typed
//! options a host application passes when opening a payment sheet. The
//! `paysheet-bridge` crate produces them; the session-initialization API
//! consumes them as-is.

mod customer;
mod google_pay;
mod intent;
mod link;

pub use customer::{CustomerConfiguration, CustomerSecret};
pub use google_pay::{ButtonType, Environment, GooglePayConfiguration};
pub use intent::{
    CaptureMethod, IntentConfiguration, IntentMode, PaymentMethodOptions, SetupFutureUse,
};
pub use link::{LinkConfiguration, LinkDisplay};

use serde::{Deserialize, Serialize};

/// Everything one payment sheet session can be configured with.
///
/// The four sections are independent of each other; any subset of the
/// optional ones may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetOptions {
    /// Intent description for deferred-intent sessions.
    pub intent: Option<IntentConfiguration>,
    /// Link display policy. Always present; defaults apply when the host
    /// says nothing.
    pub link: LinkConfiguration,
    /// Google Pay button configuration, when the host enables the wallet.
    pub google_pay: Option<GooglePayConfiguration>,
    /// Customer scoping, when the host supplies an id and a secret.
    pub customer: Option<CustomerConfiguration>,
}
