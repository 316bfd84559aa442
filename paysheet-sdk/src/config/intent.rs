//! Intent configuration: what kind of session the payment sheet drives.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Describes the intent a payment sheet session is created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentConfiguration {
    /// Whether the session collects a payment or sets a payment method up.
    pub mode: IntentMode,
    /// Payment method types offered to the payer, in display order.
    /// Empty means the SDK picks.
    #[serde(default)]
    pub payment_method_types: Vec<String>,
}

/// The two kinds of session an intent configuration can describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntentMode {
    /// Collect a one-time payment.
    #[serde(rename_all = "camelCase")]
    Payment {
        /// Amount in the smallest unit of `currency`.
        amount: i64,
        /// Lowercase ISO 4217 currency code.
        currency: CompactString,
        setup_future_use: Option<SetupFutureUse>,
        capture_method: Option<CaptureMethod>,
        payment_method_options: Option<PaymentMethodOptions>,
    },
    /// Set a payment method up for later use without charging it.
    #[serde(rename_all = "camelCase")]
    Setup {
        currency: Option<CompactString>,
        setup_future_use: SetupFutureUse,
    },
}

/// Per-payment-method overrides layered on the session-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOptions {
    /// Setup-future-use override per payment method identifier
    /// (e.g. `"card"`, `"us_bank_account"`).
    pub setup_future_usage_values: BTreeMap<String, SetupFutureUse>,
}

/// Whether a payment method may be reused after the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupFutureUse {
    /// Reusable while the customer is present in the checkout flow.
    OnSession,
    /// Reusable for later charges with the customer absent.
    OffSession,
}

impl SetupFutureUse {
    /// Map a wire name to a variant.
    ///
    /// Unknown names map to `None`; the caller decides whether that is a
    /// silent default or a validation failure.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OnSession" => Some(Self::OnSession),
            "OffSession" => Some(Self::OffSession),
            _ => None,
        }
    }
}

impl std::fmt::Display for SetupFutureUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupFutureUse::OnSession => write!(f, "OnSession"),
            SetupFutureUse::OffSession => write!(f, "OffSession"),
        }
    }
}

/// When a payment is captured relative to authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureMethod {
    /// Capture immediately after authorization.
    Automatic,
    /// Capture asynchronously, shortly after authorization.
    AutomaticAsync,
    /// Hold the authorization until an explicit capture call.
    Manual,
}

impl CaptureMethod {
    /// Map a wire name to a variant. Unknown names map to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Automatic" => Some(Self::Automatic),
            "AutomaticAsync" => Some(Self::AutomaticAsync),
            "Manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl std::fmt::Display for CaptureMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureMethod::Automatic => write!(f, "Automatic"),
            CaptureMethod::AutomaticAsync => write!(f, "AutomaticAsync"),
            CaptureMethod::Manual => write!(f, "Manual"),
        }
    }
}
