//! Validation failures raised while translating host options.

use thiserror::Error;

/// A required-field contract of the host options was violated.
///
/// Genuinely optional data never raises this; it defaults silently at the
/// read site. The error is surfaced to the host bridge unchanged, so the
/// messages name the offending wire field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `intentConfiguration` was provided without a `mode` map.
    #[error("if `intentConfiguration` is provided, `intentConfiguration.mode` is required")]
    MissingMode,

    /// Payment mode carries an `amount` that is not a number.
    #[error("`intentConfiguration.mode.amount` must be an integer in the smallest currency unit")]
    InvalidAmount,

    /// Payment mode requires a currency code.
    #[error("you must provide a value for `intentConfiguration.mode.currencyCode`")]
    MissingCurrencyCode,

    /// Setup mode requires a recognized `setupFutureUsage` value.
    #[error("you must provide a value for `intentConfiguration.mode.setupFutureUsage`")]
    MissingSetupFutureUsage,

    /// The two customer secret mechanisms are mutually exclusive.
    #[error("`customerEphemeralKeySecret` and `customerSessionClientSecret` cannot both be set")]
    ConflictingCustomerSecrets,
}
