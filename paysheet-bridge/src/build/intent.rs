//! Intent configuration translation.

use paysheet_sdk::config::{
    CaptureMethod, IntentConfiguration, IntentMode, PaymentMethodOptions, SetupFutureUse,
};

use crate::error::ConfigurationError;
use crate::value::ValueMap;

/// Translate the `intentConfiguration` section of the host options.
///
/// Returns `Ok(None)` when the section is absent. A present section must
/// carry a `mode` map; which mode that map describes is decided
/// structurally by [`is_payment_mode`].
pub fn build_intent_configuration(
    params: Option<ValueMap<'_>>,
) -> Result<Option<IntentConfiguration>, ConfigurationError> {
    let Some(params) = params else {
        return Ok(None);
    };
    let mode_params = params
        .get_map("mode")
        .ok_or(ConfigurationError::MissingMode)?;

    Ok(Some(IntentConfiguration {
        mode: build_mode(mode_params)?,
        payment_method_types: params
            .get_string_list("paymentMethodTypes")
            .unwrap_or_default(),
    }))
}

/// A mode map describes a payment when it carries an `amount` key, with any
/// value. Everything else is a setup session.
fn is_payment_mode(mode_params: ValueMap<'_>) -> bool {
    mode_params.has_key("amount")
}

fn build_mode(mode_params: ValueMap<'_>) -> Result<IntentMode, ConfigurationError> {
    if is_payment_mode(mode_params) {
        let amount = mode_params
            .get_i64("amount")
            .ok_or(ConfigurationError::InvalidAmount)?;
        let currency = mode_params
            .get_str("currencyCode")
            .ok_or(ConfigurationError::MissingCurrencyCode)?;
        Ok(IntentMode::Payment {
            amount,
            currency: currency.into(),
            setup_future_use: mode_params
                .get_str("setupFutureUsage")
                .and_then(SetupFutureUse::from_name),
            capture_method: mode_params
                .get_str("captureMethod")
                .and_then(CaptureMethod::from_name),
            payment_method_options: build_payment_method_options(
                mode_params.get_map("paymentMethodOptions"),
            ),
        })
    } else {
        let setup_future_use = mode_params
            .get_str("setupFutureUsage")
            .and_then(SetupFutureUse::from_name)
            .ok_or(ConfigurationError::MissingSetupFutureUsage)?;
        Ok(IntentMode::Setup {
            currency: mode_params.get_str("currencyCode").map(Into::into),
            setup_future_use,
        })
    }
}

/// Collect the per-payment-method setup-future-use overrides.
///
/// Entries whose value is not a recognized name are skipped.
fn build_payment_method_options(params: Option<ValueMap<'_>>) -> Option<PaymentMethodOptions> {
    let values = params?.get_map("setupFutureUsageValues")?;
    let setup_future_usage_values = values
        .iter()
        .filter_map(|(method, value)| {
            let name = value.as_str()?;
            Some((method.to_owned(), SetupFutureUse::from_name(name)?))
        })
        .collect();
    Some(PaymentMethodOptions {
        setup_future_usage_values,
    })
}
