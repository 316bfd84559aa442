//! Google Pay configuration translation.

use paysheet_sdk::config::{ButtonType, Environment, GooglePayConfiguration};
use tracing::{debug, warn};

use crate::value::ValueMap;

/// Translate the `googlePay` section of the host options.
///
/// Returns `None` when the section is absent or empty. Individual fields
/// degrade silently rather than failing validation; the wallet SDK is the
/// authority on their contents.
pub fn build_google_pay_configuration(
    params: Option<ValueMap<'_>>,
) -> Option<GooglePayConfiguration> {
    let params = params.filter(|p| !p.is_empty())?;

    // The amount arrives as a string on the wire. Anything non-numeric is
    // dropped, not rejected.
    let amount = params
        .get_str("amount")
        .and_then(|raw| match raw.parse::<i64>() {
            Ok(amount) => Some(amount),
            Err(_) => {
                debug!(amount = raw, "google pay amount is not numeric, dropping it");
                None
            }
        });

    let button_code = params.get_i64_or("buttonType", 0);
    let button_type = ButtonType::from_code(button_code).unwrap_or_else(|| {
        if params.has_key("buttonType") {
            warn!(
                code = button_code,
                "unknown google pay button type code, falling back to the pay button"
            );
        }
        ButtonType::default()
    });

    let environment = if params.get_bool("testEnv").unwrap_or(false) {
        Environment::Test
    } else {
        Environment::Production
    };

    Some(GooglePayConfiguration {
        environment,
        country_code: params
            .get_str("merchantCountryCode")
            .unwrap_or_default()
            .into(),
        currency_code: params.get_str("currencyCode").unwrap_or_default().into(),
        amount,
        label: params.get_str("label").map(str::to_owned),
        button_type,
    })
}
