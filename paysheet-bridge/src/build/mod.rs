//! Builders translating host options into typed configuration objects.
//!
//! Each builder is a pure function over an optional [`ValueMap`] and is
//! safe to call from any thread. A builder either returns a fully formed
//! value, `None`, or a [`ConfigurationError`]; it never hands out a
//! partially populated object.

mod customer;
mod google_pay;
mod intent;
mod link;

pub use customer::build_customer_configuration;
pub use google_pay::build_google_pay_configuration;
pub use intent::build_intent_configuration;
pub use link::build_link_configuration;

use paysheet_sdk::config::SheetOptions;

use crate::error::ConfigurationError;
use crate::value::ValueMap;

/// Assemble the full option bundle for one payment sheet session.
///
/// The four sections are independent: `intentConfiguration`, `link` and
/// `googlePay` are nested maps, while the customer fields sit on the top
/// level of `params` itself.
pub fn build_sheet_options(
    params: Option<ValueMap<'_>>,
) -> Result<SheetOptions, ConfigurationError> {
    Ok(SheetOptions {
        intent: build_intent_configuration(
            params.and_then(|p| p.get_map("intentConfiguration")),
        )?,
        link: build_link_configuration(params.and_then(|p| p.get_map("link"))),
        google_pay: build_google_pay_configuration(params.and_then(|p| p.get_map("googlePay"))),
        customer: build_customer_configuration(params)?,
    })
}
