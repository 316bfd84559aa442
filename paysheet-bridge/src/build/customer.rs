//! Customer configuration translation.

use paysheet_sdk::config::CustomerConfiguration;

use crate::error::ConfigurationError;
use crate::value::ValueMap;

/// Translate the customer fields of the host options.
///
/// The fields sit on the top level of the options map, and a field set to
/// the empty string counts as absent. Returns `Ok(None)` unless a customer
/// id and exactly one secret are present; two secrets at once are rejected
/// no matter what else is set.
pub fn build_customer_configuration(
    params: Option<ValueMap<'_>>,
) -> Result<Option<CustomerConfiguration>, ConfigurationError> {
    let Some(params) = params else {
        return Ok(None);
    };
    let id = params.get_nonempty_str("customerId");
    let ephemeral_key_secret = params.get_nonempty_str("customerEphemeralKeySecret");
    let session_client_secret = params.get_nonempty_str("customerSessionClientSecret");

    match (id, ephemeral_key_secret, session_client_secret) {
        (_, Some(_), Some(_)) => Err(ConfigurationError::ConflictingCustomerSecrets),
        (Some(id), None, Some(client_secret)) => Ok(Some(
            CustomerConfiguration::with_customer_session(id, client_secret),
        )),
        (Some(id), Some(secret), None) => Ok(Some(CustomerConfiguration::with_ephemeral_key(
            id, secret,
        ))),
        _ => Ok(None),
    }
}
