//! Google Pay button configuration.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Google Pay configuration for the payment sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayConfiguration {
    pub environment: Environment,
    /// Two-letter merchant country code. Not validated here; the wallet
    /// rejects codes it does not recognize.
    pub country_code: CompactString,
    /// ISO 4217 currency code.
    pub currency_code: CompactString,
    /// Transaction amount in minor units, when known up front.
    pub amount: Option<i64>,
    /// Custom label shown next to the total.
    pub label: Option<String>,
    pub button_type: ButtonType,
}

/// Which Google Pay environment issues the payment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    Test,
    Production,
}

/// Wording of the Google Pay button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonType {
    Buy,
    Book,
    Checkout,
    Donate,
    Order,
    #[default]
    Pay,
    Subscribe,
    Plain,
}

impl ButtonType {
    /// Map a wallet button-type code to a variant.
    ///
    /// Codes outside the table map to `None`; callers fall back to
    /// [`ButtonType::default`].
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Buy),
            4 => Some(Self::Donate),
            5 => Some(Self::Checkout),
            6 => Some(Self::Book),
            7 => Some(Self::Subscribe),
            11 => Some(Self::Order),
            1000 => Some(Self::Pay),
            1001 => Some(Self::Plain),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_type_code_table() {
        let table = [
            (1, ButtonType::Buy),
            (4, ButtonType::Donate),
            (5, ButtonType::Checkout),
            (6, ButtonType::Book),
            (7, ButtonType::Subscribe),
            (11, ButtonType::Order),
            (1000, ButtonType::Pay),
            (1001, ButtonType::Plain),
        ];
        for (code, expected) in table {
            assert_eq!(ButtonType::from_code(code), Some(expected));
        }
    }

    #[test]
    fn test_unknown_codes_have_no_variant() {
        assert_eq!(ButtonType::from_code(0), None);
        assert_eq!(ButtonType::from_code(2), None);
        assert_eq!(ButtonType::from_code(9999), None);
        assert_eq!(ButtonType::from_code(-1), None);
    }

    #[test]
    fn test_default_is_pay() {
        assert_eq!(ButtonType::default(), ButtonType::Pay);
    }
}
