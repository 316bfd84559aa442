//! Link configuration translation.

use paysheet_sdk::config::{LinkConfiguration, LinkDisplay};

use crate::value::ValueMap;

/// Translate the `link` section of the host options.
///
/// This builder is total: a missing section or an unrecognized `display`
/// name falls back to the default display policy instead of failing.
pub fn build_link_configuration(params: Option<ValueMap<'_>>) -> LinkConfiguration {
    let display = params
        .and_then(|p| p.get_str("display"))
        .and_then(LinkDisplay::from_name)
        .unwrap_or_default();
    LinkConfiguration { display }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_section_defaults_to_automatic() {
        assert_eq!(
            build_link_configuration(None),
            LinkConfiguration {
                display: LinkDisplay::Automatic,
            }
        );
    }

    #[test]
    fn test_empty_section_defaults_to_automatic() {
        let params = json!({});
        assert_eq!(
            build_link_configuration(ValueMap::from_value(&params)),
            LinkConfiguration {
                display: LinkDisplay::Automatic,
            }
        );
    }

    #[test]
    fn test_recognized_display_names() {
        let params = json!({"display": "automatic"});
        assert_eq!(
            build_link_configuration(ValueMap::from_value(&params)).display,
            LinkDisplay::Automatic
        );

        let params = json!({"display": "never"});
        assert_eq!(
            build_link_configuration(ValueMap::from_value(&params)).display,
            LinkDisplay::Never
        );
    }

    #[test]
    fn test_unrecognized_display_defaults_to_automatic() {
        for display in ["invalid_value", "Never", "NEVER", ""] {
            let params = json!({"display": display});
            assert_eq!(
                build_link_configuration(ValueMap::from_value(&params)).display,
                LinkDisplay::Automatic,
            );
        }
    }

    #[test]
    fn test_mistyped_display_defaults_to_automatic() {
        let params = json!({"display": 1});
        assert_eq!(
            build_link_configuration(ValueMap::from_value(&params)).display,
            LinkDisplay::Automatic
        );
    }
}
