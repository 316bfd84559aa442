//! Dynamic value access for options crossing the host bridge.
//!
//! Host applications hand the sheet a loosely-typed, JSON-like options
//! object. [`ValueMap`] wraps one object layer of it and fixes the read
//! policy in one place: a field that is missing or carries an unexpected
//! type reads as `None`, and every accessor is non-panicking.

use serde_json::{Map, Value};

/// A read-only view over one object layer of the host options structure.
#[derive(Debug, Clone, Copy)]
pub struct ValueMap<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> ValueMap<'a> {
    /// Wrap a JSON object.
    pub fn new(entries: &'a Map<String, Value>) -> Self {
        Self { entries }
    }

    /// View `value` as a map. `None` unless the value is an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    /// Whether `key` is present at all, with any value (`null` included).
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a string field.
    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Read a string field, treating the empty string as absent.
    pub fn get_nonempty_str(&self, key: &str) -> Option<&'a str> {
        self.get_str(key).filter(|s| !s.is_empty())
    }

    /// Read an integer field.
    ///
    /// The host bridge stores every number as a double, so fractional
    /// values are truncated toward zero.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.entries.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }

    /// Read an integer field, falling back to `default` when it is missing
    /// or not a number.
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_i64(key).unwrap_or(default)
    }

    /// Read a boolean field.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(Value::as_bool)
    }

    /// Read a nested map field.
    pub fn get_map(&self, key: &str) -> Option<ValueMap<'a>> {
        self.entries
            .get(key)
            .and_then(Value::as_object)
            .map(Self::new)
    }

    /// Read a list-of-strings field.
    ///
    /// Elements that are not strings are skipped; a missing or non-list
    /// field reads as `None`.
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.entries.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Map<String, Value> {
        match json!({
            "name": "checkout",
            "empty": "",
            "count": 12,
            "fraction": 10.9,
            "enabled": true,
            "nothing": null,
            "nested": {"inner": "x"},
            "tags": ["a", 1, "b", null],
        }) {
            Value::Object(entries) => entries,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_missing_or_mistyped_fields_read_as_none() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert_eq!(map.get_str("count"), None);
        assert_eq!(map.get_str("absent"), None);
        assert_eq!(map.get_i64("name"), None);
        assert_eq!(map.get_bool("name"), None);
        assert!(map.get_map("name").is_none());
        assert_eq!(map.get_string_list("name"), None);
        assert_eq!(map.get_str("nothing"), None);
    }

    #[test]
    fn test_typed_reads() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert_eq!(map.get_str("name"), Some("checkout"));
        assert_eq!(map.get_i64("count"), Some(12));
        assert_eq!(map.get_bool("enabled"), Some(true));
        assert_eq!(map.get_map("nested").and_then(|m| m.get_str("inner")), Some("x"));
    }

    #[test]
    fn test_fractional_numbers_truncate_toward_zero() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert_eq!(map.get_i64("fraction"), Some(10));
    }

    #[test]
    fn test_has_key_sees_null_values() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert!(map.has_key("nothing"));
        assert!(!map.has_key("absent"));
    }

    #[test]
    fn test_nonempty_str_treats_empty_as_absent() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert_eq!(map.get_nonempty_str("empty"), None);
        assert_eq!(map.get_nonempty_str("name"), Some("checkout"));
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert_eq!(
            map.get_string_list("tags"),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
    }

    #[test]
    fn test_get_i64_or_falls_back() {
        let entries = fixture();
        let map = ValueMap::new(&entries);
        assert_eq!(map.get_i64_or("count", 0), 12);
        assert_eq!(map.get_i64_or("name", 0), 0);
        assert_eq!(map.get_i64_or("absent", 7), 7);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(ValueMap::from_value(&json!([1, 2])).is_none());
        assert!(ValueMap::from_value(&json!("s")).is_none());
        assert!(ValueMap::from_value(&json!(null)).is_none());
    }
}
