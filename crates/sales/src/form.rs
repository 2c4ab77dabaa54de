//! Submitted form data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Untrusted key/value pairs submitted by the entry form.
///
/// Every key is optional; values are kept exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse `key` as a finite decimal number.
    ///
    /// Returns `None` when the key is absent or the value is not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        let raw = self.get(key)?.trim();
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl From<HashMap<String, String>> for FormData {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_parses_trimmed_decimals() {
        let form: FormData = [("dtopor1", " 5.5 "), ("dtopor2", "-3")].into_iter().collect();
        assert_eq!(form.number("dtopor1"), Some(5.5));
        assert_eq!(form.number("dtopor2"), Some(-3.0));
    }

    #[test]
    fn number_rejects_missing_and_garbage() {
        let form: FormData = [("a", "abc"), ("b", ""), ("c", "NaN"), ("d", "inf")]
            .into_iter()
            .collect();
        assert_eq!(form.number("a"), None);
        assert_eq!(form.number("b"), None);
        assert_eq!(form.number("c"), None);
        assert_eq!(form.number("d"), None);
        assert_eq!(form.number("missing"), None);
    }

    #[test]
    fn insert_overwrites_previous_value() {
        let mut form = FormData::new();
        assert!(form.is_empty());
        form.insert("observaciones", "first");
        form.insert("observaciones", "second");
        assert_eq!(form.get("observaciones"), Some("second"));
        assert!(form.contains("observaciones"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn deserializes_from_flat_json_object() {
        let form: FormData =
            serde_json::from_str(r#"{"observaciones":"hola","dtopor1":"2"}"#).unwrap();
        assert_eq!(form.get("observaciones"), Some("hola"));
        assert_eq!(form.len(), 2);
    }
}
