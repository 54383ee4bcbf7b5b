//! Open key/value message payload.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keys the bundled senders understand. Anything else is forwarded as extra data.
pub mod keys {
    /// Recipient address or number
    pub const TO: &str = "to";
    pub const SUBJECT: &str = "subject";
    pub const TITLE: &str = "title";
    pub const BODY: &str = "body";
}

/// Message content handed to a sender
///
/// No schema is enforced here; each sender pulls the keys it needs and
/// reports a validation error when one is missing. Keys are kept ordered so
/// serialized payloads are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    fields: BTreeMap<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value for `key`, `None` when absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Non-blank string value for `key`
    ///
    /// # Errors
    /// `AppError::Validation` naming the key when it is missing, not a
    /// string, or blank.
    pub fn require_str(&self, key: &str) -> AppResult<&str> {
        match self.fields.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.as_str()),
            Some(Value::String(_)) => Err(AppError::validation(key, "must not be blank")),
            Some(_) => Err(AppError::validation(key, "must be a string")),
            None => Err(AppError::validation(key, "is required")),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields whose key is not listed in `reserved`
    pub fn extra_fields<'a>(
        &'a self,
        reserved: &'a [&'a str],
    ) -> impl Iterator<Item = (&'a String, &'a Value)> + 'a {
        self.fields
            .iter()
            .filter(move |(key, _)| !reserved.contains(&key.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Payload {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Payload {
        Payload::new()
            .with(keys::TO, "a@b.com")
            .with(keys::SUBJECT, "Hi")
            .with(keys::BODY, "Hello")
            .with("priority", 5)
    }

    #[test]
    fn test_get_str() {
        let payload = sample();
        assert_eq!(payload.get_str(keys::TO), Some("a@b.com"));
        assert_eq!(payload.get_str("priority"), None);
        assert_eq!(payload.get("priority"), Some(&json!(5)));
        assert_eq!(payload.get_str("missing"), None);
    }

    #[test]
    fn test_require_str() {
        let payload = sample().with("blank", "  ");
        assert_eq!(payload.require_str(keys::BODY).unwrap(), "Hello");

        for (key, reason) in [
            ("missing", "is required"),
            ("priority", "must be a string"),
            ("blank", "must not be blank"),
        ] {
            match payload.require_str(key) {
                Err(AppError::Validation { field, reason: r }) => {
                    assert_eq!(field, key);
                    assert_eq!(r, reason);
                }
                other => panic!("Expected Validation for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut payload = sample();
        let previous = payload.insert(keys::SUBJECT, "Hey");
        assert_eq!(previous, Some(json!("Hi")));
        assert_eq!(payload.get_str(keys::SUBJECT), Some("Hey"));
        assert_eq!(payload.len(), 4);
    }

    #[test]
    fn test_extra_fields() {
        let payload = sample();
        let extras: Vec<&str> = payload
            .extra_fields(&[keys::TO, keys::SUBJECT, keys::BODY])
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(extras, vec!["priority"]);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let payload: Payload = [("to", "a@b.com"), ("body", "Hello")].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"body": "Hello", "to": "a@b.com"})
        );
        assert!(!payload.is_empty());
        assert!(Payload::new().is_empty());
    }
}
