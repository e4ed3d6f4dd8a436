//! Request parameters: HTTP verbs and the ordered field map.

use serde_json::Value;

use super::attachment::Attachment;

/// HTTP methods supported by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// The HTTP verb on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One parameter value: either a plain JSON value or a binary attachment.
///
/// Replaces runtime type inspection with an explicit tag; the encoder
/// matches on this to pick the part framing.
#[derive(Debug, Clone)]
pub enum ParameterValue {
    /// Plain value. Rendered as a text part in multipart bodies and as a
    /// JSON field in JSON bodies.
    Value(Value),
    /// Binary attachment with filename and MIME type.
    Attachment(Attachment),
}

impl ParameterValue {
    /// Render a plain value the way it appears in a multipart text part:
    /// strings bare, everything else as compact JSON.
    pub(crate) fn render_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u64> for ParameterValue {
    fn from(value: u64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<Attachment> for ParameterValue {
    fn from(att: Attachment) -> Self {
        Self::Attachment(att)
    }
}

/// An insertion-ordered mapping from field name to [`ParameterValue`].
///
/// Order determines multipart part order. Keys are unique: inserting an
/// existing key replaces its value in place without moving it.
#[derive(Debug, Clone, Default)]
pub struct RequestParameters {
    entries: Vec<(String, ParameterValue)>,
}

impl RequestParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any field is an attachment.
    pub fn has_attachments(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, v)| matches!(v, ParameterValue::Attachment(_)))
    }

    /// Collect the plain-value fields into a JSON object, in insertion
    /// order. Attachment fields have no JSON representation and are
    /// skipped.
    pub fn to_json_object(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.entries {
            if let ParameterValue::Value(v) = value {
                map.insert(key.clone(), v.clone());
            }
        }
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_preserved() {
        let params = RequestParameters::new()
            .with("z", "last-first")
            .with("a", 1)
            .with("m", true);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let params = RequestParameters::new()
            .with("a", 1)
            .with("b", 2)
            .with("a", 3);
        assert_eq!(params.len(), 2);
        let (first_key, first_value) = params.iter().next().unwrap();
        assert_eq!(first_key, "a");
        match first_value {
            ParameterValue::Value(v) => assert_eq!(v, &json!(3)),
            ParameterValue::Attachment(_) => panic!("expected plain value"),
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(ParameterValue::render_text(&json!("plain")), "plain");
        assert_eq!(ParameterValue::render_text(&json!(42)), "42");
        assert_eq!(ParameterValue::render_text(&json!(true)), "true");
        assert_eq!(
            ParameterValue::render_text(&json!({"a": 1})),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_collect_from_pairs_keeps_order_and_uniqueness() {
        let params: RequestParameters = [("z", "1"), ("a", "2"), ("z", "3")]
            .into_iter()
            .collect();
        assert_eq!(params.len(), 2);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_has_attachments() {
        let plain = RequestParameters::new().with("k", "v");
        assert!(!plain.has_attachments());
        let mixed = plain.with("f", crate::Attachment::png(vec![1u8], "x.png"));
        assert!(mixed.has_attachments());
    }

    #[test]
    fn test_to_json_object_skips_attachments() {
        let params = RequestParameters::new()
            .with("name", "a")
            .with("file", crate::Attachment::png(vec![1u8], "x.png"));
        let obj = params.to_json_object();
        assert_eq!(obj, json!({"name": "a"}));
    }
}
