//! Untyped slot values as supplied by the dialogue host.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A raw value the host extracted from the user's message.
///
/// Hosts send whatever JSON their slot filling produced. The validator narrows
/// this into a typed result; nothing else inspects it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SlotValue {
    /// Null, missing, or a string with only whitespace.
    #[default]
    Empty,
    Text(String),
    Number(Number),
    /// Booleans, arrays and objects.
    Other(Value),
}

impl SlotValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotValue::Empty)
    }

    /// Returns the value as display text, if it has a textual form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            SlotValue::Text(s) => Some(s.clone()),
            SlotValue::Number(n) => Some(n.to_string()),
            SlotValue::Empty | SlotValue::Other(_) => None,
        }
    }
}

impl From<Value> for SlotValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SlotValue::Empty,
            Value::String(s) if s.trim().is_empty() => SlotValue::Empty,
            Value::String(s) => SlotValue::Text(s),
            Value::Number(n) => SlotValue::Number(n),
            other => SlotValue::Other(other),
        }
    }
}

impl From<Option<Value>> for SlotValue {
    fn from(value: Option<Value>) -> Self {
        value.map(SlotValue::from).unwrap_or_default()
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        SlotValue::from(Value::String(value.to_string()))
    }
}

impl From<SlotValue> for Value {
    fn from(value: SlotValue) -> Self {
        match value {
            SlotValue::Empty => Value::Null,
            SlotValue::Text(s) => Value::String(s),
            SlotValue::Number(n) => Value::Number(n),
            SlotValue::Other(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_blank_strings_are_empty() {
        assert!(SlotValue::from(Value::Null).is_empty());
        assert!(SlotValue::from("   ").is_empty());
        assert!(SlotValue::from(None).is_empty());
    }

    #[test]
    fn numbers_keep_their_textual_form() {
        let value = SlotValue::from(json!(1500));
        assert_eq!(value.as_text().as_deref(), Some("1500"));
    }

    #[test]
    fn structured_values_have_no_text() {
        let value = SlotValue::from(json!({"amount": 5}));
        assert!(matches!(value, SlotValue::Other(_)));
        assert!(value.as_text().is_none());
    }

    #[test]
    fn deserializes_from_any_json() {
        let value: SlotValue = serde_json::from_str("\"500 kg\"").unwrap();
        assert_eq!(value, SlotValue::Text("500 kg".to_string()));

        let value: SlotValue = serde_json::from_str("null").unwrap();
        assert_eq!(value, SlotValue::Empty);
    }
}
