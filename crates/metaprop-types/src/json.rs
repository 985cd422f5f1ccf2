//! Classification of JSON documents into values
//!
//! Metadata usually arrives as JSON (registry payloads, config files, CLI
//! literals). Numbers keep their sub-kind: anything representable as `i64`
//! is an `Integer`, everything else is a `Real`. `null` and objects have no
//! comparable shape and become `Absent`.

use serde_json::Value as JsonValue;

use crate::Value;

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null | JsonValue::Object(_) => Value::Absent,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // u64 beyond i64::MAX and all floats
                None => n.as_f64().map_or(Value::Absent, Value::Real),
            },
            JsonValue::String(s) => Value::Text(s.clone()),
            JsonValue::Array(items) => Value::Sequence(items.iter().map(Value::from).collect()),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            other => Value::from(&other),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Integer(i) => JsonValue::from(*i),
            // Non-finite reals have no JSON form
            Value::Real(r) => serde_json::Number::from_f64(*r).map_or(JsonValue::Null, JsonValue::Number),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Sequence(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Absent => JsonValue::Null,
        }
    }
}
