//! Plain-JSON serde adapters
//!
//! `Value` serializes with an explicit type tag. Records written by hand
//! (queries, candidate metadata, constraints) use plain JSON literals instead;
//! use these adapters with `#[serde(with = "...")]`:
//!
//! ```
//! use metaprop_types::Value;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Bound {
//!     #[serde(with = "metaprop_types::plain")]
//!     value: Value,
//! }
//!
//! let bound: Bound = serde_json::from_str(r#"{"value": 2.5}"#).unwrap();
//! assert_eq!(bound.value, Value::Real(2.5));
//! ```

use crate::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
    JsonValue::from(value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    JsonValue::deserialize(deserializer).map(Value::from)
}

/// Adapter for attribute maps (`{"priority": 7, "zone": "eu"}`)
pub mod map {
    use crate::Value;
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value as JsonValue;

    pub fn serialize<S: Serializer>(map: &IndexMap<String, Value>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(map.iter().map(|(key, value)| (key, JsonValue::from(value))))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IndexMap<String, Value>, D::Error> {
        let raw = IndexMap::<String, JsonValue>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(key, value)| (key, Value::from(value))).collect())
    }
}
