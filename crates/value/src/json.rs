//! JSON bridge: conversions from `serde_json::Value`, the diagnostics
//! projection, and text rendering.

use std::fmt;
use std::rc::Rc;

use chrono::SecondsFormat;
use serde::{Serialize, Serializer};

use crate::value::{Record, Value};

impl From<serde_json::Value> for Value {
    /// Converts a JSON tree into a value. JSON null maps to [`Value::Null`];
    /// there is no JSON spelling for `Undefined`, dates, or patterns.
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(Rc::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(entries) => {
                let record: Record = entries
                    .into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect();
                Value::Record(Rc::new(record))
            }
        }
    }
}

impl Value {
    /// Projects the value onto plain JSON for diagnostics.
    ///
    /// `Undefined` maps to JSON null, dates to RFC 3339 strings with
    /// millisecond precision, patterns to their source text. Non-finite
    /// numbers map to null, since JSON has no spelling for them.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Undefined => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Pattern(p) => serde_json::Value::String(p.source().to_string()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Record(record) => {
                let mut map = serde_json::Map::new();
                for (key, val) in record.iter() {
                    map.insert(key.clone(), val.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.to_json()).unwrap_or_default();
        f.write_str(&json)
    }
}
