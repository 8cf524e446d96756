//! Conversion between [`Value`] and `serde_json::Value`.

use std::collections::HashSet;

use serde_json::{Map, Number};
use thiserror::Error;

use crate::key::PropertyKey;
use crate::value::{ObjectId, ObjectKind, Value};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("cyclic structure cannot be converted to JSON")]
    Cyclic,
    #[error("non-finite number {0} cannot be converted to JSON")]
    NonFiniteNumber(f64),
    #[error("{0} values cannot be converted to JSON")]
    Unsupported(&'static str),
}

impl Value {
    /// Builds a value graph from JSON. Every object and array becomes a
    /// fresh heap object; property order is preserved.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::array(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => {
                Value::object_from(map.iter().map(|(k, v)| (k.as_str(), Value::from_json(v))))
            }
        }
    }

    /// Converts to JSON. Object properties holding `undefined`, functions
    /// or symbols are skipped and symbol keys are ignored, as
    /// `JSON.stringify` does; anywhere else those values are errors.
    /// Shared sub-objects are written once per occurrence.
    pub fn to_json(&self) -> Result<serde_json::Value, ConversionError> {
        let mut path = HashSet::new();
        to_json_inner(self, &mut path)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from_json(json)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}

fn is_skipped_in_object(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Symbol(_) => true,
        Value::Object(obj) => matches!(obj.borrow().kind, ObjectKind::Function(_)),
        _ => false,
    }
}

fn number_to_json(n: f64) -> Result<serde_json::Value, ConversionError> {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Ok(serde_json::Value::Number(Number::from(n as i64)));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(ConversionError::NonFiniteNumber(n))
}

fn to_json_inner(
    value: &Value,
    path: &mut HashSet<ObjectId>,
) -> Result<serde_json::Value, ConversionError> {
    let obj = match value {
        Value::Undefined => return Err(ConversionError::Unsupported("undefined")),
        Value::Null => return Ok(serde_json::Value::Null),
        Value::Bool(b) => return Ok(serde_json::Value::Bool(*b)),
        Value::Number(n) => return number_to_json(*n),
        Value::String(s) => return Ok(serde_json::Value::String(s.clone())),
        Value::Symbol(_) => return Err(ConversionError::Unsupported("symbol")),
        Value::Object(obj) => obj,
    };

    if !path.insert(obj.id()) {
        return Err(ConversionError::Cyclic);
    }
    let result = {
        let data = obj.borrow();
        match &data.kind {
            ObjectKind::Boxed(p) => to_json_inner(&p.to_value(), path),
            ObjectKind::Array(items) | ObjectKind::Arguments(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    // Array slots that cannot be represented become null.
                    if is_skipped_in_object(item) {
                        out.push(serde_json::Value::Null);
                    } else {
                        out.push(to_json_inner(item, path)?);
                    }
                }
                Ok(serde_json::Value::Array(out))
            }
            ObjectKind::Plain | ObjectKind::Error { .. } => {
                let mut out = Map::new();
                for (key, val) in &data.props {
                    let PropertyKey::String(key) = key else {
                        continue;
                    };
                    if is_skipped_in_object(val) {
                        continue;
                    }
                    out.insert(key.clone(), to_json_inner(val, path)?);
                }
                Ok(serde_json::Value::Object(out))
            }
            other => Err(ConversionError::Unsupported(other.name())),
        }
    };
    path.remove(&obj.id());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trip() {
        let json = json!({
            "string": "hello",
            "number": 42,
            "float": 1.5,
            "bool": true,
            "null": null,
            "array": [1, 2, 3],
            "object": {"nested": "value"}
        });
        let value = Value::from_json(&json);
        assert_eq!(value.to_json().unwrap(), json);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let value = Value::from_json(&json!({"b": 1, "a": 2}));
        let keys = value.own_keys();
        assert_eq!(keys, vec![PropertyKey::from("b"), PropertyKey::from("a")]);
    }

    #[test]
    fn test_to_json_skips_undefined_properties() {
        let value = Value::object_from([
            ("a", Value::Undefined),
            ("b", Value::from(1)),
            ("f", Value::function("f", |_| Value::Undefined)),
        ]);
        assert_eq!(value.to_json().unwrap(), json!({"b": 1}));

        let arr = Value::array(vec![Value::Undefined, Value::from(1)]);
        assert_eq!(arr.to_json().unwrap(), json!([null, 1]));
    }

    #[test]
    fn test_to_json_rejects_cycles() {
        let value = Value::object();
        value.as_object().unwrap().set("self", value.clone());
        assert_eq!(value.to_json(), Err(ConversionError::Cyclic));
    }

    #[test]
    fn test_to_json_allows_shared_structure() {
        let inner = Value::array(vec![Value::from(1)]);
        let value = Value::object_from([("a", inner.clone()), ("b", inner)]);
        assert_eq!(value.to_json().unwrap(), json!({"a": [1], "b": [1]}));
    }

    #[test]
    fn test_to_json_errors() {
        assert!(matches!(
            Value::from(f64::NAN).to_json(),
            Err(ConversionError::NonFiniteNumber(n)) if n.is_nan()
        ));
        assert!(matches!(
            Value::from(f64::INFINITY).to_json(),
            Err(ConversionError::NonFiniteNumber(_))
        ));
        assert_eq!(
            Value::date(0.0).to_json(),
            Err(ConversionError::Unsupported("Date"))
        );
        assert_eq!(
            Value::Undefined.to_json(),
            Err(ConversionError::Unsupported("undefined"))
        );
    }
}
