//! Type classification.
//!
//! [`classify`] is the single dispatch point the clone and comparison
//! engines branch on. Array-likeness is a separate capability check
//! ([`is_array_like`]) because it cuts across several classifications.

use serde::{Deserialize, Serialize};

use crate::key::PropertyKey;
use crate::number::is_valid_length;
use crate::value::{ObjectKind, Value};

/// The structural kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Primitive,
    BoxedPrimitive,
    PlainObject,
    Array,
    ArrayLike,
    Map,
    Set,
    Date,
    RegExp,
    Error,
    Function,
    TypedArray,
    Symbol,
    Nullish,
}

impl Classification {
    /// Terminal kinds are never recursed into.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Classification::Primitive
                | Classification::Function
                | Classification::Symbol
                | Classification::Nullish
        )
    }

    /// Kinds compared through their own enumerable keys.
    pub fn is_keyed(self) -> bool {
        matches!(self, Classification::PlainObject | Classification::ArrayLike)
    }
}

pub fn classify(value: &Value) -> Classification {
    match value {
        Value::Undefined | Value::Null => Classification::Nullish,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Classification::Primitive,
        Value::Symbol(_) => Classification::Symbol,
        Value::Object(obj) => match &obj.borrow().kind {
            ObjectKind::Plain => Classification::PlainObject,
            ObjectKind::Array(_) => Classification::Array,
            ObjectKind::Arguments(_) => Classification::ArrayLike,
            ObjectKind::Boxed(_) => Classification::BoxedPrimitive,
            ObjectKind::Date(_) => Classification::Date,
            ObjectKind::RegExp { .. } => Classification::RegExp,
            ObjectKind::Map(_) => Classification::Map,
            ObjectKind::Set(_) => Classification::Set,
            ObjectKind::Error { .. } => Classification::Error,
            ObjectKind::Function(_) => Classification::Function,
            ObjectKind::TypedArray(_) => Classification::TypedArray,
        },
    }
}

/// Checks for a non-negative integer `length` no larger than
/// `MAX_SAFE_INTEGER`. Functions are excluded even if they carry one.
///
/// ```
/// use compat_value::{is_array_like, Value};
///
/// assert!(is_array_like(&Value::from("abc")));
/// assert!(is_array_like(&Value::arguments(vec![])));
/// assert!(is_array_like(&Value::object_from([("length", Value::from(2))])));
/// assert!(!is_array_like(&Value::object()));
/// ```
pub fn is_array_like(value: &Value) -> bool {
    if value.is_nullish() || is_function(value) {
        return false;
    }
    match value.get_own(&PropertyKey::from("length")) {
        Some(Value::Number(n)) => is_valid_length(n),
        _ => false,
    }
}

/// Compat `isObject`: true for every heap value, functions included.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Heap values other than functions.
pub fn is_object_like(value: &Value) -> bool {
    is_object(value) && !is_function(value)
}

pub fn is_function(value: &Value) -> bool {
    classify(value) == Classification::Function
}

/// True arrays only; argument lists and other array-likes are rejected.
pub fn is_array(value: &Value) -> bool {
    classify(value) == Classification::Array
}

pub fn is_arguments(value: &Value) -> bool {
    classify(value) == Classification::ArrayLike
}

pub fn is_typed_array(value: &Value) -> bool {
    classify(value) == Classification::TypedArray
}

pub fn is_plain_object(value: &Value) -> bool {
    classify(value) == Classification::PlainObject
}
