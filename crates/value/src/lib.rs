//! compat-value - dynamic values for the compat utilities.
//!
//! Provides the value model the clone and comparison engines traverse:
//! primitives, symbols, and shared heap objects with identity (plain
//! objects, arrays, argument lists, boxed primitives, dates, regexes, maps,
//! sets, errors, functions and typed arrays).
//!
//! # Example
//!
//! ```
//! use compat_value::{classify, Classification, Value};
//! use serde_json::json;
//!
//! let value = Value::from_json(&json!({"a": [1, 2]}));
//! assert_eq!(classify(&value), Classification::PlainObject);
//!
//! // Handles alias: a clone of a `Value` is the same object.
//! let alias = value.clone();
//! alias.as_object().unwrap().set("b", Value::from(3));
//! assert_eq!(value.to_json().unwrap(), json!({"a": [1, 2], "b": 3}));
//! ```

pub mod classify;
pub mod json;
pub mod key;
pub mod number;
pub mod tracker;
pub mod typed_array;
pub mod value;

pub use classify::{
    classify, is_arguments, is_array, is_array_like, is_function, is_object, is_object_like,
    is_plain_object, is_typed_array, Classification,
};
pub use json::ConversionError;
pub use key::{PropertyKey, Symbol};
pub use number::{is_negative_zero, is_valid_length, number_to_string, MAX_SAFE_INTEGER};
pub use tracker::{PairTracker, Tracker};
pub use typed_array::{TypedArray, TypedArrayKind};
pub use value::{
    Function, Object, ObjectData, ObjectId, ObjectKind, Primitive, Value, MAX_DENSE_LENGTH,
};
