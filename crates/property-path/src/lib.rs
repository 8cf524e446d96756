//! Property path utilities.
//!
//! Resolves property paths (a single key or an ordered key sequence)
//! against [`compat_value::Value`] graphs, keeping "the property holds
//! `undefined`" apart from "the property does not exist".
//!
//! # Example
//!
//! ```
//! use compat_property_path::{get, has, to_path};
//! use compat_value::{PropertyKey, Value};
//! use serde_json::json;
//!
//! let path = to_path("address.city");
//! assert_eq!(path, vec![PropertyKey::from("address"), PropertyKey::from("city")]);
//!
//! let doc = Value::from_json(&json!({"address": {"city": "New York"}}));
//! assert_eq!(get(&doc, ["address", "city"]).value.as_str(), Some("New York"));
//! assert!(has(&doc, "address.city"));
//! assert!(!has(&doc, "address.zip"));
//! ```

use thiserror::Error;

pub mod get;
pub mod key;
pub mod parse;
pub mod types;

pub use get::{get, get_or, has, resolve};
pub use key::to_key;
pub use parse::{parse_path, to_path};
pub use types::{PropertyPath, Resolved};

/// Errors from strict path parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("unterminated bracket at offset {0}")]
    UnterminatedBracket(usize),
    #[error("unterminated quote at offset {0}")]
    UnterminatedQuote(usize),
}
