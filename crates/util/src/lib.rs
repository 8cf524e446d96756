//! compat-util - deep clone, deep equality and matchers for compat values
//!
//! This crate provides the collection-utility core on top of
//! [`compat_value::Value`]: a cycle-safe, sharing-preserving deep clone, a
//! deep equality engine with a partial (subset) mode, and predicate
//! builders (`matches`, `matches_property`) for filtering collections.
//!
//! # Example
//!
//! ```
//! use compat_util::{clone_deep, is_equal, matches_property};
//! use compat_value::Value;
//! use serde_json::json;
//!
//! let users = vec![
//!     Value::from_json(&json!({"name": "a", "tags": ["x", "y"]})),
//!     Value::from_json(&json!({"name": "b", "tags": ["z"]})),
//! ];
//! let tagged_y = matches_property("tags", &Value::from_json(&json!(["y"])));
//! let hits: Vec<_> = users.iter().filter(|u| tagged_y(*u)).collect();
//! assert_eq!(hits.len(), 1);
//!
//! let copy = clone_deep(&users[0]);
//! assert!(is_equal(&copy, &users[0]));
//! ```

pub mod clone;
pub mod equal;
pub mod matches;

// Re-exports for convenience
pub use clone::{clone, clone_deep, clone_deep_with, clone_with_options, CloneOptions};
pub use equal::{compare, is_equal, is_equal_with, is_match, is_match_with, MatchMode};
pub use matches::{matches, matches_property};
