//! Structure-preserving cloning of [`Value`] graphs.
//!
//! A customizer receives each value together with the key it was found
//! under (`None` for the root, map entries and set members) and may return
//! a replacement for it.

mod clone_deep;

pub use clone_deep::{clone_deep, clone_deep_with, clone_with_options, CloneOptions};

use compat_value::Value;

/// Creates a shallow clone: a new top-level container of the same kind
/// whose children are shared with `value`.
///
/// # Examples
///
/// ```
/// use compat_util::clone;
/// use compat_value::Value;
///
/// let inner = Value::array(vec![Value::from(1)]);
/// let original = Value::array(vec![inner.clone()]);
/// let copy = clone(&original);
///
/// assert!(!copy.same_value_zero(&original));
/// assert!(copy.elements().unwrap()[0].same_value_zero(&inner));
/// ```
pub fn clone(value: &Value) -> Value {
    clone_with_options(value, CloneOptions { deep: false })
}
