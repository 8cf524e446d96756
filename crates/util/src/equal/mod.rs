//! Deep equality and partial matching of [`Value`] graphs.

mod compare;

pub use compare::compare;

use compat_value::{classify, is_object, Classification, PropertyKey, Value};
use serde::{Deserialize, Serialize};

use compare::Comparator;

/// How strictly two values must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Both sides carry the same keys, elements and entries.
    Full,
    /// Everything on the reference side must be present and matching on the
    /// candidate side; extra candidate content is ignored.
    Partial,
}

/// Performs a deep equality check.
///
/// `NaN` equals `NaN` and `-0` equals `0`. Functions and symbols compare by
/// identity; a boxed primitive equals the primitive it wraps.
///
/// # Examples
///
/// ```
/// use compat_util::is_equal;
/// use compat_value::Value;
/// use serde_json::json;
///
/// let a = Value::from_json(&json!({"foo": [1, 2, 3]}));
/// let b = Value::from_json(&json!({"foo": [1, 2, 3]}));
/// let c = Value::from_json(&json!({"foo": [1, 2, 4]}));
///
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&a, &c));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    compare(a, b, MatchMode::Full)
}

/// Like [`is_equal`], but `customizer` is consulted for every pair first.
/// `Some(result)` decides the pair, `None` falls back to the default rules.
pub fn is_equal_with<F>(a: &Value, b: &Value, customizer: F) -> bool
where
    F: FnMut(&Value, &Value, Option<&PropertyKey>) -> Option<bool>,
{
    Comparator::new(MatchMode::Full, Some(customizer)).compare(a, b, None)
}

/// Checks whether `target` contains everything `reference` describes.
///
/// A `null` or `undefined` reference matches anything, and so does an
/// empty reference container (`{}`, `[]`, an empty map or set) whatever
/// the target's kind. A `null` or `undefined` target only matches a
/// reference object without own keys.
///
/// # Examples
///
/// ```
/// use compat_util::is_match;
/// use compat_value::Value;
/// use serde_json::json;
///
/// let target = Value::from_json(&json!({"a": 1, "b": {"c": 2, "d": 3}}));
/// assert!(is_match(&target, &Value::from_json(&json!({"b": {"c": 2}}))));
/// assert!(!is_match(&target, &Value::from_json(&json!({"e": 1}))));
/// ```
pub fn is_match(target: &Value, reference: &Value) -> bool {
    match_top_level(target, reference)
        .unwrap_or_else(|| compare(target, reference, MatchMode::Partial))
}

/// Like [`is_match`], with a customizer consulted for every pair first.
pub fn is_match_with<F>(target: &Value, reference: &Value, customizer: F) -> bool
where
    F: FnMut(&Value, &Value, Option<&PropertyKey>) -> Option<bool>,
{
    match_top_level(target, reference).unwrap_or_else(|| {
        Comparator::new(MatchMode::Partial, Some(customizer)).compare(target, reference, None)
    })
}

fn match_top_level(target: &Value, reference: &Value) -> Option<bool> {
    if reference.is_nullish() || is_empty_reference(reference) {
        return Some(true);
    }
    if target.is_nullish() && is_object(reference) {
        return Some(reference.own_keys().is_empty());
    }
    None
}

/// A reference container that describes nothing: no own keys, and for
/// maps and sets no entries.
pub(crate) fn is_empty_reference(reference: &Value) -> bool {
    match classify(reference) {
        Classification::PlainObject
        | Classification::Array
        | Classification::ArrayLike
        | Classification::TypedArray => reference.own_keys().is_empty(),
        Classification::Map | Classification::Set => {
            reference.own_keys().is_empty()
                && reference.as_object().and_then(|obj| obj.size()) == Some(0)
        }
        _ => false,
    }
}
