//! Predicate builders over [`Value`]s.

use compat_property_path::{get, has, PropertyPath};
use compat_value::Value;

use crate::clone::clone_deep;
use crate::equal::{compare, is_empty_reference, is_match, MatchMode};

/// Creates a predicate that checks whether the value at `path` of its
/// argument partially matches `source`.
///
/// `source` is deep-cloned once, here; later changes to the caller's
/// `source` do not affect the predicate. When the value at `path` is
/// `undefined` the predicate reports whether the path exists at all, so a
/// property holding `undefined` is told apart from a missing one. A
/// negative zero path is the key `"-0"`, not `"0"`.
///
/// # Examples
///
/// ```
/// use compat_util::matches_property;
/// use compat_value::Value;
/// use serde_json::json;
///
/// let in_new_york = matches_property(["address", "city"], &Value::from("New York"));
///
/// let alice = Value::from_json(&json!({"address": {"city": "New York"}}));
/// let bob = Value::from_json(&json!({"address": {"city": "Boston"}}));
/// assert!(in_new_york(&alice));
/// assert!(!in_new_york(&bob));
/// ```
pub fn matches_property(
    path: impl Into<PropertyPath>,
    source: &Value,
) -> impl Fn(&Value) -> bool {
    let path = path.into();
    let source = clone_deep(source);

    move |target: &Value| {
        let resolved = get(target, &path);
        if resolved.value.is_undefined() {
            return has(target, &path);
        }
        if source.is_undefined() {
            return false;
        }
        if is_empty_reference(&source) {
            return true;
        }
        compare(&resolved.value, &source, MatchMode::Partial)
    }
}

/// Creates a predicate that checks whether its argument partially matches
/// `source`. `source` is deep-cloned once, here.
///
/// # Examples
///
/// ```
/// use compat_util::matches;
/// use compat_value::Value;
/// use serde_json::json;
///
/// let is_admin = matches(&Value::from_json(&json!({"role": "admin"})));
/// assert!(is_admin(&Value::from_json(&json!({"name": "a", "role": "admin"}))));
/// assert!(!is_admin(&Value::from_json(&json!({"name": "b"}))));
/// ```
pub fn matches(source: &Value) -> impl Fn(&Value) -> bool {
    let source = clone_deep(source);
    move |target: &Value| is_match(target, &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compat_value::{Primitive, PropertyKey};
    use serde_json::json;

    #[test]
    fn test_shallow_key() {
        let pred = matches_property("a", &Value::from(1));
        assert!(pred(&Value::from_json(&json!({"a": 1, "b": 2}))));
        assert!(!pred(&Value::from_json(&json!({"a": 2}))));
        assert!(!pred(&Value::object()));
        assert!(!pred(&Value::Null));
    }

    #[test]
    fn test_deep_string_path() {
        let pred = matches_property("a.b", &Value::from_json(&json!({"c": 1})));
        assert!(pred(&Value::from_json(&json!({"a": {"b": {"c": 1, "d": 2}}}))));
        assert!(!pred(&Value::from_json(&json!({"a": {"b": {"c": 2}}}))));
    }

    #[test]
    fn test_undefined_source_uses_existence() {
        let pred = matches_property("a", &Value::Undefined);
        assert!(pred(&Value::object_from([("a", Value::Undefined)])));
        assert!(!pred(&Value::object()));
        assert!(!pred(&Value::from_json(&json!({"a": 1}))));
    }

    #[test]
    fn test_undefined_value_falls_back_to_has() {
        // A present-but-undefined property passes even for a non-undefined
        // source; a missing one does not.
        let pred = matches_property("a", &Value::from(1));
        assert!(pred(&Value::object_from([("a", Value::Undefined)])));
        assert!(!pred(&Value::object_from([("b", Value::Undefined)])));
    }

    #[test]
    fn test_null_source_is_not_a_wildcard() {
        let pred = matches_property("a", &Value::Null);
        assert!(pred(&Value::from_json(&json!({"a": null}))));
        assert!(!pred(&Value::from_json(&json!({"a": 1}))));
    }

    #[test]
    fn test_empty_source_matches_any_present_value() {
        let pred = matches_property("a", &Value::object());
        assert!(pred(&Value::from_json(&json!({"a": [1]}))));
        assert!(pred(&Value::from_json(&json!({"a": 5}))));
        assert!(pred(&Value::from_json(&json!({"a": null}))));
        assert!(!pred(&Value::object()));
    }

    #[test]
    fn test_negative_zero_path() {
        let target = Value::from_json(&json!({"-0": "a", "0": "b"}));
        assert!(matches_property(-0.0, &Value::from("a"))(&target));
        assert!(matches_property(0.0, &Value::from("b"))(&target));
        assert!(!matches_property(-0.0, &Value::from("b"))(&target));
        assert!(matches_property(
            &Value::boxed(Primitive::Number(-0.0)),
            &Value::from("a")
        )(&target));
    }

    #[test]
    fn test_source_is_cloned_at_construction() {
        let source = Value::from_json(&json!({"b": 1}));
        let pred = matches_property("a", &source);
        source.as_object().unwrap().set("b", Value::from(2));

        assert!(pred(&Value::from_json(&json!({"a": {"b": 1}}))));
        assert!(!pred(&Value::from_json(&json!({"a": {"b": 2}}))));
    }

    #[test]
    fn test_key_sequence_path() {
        let pred = matches_property(
            vec![PropertyKey::from("a.b"), PropertyKey::from("c")],
            &Value::from(true),
        );
        let target = Value::object_from([("a.b", Value::from_json(&json!({"c": true})))]);
        assert!(pred(&target));
    }

    #[test]
    fn test_matches_clones_source() {
        let source = Value::from_json(&json!({"a": 1}));
        let pred = matches(&source);
        source.as_object().unwrap().set("a", Value::from(2));
        assert!(pred(&Value::from_json(&json!({"a": 1}))));
        assert!(pred(&Value::from_json(&json!({"a": 1, "b": 2}))));
        assert!(!pred(&Value::from_json(&json!({"a": 2}))));
    }
}
