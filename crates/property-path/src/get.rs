use compat_value::{PropertyKey, Value};

use crate::types::{PropertyPath, Resolved};

/// Walks `segments` over own properties of `target`.
///
/// Resolution stops with `found = false` as soon as a segment is missing
/// or a `null`/`undefined` value is reached before the last segment. An
/// empty path does not resolve.
pub fn resolve(target: &Value, segments: &[PropertyKey]) -> Resolved {
    if segments.is_empty() {
        return Resolved::missing();
    }

    let mut current = target.clone();
    for segment in segments {
        if current.is_nullish() {
            return Resolved::missing();
        }
        current = match current.get_own(segment) {
            Some(v) => v,
            None => return Resolved::missing(),
        };
    }
    Resolved::found(current)
}

/// Gets the value at `path` of `target`.
///
/// # Example
///
/// ```
/// use compat_property_path::get;
/// use compat_value::Value;
/// use serde_json::json;
///
/// let doc = Value::from_json(&json!({"a": {"b": [10, 20]}}));
/// let resolved = get(&doc, "a.b[1]");
/// assert!(resolved.found);
/// assert_eq!(resolved.value.as_number(), Some(20.0));
///
/// assert!(!get(&doc, "a.c").found);
/// ```
pub fn get(target: &Value, path: impl Into<PropertyPath>) -> Resolved {
    let path = path.into();
    resolve(target, &path.segments(target))
}

/// Gets the value at `path`, or `default` when it does not resolve or
/// resolves to `undefined`.
pub fn get_or(target: &Value, path: impl Into<PropertyPath>, default: Value) -> Value {
    match get(target, path) {
        Resolved {
            found: true,
            value,
        } if !value.is_undefined() => value,
        _ => default,
    }
}

/// Checks that every segment of `path` is an own property along the way.
///
/// # Example
///
/// ```
/// use compat_property_path::has;
/// use compat_value::Value;
///
/// let obj = Value::object_from([("a", Value::Undefined)]);
/// assert!(has(&obj, "a"));
/// assert!(!has(&obj, "b"));
/// ```
pub fn has(target: &Value, path: impl Into<PropertyPath>) -> bool {
    get(target, path).found
}

#[cfg(test)]
mod tests {
    use super::*;
    use compat_value::Symbol;

    #[test]
    fn test_get_nested_object() {
        let doc = Value::object_from([("a", Value::object_from([("b", Value::from(1))]))]);
        assert_eq!(get(&doc, ["a", "b"]).value.as_number(), Some(1.0));
        assert_eq!(get(&doc, "a.b").value.as_number(), Some(1.0));
    }

    #[test]
    fn test_present_undefined_versus_absent() {
        let doc = Value::object_from([("a", Value::Undefined)]);
        let present = get(&doc, "a");
        assert!(present.found);
        assert!(present.value.is_undefined());

        let absent = get(&doc, "b");
        assert!(!absent.found);
        assert!(absent.value.is_undefined());
    }

    #[test]
    fn test_nullish_intermediate_stops() {
        let doc = Value::object_from([("a", Value::Null)]);
        assert!(get(&doc, "a").found);
        assert!(!get(&doc, "a.b").found);
        assert!(!get(&Value::Null, "a").found);
        assert!(!get(&Value::Undefined, "a").found);
    }

    #[test]
    fn test_empty_path_does_not_resolve() {
        let doc = Value::object();
        assert!(!resolve(&doc, &[]).found);
        assert!(!has(&doc, PropertyPath::Keys(vec![])));
    }

    #[test]
    fn test_array_indices_and_length() {
        let doc = Value::array(vec![Value::from("x"), Value::from("y")]);
        assert_eq!(get(&doc, 1usize).value.as_str(), Some("y"));
        assert_eq!(get(&doc, "length").value.as_number(), Some(2.0));
        assert!(!has(&doc, 2usize));
        assert!(has(&doc, "[0]"));
    }

    #[test]
    fn test_string_targets() {
        let s = Value::from("abc");
        assert_eq!(get(&s, "length").value.as_number(), Some(3.0));
        assert_eq!(get(&s, 0usize).value.as_str(), Some("a"));
        assert!(!has(&Value::from(1), "length"));
    }

    #[test]
    fn test_symbol_keys() {
        let sym = Symbol::new(Some("k"));
        let doc = Value::object_from([(sym.clone(), Value::from(5))]);
        assert_eq!(get(&doc, sym.clone()).value.as_number(), Some(5.0));
        assert!(has(&doc, sym));
    }

    #[test]
    fn test_get_or() {
        let doc = Value::object_from([("a", Value::Undefined), ("b", Value::Null)]);
        assert_eq!(get_or(&doc, "a", Value::from(1)).as_number(), Some(1.0));
        assert_eq!(get_or(&doc, "c", Value::from(2)).as_number(), Some(2.0));
        assert!(matches!(get_or(&doc, "b", Value::from(3)), Value::Null));
    }
}
