//! Type definitions for property paths.

use compat_value::{PropertyKey, Symbol, Value};

use crate::key::to_key;
use crate::parse::to_path;

/// A property path: a single key or an already-segmented key sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyPath {
    /// A single key. A string key containing `.`, `[` or `]` is parsed as
    /// a deep path unless the target owns it verbatim.
    Key(PropertyKey),
    /// Segments used exactly as given.
    Keys(Vec<PropertyKey>),
}

impl PropertyPath {
    /// Builds a path from a runtime value: arrays become key sequences
    /// (each element converted with [`to_key`]), anything else a single
    /// key.
    pub fn from_value(value: &Value) -> Self {
        if compat_value::is_array(value) {
            let keys = value
                .elements()
                .unwrap_or_default()
                .iter()
                .map(to_key)
                .collect();
            return PropertyPath::Keys(keys);
        }
        PropertyPath::Key(to_key(value))
    }

    /// Resolves the segments to walk on `target`.
    pub fn segments(&self, target: &Value) -> Vec<PropertyKey> {
        match self {
            PropertyPath::Keys(keys) => keys.clone(),
            PropertyPath::Key(key) => match key.as_str() {
                Some(s) if is_deep(s) && !target.has_own(key) => to_path(s),
                _ => vec![key.clone()],
            },
        }
    }
}

fn is_deep(s: &str) -> bool {
    s.contains(['.', '[', ']'])
}

impl From<&str> for PropertyPath {
    fn from(s: &str) -> Self {
        PropertyPath::Key(PropertyKey::from(s))
    }
}

impl From<String> for PropertyPath {
    fn from(s: String) -> Self {
        PropertyPath::Key(PropertyKey::String(s))
    }
}

impl From<PropertyKey> for PropertyPath {
    fn from(key: PropertyKey) -> Self {
        PropertyPath::Key(key)
    }
}

impl From<Symbol> for PropertyPath {
    fn from(sym: Symbol) -> Self {
        PropertyPath::Key(PropertyKey::Symbol(sym))
    }
}

impl From<f64> for PropertyPath {
    fn from(n: f64) -> Self {
        PropertyPath::Key(to_key(&Value::Number(n)))
    }
}

impl From<i32> for PropertyPath {
    fn from(n: i32) -> Self {
        PropertyPath::Key(to_key(&Value::from(n)))
    }
}

impl From<usize> for PropertyPath {
    fn from(index: usize) -> Self {
        PropertyPath::Key(PropertyKey::from(index))
    }
}

impl From<Vec<PropertyKey>> for PropertyPath {
    fn from(keys: Vec<PropertyKey>) -> Self {
        PropertyPath::Keys(keys)
    }
}

impl From<&[&str]> for PropertyPath {
    fn from(keys: &[&str]) -> Self {
        PropertyPath::Keys(keys.iter().map(|k| PropertyKey::from(*k)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyPath {
    fn from(keys: [&str; N]) -> Self {
        PropertyPath::Keys(keys.iter().map(|k| PropertyKey::from(*k)).collect())
    }
}

impl From<&Value> for PropertyPath {
    fn from(value: &Value) -> Self {
        PropertyPath::from_value(value)
    }
}

impl From<&PropertyPath> for PropertyPath {
    fn from(path: &PropertyPath) -> Self {
        path.clone()
    }
}

/// The outcome of resolving a path.
///
/// `found` distinguishes a property that exists and holds `undefined`
/// from one that does not exist at all; in both cases `value` is
/// `Value::Undefined`.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub found: bool,
    pub value: Value,
}

impl Resolved {
    pub fn found(value: Value) -> Self {
        Resolved { found: true, value }
    }

    pub fn missing() -> Self {
        Resolved {
            found: false,
            value: Value::Undefined,
        }
    }

    /// The resolved value, or `None` when the path does not resolve.
    pub fn into_option(self) -> Option<Value> {
        self.found.then_some(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compat_value::Primitive;

    #[test]
    fn test_string_key_is_parsed_unless_owned() {
        let path = PropertyPath::from("a.b");
        let plain = Value::object();
        assert_eq!(
            path.segments(&plain),
            vec![PropertyKey::from("a"), PropertyKey::from("b")]
        );

        let owner = Value::object_from([("a.b", Value::from(1))]);
        assert_eq!(path.segments(&owner), vec![PropertyKey::from("a.b")]);
    }

    #[test]
    fn test_closing_bracket_marks_a_deep_key() {
        assert!(is_deep("a]"));
        assert!(is_deep("a[0]"));
        assert!(!is_deep("a"));

        let path = PropertyPath::from("a]b");
        assert_eq!(path.segments(&Value::object()), vec![PropertyKey::from("a]b")]);
        let owner = Value::object_from([("a]b", Value::from(1))]);
        assert_eq!(path.segments(&owner), vec![PropertyKey::from("a]b")]);
    }

    #[test]
    fn test_keys_are_used_verbatim() {
        let path = PropertyPath::from(["a.b", "c"]);
        assert_eq!(
            path.segments(&Value::object()),
            vec![PropertyKey::from("a.b"), PropertyKey::from("c")]
        );
    }

    #[test]
    fn test_negative_zero_keys() {
        assert_eq!(PropertyPath::from(-0.0), PropertyPath::Key("-0".into()));
        assert_eq!(PropertyPath::from(0.0), PropertyPath::Key("0".into()));
        assert_eq!(
            PropertyPath::from(&Value::boxed(Primitive::Number(-0.0))),
            PropertyPath::Key("-0".into())
        );
        let arr = Value::array(vec![Value::from(-0.0), Value::from("a")]);
        assert_eq!(
            PropertyPath::from(&arr),
            PropertyPath::Keys(vec!["-0".into(), "a".into()])
        );
    }

    #[test]
    fn test_resolved_into_option() {
        assert!(Resolved::missing().into_option().is_none());
        assert!(Resolved::found(Value::Undefined).into_option().is_some());
    }
}
