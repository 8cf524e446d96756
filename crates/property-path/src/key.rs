use compat_value::{is_negative_zero, number_to_string, PropertyKey, Value};

/// Converts a value to a property key.
///
/// Strings and symbols pass through unchanged. Negative zero, bare or
/// boxed, becomes `"-0"` so that it addresses a different property than
/// `0`. Every other value uses its string form.
///
/// # Example
///
/// ```
/// use compat_property_path::to_key;
/// use compat_value::{PropertyKey, Value};
///
/// assert_eq!(to_key(&Value::from(1)), PropertyKey::from("1"));
/// assert_eq!(to_key(&Value::from(-0.0)), PropertyKey::from("-0"));
/// assert_eq!(to_key(&Value::from(0.0)), PropertyKey::from("0"));
/// ```
pub fn to_key(value: &Value) -> PropertyKey {
    match value {
        Value::String(s) => PropertyKey::String(s.clone()),
        Value::Symbol(sym) => PropertyKey::Symbol(sym.clone()),
        Value::Number(n) => number_key(*n),
        other => match other.unwrap_primitive() {
            Some(Value::Number(n)) => number_key(n),
            _ => PropertyKey::String(other.to_display_string()),
        },
    }
}

fn number_key(n: f64) -> PropertyKey {
    if is_negative_zero(n) {
        return PropertyKey::from("-0");
    }
    PropertyKey::String(number_to_string(n))
}
