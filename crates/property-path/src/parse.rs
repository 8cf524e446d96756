//! String path parsing (`a.b[0]['c.d']`).

use compat_value::PropertyKey;
use tracing::debug;

use crate::PathError;

#[derive(Clone, Copy, PartialEq)]
enum State {
    Plain,
    Bracket,
    Quoted(char),
}

/// Splits a deep key into segments.
///
/// Dots and brackets separate segments; quoted bracket contents are taken
/// literally, with `\` escaping the next character. A leading `.` yields an
/// empty first segment and empty segments between dots are dropped. This
/// function never fails: an unterminated bracket or quote keeps whatever
/// was read so far.
///
/// # Example
///
/// ```
/// use compat_property_path::to_path;
/// use compat_value::PropertyKey;
///
/// assert_eq!(
///     to_path("a[0]['b.c'].d"),
///     vec![
///         PropertyKey::from("a"),
///         PropertyKey::from("0"),
///         PropertyKey::from("b.c"),
///         PropertyKey::from("d"),
///     ]
/// );
/// ```
pub fn to_path(deep_key: &str) -> Vec<PropertyKey> {
    scan(deep_key).0
}

/// Strict variant of [`to_path`] that rejects unterminated brackets and
/// quotes.
///
/// # Errors
///
/// - `PathError::UnterminatedBracket` - a `[` is never closed
/// - `PathError::UnterminatedQuote` - a quoted bracket key is never closed
pub fn parse_path(deep_key: &str) -> Result<Vec<PropertyKey>, PathError> {
    let (path, open) = scan(deep_key);
    match open {
        None => Ok(path),
        Some(err) => {
            debug!(path = deep_key, error = %err, "rejected property path");
            Err(err)
        }
    }
}

/// Returns the segments and, if the input ended inside a bracket or quote,
/// the error describing where it was opened.
fn scan(deep_key: &str) -> (Vec<PropertyKey>, Option<PathError>) {
    let mut result = Vec::new();
    let mut key = String::new();
    let mut state = State::Plain;
    let mut opened_at = 0;
    let mut chars = deep_key.char_indices();

    if deep_key.starts_with('.') {
        result.push(PropertyKey::from(""));
        chars.next();
    }

    while let Some((offset, c)) = chars.next() {
        match state {
            State::Quoted(quote) => {
                if c == '\\' {
                    if let Some((_, escaped)) = chars.next() {
                        key.push(escaped);
                    }
                } else if c == quote {
                    state = State::Bracket;
                } else {
                    key.push(c);
                }
            }
            State::Bracket => {
                if c == '"' || c == '\'' {
                    state = State::Quoted(c);
                    opened_at = offset;
                } else if c == ']' {
                    state = State::Plain;
                    result.push(PropertyKey::String(std::mem::take(&mut key)));
                } else {
                    key.push(c);
                }
            }
            State::Plain => {
                if c == '[' {
                    state = State::Bracket;
                    opened_at = offset;
                    if !key.is_empty() {
                        result.push(PropertyKey::String(std::mem::take(&mut key)));
                    }
                } else if c == '.' {
                    if !key.is_empty() {
                        result.push(PropertyKey::String(std::mem::take(&mut key)));
                    }
                } else {
                    key.push(c);
                }
            }
        }
    }

    if !key.is_empty() {
        result.push(PropertyKey::String(key));
    }
    let open = match state {
        State::Plain => None,
        State::Bracket => Some(PathError::UnterminatedBracket(opened_at)),
        State::Quoted(_) => Some(PathError::UnterminatedQuote(opened_at)),
    };
    (result, open)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<PropertyKey> {
        items.iter().map(|s| PropertyKey::from(*s)).collect()
    }

    #[test]
    fn test_dot_notation() {
        assert_eq!(to_path("a.b.c"), keys(&["a", "b", "c"]));
        assert_eq!(to_path("a"), keys(&["a"]));
        assert_eq!(to_path(""), keys(&[]));
    }

    #[test]
    fn test_bracket_notation() {
        assert_eq!(to_path("a[0].b"), keys(&["a", "0", "b"]));
        assert_eq!(to_path("a[-1]"), keys(&["a", "-1"]));
        assert_eq!(to_path("[0][1]"), keys(&["0", "1"]));
    }

    #[test]
    fn test_quoted_keys() {
        assert_eq!(to_path("a['b.c']"), keys(&["a", "b.c"]));
        assert_eq!(to_path("a[\"b]c\"]"), keys(&["a", "b]c"]));
        assert_eq!(to_path("a['it\\'s']"), keys(&["a", "it's"]));
    }

    #[test]
    fn test_leading_and_repeated_dots() {
        assert_eq!(to_path(".a"), keys(&["", "a"]));
        assert_eq!(to_path("a..b"), keys(&["a", "b"]));
        assert_eq!(to_path("a."), keys(&["a"]));
    }

    #[test]
    fn test_empty_brackets() {
        assert_eq!(to_path("a[]"), keys(&["a", ""]));
    }

    #[test]
    fn test_lenient_on_unterminated_input() {
        assert_eq!(to_path("a[b"), keys(&["a", "b"]));
        assert_eq!(to_path("a['b"), keys(&["a", "b"]));
    }

    #[test]
    fn test_strict_parse_errors() {
        assert_eq!(parse_path("a[b"), Err(PathError::UnterminatedBracket(1)));
        assert_eq!(parse_path("a['b"), Err(PathError::UnterminatedQuote(2)));
        assert_eq!(parse_path("a[0].b"), Ok(keys(&["a", "0", "b"])));
    }
}
