//! Property keys and symbols.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Largest valid array index (`2^32 - 2`).
pub const MAX_ARRAY_INDEX: usize = 4_294_967_294;

/// A unique symbol value.
///
/// Two symbols are equal only when they are the same symbol; the
/// description is informational.
#[derive(Clone)]
pub struct Symbol(Rc<SymbolData>);

struct SymbolData {
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Symbol(Rc::new(SymbolData {
            description: description.map(str::to_string),
        }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as *const () as usize).hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// An own-property key: a string or a symbol.
///
/// Numeric keys do not exist at this level; numbers are converted to their
/// string form before they become keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// Returns the array index this key denotes, if it is a canonical one.
    ///
    /// `"0"` and `"12"` are indices, `"012"`, `"-1"` and `"1.5"` are not.
    pub fn as_index(&self) -> Option<usize> {
        let s = self.as_str()?;
        let bytes = s.as_bytes();
        if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
            return None;
        }
        if !bytes.iter().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse::<usize>().ok().filter(|&i| i <= MAX_ARRAY_INDEX)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<&String> for PropertyKey {
    fn from(s: &String) -> Self {
        PropertyKey::String(s.clone())
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        PropertyKey::String(index.to_string())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(sym: Symbol) -> Self {
        PropertyKey::Symbol(sym)
    }
}

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{:?}", s),
            PropertyKey::Symbol(sym) => write!(f, "{:?}", sym),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => f.write_str(s),
            PropertyKey::Symbol(sym) => write!(f, "{:?}", sym),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_compare_by_identity() {
        let a = Symbol::new(Some("a"));
        let b = Symbol::new(Some("a"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_canonical_index() {
        assert_eq!(PropertyKey::from("0").as_index(), Some(0));
        assert_eq!(PropertyKey::from("42").as_index(), Some(42));
        assert_eq!(PropertyKey::from("042").as_index(), None);
        assert_eq!(PropertyKey::from("-1").as_index(), None);
        assert_eq!(PropertyKey::from("1.5").as_index(), None);
        assert_eq!(PropertyKey::from("").as_index(), None);
        assert_eq!(PropertyKey::from("4294967295").as_index(), None);
        assert_eq!(PropertyKey::from(Symbol::new(None)).as_index(), None);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(PropertyKey::from(7usize), PropertyKey::from("7"));
    }
}
