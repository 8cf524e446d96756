//! The dynamic value model.
//!
//! Primitives are stored inline. Every other value lives behind an
//! [`Object`] handle: cloning a handle aliases the same heap object, so
//! identity, sharing and cycles behave like they do in a garbage-collected
//! object graph.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::key::{PropertyKey, Symbol, MAX_ARRAY_INDEX};
use crate::number::{is_valid_length, number_to_string};
use crate::typed_array::TypedArray;

/// Any value the compat utilities operate on.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Object(Object),
}

/// The primitive wrapped by a boxed primitive object.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Primitive {
    pub fn to_value(&self) -> Value {
        match self {
            Primitive::Bool(b) => Value::Bool(*b),
            Primitive::Number(n) => Value::Number(*n),
            Primitive::String(s) => Value::String(s.clone()),
        }
    }
}

/// Signature of a native function body.
pub type NativeFn = dyn Fn(&[Value]) -> Value;

/// A callable value. Functions are never copied by the clone engine, so
/// the body is shared behind an `Rc`.
#[derive(Clone)]
pub struct Function {
    name: String,
    body: Rc<NativeFn>,
}

impl Function {
    pub fn new(name: impl Into<String>, body: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Function {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Internal state of a heap object, by kind.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    Plain,
    Array(Vec<Value>),
    /// An argument list: indexable with a `length`, but not an array.
    Arguments(Vec<Value>),
    Boxed(Primitive),
    /// Milliseconds since the epoch; `NaN` marks an invalid date.
    Date(f64),
    RegExp {
        source: String,
        flags: String,
        last_index: usize,
    },
    /// Entries in insertion order; keys are unique under SameValueZero.
    Map(Vec<(Value, Value)>),
    /// Members in insertion order; unique under SameValueZero.
    Set(Vec<Value>),
    Error {
        name: String,
        message: String,
    },
    Function(Function),
    TypedArray(TypedArray),
}

impl ObjectKind {
    /// Short kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Plain => "Object",
            ObjectKind::Array(_) => "Array",
            ObjectKind::Arguments(_) => "Arguments",
            ObjectKind::Boxed(Primitive::Bool(_)) => "Boolean",
            ObjectKind::Boxed(Primitive::Number(_)) => "Number",
            ObjectKind::Boxed(Primitive::String(_)) => "String",
            ObjectKind::Date(_) => "Date",
            ObjectKind::RegExp { .. } => "RegExp",
            ObjectKind::Map(_) => "Map",
            ObjectKind::Set(_) => "Set",
            ObjectKind::Error { .. } => "Error",
            ObjectKind::Function(_) => "Function",
            ObjectKind::TypedArray(t) => t.kind().name(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectData {
    pub kind: ObjectKind,
    /// Own enumerable properties that are not part of the kind's internal
    /// state (array elements live in the kind, not here).
    pub props: IndexMap<PropertyKey, Value>,
}

/// Opaque identity of a heap object, stable while the object is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// Largest element count an array or argument list grows to.
pub const MAX_DENSE_LENGTH: usize = 1 << 24;

/// A shared handle to a heap object.
#[derive(Clone)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Object {
    pub fn new(kind: ObjectKind) -> Self {
        Object(Rc::new(RefCell::new(ObjectData {
            kind,
            props: IndexMap::new(),
        })))
    }

    pub fn id(&self) -> ObjectId {
        ObjectId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn borrow(&self) -> Ref<'_, ObjectData> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ObjectData> {
        self.0.borrow_mut()
    }

    pub fn kind_name(&self) -> &'static str {
        self.borrow().kind.name()
    }

    /// Reads an own property, including the kind's intrinsic ones
    /// (indices and `length` of array-likes, `message` of errors,
    /// `lastIndex` of regexes).
    pub fn get_own(&self, key: &PropertyKey) -> Option<Value> {
        let data = self.borrow();
        let is_length = key.as_str() == Some("length");
        match &data.kind {
            ObjectKind::Array(items) | ObjectKind::Arguments(items) => {
                if is_length {
                    return Some(Value::Number(items.len() as f64));
                }
                if let Some(i) = key.as_index() {
                    return items.get(i).cloned();
                }
            }
            ObjectKind::TypedArray(t) => {
                if is_length {
                    return Some(Value::Number(t.len() as f64));
                }
                if let Some(i) = key.as_index() {
                    return t.get(i).map(Value::Number);
                }
            }
            ObjectKind::Boxed(Primitive::String(s)) => {
                if let Some(v) = string_own(s, key) {
                    return Some(v);
                }
            }
            ObjectKind::Error { message, .. } if key.as_str() == Some("message") => {
                if let Some(v) = data.props.get(key) {
                    return Some(v.clone());
                }
                return Some(Value::String(message.clone()));
            }
            ObjectKind::RegExp { last_index, .. } if key.as_str() == Some("lastIndex") => {
                return Some(Value::Number(*last_index as f64));
            }
            _ => {}
        }
        data.props.get(key).cloned()
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.get_own(key).is_some()
    }

    /// Own enumerable keys: element indices first, then string keys in
    /// insertion order, then symbol keys in insertion order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let data = self.borrow();
        let element_count = match &data.kind {
            ObjectKind::Array(items) | ObjectKind::Arguments(items) => items.len(),
            ObjectKind::TypedArray(t) => t.len(),
            ObjectKind::Boxed(Primitive::String(s)) => s.chars().count(),
            _ => 0,
        };
        let mut keys: Vec<PropertyKey> = (0..element_count).map(PropertyKey::from).collect();
        keys.extend(data.props.keys().filter(|k| !k.is_symbol()).cloned());
        keys.extend(data.props.keys().filter(|k| k.is_symbol()).cloned());
        keys
    }

    /// Writes an own property. Index keys on arrays, arguments and typed
    /// arrays write elements; `length` on an array resizes it.
    ///
    /// Elements are stored densely, so a write that would grow an array
    /// past [`MAX_DENSE_LENGTH`] is ignored, as is a `length` outside the
    /// array length range.
    pub fn set(&self, key: impl Into<PropertyKey>, value: Value) {
        let key = key.into();
        let mut data = self.borrow_mut();
        match &mut data.kind {
            ObjectKind::Array(items) | ObjectKind::Arguments(items) => {
                if let Some(i) = key.as_index() {
                    if i >= items.len() {
                        if i >= MAX_DENSE_LENGTH {
                            debug!(index = i, "element write beyond dense storage ignored");
                            return;
                        }
                        items.resize(i + 1, Value::Undefined);
                    }
                    items[i] = value;
                    return;
                }
            }
            ObjectKind::TypedArray(t) => {
                if let Some(i) = key.as_index() {
                    if let Value::Number(n) = value {
                        t.set(i, n);
                    }
                    return;
                }
            }
            _ => {}
        }
        if key.as_str() == Some("length") {
            if let (ObjectKind::Array(items), Value::Number(n)) = (&mut data.kind, &value) {
                let max_length = (MAX_ARRAY_INDEX + 1) as f64;
                if !is_valid_length(*n) || *n > max_length {
                    debug!(length = *n, "invalid array length ignored");
                } else if *n as usize > MAX_DENSE_LENGTH.max(items.len()) {
                    debug!(length = *n, "array growth beyond dense storage ignored");
                } else {
                    items.resize(*n as usize, Value::Undefined);
                }
                return;
            }
        }
        data.props.insert(key, value);
    }

    /// Removes an own property from `props`. Elements are not removable.
    pub fn remove(&self, key: &PropertyKey) -> Option<Value> {
        self.borrow_mut().props.shift_remove(key)
    }

    /// Looks up a map entry by SameValueZero key.
    pub fn map_get(&self, key: &Value) -> Option<Value> {
        match &self.borrow().kind {
            ObjectKind::Map(entries) => entries
                .iter()
                .find(|(k, _)| k.same_value_zero(key))
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Inserts or replaces a map entry. No-op on non-maps.
    pub fn map_insert(&self, key: Value, value: Value) {
        if let ObjectKind::Map(entries) = &mut self.borrow_mut().kind {
            let key = normalize_zero(key);
            match entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
    }

    /// Adds a set member unless already present. No-op on non-sets.
    pub fn set_insert(&self, member: Value) {
        if let ObjectKind::Set(members) = &mut self.borrow_mut().kind {
            let member = normalize_zero(member);
            if !members.iter().any(|m| m.same_value_zero(&member)) {
                members.push(member);
            }
        }
    }

    /// Number of map entries or set members.
    pub fn size(&self) -> Option<usize> {
        match &self.borrow().kind {
            ObjectKind::Map(entries) => Some(entries.len()),
            ObjectKind::Set(members) => Some(members.len()),
            _ => None,
        }
    }
}

impl fmt::Debug for Object {
    // Only the identity and kind: printing contents could recurse forever
    // on cyclic graphs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => write!(f, "{}#{:x}", data.kind.name(), self.id().0),
            Err(_) => write!(f, "<borrowed>#{:x}", self.id().0),
        }
    }
}

/// Map keys and set members store `-0` as `+0`.
fn normalize_zero(value: Value) -> Value {
    match value {
        Value::Number(n) if n == 0.0 => Value::Number(0.0),
        other => other,
    }
}

fn string_own(s: &str, key: &PropertyKey) -> Option<Value> {
    if key.as_str() == Some("length") {
        return Some(Value::Number(s.chars().count() as f64));
    }
    let i = key.as_index()?;
    s.chars().nth(i).map(|c| Value::String(c.to_string()))
}

impl Value {
    fn from_kind(kind: ObjectKind) -> Self {
        Value::Object(Object::new(kind))
    }

    /// An empty plain object.
    pub fn object() -> Self {
        Value::from_kind(ObjectKind::Plain)
    }

    /// A plain object with the given own properties, in order.
    pub fn object_from<K, I>(entries: I) -> Self
    where
        K: Into<PropertyKey>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let obj = Object::new(ObjectKind::Plain);
        for (k, v) in entries {
            obj.set(k, v);
        }
        Value::Object(obj)
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::from_kind(ObjectKind::Array(items))
    }

    pub fn arguments(items: Vec<Value>) -> Self {
        Value::from_kind(ObjectKind::Arguments(items))
    }

    pub fn boxed(primitive: Primitive) -> Self {
        Value::from_kind(ObjectKind::Boxed(primitive))
    }

    pub fn date(epoch_ms: f64) -> Self {
        Value::from_kind(ObjectKind::Date(epoch_ms))
    }

    /// A regular expression. Flags are deduplicated and stored in their
    /// canonical order.
    pub fn regexp(source: &str, flags: &str) -> Self {
        let canonical: String = "dgimsuvy".chars().filter(|c| flags.contains(*c)).collect();
        Value::from_kind(ObjectKind::RegExp {
            source: if source.is_empty() {
                "(?:)".to_string()
            } else {
                source.to_string()
            },
            flags: canonical,
            last_index: 0,
        })
    }

    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        let obj = Object::new(ObjectKind::Map(Vec::with_capacity(entries.len())));
        for (k, v) in entries {
            obj.map_insert(k, v);
        }
        Value::Object(obj)
    }

    pub fn set(members: Vec<Value>) -> Self {
        let obj = Object::new(ObjectKind::Set(Vec::with_capacity(members.len())));
        for m in members {
            obj.set_insert(m);
        }
        Value::Object(obj)
    }

    pub fn error(name: &str, message: &str) -> Self {
        Value::from_kind(ObjectKind::Error {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn function(name: &str, body: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Value::from_kind(ObjectKind::Function(Function::new(name, body)))
    }

    pub fn typed_array(array: TypedArray) -> Self {
        Value::from_kind(ObjectKind::TypedArray(array))
    }

    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Symbol::new(Some(description)))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Value::Object(_))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the primitive content of a primitive or boxed primitive.
    pub fn unwrap_primitive(&self) -> Option<Value> {
        match self {
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(self.clone()),
            Value::Object(obj) => match &obj.borrow().kind {
                ObjectKind::Boxed(p) => Some(p.to_value()),
                _ => None,
            },
            _ => None,
        }
    }

    /// SameValueZero: `NaN` equals `NaN`, `-0` equals `0`, objects and
    /// symbols by identity.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self.strict_equals(other),
        }
    }

    /// Strict equality (`===`): like SameValueZero except `NaN` is unequal
    /// to itself.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Reads an own property of any value. Strings expose their
    /// characters and `length`; other primitives have none.
    pub fn get_own(&self, key: &PropertyKey) -> Option<Value> {
        match self {
            Value::String(s) => string_own(s, key),
            Value::Object(obj) => obj.get_own(key),
            _ => None,
        }
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.get_own(key).is_some()
    }

    /// Own enumerable keys; empty for primitives other than strings.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        match self {
            Value::String(s) => (0..s.chars().count()).map(PropertyKey::from).collect(),
            Value::Object(obj) => obj.own_keys(),
            _ => Vec::new(),
        }
    }

    /// Element adapter shared by arrays, argument lists and typed arrays.
    pub fn elements(&self) -> Option<Vec<Value>> {
        let obj = self.as_object()?;
        let data = obj.borrow();
        match &data.kind {
            ObjectKind::Array(items) | ObjectKind::Arguments(items) => Some(items.clone()),
            ObjectKind::TypedArray(t) => {
                Some(t.to_f64_vec().into_iter().map(Value::Number).collect())
            }
            _ => None,
        }
    }

    /// Type name in the style of `typeof`, with `"null"` for null.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(obj) => match obj.borrow().kind {
                ObjectKind::Function(_) => "function",
                _ => "object",
            },
        }
    }

    /// String conversion used when a value is turned into a property key.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.clone(),
            Value::Symbol(sym) => format!("Symbol({})", sym.description().unwrap_or("")),
            Value::Object(obj) => {
                let data = obj.borrow();
                match &data.kind {
                    ObjectKind::Boxed(p) => p.to_value().to_display_string(),
                    ObjectKind::Array(items) => items
                        .iter()
                        .map(|v| {
                            if v.is_nullish() {
                                String::new()
                            } else {
                                v.to_display_string()
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(","),
                    ObjectKind::RegExp { source, flags, .. } => format!("/{}/{}", source, flags),
                    ObjectKind::Error { name, message } if message.is_empty() => name.clone(),
                    ObjectKind::Error { name, message } => format!("{}: {}", name, message),
                    _ => "[object Object]".to_string(),
                }
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_alias() {
        let obj = Value::object();
        let alias = obj.clone();
        alias.as_object().unwrap().set("a", Value::from(1));
        assert!(obj.as_object().unwrap().has_own(&"a".into()));
        assert!(obj.same_value_zero(&alias));
    }

    #[test]
    fn test_same_value_zero() {
        assert!(Value::from(f64::NAN).same_value_zero(&Value::from(f64::NAN)));
        assert!(Value::from(0.0).same_value_zero(&Value::from(-0.0)));
        assert!(!Value::from(f64::NAN).strict_equals(&Value::from(f64::NAN)));
        assert!(!Value::object().same_value_zero(&Value::object()));
        assert!(!Value::from(1).same_value_zero(&Value::from("1")));
    }

    #[test]
    fn test_array_set_extends_and_length_resizes() {
        let arr = Value::array(vec![Value::from(1)]);
        let obj = arr.as_object().unwrap();
        obj.set(3usize, Value::from(4));
        assert_eq!(obj.get_own(&"length".into()).and_then(|v| v.as_number()), Some(4.0));
        assert!(obj.get_own(&"1".into()).unwrap().is_undefined());
        obj.set("length", Value::from(1));
        assert_eq!(arr.elements().unwrap().len(), 1);
    }

    #[test]
    fn test_out_of_range_array_writes_are_ignored() {
        let arr = Value::array(vec![Value::from(1), Value::from(2)]);
        let obj = arr.as_object().unwrap();
        obj.set("length", Value::from(9e15));
        obj.set("length", Value::from(4_294_967_296.0));
        obj.set(MAX_ARRAY_INDEX, Value::from(3));
        obj.set(MAX_DENSE_LENGTH, Value::from(3));
        assert_eq!(arr.elements().unwrap().len(), 2);
        assert!(!obj.has_own(&PropertyKey::from(MAX_ARRAY_INDEX)));

        obj.set(5usize, Value::from(6));
        assert_eq!(arr.elements().unwrap().len(), 6);
        obj.set("length", Value::from(0));
        assert!(arr.elements().unwrap().is_empty());
    }

    #[test]
    fn test_remove_own_property() {
        let obj = Value::object_from([("a", Value::from(1)), ("b", Value::from(2))]);
        let handle = obj.as_object().unwrap();
        assert_eq!(handle.remove(&"a".into()).and_then(|v| v.as_number()), Some(1.0));
        assert!(handle.remove(&"a".into()).is_none());
        assert_eq!(handle.own_keys(), vec![PropertyKey::from("b")]);
    }

    #[test]
    fn test_type_name_and_function_call() {
        let double = Value::function("double", |args| {
            Value::from(args.first().and_then(|v| v.as_number()).unwrap_or(0.0) * 2.0)
        });
        assert_eq!(double.type_name(), "function");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::array(vec![]).type_name(), "object");
        assert_eq!(Value::from("s").type_name(), "string");

        let result = match &double.as_object().unwrap().borrow().kind {
            ObjectKind::Function(f) => f.call(&[Value::from(21)]),
            _ => Value::Undefined,
        };
        assert_eq!(result.as_number(), Some(42.0));
    }

    #[test]
    fn test_own_keys_order() {
        let sym = Symbol::new(Some("s"));
        let arr = Value::array(vec![Value::from("x"), Value::from("y")]);
        let obj = arr.as_object().unwrap();
        obj.set(sym.clone(), Value::from(true));
        obj.set("extra", Value::from(1));
        assert_eq!(
            obj.own_keys(),
            vec![
                PropertyKey::from("0"),
                PropertyKey::from("1"),
                PropertyKey::from("extra"),
                PropertyKey::from(sym),
            ]
        );
    }

    #[test]
    fn test_string_own_properties() {
        let s = Value::from("abc");
        assert_eq!(s.get_own(&"length".into()).and_then(|v| v.as_number()), Some(3.0));
        assert_eq!(s.get_own(&"1".into()).unwrap().as_str(), Some("b"));
        assert!(s.get_own(&"3".into()).is_none());
        assert!(Value::from(5).get_own(&"length".into()).is_none());
    }

    #[test]
    fn test_map_and_set_normalize_zero() {
        let map = Value::map(vec![(Value::from(-0.0), Value::from("a"))]);
        let obj = map.as_object().unwrap();
        assert_eq!(obj.map_get(&Value::from(0.0)).unwrap().as_str(), Some("a"));
        obj.map_insert(Value::from(0.0), Value::from("b"));
        assert_eq!(obj.size(), Some(1));

        let set = Value::set(vec![Value::from(f64::NAN), Value::from(f64::NAN)]);
        assert_eq!(set.as_object().unwrap().size(), Some(1));
    }

    #[test]
    fn test_regexp_flags_are_canonical() {
        let re = Value::regexp("a+", "gig");
        assert_eq!(re.to_display_string(), "/a+/gi");
        assert_eq!(Value::regexp("", "").to_display_string(), "/(?:)/");
    }

    #[test]
    fn test_unwrap_primitive() {
        let boxed = Value::boxed(Primitive::Number(2.0));
        assert_eq!(boxed.unwrap_primitive().and_then(|v| v.as_number()), Some(2.0));
        assert!(Value::object().unwrap_primitive().is_none());
        assert!(Value::Null.unwrap_primitive().is_none());
    }

    #[test]
    fn test_debug_on_cycle_terminates() {
        let obj = Value::object();
        obj.as_object().unwrap().set("self", obj.clone());
        let printed = format!("{:?}", obj);
        assert!(printed.contains("Object#"));
    }
}
