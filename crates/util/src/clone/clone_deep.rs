use compat_value::{classify, Classification, Object, ObjectKind, PropertyKey, Tracker, Value};

/// Options for the clone engine.
#[derive(Debug, Clone, Copy)]
pub struct CloneOptions {
    /// Clone nested values too. When false only the top-level container is
    /// copied and its children are shared with the source. Default is true.
    pub deep: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self { deep: true }
    }
}

/// Customizer type used when none is given.
pub(crate) type NoCustomizer = fn(&Value, Option<&PropertyKey>) -> Option<Value>;

/// One clone traversal. The tracker maps every source object already
/// visited to its copy, which keeps cycles finite and shared sub-objects
/// shared.
pub(crate) struct Cloner<F> {
    options: CloneOptions,
    tracker: Tracker<Value>,
    customizer: Option<F>,
}

impl<F> Cloner<F>
where
    F: FnMut(&Value, Option<&PropertyKey>) -> Option<Value>,
{
    pub(crate) fn new(options: CloneOptions, customizer: Option<F>) -> Self {
        Cloner {
            options,
            tracker: Tracker::new(),
            customizer,
        }
    }

    pub(crate) fn clone_value(
        &mut self,
        value: &Value,
        key: Option<&PropertyKey>,
        depth: usize,
    ) -> Value {
        if let Some(customizer) = self.customizer.as_mut() {
            if let Some(replacement) = customizer(value, key) {
                return replacement;
            }
        }

        let class = classify(value);
        let obj = match value {
            Value::Object(obj) if !class.is_terminal() => obj,
            // Primitives, symbols and functions are returned as they are.
            _ => return value.clone(),
        };
        if depth > 0 && !self.options.deep {
            return value.clone();
        }
        if let Some(existing) = self.tracker.track(obj) {
            return existing.clone();
        }

        // The copy is registered before any child is visited so that
        // self-references resolve to it.
        let copy = Object::new(empty_kind(&obj.borrow().kind));
        self.tracker.record(obj, Value::Object(copy.clone()));

        match class {
            Classification::Array | Classification::ArrayLike => {
                self.populate_elements(obj, &copy, depth)
            }
            Classification::Map => self.populate_map(obj, &copy, depth),
            Classification::Set => self.populate_set(obj, &copy, depth),
            _ => {}
        }
        self.populate_props(obj, &copy, depth);
        Value::Object(copy)
    }

    fn populate_elements(&mut self, source: &Object, copy: &Object, depth: usize) {
        let items = Value::Object(source.clone()).elements().unwrap_or_default();
        let cloned: Vec<Value> = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.clone_value(item, Some(&PropertyKey::from(i)), depth + 1))
            .collect();
        let mut guard = copy.borrow_mut();
        let data = &mut *guard;
        match &mut data.kind {
            ObjectKind::Array(slots) => *slots = cloned,
            // Argument lists are copied into a plain object with index keys.
            ObjectKind::Plain => {
                for (i, item) in cloned.into_iter().enumerate() {
                    data.props.insert(PropertyKey::from(i), item);
                }
            }
            _ => {}
        }
    }

    fn populate_map(&mut self, source: &Object, copy: &Object, depth: usize) {
        let entries = match &source.borrow().kind {
            ObjectKind::Map(entries) => entries.clone(),
            _ => return,
        };
        for (k, v) in &entries {
            let key = self.clone_value(k, None, depth + 1);
            let value = self.clone_value(v, None, depth + 1);
            copy.map_insert(key, value);
        }
    }

    fn populate_set(&mut self, source: &Object, copy: &Object, depth: usize) {
        let members = match &source.borrow().kind {
            ObjectKind::Set(members) => members.clone(),
            _ => return,
        };
        for member in &members {
            let cloned = self.clone_value(member, None, depth + 1);
            copy.set_insert(cloned);
        }
    }

    fn populate_props(&mut self, source: &Object, copy: &Object, depth: usize) {
        let props: Vec<(PropertyKey, Value)> = source
            .borrow()
            .props
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, value) in props {
            let cloned = self.clone_value(&value, Some(&key), depth + 1);
            copy.borrow_mut().props.insert(key, cloned);
        }
    }
}

/// An empty container of the same kind, carrying over the internal state
/// that is not itself a child value. Argument lists become plain objects.
fn empty_kind(kind: &ObjectKind) -> ObjectKind {
    match kind {
        ObjectKind::Plain | ObjectKind::Arguments(_) => ObjectKind::Plain,
        ObjectKind::Array(_) => ObjectKind::Array(Vec::new()),
        ObjectKind::Boxed(p) => ObjectKind::Boxed(p.clone()),
        ObjectKind::Date(t) => ObjectKind::Date(*t),
        ObjectKind::RegExp { source, flags, .. } => ObjectKind::RegExp {
            source: source.clone(),
            flags: flags.clone(),
            last_index: 0,
        },
        ObjectKind::Map(_) => ObjectKind::Map(Vec::new()),
        ObjectKind::Set(_) => ObjectKind::Set(Vec::new()),
        ObjectKind::Error { name, message } => ObjectKind::Error {
            name: name.clone(),
            message: message.clone(),
        },
        ObjectKind::Function(f) => ObjectKind::Function(f.clone()),
        ObjectKind::TypedArray(t) => ObjectKind::TypedArray(t.clone()),
    }
}

/// Creates a deep clone of any value.
///
/// Containers of every kind are copied recursively; primitives, symbols
/// and functions are returned as they are. Cycles are reproduced in the
/// copy and an object reachable through several paths is copied once.
///
/// # Examples
///
/// ```
/// use compat_util::clone_deep;
/// use compat_value::Value;
///
/// let inner = Value::object_from([("x", Value::from(2))]);
/// let original = Value::object_from([("a", inner.clone()), ("b", inner)]);
/// let cloned = clone_deep(&original);
///
/// let a = cloned.as_object().unwrap().get_own(&"a".into()).unwrap();
/// let b = cloned.as_object().unwrap().get_own(&"b".into()).unwrap();
/// assert!(a.same_value_zero(&b));
/// assert!(!a.same_value_zero(&original.as_object().unwrap().get_own(&"a".into()).unwrap()));
/// ```
pub fn clone_deep(value: &Value) -> Value {
    Cloner::<NoCustomizer>::new(CloneOptions::default(), None).clone_value(value, None, 0)
}

/// Like [`clone_deep`], but `customizer` is consulted for every value
/// first; returning `Some` replaces the default cloning of that value.
pub fn clone_deep_with<F>(value: &Value, customizer: F) -> Value
where
    F: FnMut(&Value, Option<&PropertyKey>) -> Option<Value>,
{
    Cloner::new(CloneOptions::default(), Some(customizer)).clone_value(value, None, 0)
}

/// Clones with explicit options and no customizer.
pub fn clone_with_options(value: &Value, options: CloneOptions) -> Value {
    Cloner::<NoCustomizer>::new(options, None).clone_value(value, None, 0)
}
