use compat_value::{classify, Classification, Object, ObjectKind, PairTracker, PropertyKey, Value};
use tracing::{debug, trace};

use super::MatchMode;

/// Customizer type used when none is given.
pub(crate) type NoCustomizer = fn(&Value, &Value, Option<&PropertyKey>) -> Option<bool>;

/// One comparison traversal.
///
/// The left side is the candidate and the right side the reference; in
/// partial mode only the reference's keys and elements are required to be
/// present on the candidate. Container pairs under comparison are kept in
/// a pair tracker and treated as provisionally equal when met again, so
/// cyclic graphs terminate.
pub(crate) struct Comparator<F> {
    mode: MatchMode,
    pairs: PairTracker,
    customizer: Option<F>,
}

impl<F> Comparator<F>
where
    F: FnMut(&Value, &Value, Option<&PropertyKey>) -> Option<bool>,
{
    pub(crate) fn new(mode: MatchMode, customizer: Option<F>) -> Self {
        Comparator {
            mode,
            pairs: PairTracker::new(),
            customizer,
        }
    }

    pub(crate) fn compare(&mut self, a: &Value, b: &Value, key: Option<&PropertyKey>) -> bool {
        if let Some(customizer) = self.customizer.as_mut() {
            if let Some(result) = customizer(a, b, key) {
                return result;
            }
        }
        if a.same_value_zero(b) {
            return true;
        }

        let (class_a, class_b) = (classify(a), classify(b));
        match (a, b) {
            (Value::Object(oa), Value::Object(ob)) => {
                self.compare_objects(oa, class_a, ob, class_b)
            }
            _ => match (class_a, class_b) {
                (Classification::BoxedPrimitive, Classification::Primitive)
                | (Classification::Primitive, Classification::BoxedPrimitive) => {
                    same_primitive(a, b)
                }
                _ => false,
            },
        }
    }

    fn compare_objects(
        &mut self,
        a: &Object,
        class_a: Classification,
        b: &Object,
        class_b: Classification,
    ) -> bool {
        if class_a != class_b && !(class_a.is_keyed() && class_b.is_keyed()) {
            trace!(left = a.kind_name(), right = b.kind_name(), "kind mismatch");
            return false;
        }

        match class_a {
            Classification::BoxedPrimitive => {
                same_primitive(&Value::Object(a.clone()), &Value::Object(b.clone()))
            }
            Classification::Date => match (&a.borrow().kind, &b.borrow().kind) {
                (ObjectKind::Date(x), ObjectKind::Date(y)) => {
                    Value::Number(*x).same_value_zero(&Value::Number(*y))
                }
                _ => false,
            },
            Classification::RegExp => match (&a.borrow().kind, &b.borrow().kind) {
                (
                    ObjectKind::RegExp { source: sa, flags: fa, .. },
                    ObjectKind::RegExp { source: sb, flags: fb, .. },
                ) => sa == sb && fa == fb,
                _ => false,
            },
            Classification::Error => match (&a.borrow().kind, &b.borrow().kind) {
                (
                    ObjectKind::Error { name: na, message: ma },
                    ObjectKind::Error { name: nb, message: mb },
                ) => na == nb && ma == mb,
                _ => false,
            },
            Classification::TypedArray => {
                if typed_kind(a) != typed_kind(b) {
                    return false;
                }
                self.with_pair(a, b, |this| this.compare_elements(a, b))
            }
            Classification::Array => self.with_pair(a, b, |this| this.compare_elements(a, b)),
            Classification::PlainObject | Classification::ArrayLike => {
                self.with_pair(a, b, |this| this.compare_keyed(a, b))
            }
            Classification::Map => self.with_pair(a, b, |this| this.compare_maps(a, b)),
            Classification::Set => self.with_pair(a, b, |this| this.compare_sets(a, b)),
            Classification::Function => false,
            Classification::Primitive | Classification::Symbol | Classification::Nullish => {
                debug!(kind = a.kind_name(), "unsupported object pairing");
                false
            }
        }
    }

    /// Runs `f` with the pair marked as provisionally equal.
    fn with_pair(&mut self, a: &Object, b: &Object, f: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.pairs.contains(a, b) {
            return true;
        }
        self.pairs.insert(a, b);
        let result = f(self);
        self.pairs.remove(a, b);
        result
    }

    fn compare_elements(&mut self, a: &Object, b: &Object) -> bool {
        let left = Value::Object(a.clone()).elements().unwrap_or_default();
        let right = Value::Object(b.clone()).elements().unwrap_or_default();

        match self.mode {
            MatchMode::Full => {
                left.len() == right.len()
                    && left
                        .iter()
                        .zip(&right)
                        .enumerate()
                        .all(|(i, (x, y))| self.compare(x, y, Some(&PropertyKey::from(i))))
            }
            MatchMode::Partial => {
                let mut used = vec![false; left.len()];
                right.iter().enumerate().all(|(j, y)| {
                    let key = PropertyKey::from(j);
                    self.claim(&mut used, |this, i| this.compare(&left[i], y, Some(&key)))
                })
            }
        }
    }

    fn compare_keyed(&mut self, a: &Object, b: &Object) -> bool {
        let keys = b.own_keys();
        if self.mode == MatchMode::Full && a.own_keys().len() != keys.len() {
            return false;
        }

        for key in &keys {
            let Some(expected) = b.get_own(key) else {
                return false;
            };
            let Some(actual) = a.get_own(key) else {
                return false;
            };
            if !self.compare(&actual, &expected, Some(key)) {
                return false;
            }
        }
        true
    }

    fn compare_maps(&mut self, a: &Object, b: &Object) -> bool {
        let (left, right) = match (&a.borrow().kind, &b.borrow().kind) {
            (ObjectKind::Map(x), ObjectKind::Map(y)) => (x.clone(), y.clone()),
            _ => return false,
        };
        if self.mode == MatchMode::Full && left.len() != right.len() {
            return false;
        }

        let mut used = vec![false; left.len()];
        right.iter().all(|(rk, rv)| {
            self.claim(&mut used, |this, i| {
                let (lk, lv) = &left[i];
                this.compare(lk, rk, None) && this.compare(lv, rv, None)
            })
        })
    }

    fn compare_sets(&mut self, a: &Object, b: &Object) -> bool {
        let (left, right) = match (&a.borrow().kind, &b.borrow().kind) {
            (ObjectKind::Set(x), ObjectKind::Set(y)) => (x.clone(), y.clone()),
            _ => return false,
        };
        if self.mode == MatchMode::Full && left.len() != right.len() {
            return false;
        }

        let mut used = vec![false; left.len()];
        right
            .iter()
            .all(|member| self.claim(&mut used, |this, i| this.compare(&left[i], member, None)))
    }

    /// Finds the first unused candidate slot accepted by `accepts` and
    /// marks it used. Each candidate slot backs at most one reference item.
    fn claim(
        &mut self,
        used: &mut [bool],
        mut accepts: impl FnMut(&mut Self, usize) -> bool,
    ) -> bool {
        for i in 0..used.len() {
            if !used[i] && accepts(self, i) {
                used[i] = true;
                return true;
            }
        }
        false
    }
}

fn same_primitive(a: &Value, b: &Value) -> bool {
    match (a.unwrap_primitive(), b.unwrap_primitive()) {
        (Some(x), Some(y)) => x.same_value_zero(&y),
        _ => false,
    }
}

fn typed_kind(obj: &Object) -> Option<compat_value::TypedArrayKind> {
    match &obj.borrow().kind {
        ObjectKind::TypedArray(t) => Some(t.kind()),
        _ => None,
    }
}

/// Compares `a` against `b` in the given mode.
///
/// In [`MatchMode::Partial`] `a` is the candidate and `b` the reference.
///
/// # Examples
///
/// ```
/// use compat_util::{compare, MatchMode};
/// use compat_value::Value;
/// use serde_json::json;
///
/// let candidate = Value::from_json(&json!({"a": 1, "b": 2}));
/// let reference = Value::from_json(&json!({"a": 1}));
/// assert!(compare(&candidate, &reference, MatchMode::Partial));
/// assert!(!compare(&reference, &candidate, MatchMode::Partial));
/// assert!(!compare(&candidate, &reference, MatchMode::Full));
/// ```
pub fn compare(a: &Value, b: &Value, mode: MatchMode) -> bool {
    Comparator::<NoCustomizer>::new(mode, None).compare(a, b, None)
}
