//! Typed array storage.
//!
//! Each variant owns its elements in a native `Vec`, the same way
//! `JsonBinary::Binary` keeps raw bytes apart from numeric arrays.

use serde::{Deserialize, Serialize};

/// Element kind of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl TypedArrayKind {
    /// Constructor name, e.g. `"Uint8Array"`.
    pub fn name(self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedArray {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

macro_rules! each_variant {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            TypedArray::Int8($v) => $body,
            TypedArray::Uint8($v) => $body,
            TypedArray::Uint8Clamped($v) => $body,
            TypedArray::Int16($v) => $body,
            TypedArray::Uint16($v) => $body,
            TypedArray::Int32($v) => $body,
            TypedArray::Uint32($v) => $body,
            TypedArray::Float32($v) => $body,
            TypedArray::Float64($v) => $body,
        }
    };
}

impl TypedArray {
    /// Creates a zero-filled typed array of the given kind.
    pub fn zeroed(kind: TypedArrayKind, len: usize) -> Self {
        match kind {
            TypedArrayKind::Int8 => TypedArray::Int8(vec![0; len]),
            TypedArrayKind::Uint8 => TypedArray::Uint8(vec![0; len]),
            TypedArrayKind::Uint8Clamped => TypedArray::Uint8Clamped(vec![0; len]),
            TypedArrayKind::Int16 => TypedArray::Int16(vec![0; len]),
            TypedArrayKind::Uint16 => TypedArray::Uint16(vec![0; len]),
            TypedArrayKind::Int32 => TypedArray::Int32(vec![0; len]),
            TypedArrayKind::Uint32 => TypedArray::Uint32(vec![0; len]),
            TypedArrayKind::Float32 => TypedArray::Float32(vec![0.0; len]),
            TypedArrayKind::Float64 => TypedArray::Float64(vec![0.0; len]),
        }
    }

    pub fn kind(&self) -> TypedArrayKind {
        match self {
            TypedArray::Int8(_) => TypedArrayKind::Int8,
            TypedArray::Uint8(_) => TypedArrayKind::Uint8,
            TypedArray::Uint8Clamped(_) => TypedArrayKind::Uint8Clamped,
            TypedArray::Int16(_) => TypedArrayKind::Int16,
            TypedArray::Uint16(_) => TypedArrayKind::Uint16,
            TypedArray::Int32(_) => TypedArrayKind::Int32,
            TypedArray::Uint32(_) => TypedArrayKind::Uint32,
            TypedArray::Float32(_) => TypedArrayKind::Float32,
            TypedArray::Float64(_) => TypedArrayKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        each_variant!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads element `index` as a number.
    pub fn get(&self, index: usize) -> Option<f64> {
        each_variant!(self, v => v.get(index).map(|&e| e as f64))
    }

    /// Writes element `index`, converting `n` with the element kind's
    /// wrapping or clamping rule. Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, n: f64) {
        if index >= self.len() {
            return;
        }
        match self {
            TypedArray::Int8(v) => v[index] = wrap_u32(n) as i8,
            TypedArray::Uint8(v) => v[index] = wrap_u32(n) as u8,
            TypedArray::Uint8Clamped(v) => v[index] = clamp_u8(n),
            TypedArray::Int16(v) => v[index] = wrap_u32(n) as i16,
            TypedArray::Uint16(v) => v[index] = wrap_u32(n) as u16,
            TypedArray::Int32(v) => v[index] = wrap_u32(n) as i32,
            TypedArray::Uint32(v) => v[index] = wrap_u32(n),
            TypedArray::Float32(v) => v[index] = n as f32,
            TypedArray::Float64(v) => v[index] = n,
        }
    }

    /// Element values in index order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        each_variant!(self, v => v.iter().map(|&e| e as f64).collect())
    }
}

/// Modular conversion used by the integer element kinds.
fn wrap_u32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

fn clamp_u8(n: f64) -> u8 {
    if n.is_nan() {
        return 0;
    }
    n.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_kind_and_len() {
        let arr = TypedArray::zeroed(TypedArrayKind::Int16, 3);
        assert_eq!(arr.kind(), TypedArrayKind::Int16);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(2), Some(0.0));
        assert_eq!(arr.get(3), None);
    }

    #[test]
    fn test_integer_writes_wrap() {
        let mut arr = TypedArray::zeroed(TypedArrayKind::Int8, 2);
        arr.set(0, 200.0);
        arr.set(1, -1.7);
        assert_eq!(arr.to_f64_vec(), vec![-56.0, -1.0]);

        let mut arr = TypedArray::zeroed(TypedArrayKind::Uint8, 1);
        arr.set(0, 257.0);
        assert_eq!(arr.get(0), Some(1.0));
    }

    #[test]
    fn test_clamped_writes_round_half_even() {
        let mut arr = TypedArray::zeroed(TypedArrayKind::Uint8Clamped, 4);
        arr.set(0, 300.0);
        arr.set(1, -5.0);
        arr.set(2, 2.5);
        arr.set(3, f64::NAN);
        assert_eq!(arr.to_f64_vec(), vec![255.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_write_is_ignored() {
        let mut arr = TypedArray::Float64(vec![1.0]);
        arr.set(5, 2.0);
        assert_eq!(arr, TypedArray::Float64(vec![1.0]));
    }
}
