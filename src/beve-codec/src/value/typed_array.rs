use std::ops::Range;

use super::{Float, Int, NumberKind, UInt, Value};

/// A homogenous sequence of numbers or strings.
///
/// All elements share one declared type, which is why they are
/// stored without per-element headers on the wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum TypedArray {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Str(Vec<String>),
}

// Expands `$body` for every variant, binding the inner vector to `$v`.
macro_rules! each_variant {
    ($this:expr, $v:ident => $body:expr) => {
        match $this {
            TypedArray::I8($v) => $body,
            TypedArray::I16($v) => $body,
            TypedArray::I32($v) => $body,
            TypedArray::I64($v) => $body,
            TypedArray::U8($v) => $body,
            TypedArray::U16($v) => $body,
            TypedArray::U32($v) => $body,
            TypedArray::U64($v) => $body,
            TypedArray::F32($v) => $body,
            TypedArray::F64($v) => $body,
            TypedArray::Str($v) => $body,
        }
    };
}

// Like `each_variant`, but wraps the result in the same variant again.
macro_rules! map_variant {
    ($this:expr, $v:ident => $body:expr) => {
        match $this {
            TypedArray::I8($v) => TypedArray::I8($body),
            TypedArray::I16($v) => TypedArray::I16($body),
            TypedArray::I32($v) => TypedArray::I32($body),
            TypedArray::I64($v) => TypedArray::I64($body),
            TypedArray::U8($v) => TypedArray::U8($body),
            TypedArray::U16($v) => TypedArray::U16($body),
            TypedArray::U32($v) => TypedArray::U32($body),
            TypedArray::U64($v) => TypedArray::U64($body),
            TypedArray::F32($v) => TypedArray::F32($body),
            TypedArray::F64($v) => TypedArray::F64($body),
            TypedArray::Str($v) => TypedArray::Str($body),
        }
    };
}

// Collects all `values` into a vector if every one of them matches `$pat`.
macro_rules! collect_if {
    ($values:expr, $pat:pat => $out:expr) => {
        $values
            .iter()
            .map(|v| match v {
                $pat => Some($out),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
    };
}

impl TypedArray {
    /// Gets the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        each_variant!(self, v => v.len())
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the numeric element type, or [`None`] for string arrays.
    pub fn kind(&self) -> Option<NumberKind> {
        let kind = match self {
            Self::I8(..) => NumberKind::I8,
            Self::I16(..) => NumberKind::I16,
            Self::I32(..) => NumberKind::I32,
            Self::I64(..) => NumberKind::I64,
            Self::U8(..) => NumberKind::U8,
            Self::U16(..) => NumberKind::U16,
            Self::U32(..) => NumberKind::U32,
            Self::U64(..) => NumberKind::U64,
            Self::F32(..) => NumberKind::F32,
            Self::F64(..) => NumberKind::F64,
            Self::Str(..) => return None,
        };

        Some(kind)
    }

    /// Gets the element at `idx` as a standalone [`Value`].
    pub fn get(&self, idx: usize) -> Option<Value> {
        each_variant!(self, v => v.get(idx).cloned().map(Value::from))
    }

    /// Copies the elements in `range` into a new array of the same type.
    ///
    /// # Panics
    ///
    /// Panics when `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Self {
        map_variant!(self, v => v[range].to_vec())
    }

    /// Interprets the elements as non-negative integers.
    ///
    /// Returns [`None`] for float and string arrays, or when a
    /// signed element is negative.
    pub fn to_u64s(&self) -> Option<Vec<u64>> {
        fn convert<T: Copy>(v: &[T]) -> Option<Vec<u64>>
        where
            u64: TryFrom<T>,
        {
            v.iter().map(|&x| u64::try_from(x).ok()).collect()
        }

        match self {
            Self::I8(v) => convert(v),
            Self::I16(v) => convert(v),
            Self::I32(v) => convert(v),
            Self::I64(v) => convert(v),
            Self::U8(v) => convert(v),
            Self::U16(v) => convert(v),
            Self::U32(v) => convert(v),
            Self::U64(v) => Some(v.clone()),
            Self::F32(..) | Self::F64(..) | Self::Str(..) => None,
        }
    }

    /// Packs a sequence of values into a typed array.
    ///
    /// This only succeeds when `values` is non-empty and all elements
    /// are numbers of the same kind and width, or all are strings.
    pub fn pack(values: &[Value]) -> Option<Self> {
        let packed = match values.first()? {
            Value::Int(Int::I8(..)) => Self::I8(collect_if!(values, Value::Int(Int::I8(x)) => *x)?),
            Value::Int(Int::I16(..)) => {
                Self::I16(collect_if!(values, Value::Int(Int::I16(x)) => *x)?)
            }
            Value::Int(Int::I32(..)) => {
                Self::I32(collect_if!(values, Value::Int(Int::I32(x)) => *x)?)
            }
            Value::Int(Int::I64(..)) => {
                Self::I64(collect_if!(values, Value::Int(Int::I64(x)) => *x)?)
            }
            Value::UInt(UInt::U8(..)) => {
                Self::U8(collect_if!(values, Value::UInt(UInt::U8(x)) => *x)?)
            }
            Value::UInt(UInt::U16(..)) => {
                Self::U16(collect_if!(values, Value::UInt(UInt::U16(x)) => *x)?)
            }
            Value::UInt(UInt::U32(..)) => {
                Self::U32(collect_if!(values, Value::UInt(UInt::U32(x)) => *x)?)
            }
            Value::UInt(UInt::U64(..)) => {
                Self::U64(collect_if!(values, Value::UInt(UInt::U64(x)) => *x)?)
            }
            Value::Float(Float::F32(..)) => {
                Self::F32(collect_if!(values, Value::Float(Float::F32(x)) => *x)?)
            }
            Value::Float(Float::F64(..)) => {
                Self::F64(collect_if!(values, Value::Float(Float::F64(x)) => *x)?)
            }
            Value::String(..) => Self::Str(collect_if!(values, Value::String(s) => s.clone())?),
            _ => return None,
        };

        Some(packed)
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)*) => {
        $(
            impl From<Vec<$ty>> for TypedArray {
                #[inline]
                fn from(value: Vec<$ty>) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_vec! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
}
