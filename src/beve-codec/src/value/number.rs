use super::Value;

/// The byte width of a numeric value on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Width {
    One = 0,
    Two = 1,
    Four = 2,
    Eight = 3,
}

impl Width {
    /// Maps a 2-bit width table index to its [`Width`].
    ///
    /// Only the low 2 bits of `index` are considered.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0b11 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Four,
            _ => Self::Eight,
        }
    }

    /// Gets the index of this width in the width table.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Gets the number of bytes covered by this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        1 << self.index()
    }
}

/// The numeric category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NumberType {
    Float = 0,
    Signed = 1,
    Unsigned = 2,
}

/// A concrete numeric type, combining category and width.
///
/// Floats only exist in 4 and 8 byte widths, so every variant
/// of this type describes a representable number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl NumberKind {
    /// Builds a [`NumberKind`] from a raw numeric category and a width.
    ///
    /// Returns [`None`] for the reserved category and for float widths
    /// other than 4 and 8 bytes.
    pub const fn from_parts(category: u8, width: Width) -> Option<Self> {
        let kind = match (category, width) {
            (0, Width::Four) => Self::F32,
            (0, Width::Eight) => Self::F64,
            (1, Width::One) => Self::I8,
            (1, Width::Two) => Self::I16,
            (1, Width::Four) => Self::I32,
            (1, Width::Eight) => Self::I64,
            (2, Width::One) => Self::U8,
            (2, Width::Two) => Self::U16,
            (2, Width::Four) => Self::U32,
            (2, Width::Eight) => Self::U64,
            _ => return None,
        };

        Some(kind)
    }

    /// Gets the numeric category of this kind.
    pub const fn ty(self) -> NumberType {
        match self {
            Self::F32 | Self::F64 => NumberType::Float,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => NumberType::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => NumberType::Unsigned,
        }
    }

    /// Gets the wire width of this kind.
    pub const fn width(self) -> Width {
        match self {
            Self::I8 | Self::U8 => Width::One,
            Self::I16 | Self::U16 => Width::Two,
            Self::F32 | Self::I32 | Self::U32 => Width::Four,
            Self::F64 | Self::I64 | Self::U64 => Width::Eight,
        }
    }
}

/// A signed integer value with an explicit width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Int {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

impl Int {
    /// Gets the [`NumberKind`] of this integer.
    #[inline]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::I8(..) => NumberKind::I8,
            Self::I16(..) => NumberKind::I16,
            Self::I32(..) => NumberKind::I32,
            Self::I64(..) => NumberKind::I64,
        }
    }

    /// Gets the value, widened to 64 bits.
    #[inline]
    pub const fn get(self) -> i64 {
        match self {
            Self::I8(v) => v as i64,
            Self::I16(v) => v as i64,
            Self::I32(v) => v as i64,
            Self::I64(v) => v,
        }
    }
}

/// An unsigned integer value with an explicit width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UInt {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl UInt {
    /// Gets the [`NumberKind`] of this integer.
    #[inline]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::U8(..) => NumberKind::U8,
            Self::U16(..) => NumberKind::U16,
            Self::U32(..) => NumberKind::U32,
            Self::U64(..) => NumberKind::U64,
        }
    }

    /// Gets the value, widened to 64 bits.
    #[inline]
    pub const fn get(self) -> u64 {
        match self {
            Self::U8(v) => v as u64,
            Self::U16(v) => v as u64,
            Self::U32(v) => v as u64,
            Self::U64(v) => v,
        }
    }
}

/// A floating-point value with an explicit width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Float {
    F32(f32),
    F64(f64),
}

impl Float {
    /// Gets the [`NumberKind`] of this float.
    #[inline]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::F32(..) => NumberKind::F32,
            Self::F64(..) => NumberKind::F64,
        }
    }

    /// Gets the value, widened to 64 bits.
    #[inline]
    pub fn get(self) -> f64 {
        match self {
            Self::F32(v) => f64::from(v),
            Self::F64(v) => v,
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $outer:ident($inner:ident::$variant:ident)),* $(,)*) => {
        $(
            impl From<$ty> for $inner {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$outer($inner::$variant(value))
                }
            }
        )*
    };
}

impl_from_primitive! {
    i8 => Int(Int::I8),
    i16 => Int(Int::I16),
    i32 => Int(Int::I32),
    i64 => Int(Int::I64),
    u8 => UInt(UInt::U8),
    u16 => UInt(UInt::U16),
    u32 => UInt(UInt::U32),
    u64 => UInt(UInt::U64),
    f32 => Float(Float::F32),
    f64 => Float(Float::F64),
}

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Self::Int(value)
    }
}

impl From<UInt> for Value {
    fn from(value: UInt) -> Self {
        Self::UInt(value)
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Self::Float(value)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Serialize, Serializer};

    use super::*;

    impl Serialize for Int {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                Self::I8(v) => serializer.serialize_i8(v),
                Self::I16(v) => serializer.serialize_i16(v),
                Self::I32(v) => serializer.serialize_i32(v),
                Self::I64(v) => serializer.serialize_i64(v),
            }
        }
    }

    impl Serialize for UInt {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                Self::U8(v) => serializer.serialize_u8(v),
                Self::U16(v) => serializer.serialize_u16(v),
                Self::U32(v) => serializer.serialize_u32(v),
                Self::U64(v) => serializer.serialize_u64(v),
            }
        }
    }

    impl Serialize for Float {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                Self::F32(v) => serializer.serialize_f32(v),
                Self::F64(v) => serializer.serialize_f64(v),
            }
        }
    }
}
