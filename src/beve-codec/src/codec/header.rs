use crate::value::{NumberKind, Width};

use super::Error;

const NULL: u8 = 0;
const NUMBER: u8 = 1;
const STRING: u8 = 2;
const OBJECT: u8 = 3;
const TYPED_ARRAY: u8 = 4;
const UNTYPED_ARRAY: u8 = 5;
const EXTENSION: u8 = 6;

const TYPE_MASK: u8 = 0b0000_0111;
const BOOL_FLAG: u8 = 1 << 3;
const BOOL_VALUE: u8 = 1 << 4;
const STRING_ARRAY_FLAG: u8 = 1 << 5;

// The numeric category which marks boolean and string typed arrays.
const NON_NUMERIC: u8 = 3;

/// The key type of an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    String,
    Signed(Width),
    Unsigned(Width),
}

/// The element type of a typed array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Number(NumberKind),
    String,
    Bool,
}

/// The extension types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Extension {
    Variant = 1,
    Matrix = 2,
    Complex = 3,
}

/// The decoded header byte of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Header {
    Null,
    Bool(bool),
    Number(NumberKind),
    String,
    Object(KeyKind),
    TypedArray(ElementKind),
    Array,
    Extension(Extension),
}

#[inline]
const fn number_bits(kind: NumberKind) -> u8 {
    (kind.ty() as u8) << 3 | kind.width().index() << 5
}

#[inline]
fn number_kind(byte: u8) -> Result<NumberKind, Error> {
    let category = (byte >> 3) & 0b11;
    let width = Width::from_index(byte >> 5);
    NumberKind::from_parts(category, width).ok_or(Error::MalformedHeader(byte))
}

impl Header {
    /// Decodes a header from its byte representation.
    pub fn decode(byte: u8) -> Result<Self, Error> {
        let header = match byte & TYPE_MASK {
            NULL if byte & BOOL_FLAG != 0 => Self::Bool(byte & BOOL_VALUE != 0),
            NULL => Self::Null,

            NUMBER => Self::Number(number_kind(byte)?),

            STRING => Self::String,

            OBJECT => {
                let width = Width::from_index(byte >> 5);
                Self::Object(match (byte >> 3) & 0b11 {
                    0 => KeyKind::String,
                    1 => KeyKind::Signed(width),
                    2 => KeyKind::Unsigned(width),
                    _ => return Err(Error::MalformedHeader(byte)),
                })
            }

            TYPED_ARRAY if (byte >> 3) & 0b11 == NON_NUMERIC => {
                Self::TypedArray(if byte & STRING_ARRAY_FLAG != 0 {
                    ElementKind::String
                } else {
                    ElementKind::Bool
                })
            }
            TYPED_ARRAY => Self::TypedArray(ElementKind::Number(number_kind(byte)?)),

            UNTYPED_ARRAY => Self::Array,

            EXTENSION => {
                let selector = byte >> 3;
                Self::Extension(match selector {
                    1 => Extension::Variant,
                    2 => Extension::Matrix,
                    3 => Extension::Complex,
                    _ => return Err(Error::UnsupportedExtension(selector)),
                })
            }

            ty => return Err(Error::UnsupportedType(ty)),
        };

        Ok(header)
    }

    /// Encodes the header into its byte representation.
    ///
    /// Bits which carry no meaning for a header are always zero.
    pub const fn encode(self) -> u8 {
        match self {
            Self::Null => NULL,
            Self::Bool(false) => NULL | BOOL_FLAG,
            Self::Bool(true) => NULL | BOOL_FLAG | BOOL_VALUE,

            Self::Number(kind) => NUMBER | number_bits(kind),

            Self::String => STRING,

            Self::Object(KeyKind::String) => OBJECT,
            Self::Object(KeyKind::Signed(width)) => OBJECT | 1 << 3 | width.index() << 5,
            Self::Object(KeyKind::Unsigned(width)) => OBJECT | 2 << 3 | width.index() << 5,

            Self::TypedArray(ElementKind::Number(kind)) => TYPED_ARRAY | number_bits(kind),
            Self::TypedArray(ElementKind::String) => {
                TYPED_ARRAY | NON_NUMERIC << 3 | STRING_ARRAY_FLAG
            }
            Self::TypedArray(ElementKind::Bool) => TYPED_ARRAY | NON_NUMERIC << 3,

            Self::Array => UNTYPED_ARRAY,

            Self::Extension(ext) => EXTENSION | (ext as u8) << 3,
        }
    }
}
