//! Encoding and decoding of [`Value`]s in the BEVE wire format.

use std::{
    fmt,
    io::{self, Read, Write},
};

use bitflags::bitflags;
use thiserror::Error;

use crate::Value;

mod de;

mod ext;

mod header;
pub use header::*;

pub mod length;

mod ser;

mod utils;

/// The default maximum nesting depth of values.
pub const DEFAULT_RECURSION_LIMIT: u16 = 128;

/// Recognized wire features which are not supported by this
/// implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// Objects keyed by integers instead of strings.
    IntegerKeys,
    /// Typed arrays of booleans.
    BoolArrays,
    /// Matrices in row-major layout.
    RowMajor,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::IntegerKeys => "integer object keys",
            Self::BoolArrays => "boolean typed arrays",
            Self::RowMajor => "row-major matrices",
        })
    }
}

/// Errors that may occur during BEVE (de)serialization.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occured while reading from or writing to a stream.
    #[error("{0}")]
    Io(io::Error),

    /// The input ended before a value was fully decoded.
    #[error("reached premature end of input")]
    TruncatedInput,

    /// A header byte uses a reserved or invalid bit combination.
    #[error("malformed header byte {0:#04x}")]
    MalformedHeader(u8),

    /// The input uses a wire feature that is recognized, but not
    /// implemented.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(Feature),

    /// The extension selector of a header is not a known extension.
    #[error("unsupported extension {0}")]
    UnsupportedExtension(u8),

    /// The type selector of a header is not a known type.
    #[error("unsupported type {0}")]
    UnsupportedType(u8),

    /// Failed to decode an UTF-8 string where one was expected.
    #[error("{0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A value has no representation on the wire.
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(&'static str),

    /// Configured recursion limit was exceeded during the process.
    #[error("recursion limit exceeded")]
    DepthExceeded,

    /// A length does not fit the compressed length encoding or the
    /// address space.
    #[error("length {0} is out of range")]
    LengthOutOfRange(u64),

    /// Matrix extents and data are inconsistent.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(&'static str),

    /// Input data was left over after decoding the root value.
    #[error("{0} trailing bytes after root value")]
    TrailingData(usize),

    /// Attempted to construct a serializer from a bad configuration.
    #[error("bad serializer configuration: {0:?}")]
    BadConfig(&'static str),
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        match value.kind() {
            io::ErrorKind::UnexpectedEof => Self::TruncatedInput,
            _ => Self::Io(value),
        }
    }
}

bitflags! {
    /// Configuration bits to customize serialization behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CodecFlags: u32 {
        /// Untyped arrays of more than one element which share one
        /// numeric kind and width, or are all strings, are encoded
        /// as typed arrays.
        const PACK_ARRAYS = 1 << 0;
        /// Variant tags are dropped during deserialization and only
        /// the payload value is kept.
        const STRIP_VARIANT_TAGS = 1 << 1;
        /// Deserializing from a byte slice ignores data after the
        /// root value instead of failing.
        const ALLOW_TRAILING_DATA = 1 << 2;
    }
}

/// Serializer configuration which influences how data is interpreted.
#[derive(Clone, Copy, Debug)]
pub struct CodecOptions {
    /// The [`CodecFlags`] to use.
    pub flags: CodecFlags,
    /// A recursion limit for nested data to avoid stack overflows.
    pub recursion_limit: u16,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            flags: CodecFlags::empty(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// The inner parts of the serializer state.
#[derive(Clone, Debug)]
pub struct CodecParts {
    /// The serializer configuration in use.
    pub options: CodecOptions,
    depth: u16,
}

impl CodecParts {
    #[inline]
    pub(super) fn with_recursion_limit<F, T>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= self.options.recursion_limit {
            return Err(Error::DepthExceeded);
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;

        res
    }
}

/// A serializer and deserializer for BEVE values.
///
/// A serializer holds no state across calls other than its
/// configuration; it may be reused for any number of values.
#[derive(Clone, Debug)]
pub struct Serializer {
    /// The raw serializer state.
    pub parts: CodecParts,
}

impl Serializer {
    /// Creates a new serializer with its configuration.
    pub fn new(options: CodecOptions) -> Result<Self, Error> {
        if options.recursion_limit == 0 {
            return Err(Error::BadConfig("recursion limit must not be zero"));
        }

        Ok(Self {
            parts: CodecParts { options, depth: 0 },
        })
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            parts: CodecParts {
                options: CodecOptions::default(),
                depth: 0,
            },
        }
    }
}

/// Deserializes a [`Value`] from `data` with default options.
///
/// All of `data` must be consumed by the value.
pub fn from_slice(data: &[u8]) -> Result<Value, Error> {
    Serializer::default().deserialize(data)
}

/// Deserializes a single [`Value`] from `reader` with default options.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Value, Error> {
    Serializer::default().deserialize_from(&mut reader)
}

/// Serializes `value` into a new byte vector with default options.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, Error> {
    Serializer::default().serialize(value)
}

/// Serializes `value` into `writer` with default options.
pub fn to_writer<W: Write>(mut writer: W, value: &Value) -> Result<(), Error> {
    Serializer::default().serialize_into(&mut writer, value)
}
