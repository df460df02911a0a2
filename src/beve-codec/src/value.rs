//! Value representations for dynamic BEVE documents.
//!
//! Values have dynamic types and can be composed, at the cost of
//! incurring memory and performance overhead.
//!
//! Every numeric value carries its declared width and signedness,
//! which the encoder serializes as-is. Nothing is re-derived from
//! the numeric contents of a value.

mod drop;

mod ext;
pub use ext::*;

mod list;
pub use list::*;

mod number;
pub use number::*;

mod object;
pub use object::*;

mod typed_array;
pub use typed_array::*;

/// A runtime value in a BEVE document.
///
/// Its type is dynamically assigned at runtime, which mandates
/// appropriate checks for interpreting its contents.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean value.
    Bool(bool),

    /// A signed integer with its declared width.
    Int(Int),
    /// An unsigned integer with its declared width.
    UInt(UInt),
    /// A floating-point value with its declared width.
    Float(Float),

    /// An UTF-8 string with explicit length.
    String(String),

    /// A heterogenous list of values.
    Array(List),
    /// A homogenous list of numbers or strings.
    TypedArray(TypedArray),
    /// A mapping of string keys to values.
    Object(Object),

    /// A value of a tagged union, identified by its alternative index.
    Variant(Box<Variant>),

    /// A column-major numeric matrix.
    Matrix(Box<Matrix>),
    /// A complex number.
    Complex(Box<Complex>),
}

impl Value {
    /// Gets a human-readable name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(..) => "bool",
            Self::Int(..) => "signed integer",
            Self::UInt(..) => "unsigned integer",
            Self::Float(..) => "float",
            Self::String(..) => "string",
            Self::Array(..) => "array",
            Self::TypedArray(..) => "typed array",
            Self::Object(..) => "object",
            Self::Variant(..) => "variant",
            Self::Matrix(..) => "matrix",
            Self::Complex(..) => "complex",
        }
    }

    /// Whether the value is [`Value::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Gets the value as a boolean, if it is one.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the value as a string slice, if it is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the value as a signed 64-bit integer, if it is an integer
    /// which fits the range.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v.get()),
            Self::UInt(v) => i64::try_from(v.get()).ok(),
            _ => None,
        }
    }

    /// Gets the value as an unsigned 64-bit integer, if it is a
    /// non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) => u64::try_from(v.get()).ok(),
            Self::UInt(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Gets the value as a 64-bit float, if it is a float.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Gets the value as an untyped array, if it is one.
    #[inline]
    pub fn as_array(&self) -> Option<&List> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the value as an object, if it is one.
    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(List::from(value))
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Self::Array(value)
    }
}

impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Self::TypedArray(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Self::Matrix(Box::new(value))
    }
}

impl From<Variant> for Value {
    fn from(value: Variant) -> Self {
        Self::Variant(Box::new(value))
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Self::Complex(Box::new(value))
    }
}
