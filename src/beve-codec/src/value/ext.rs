use std::mem;

use super::{TypedArray, Value, drop};

/// A two-dimensional numeric matrix in column-major layout.
///
/// The elements are kept in their flat wire order; [`Matrix::reshape`]
/// provides the grouped view, which is also what gets serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    /// The extents of the matrix as `[rows, cols]`.
    pub extents: [usize; 2],
    /// The flat element data.
    pub data: TypedArray,
}

impl Matrix {
    /// Creates a new matrix of `rows` x `cols` from flat `data`.
    ///
    /// Returns [`None`] when the matrix would not be
    /// [valid](Matrix::is_valid).
    pub fn new(rows: usize, cols: usize, data: TypedArray) -> Option<Self> {
        let this = Self {
            extents: [rows, cols],
            data,
        };
        this.is_valid().then_some(this)
    }

    /// Gets the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.extents[0]
    }

    /// Gets the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.extents[1]
    }

    /// Whether the data is numeric and its length matches the extents.
    ///
    /// Matrices without columns must not have rows either, so the
    /// number of groups in [`Matrix::reshape`] never exceeds the
    /// number of elements.
    pub fn is_valid(&self) -> bool {
        let (rows, cols) = (self.rows(), self.cols());

        self.data.kind().is_some()
            && (cols != 0 || rows == 0)
            && rows.checked_mul(cols) == Some(self.data.len())
    }

    /// Groups the flat data into [`Matrix::rows`] arrays of
    /// [`Matrix::cols`] contiguous elements each.
    ///
    /// Note that this does not transpose the column-major data; the
    /// `i`-th group is the `i`-th run of `cols` elements in wire order.
    ///
    /// Returns [`None`] when the matrix is not [valid](Matrix::is_valid).
    pub fn reshape(&self) -> Option<Vec<TypedArray>> {
        if !self.is_valid() {
            return None;
        }

        let cols = self.cols();
        let groups = (0..self.rows())
            .map(|row| self.data.slice(row * cols..(row + 1) * cols))
            .collect();

        Some(groups)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::{Serialize, ser::Error};

        self.reshape()
            .ok_or_else(|| S::Error::custom("matrix extents do not match its data"))?
            .serialize(serializer)
    }
}

/// A value of a tagged union, identified by its alternative index.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    /// The index of the selected alternative.
    pub tag: u64,
    /// The payload of the alternative.
    pub value: Value,
}

impl Variant {
    /// Creates a new variant holding `value` as alternative `tag`.
    #[inline]
    pub fn new(tag: u64, value: impl Into<Value>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// Moves the payload out, leaving null in its place.
    #[inline]
    pub fn take_value(&mut self) -> Value {
        mem::replace(&mut self.value, Value::Null)
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        drop::safely(self.take_value());
    }
}

/// A complex number made up of two component values.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Complex {
    /// The real component.
    pub real: Value,
    /// The imaginary component.
    pub imag: Value,
}

impl Complex {
    /// Creates a new complex number from its components.
    #[inline]
    pub fn new(real: impl Into<Value>, imag: impl Into<Value>) -> Self {
        Self {
            real: real.into(),
            imag: imag.into(),
        }
    }

    /// Moves both components out, leaving null in their place.
    #[inline]
    pub fn take_parts(&mut self) -> (Value, Value) {
        (
            mem::replace(&mut self.real, Value::Null),
            mem::replace(&mut self.imag, Value::Null),
        )
    }
}

impl Drop for Complex {
    fn drop(&mut self) {
        let (real, imag) = self.take_parts();
        drop::safely(real);
        drop::safely(imag);
    }
}
