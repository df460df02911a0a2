//! Variant, matrix and complex number extensions.

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use super::{de, ser, *};
use crate::value::*;

// Low bit of the matrix layout byte.
const ROW_MAJOR: u8 = 0;
const COLUMN_MAJOR: u8 = 1;

pub fn read_variant<R: Read>(parts: &mut CodecParts, reader: &mut R) -> Result<Value, Error> {
    let tag = length::read(reader)?;
    let value = de::value(parts, reader)?;

    if parts
        .options
        .flags
        .contains(CodecFlags::STRIP_VARIANT_TAGS)
    {
        log::trace!("Stripping variant tag {tag}");
        Ok(value)
    } else {
        Ok(Value::from(Variant::new(tag, value)))
    }
}

pub fn write_variant<W: Write>(
    parts: &mut CodecParts,
    writer: &mut W,
    variant: &Variant,
) -> Result<(), Error> {
    writer.write_u8(Header::Extension(Extension::Variant).encode())?;
    length::write(writer, variant.tag)?;
    ser::value(parts, writer, &variant.value)
}

pub fn read_matrix<R: Read>(parts: &mut CodecParts, reader: &mut R) -> Result<Value, Error> {
    let layout = reader.read_u8()?;
    if layout & 1 == ROW_MAJOR {
        return Err(Error::UnsupportedFeature(Feature::RowMajor));
    }

    let extents = de::value(parts, reader)?;
    let [rows, cols] = extents_from_value(&extents)?;

    let data = match de::value(parts, reader)? {
        Value::TypedArray(data) => data,
        Value::Array(list) if list.is_empty() => TypedArray::F64(Vec::new()),
        Value::Array(list) => TypedArray::pack(&list)
            .ok_or(Error::InvalidMatrix("data must be a homogenous numeric array"))?,
        _ => return Err(Error::InvalidMatrix("data must be an array")),
    };

    if data.kind().is_none() {
        return Err(Error::InvalidMatrix("data must be numeric"));
    }

    Matrix::new(rows, cols, data)
        .map(Value::from)
        .ok_or(Error::InvalidMatrix("element count does not match extents"))
}

fn extents_from_value(value: &Value) -> Result<[usize; 2], Error> {
    let extents = match value {
        Value::TypedArray(array) => array.to_u64s(),
        Value::Array(list) => list.iter().map(Value::as_u64).collect(),
        _ => None,
    };

    match extents.as_deref() {
        Some(&[rows, cols]) => match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(rows), Ok(cols)) => Ok([rows, cols]),
            _ => Err(Error::InvalidMatrix("extents exceed address space")),
        },
        _ => Err(Error::InvalidMatrix("extents must be two non-negative integers")),
    }
}

pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> Result<(), Error> {
    if matrix.data.kind().is_none() {
        return Err(Error::UnsupportedValueType("string matrix"));
    }
    if !matrix.is_valid() {
        return Err(Error::InvalidMatrix("element count does not match extents"));
    }

    writer.write_u8(Header::Extension(Extension::Matrix).encode())?;
    writer.write_u8(COLUMN_MAJOR)?;

    let extents = TypedArray::U64(matrix.extents.iter().map(|&e| e as u64).collect());
    ser::typed_array(writer, &extents)?;
    ser::typed_array(writer, &matrix.data)
}

pub fn read_complex<R: Read>(parts: &mut CodecParts, reader: &mut R) -> Result<Value, Error> {
    let real = de::value(parts, reader)?;
    let imag = de::value(parts, reader)?;

    Ok(Value::from(Complex { real, imag }))
}

pub fn write_complex<W: Write>(
    parts: &mut CodecParts,
    writer: &mut W,
    complex: &Complex,
) -> Result<(), Error> {
    writer.write_u8(Header::Extension(Extension::Complex).encode())?;
    ser::value(parts, writer, &complex.real)?;
    ser::value(parts, writer, &complex.imag)
}
