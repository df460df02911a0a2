use std::io::Write;

use byteorder::WriteBytesExt;

use super::{utils::*, *};
use crate::value::*;

impl Serializer {
    /// Serializes a [`Value`] into a new byte vector.
    pub fn serialize(&mut self, value: &Value) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.serialize_into(&mut out, value)?;
        Ok(out)
    }

    /// Serializes a [`Value`] into a byte sink.
    pub fn serialize_into<W: Write>(&mut self, writer: &mut W, value: &Value) -> Result<(), Error> {
        log::debug!("Serializing {} with config {:?}", value.type_name(), self.parts.options);
        self::value(&mut self.parts, writer, value)
    }
}

/// Encodes one value, including its header, into `writer`.
pub(super) fn value<W: Write>(
    parts: &mut CodecParts,
    writer: &mut W,
    value: &Value,
) -> Result<(), Error> {
    parts.with_recursion_limit(|parts| match value {
        Value::Null => header(writer, Header::Null),
        Value::Bool(v) => header(writer, Header::Bool(*v)),

        Value::Int(v) => {
            header(writer, Header::Number(v.kind()))?;
            write_int(writer, *v)
        }
        Value::UInt(v) => {
            header(writer, Header::Number(v.kind()))?;
            write_uint(writer, *v)
        }
        Value::Float(v) => {
            header(writer, Header::Number(v.kind()))?;
            write_float(writer, *v)
        }

        Value::String(v) => {
            header(writer, Header::String)?;
            write_string(writer, v)
        }

        Value::Array(list) => array(parts, writer, list),
        Value::TypedArray(array) => typed_array(writer, array),
        Value::Object(obj) => object(parts, writer, obj),

        Value::Variant(variant) => ext::write_variant(parts, writer, variant),
        Value::Matrix(matrix) => ext::write_matrix(writer, matrix),
        Value::Complex(complex) => ext::write_complex(parts, writer, complex),
    })
}

#[inline]
fn header<W: Write>(writer: &mut W, header: Header) -> Result<(), Error> {
    writer.write_u8(header.encode())?;
    Ok(())
}

/// Encodes a typed array, including its header.
pub(super) fn typed_array<W: Write>(writer: &mut W, array: &TypedArray) -> Result<(), Error> {
    let kind = match array.kind() {
        Some(kind) => ElementKind::Number(kind),
        None => ElementKind::String,
    };

    header(writer, Header::TypedArray(kind))?;
    length::write_usize(writer, array.len())?;
    write_elements(writer, array)
}

fn array<W: Write>(parts: &mut CodecParts, writer: &mut W, list: &List) -> Result<(), Error> {
    if list.len() > 1 && parts.options.flags.contains(CodecFlags::PACK_ARRAYS) {
        if let Some(packed) = TypedArray::pack(list) {
            return typed_array(writer, &packed);
        }
    }

    header(writer, Header::Array)?;
    length::write_usize(writer, list.len())?;
    list.iter().try_for_each(|v| value(parts, writer, v))
}

fn object<W: Write>(parts: &mut CodecParts, writer: &mut W, obj: &Object) -> Result<(), Error> {
    header(writer, Header::Object(KeyKind::String))?;
    length::write_usize(writer, obj.len())?;

    for (key, v) in obj {
        write_string(writer, key)?;
        value(parts, writer, v)?;
    }

    Ok(())
}
