use std::io::Read;

use byteorder::ReadBytesExt;

use super::{utils::*, *};
use crate::value::*;

impl Serializer {
    /// Deserializes a [`Value`] from the given data.
    ///
    /// Unless [`CodecFlags::ALLOW_TRAILING_DATA`] is set, the value
    /// must span all of `data`.
    pub fn deserialize(&mut self, mut data: &[u8]) -> Result<Value, Error> {
        let value = self.deserialize_from(&mut data)?;

        if !data.is_empty() {
            if self
                .parts
                .options
                .flags
                .contains(CodecFlags::ALLOW_TRAILING_DATA)
            {
                log::debug!("Ignoring {} trailing bytes after root value", data.len());
            } else {
                return Err(Error::TrailingData(data.len()));
            }
        }

        Ok(value)
    }

    /// Deserializes a single [`Value`] from a byte stream.
    ///
    /// The stream is left positioned right after the value.
    pub fn deserialize_from<R: Read>(&mut self, reader: &mut R) -> Result<Value, Error> {
        log::debug!("Deserializing value with config {:?}", self.parts.options);
        value(&mut self.parts, reader)
    }
}

/// Decodes one value, including its header, from `reader`.
pub(super) fn value<R: Read>(parts: &mut CodecParts, reader: &mut R) -> Result<Value, Error> {
    parts.with_recursion_limit(|parts| {
        let byte = reader.read_u8()?;
        let header = Header::decode(byte)?;
        log::trace!("Decoding {header:?} ({byte:#04x})");

        match header {
            Header::Null => Ok(Value::Null),
            Header::Bool(v) => Ok(Value::Bool(v)),
            Header::Number(kind) => read_number(reader, kind),
            Header::String => read_string(reader).map(Value::String),
            Header::Object(key) => object(parts, reader, key).map(Value::Object),
            Header::TypedArray(kind) => typed_array(reader, kind).map(Value::TypedArray),
            Header::Array => array(parts, reader).map(Value::Array),
            Header::Extension(Extension::Variant) => ext::read_variant(parts, reader),
            Header::Extension(Extension::Matrix) => ext::read_matrix(parts, reader),
            Header::Extension(Extension::Complex) => ext::read_complex(parts, reader),
        }
    })
}

fn object<R: Read>(parts: &mut CodecParts, reader: &mut R, key: KeyKind) -> Result<Object, Error> {
    let len = length::read_usize(reader)?;
    if key != KeyKind::String {
        return Err(Error::UnsupportedFeature(Feature::IntegerKeys));
    }

    let mut obj = Object::with_capacity(capacity_hint::<(String, Value)>(len));
    for _ in 0..len {
        let key = read_string(reader)?;
        let value = value(parts, reader)?;

        // Duplicate keys keep their first position, but take the last value.
        obj.insert(key, value);
    }

    Ok(obj)
}

pub(super) fn typed_array<R: Read>(reader: &mut R, kind: ElementKind) -> Result<TypedArray, Error> {
    let len = length::read_usize(reader)?;
    match kind {
        ElementKind::Number(kind) => read_numbers(reader, kind, len),
        ElementKind::String => (0..len)
            .map(|_| read_string(reader))
            .collect::<Result<_, _>>()
            .map(TypedArray::Str),
        ElementKind::Bool => Err(Error::UnsupportedFeature(Feature::BoolArrays)),
    }
}

fn array<R: Read>(parts: &mut CodecParts, reader: &mut R) -> Result<List, Error> {
    let len = length::read_usize(reader)?;

    let mut list = List::with_capacity(capacity_hint::<Value>(len));
    for _ in 0..len {
        list.push(value(parts, reader)?);
    }

    Ok(list)
}
