use std::io::{Read, Write};

use byteorder::{LE, ReadBytesExt, WriteBytesExt};

use super::{Error, length};
use crate::value::*;

// Upper bound for memory reserved up front from an untrusted length
// prefix. Larger payloads grow the allocation as data arrives.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Gets a capacity to reserve for `len` elements of `T`.
#[inline]
pub fn capacity_hint<T>(len: usize) -> usize {
    len.min(PREALLOC_LIMIT / size_of::<T>().max(1))
}

#[inline]
pub fn read_bytes<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::with_capacity(capacity_hint::<u8>(len));
    Read::take(&mut *reader, len as u64).read_to_end(&mut buf)?;

    if buf.len() != len {
        return Err(Error::TruncatedInput);
    }

    Ok(buf)
}

/// Reads a string of compressed length from the stream.
#[inline]
pub fn read_string<R: Read>(reader: &mut R) -> Result<String, Error> {
    let len = length::read_usize(reader)?;
    let buf = read_bytes(reader, len)?;

    String::from_utf8(buf).map_err(|e| e.utf8_error().into())
}

#[inline]
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<(), Error> {
    length::write_usize(writer, value.len())?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Reads a single number of the given kind.
pub fn read_number<R: Read>(reader: &mut R, kind: NumberKind) -> Result<Value, Error> {
    let value = match kind {
        NumberKind::F32 => Value::from(reader.read_f32::<LE>()?),
        NumberKind::F64 => Value::from(reader.read_f64::<LE>()?),
        NumberKind::I8 => Value::from(reader.read_i8()?),
        NumberKind::I16 => Value::from(reader.read_i16::<LE>()?),
        NumberKind::I32 => Value::from(reader.read_i32::<LE>()?),
        NumberKind::I64 => Value::from(reader.read_i64::<LE>()?),
        NumberKind::U8 => Value::from(reader.read_u8()?),
        NumberKind::U16 => Value::from(reader.read_u16::<LE>()?),
        NumberKind::U32 => Value::from(reader.read_u32::<LE>()?),
        NumberKind::U64 => Value::from(reader.read_u64::<LE>()?),
    };

    Ok(value)
}

pub fn write_int<W: Write>(writer: &mut W, value: Int) -> Result<(), Error> {
    match value {
        Int::I8(v) => writer.write_i8(v)?,
        Int::I16(v) => writer.write_i16::<LE>(v)?,
        Int::I32(v) => writer.write_i32::<LE>(v)?,
        Int::I64(v) => writer.write_i64::<LE>(v)?,
    }

    Ok(())
}

pub fn write_uint<W: Write>(writer: &mut W, value: UInt) -> Result<(), Error> {
    match value {
        UInt::U8(v) => writer.write_u8(v)?,
        UInt::U16(v) => writer.write_u16::<LE>(v)?,
        UInt::U32(v) => writer.write_u32::<LE>(v)?,
        UInt::U64(v) => writer.write_u64::<LE>(v)?,
    }

    Ok(())
}

pub fn write_float<W: Write>(writer: &mut W, value: Float) -> Result<(), Error> {
    match value {
        Float::F32(v) => writer.write_f32::<LE>(v)?,
        Float::F64(v) => writer.write_f64::<LE>(v)?,
    }

    Ok(())
}

/// Reads `len` numbers of the given kind into a typed array.
pub fn read_numbers<R: Read>(
    reader: &mut R,
    kind: NumberKind,
    len: usize,
) -> Result<TypedArray, Error> {
    macro_rules! read_seq {
        ($variant:ident, $ty:ty, $read:expr) => {{
            let mut out: Vec<$ty> = Vec::with_capacity(capacity_hint::<$ty>(len));
            for _ in 0..len {
                out.push($read?);
            }
            TypedArray::$variant(out)
        }};
    }

    let array = match kind {
        NumberKind::F32 => read_seq!(F32, f32, reader.read_f32::<LE>()),
        NumberKind::F64 => read_seq!(F64, f64, reader.read_f64::<LE>()),
        NumberKind::I8 => read_seq!(I8, i8, reader.read_i8()),
        NumberKind::I16 => read_seq!(I16, i16, reader.read_i16::<LE>()),
        NumberKind::I32 => read_seq!(I32, i32, reader.read_i32::<LE>()),
        NumberKind::I64 => read_seq!(I64, i64, reader.read_i64::<LE>()),
        NumberKind::U8 => TypedArray::U8(read_bytes(reader, len)?),
        NumberKind::U16 => read_seq!(U16, u16, reader.read_u16::<LE>()),
        NumberKind::U32 => read_seq!(U32, u32, reader.read_u32::<LE>()),
        NumberKind::U64 => read_seq!(U64, u64, reader.read_u64::<LE>()),
    };

    Ok(array)
}

/// Writes the elements of a typed array without any header or
/// length prefix.
pub fn write_elements<W: Write>(writer: &mut W, array: &TypedArray) -> Result<(), Error> {
    macro_rules! write_seq {
        ($values:expr, $write:ident $(::<$bo:ty>)?) => {
            for &v in $values {
                writer.$write $(::<$bo>)? (v)?;
            }
        };
    }

    match array {
        TypedArray::I8(v) => write_seq!(v, write_i8),
        TypedArray::I16(v) => write_seq!(v, write_i16::<LE>),
        TypedArray::I32(v) => write_seq!(v, write_i32::<LE>),
        TypedArray::I64(v) => write_seq!(v, write_i64::<LE>),
        TypedArray::U8(v) => writer.write_all(v)?,
        TypedArray::U16(v) => write_seq!(v, write_u16::<LE>),
        TypedArray::U32(v) => write_seq!(v, write_u32::<LE>),
        TypedArray::U64(v) => write_seq!(v, write_u64::<LE>),
        TypedArray::F32(v) => write_seq!(v, write_f32::<LE>),
        TypedArray::F64(v) => write_seq!(v, write_f64::<LE>),
        TypedArray::Str(v) => {
            for s in v {
                write_string(writer, s)?;
            }
        }
    }

    Ok(())
}
