//! The compressed length encoding for sizes and counts.
//!
//! The low 2 bits of the first byte select the total width of the
//! encoded integer (1, 2, 4 or 8 bytes); the remaining bits store
//! the value itself, shifted left by 2.

use std::io::{Read, Write};

use byteorder::{ByteOrder, LE, ReadBytesExt};

use super::Error;

/// The largest value which can be encoded as a compressed length.
pub const MAX: u64 = (1 << 62) - 1;

// Exclusive upper bounds of the values stored in each width class.
const CLASS_LIMITS: [u64; 4] = [1 << 6, 1 << 14, 1 << 30, 1 << 62];

/// Gets the number of bytes `value` occupies when encoded.
///
/// Returns [`None`] if `value` exceeds [`MAX`].
pub fn encoded_len(value: u64) -> Option<usize> {
    CLASS_LIMITS
        .iter()
        .position(|&limit| value < limit)
        .map(|class| 1 << class)
}

/// Reads a compressed length from `reader`.
///
/// Any width class is accepted, regardless of whether the value
/// could have been encoded in fewer bytes.
pub fn read<R: Read>(reader: &mut R) -> Result<u64, Error> {
    let mut buf = [0; 8];
    buf[0] = reader.read_u8()?;

    let len = 1 << (buf[0] & 0b11);
    reader.read_exact(&mut buf[1..len])?;

    Ok(LE::read_u64(&buf) >> 2)
}

/// Reads a compressed length from `reader` and converts it to an
/// in-memory size.
pub fn read_usize<R: Read>(reader: &mut R) -> Result<usize, Error> {
    let value = read(reader)?;
    usize::try_from(value).map_err(|_| Error::LengthOutOfRange(value))
}

/// Writes `value` as a compressed length in the smallest width class
/// it fits into.
pub fn write<W: Write>(writer: &mut W, value: u64) -> Result<(), Error> {
    let len = encoded_len(value).ok_or(Error::LengthOutOfRange(value))?;
    let class = len.trailing_zeros() as u64;

    let mut buf = [0; 8];
    LE::write_u64(&mut buf, (value << 2) | class);
    writer.write_all(&buf[..len])?;

    Ok(())
}

/// Writes an in-memory size as a compressed length.
#[inline]
pub fn write_usize<W: Write>(writer: &mut W, value: usize) -> Result<(), Error> {
    write(writer, value as u64)
}
