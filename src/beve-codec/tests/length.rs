use beve_codec::codec::{Error, length};

macro_rules! test_boundary {
    ($name:ident, $value:expr, $width:expr) => {
        #[test]
        fn $name() -> Result<(), Error> {
            let mut out = Vec::new();
            length::write(&mut out, $value)?;
            assert_eq!(out.len(), $width, "wrong width class for {}", $value);

            let mut data: &[u8] = &out;
            assert_eq!(length::read(&mut data)?, $value);
            assert!(data.is_empty(), "decoder left {} bytes unread", data.len());

            Ok(())
        }
    };
}

test_boundary!(zero, 0, 1);
test_boundary!(max_one_byte, 63, 1);
test_boundary!(min_two_bytes, 64, 2);
test_boundary!(max_two_bytes, 16383, 2);
test_boundary!(min_four_bytes, 16384, 4);
test_boundary!(max_four_bytes, 1073741823, 4);
test_boundary!(min_eight_bytes, 1073741824, 8);
test_boundary!(max_eight_bytes, length::MAX, 8);

#[test]
fn truncated_width_class() {
    // The first byte announces 4 bytes, but only 3 follow.
    let mut data: &[u8] = &[0b10, 0, 0];
    assert!(matches!(length::read(&mut data), Err(Error::TruncatedInput)));

    let mut data: &[u8] = &[];
    assert!(matches!(length::read(&mut data), Err(Error::TruncatedInput)));
}

#[test]
fn value_bits_are_little_endian() -> Result<(), Error> {
    let mut out = Vec::new();
    length::write(&mut out, 0x1234)?;
    assert_eq!(out, ((0x1234u16 << 2) | 1).to_le_bytes());

    Ok(())
}
