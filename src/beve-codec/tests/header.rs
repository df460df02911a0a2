use beve_codec::{
    codec::{ElementKind, Error, Extension, Header, KeyKind},
    value::{NumberKind, Width},
};

const KINDS: [NumberKind; 10] = [
    NumberKind::F32,
    NumberKind::F64,
    NumberKind::I8,
    NumberKind::I16,
    NumberKind::I32,
    NumberKind::I64,
    NumberKind::U8,
    NumberKind::U16,
    NumberKind::U32,
    NumberKind::U64,
];

const WIDTHS: [Width; 4] = [Width::One, Width::Two, Width::Four, Width::Eight];

fn all_headers() -> Vec<Header> {
    let mut headers = vec![
        Header::Null,
        Header::Bool(false),
        Header::Bool(true),
        Header::String,
        Header::Object(KeyKind::String),
        Header::TypedArray(ElementKind::String),
        Header::TypedArray(ElementKind::Bool),
        Header::Array,
        Header::Extension(Extension::Variant),
        Header::Extension(Extension::Matrix),
        Header::Extension(Extension::Complex),
    ];

    for kind in KINDS {
        headers.push(Header::Number(kind));
        headers.push(Header::TypedArray(ElementKind::Number(kind)));
    }
    for width in WIDTHS {
        headers.push(Header::Object(KeyKind::Signed(width)));
        headers.push(Header::Object(KeyKind::Unsigned(width)));
    }

    headers
}

#[test]
fn every_header_round_trips() -> Result<(), Error> {
    for header in all_headers() {
        let byte = header.encode();
        assert_eq!(Header::decode(byte)?, header, "byte {byte:#010b}");
    }

    Ok(())
}

#[test]
fn hand_constructed_bytes() -> Result<(), Error> {
    let cases = [
        (0b0000_0000, Header::Null),
        (0b0000_1000, Header::Bool(false)),
        (0b0001_1000, Header::Bool(true)),
        (0b0100_0001, Header::Number(NumberKind::F32)),
        (0b0110_0001, Header::Number(NumberKind::F64)),
        (0b0000_1001, Header::Number(NumberKind::I8)),
        (0b0010_1001, Header::Number(NumberKind::I16)),
        (0b0100_1001, Header::Number(NumberKind::I32)),
        (0b0110_1001, Header::Number(NumberKind::I64)),
        (0b0001_0001, Header::Number(NumberKind::U8)),
        (0b0011_0001, Header::Number(NumberKind::U16)),
        (0b0101_0001, Header::Number(NumberKind::U32)),
        (0b0111_0001, Header::Number(NumberKind::U64)),
        (0b0000_0010, Header::String),
        (0b0000_0011, Header::Object(KeyKind::String)),
        (0b0100_1011, Header::Object(KeyKind::Signed(Width::Four))),
        (0b0011_0011, Header::Object(KeyKind::Unsigned(Width::Two))),
        (
            0b0110_0100,
            Header::TypedArray(ElementKind::Number(NumberKind::F64)),
        ),
        (
            0b0001_0100,
            Header::TypedArray(ElementKind::Number(NumberKind::U8)),
        ),
        (0b0011_1100, Header::TypedArray(ElementKind::String)),
        (0b0001_1100, Header::TypedArray(ElementKind::Bool)),
        (0b0000_0101, Header::Array),
        (0b0000_1110, Header::Extension(Extension::Variant)),
        (0b0001_0110, Header::Extension(Extension::Matrix)),
        (0b0001_1110, Header::Extension(Extension::Complex)),
    ];

    for (byte, expected) in cases {
        let header = Header::decode(byte)?;
        assert_eq!(header, expected, "byte {byte:#010b}");
        assert_eq!(header.encode(), byte);
    }

    Ok(())
}

#[test]
fn decoding_is_total() {
    // Every byte either decodes into a header that re-encodes stably,
    // or fails with a typed error.
    for byte in 0..=u8::MAX {
        match Header::decode(byte) {
            Ok(header) => {
                let canonical = header.encode();
                assert_eq!(Header::decode(canonical).ok(), Some(header));
            }
            Err(
                Error::MalformedHeader(..)
                | Error::UnsupportedExtension(..)
                | Error::UnsupportedType(..),
            ) => {}
            Err(e) => panic!("unexpected error for {byte:#010b}: {e}"),
        }
    }
}

#[test]
fn widths() {
    assert_eq!(
        WIDTHS.map(Width::bytes),
        [1, 2, 4, 8],
    );
    for (idx, width) in WIDTHS.into_iter().enumerate() {
        assert_eq!(Width::from_index(idx as u8), width);
    }
}
