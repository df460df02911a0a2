//! Decoding tests against hand-assembled BEVE byte streams.

use beve_codec::{
    Value,
    codec::{self, CodecFlags, CodecOptions, Error, Feature, Serializer},
    value::{Complex, List, Matrix, Object, TypedArray, Variant},
};

// {"a": 1, "b": [1.5, 2.5, 3.5]}
const OBJECT_SCENARIO: &[u8] = &[
    0b0000_0011, // object, string keys
    2 << 2,      // 2 members
    1 << 2,
    b'a',
    0b0100_1001, // i32
    1,
    0,
    0,
    0,
    1 << 2,
    b'b',
    0b0110_0100, // typed array of f64
    3 << 2,      // 3 elements
    0,
    0,
    0,
    0,
    0,
    0,
    0xF8,
    0x3F,
    0,
    0,
    0,
    0,
    0,
    0,
    0x04,
    0x40,
    0,
    0,
    0,
    0,
    0,
    0,
    0x0C,
    0x40,
];

// 2x3 column-major matrix with flat data [1, 2, 3, 4, 5, 6].
const MATRIX_SCENARIO: &[u8] = &[
    0b0001_0110, // matrix extension
    1,           // column-major
    0b0100_1100, // typed array of i32
    2 << 2,
    2,
    0,
    0,
    0,
    3,
    0,
    0,
    0,
    0b0100_1100,
    6 << 2,
    1,
    0,
    0,
    0,
    2,
    0,
    0,
    0,
    3,
    0,
    0,
    0,
    4,
    0,
    0,
    0,
    5,
    0,
    0,
    0,
    6,
    0,
    0,
    0,
];

fn scenario_object() -> Value {
    let mut obj = Object::new();
    obj.insert("a".into(), Value::from(1i32));
    obj.insert("b".into(), Value::from(TypedArray::F64(vec![1.5, 2.5, 3.5])));
    Value::Object(obj)
}

fn serializer(flags: CodecFlags) -> Serializer {
    Serializer::new(CodecOptions {
        flags,
        ..Default::default()
    })
    .expect("failed to create serializer")
}

macro_rules! test_should_fail {
    ($name:ident, $data:expr, $error_pat:pat) => {
        #[test]
        fn $name() {
            let result = codec::from_slice($data);

            assert!(
                matches!(result, Err($error_pat)),
                "unexpected result: {:?}",
                result
            );
        }
    };
}

#[test]
fn object_scenario_encodes() -> Result<(), Error> {
    assert_eq!(codec::to_vec(&scenario_object())?, OBJECT_SCENARIO);
    Ok(())
}

#[test]
fn object_scenario_decodes() -> Result<(), Error> {
    assert_eq!(codec::from_slice(OBJECT_SCENARIO)?, scenario_object());
    Ok(())
}

#[test]
fn packed_arrays_match_typed_arrays() -> Result<(), Error> {
    let mut obj = Object::new();
    obj.insert("a".into(), Value::from(1i32));
    obj.insert(
        "b".into(),
        Value::from(vec![
            Value::from(1.5f64),
            Value::from(2.5f64),
            Value::from(3.5f64),
        ]),
    );

    let bytes = serializer(CodecFlags::PACK_ARRAYS).serialize(&Value::Object(obj))?;
    assert_eq!(bytes, OBJECT_SCENARIO);

    Ok(())
}

#[test]
fn packing_skips_mixed_and_short_arrays() -> Result<(), Error> {
    let mut ser = serializer(CodecFlags::PACK_ARRAYS);

    let mixed = Value::from(vec![Value::from(1i32), Value::from(1i64)]);
    assert_eq!(ser.serialize(&mixed)?[0], 0b0000_0101);

    let single = Value::from(vec![Value::from(1i32)]);
    assert_eq!(ser.serialize(&single)?[0], 0b0000_0101);

    let strings = Value::from(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(ser.serialize(&strings)?[0], 0b0011_1100);

    Ok(())
}

#[test]
fn matrix_scenario() -> Result<(), Error> {
    let value = codec::from_slice(MATRIX_SCENARIO)?;
    let Value::Matrix(matrix) = &value else {
        panic!("expected matrix, got {value:?}");
    };

    assert_eq!(matrix.extents, [2, 3]);
    assert_eq!(matrix.data, TypedArray::I32(vec![1, 2, 3, 4, 5, 6]));

    // The flat buffer is grouped into runs of `cols` elements.
    assert_eq!(
        matrix.reshape().unwrap(),
        [
            TypedArray::I32(vec![1, 2, 3]),
            TypedArray::I32(vec![4, 5, 6]),
        ]
    );

    Ok(())
}

#[test]
fn matrix_with_untyped_extents() -> Result<(), Error> {
    let data = [
        0b0001_0110,
        1,
        0b0000_0101, // untyped array
        2 << 2,
        0b0001_0001, // u8
        1,
        0b0000_1001, // i8
        2,
        0b0001_0100, // typed array of u8
        2 << 2,
        7,
        8,
    ];

    let expected = Matrix::new(1, 2, TypedArray::U8(vec![7, 8])).unwrap();
    assert_eq!(codec::from_slice(&data)?, Value::from(expected));

    Ok(())
}

#[test]
fn matrix_encode_rejects_bad_shapes() {
    let mismatched = Matrix {
        extents: [2, 2],
        data: TypedArray::F64(vec![1.0]),
    };
    assert!(matches!(
        codec::to_vec(&Value::from(mismatched)),
        Err(Error::InvalidMatrix(..))
    ));

    let strings = Matrix {
        extents: [1, 1],
        data: TypedArray::Str(vec!["x".into()]),
    };
    assert!(matches!(
        codec::to_vec(&Value::from(strings)),
        Err(Error::UnsupportedValueType(..))
    ));
}

#[test]
fn reshape_needs_a_valid_matrix() {
    let empty = Matrix::new(0, 4, TypedArray::F64(Vec::new())).unwrap();
    assert_eq!(empty.reshape(), Some(Vec::new()));

    // Rows without columns would yield groups out of thin air.
    assert_eq!(Matrix::new(1 << 40, 0, TypedArray::F64(Vec::new())), None);

    let forged = Matrix {
        extents: [1 << 40, 0],
        data: TypedArray::F64(Vec::new()),
    };
    assert_eq!(forged.reshape(), None);
    assert!(matches!(
        codec::to_vec(&Value::from(forged)),
        Err(Error::InvalidMatrix(..))
    ));
}

#[test]
fn complex_components() -> Result<(), Error> {
    let data = [
        0b0001_1110, // complex extension
        0b0100_0001, // f32
        0,
        0,
        0x80,
        0x3F,
        0b0100_0001,
        0,
        0,
        0,
        0x40,
    ];

    assert_eq!(
        codec::from_slice(&data)?,
        Value::from(Complex::new(1.0f32, 2.0f32))
    );

    Ok(())
}

#[test]
fn variant_tags() -> Result<(), Error> {
    let data = [0b0000_1110, 3 << 2, 0b0001_1000];

    assert_eq!(
        codec::from_slice(&data)?,
        Value::from(Variant::new(3, true))
    );
    assert_eq!(
        serializer(CodecFlags::STRIP_VARIANT_TAGS).deserialize(&data)?,
        Value::Bool(true)
    );

    Ok(())
}

#[test]
fn duplicate_keys_keep_last_value() -> Result<(), Error> {
    let data = [
        0b0000_0011,
        2 << 2,
        1 << 2,
        b'k',
        0b0001_0001,
        1,
        1 << 2,
        b'k',
        0b0001_0001,
        2,
    ];

    let mut expected = Object::new();
    expected.insert("k".into(), Value::from(2u8));
    assert_eq!(codec::from_slice(&data)?, Value::Object(expected));

    Ok(())
}

#[test]
fn string_typed_array() -> Result<(), Error> {
    let data = [0b0011_1100, 2 << 2, 1 << 2, b'x', 2 << 2, b'y', b'z'];

    assert_eq!(
        codec::from_slice(&data)?,
        Value::from(TypedArray::Str(vec!["x".into(), "yz".into()]))
    );

    Ok(())
}

#[test]
fn truncation_at_every_offset() -> Result<(), Error> {
    let mut list = List::new();
    list.push(Value::from(-3i16));
    list.push(Value::from("truncate me"));
    list.push(Value::from(TypedArray::U32(vec![1, 2, 3])));
    list.push(Value::from(Complex::new(0.5f64, 1.5f64)));
    list.push(Value::from(Variant::new(70, Value::Null)));
    list.push(Value::from(
        Matrix::new(1, 2, TypedArray::F32(vec![1.0, 2.0])).unwrap(),
    ));

    let mut obj = Object::new();
    obj.insert("list".into(), Value::Array(list));

    for bytes in [codec::to_vec(&Value::Object(obj))?, OBJECT_SCENARIO.to_vec()] {
        for end in 0..bytes.len() {
            let result = codec::from_slice(&bytes[..end]);
            assert!(
                matches!(result, Err(Error::TruncatedInput)),
                "offset {end}: {result:?}"
            );
        }
    }

    Ok(())
}

#[test]
fn recursion_limit() {
    let nested = |depth: usize| {
        let mut data = [0b0000_0101, 1 << 2].repeat(depth);
        data.push(0);
        data
    };

    assert!(codec::from_slice(&nested(100)).is_ok());
    assert!(matches!(
        codec::from_slice(&nested(150)),
        Err(Error::DepthExceeded)
    ));

    let mut deep = Value::Null;
    for _ in 0..150 {
        deep = Value::from(vec![deep]);
    }
    assert!(matches!(codec::to_vec(&deep), Err(Error::DepthExceeded)));

    let mut permissive = Serializer::new(CodecOptions {
        recursion_limit: 256,
        ..Default::default()
    })
    .unwrap();
    assert!(permissive.deserialize(&nested(150)).is_ok());
    assert!(permissive.serialize(&deep).is_ok());
}

#[test]
fn zero_recursion_limit_is_rejected() {
    let result = Serializer::new(CodecOptions {
        recursion_limit: 0,
        ..Default::default()
    });
    assert!(matches!(result, Err(Error::BadConfig(..))));
}

#[test]
fn trailing_data() -> Result<(), Error> {
    assert!(matches!(
        codec::from_slice(&[0, 0, 0]),
        Err(Error::TrailingData(2))
    ));
    assert_eq!(
        serializer(CodecFlags::ALLOW_TRAILING_DATA).deserialize(&[0, 0, 0])?,
        Value::Null
    );

    Ok(())
}

test_should_fail!(
    integer_keys,
    &[0b0100_1011, 1 << 2, 1, 0, 0, 0, 0],
    Error::UnsupportedFeature(Feature::IntegerKeys)
);
test_should_fail!(
    bool_typed_array,
    &[0b0001_1100, 0],
    Error::UnsupportedFeature(Feature::BoolArrays)
);
test_should_fail!(
    row_major_matrix,
    &[0b0001_0110, 0],
    Error::UnsupportedFeature(Feature::RowMajor)
);
test_should_fail!(
    unknown_extension,
    &[0b0010_0110],
    Error::UnsupportedExtension(4)
);
test_should_fail!(unknown_type, &[0b0000_0111], Error::UnsupportedType(7));
test_should_fail!(
    reserved_number_category,
    &[0b0111_1001, 0, 0, 0, 0, 0, 0, 0, 0],
    Error::MalformedHeader(0b0111_1001)
);
test_should_fail!(
    invalid_utf8,
    &[0b0000_0010, 2 << 2, 0xC3, 0x28],
    Error::InvalidUtf8(..)
);
test_should_fail!(
    matrix_extent_mismatch,
    &[0b0001_0110, 1, 0b0001_0100, 2 << 2, 2, 2, 0b0001_0100, 1 << 2, 1],
    Error::InvalidMatrix(..)
);
test_should_fail!(
    matrix_string_data,
    &[
        0b0001_0110,
        1,
        0b0001_0100,
        2 << 2,
        1,
        1,
        0b0011_1100,
        1 << 2,
        0,
    ],
    Error::InvalidMatrix(..)
);
test_should_fail!(
    matrix_rows_without_columns,
    &[
        0b0001_0110,
        1,
        0b0111_0100, // typed array of u64
        2 << 2,
        0,
        0,
        0,
        0,
        0,
        1,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0b0001_0100,
        0,
    ],
    Error::InvalidMatrix(..)
);
