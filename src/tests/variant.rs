// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use std::io::Cursor;

use crate::tests::*;
use crate::variant_type_id::EncodingMask;

#[test]
fn encoding_variant_scalars() {
    serialize_test(Variant::Empty);
    serialize_test(Variant::from(true));
    serialize_test(Variant::from(-5i8));
    serialize_test(Variant::from(5u8));
    serialize_test(Variant::from(-100i16));
    serialize_test(Variant::from(100u16));
    serialize_test(Variant::from(-1000i32));
    serialize_test(Variant::from(1000u32));
    serialize_test(Variant::from(-100000i64));
    serialize_test(Variant::from(100000u64));
    serialize_test(Variant::from(1.5f32));
    serialize_test(Variant::from(1.5f64));
    serialize_test(Variant::from("Hello"));
    serialize_test(Variant::from(UAString::null()));
    serialize_test(Variant::from(DateTime::ymd(2000, 1, 1)));
    serialize_test(Variant::from(Guid::new()));
    serialize_test(Variant::from(StatusCode::BadTimeout));
    serialize_test(Variant::from(ByteString::from(b"fish")));
    serialize_test(Variant::from(QualifiedName::new(2, "Browse")));
    serialize_test(Variant::from(LocalizedText::new("en", "Hello")));
    serialize_test(Variant::from(NodeId::new(2, "Temperature")));
    serialize_test(Variant::from(ExpandedNodeId::from((
        NodeId::new(0, 85u32),
        "urn:elsewhere",
    ))));
    serialize_test(Variant::from(DiagnosticInfo::null()));
}

#[test]
fn encoding_variant_nested() {
    serialize_test(Variant::Variant(Box::new(Variant::from(42u32))));
    serialize_test(Variant::from(DataValue::value_only(Variant::from(8i16))));
}

#[test]
fn encoding_variant_single_dimension_array() {
    serialize_test(Variant::from(vec![1i32, 2, 3, 4]));
    serialize_test(Variant::from(vec![
        "one".to_string(),
        "two".to_string(),
        "three".to_string(),
    ]));
}

#[test]
fn encoding_variant_multi_dimension_array() {
    let values: Vec<Variant> = (0..12i32).map(Variant::from).collect();
    let array = Array::new_multi(VariantTypeId::Int32, values, vec![3u32, 4u32]).unwrap();
    serialize_test(Variant::from(array));
}

#[test]
fn variant_array_wire_form() {
    // A 2 element byte array: mask = Byte | array values bit, length 2, then the bytes
    let v = Variant::from(vec![0x10u8, 0x20u8]);
    serialize_and_compare(
        v,
        &[
            EncodingMask::BYTE | EncodingMask::ARRAY_VALUES_BIT,
            0x02,
            0x00,
            0x00,
            0x00,
            0x10,
            0x20,
        ],
    );
}

#[test]
fn decoding_variant_null_array() {
    // Array values bit with length -1 is a null array, decoded as an empty array of the type
    let bytes = [
        EncodingMask::INT32 | EncodingMask::ARRAY_VALUES_BIT,
        0xff,
        0xff,
        0xff,
        0xff,
    ];
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    let value = Variant::decode(&mut stream, &decoding_options).unwrap();
    if let Variant::Array(array) = value {
        assert!(array.values.is_empty());
        assert_eq!(array.value_type, VariantTypeId::Int32);
    } else {
        panic!("Expected an array");
    }
}

#[test]
fn decoding_variant_array_limit() {
    let decoding_options = DecodingOptions {
        max_array_length: 3,
        ..Default::default()
    };
    let mut stream = serialize_as_stream(Variant::from(vec![1i32, 2, 3, 4]));
    assert_eq!(
        Variant::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadEncodingLimitsExceeded
    );
}

#[test]
fn decoding_variant_bad_dimensions() {
    // Dimensions that don't multiply out to the element count are rejected
    let values: Vec<Variant> = (0..4i32).map(Variant::from).collect();
    let mut array = Array::new_multi(VariantTypeId::Int32, values, vec![2u32, 2u32]).unwrap();
    array.dimensions = vec![3, 2];
    let mut stream = serialize_as_stream(Variant::from(array));
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        Variant::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadDecodingError
    );
}

#[test]
fn decoding_variant_unknown_mask() {
    let bytes = [0x3au8];
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        Variant::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadDecodingError
    );
}

#[test]
fn decoding_deeply_nested_variant() {
    // Nested variants beyond the depth gauge fail instead of recursing unboundedly
    let mut variant = Variant::from(1u8);
    for _ in 0..crate::constants::MAX_DECODING_DEPTH + 1 {
        variant = Variant::Variant(Box::new(variant));
    }
    let mut stream = serialize_as_stream(variant);
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        Variant::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadEncodingLimitsExceeded
    );
}

#[test]
fn variant_type_ids() {
    assert_eq!(Variant::from(10u8).type_id(), VariantTypeId::Byte);
    assert_eq!(
        Variant::from(vec![1i32]).type_id(),
        VariantTypeId::Array
    );
    assert_eq!(
        Variant::from(10.0f64).data_type(),
        Some(DataTypeId::Double.into())
    );
    assert_eq!(
        Variant::from(vec![1i32, 2]).data_type(),
        Some(DataTypeId::Int32.into())
    );
    assert_eq!(Variant::Empty.data_type(), None);
}

#[test]
fn array_validation() {
    // Heterogenous arrays are invalid
    let result = Array::new_single(
        VariantTypeId::Int32,
        vec![Variant::from(1i32), Variant::from("two")],
    );
    assert!(result.is_err());
    // Nested arrays are invalid
    let inner = Array::new_single(VariantTypeId::Int32, vec![Variant::from(1i32)]).unwrap();
    let result = Array::new_single(VariantTypeId::Array, vec![Variant::from(inner)]);
    assert!(result.is_err());
}
