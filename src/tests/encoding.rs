// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use std::io::Cursor;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::encoding::{read_array, write_array};
use crate::tests::*;

#[test]
fn encoding_bool() {
    serialize_test(true);
    serialize_test(false);
}

#[test]
fn decoding_bool_nonzero_is_true() {
    // Part 6 says any nonzero byte decodes as true
    let bytes = [0x02u8];
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    assert_eq!(bool::decode(&mut stream, &decoding_options).unwrap(), true);
}

#[test]
fn encoding_sbyte() {
    serialize_test(0i8);
    serialize_test(100i8);
    serialize_test(-90i8);
}

#[test]
fn encoding_byte() {
    serialize_test(0u8);
    serialize_test(255u8);
    serialize_test(90u8);
}

#[test]
fn encoding_int16() {
    serialize_test(0i16);
    serialize_test(-17000i16);
    serialize_test(32000i16);
}

#[test]
fn encoding_uint16() {
    serialize_test(0u16);
    serialize_test(57000u16);
    serialize_test(32000u16);
}

#[test]
fn encoding_int32() {
    serialize_test(0i32);
    serialize_test(-17444000i32);
    serialize_test(32004440i32);
}

#[test]
fn encoding_uint32() {
    serialize_test(0u32);
    serialize_test(57055500u32);
    serialize_test(32555000u32);
}

#[test]
fn encoding_int64() {
    serialize_test(0i64);
    serialize_test(-17442224000i64);
    serialize_test(32022204440i64);
}

#[test]
fn encoding_uint64() {
    serialize_test(0u64);
    serialize_test(57054445500u64);
    serialize_test(34442555000u64);
}

#[test]
fn encoding_f32() {
    serialize_test(0f32);
    serialize_test(12.4342f32);
    serialize_test(5686.222f32);
}

#[test]
fn encoding_f64() {
    serialize_test(0f64);
    serialize_test(12.43424324234f64);
    serialize_test(5686.222342342f64);
}

#[test]
fn encoding_string() {
    // Null
    serialize_test(UAString::null());
    // UTF-8 strings
    serialize_test(UAString::from(""));
    serialize_test(UAString::from("ショッピング"));
    serialize_test(UAString::from("This is a test"));
}

#[test]
fn encode_string_part_6_5224() {
    // Sample from OPCUA Part 6 - 5.2.2.4
    let expected = [0x06, 0x00, 0x00, 0x00, 0xE6, 0xB0, 0xB4, 0x42, 0x6F, 0x79];
    let input = UAString::from("水Boy");
    serialize_and_compare(input, &expected);
}

#[test]
fn null_string_sentinel() {
    // A null string is length -1 on the wire, an empty string length 0, and they decode
    // back to distinct values
    serialize_and_compare(UAString::null(), &[0xff, 0xff, 0xff, 0xff]);
    serialize_and_compare(UAString::from(""), &[0x00, 0x00, 0x00, 0x00]);

    let decoding_options = DecodingOptions::test();
    let mut stream = Cursor::new(vec![0xffu8, 0xff, 0xff, 0xff]);
    let null = UAString::decode(&mut stream, &decoding_options).unwrap();
    assert!(null.is_null());

    let mut stream = Cursor::new(vec![0x00u8, 0x00, 0x00, 0x00]);
    let empty = UAString::decode(&mut stream, &decoding_options).unwrap();
    assert!(!empty.is_null());
    assert!(empty.is_empty());
    assert_ne!(null, empty);
}

#[test]
fn decode_string_malformed_utf8() {
    // Test that string returns a decoding error when it receives some malformed UTF-8
    // Bytes below are a mangled 水Boy, one byte too few for the declared length
    let bytes = [0x06, 0x00, 0x00, 0x00, 0xB0, 0xB4, 0x42, 0x6F, 0x79, 0xB0];
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        UAString::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadDecodingError
    );
}

#[test]
fn decode_string_truncated() {
    // Declared length is 6 but only 3 bytes follow
    let bytes = [0x06, 0x00, 0x00, 0x00, 0x42, 0x6F, 0x79];
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        UAString::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadEndOfStream
    );
}

#[test]
fn decode_string_length_limit() {
    let decoding_options = DecodingOptions {
        max_string_length: 4,
        ..Default::default()
    };
    let bytes = [0x06, 0x00, 0x00, 0x00, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41];
    let mut stream = Cursor::new(bytes);
    assert_eq!(
        UAString::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadEncodingLimitsExceeded
    );
}

#[test]
fn encoding_byte_string() {
    serialize_test(ByteString::null());
    serialize_test(ByteString::from(vec![]));
    serialize_test(ByteString::from(vec![1u8, 2, 3, 4, 5]));
}

#[test]
fn decode_byte_string_length_limit() {
    let decoding_options = DecodingOptions {
        max_byte_string_length: 2,
        ..Default::default()
    };
    let bytes = [0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04];
    let mut stream = Cursor::new(bytes);
    assert_eq!(
        ByteString::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadEncodingLimitsExceeded
    );
}

#[test]
fn encoding_guid() {
    serialize_test(Guid::null());
    serialize_test(Guid::new());
}

#[test]
fn encoding_datetime() {
    serialize_test(DateTime::now());
    serialize_test(DateTime::epoch());
    serialize_test(DateTime::ymd(2012, 4, 23));
}

#[test]
fn encoding_status_code() {
    serialize_test(StatusCode::Good);
    serialize_test(StatusCode::BadDecodingError);
    serialize_test(StatusCode::UncertainInitialValue);
}

#[test]
fn encoding_localized_text() {
    serialize_test(LocalizedText::null());
    serialize_test(LocalizedText::new("en-US", "A temperature"));
    // Locale and text bits come and go independently
    serialize_test(LocalizedText {
        locale: UAString::null(),
        text: UAString::from("no locale"),
    });
    serialize_test(LocalizedText {
        locale: UAString::from("de"),
        text: UAString::null(),
    });
}

#[test]
fn encoding_qualified_name() {
    serialize_test(QualifiedName::null());
    serialize_test(QualifiedName::new(2, "Temperature"));
}

#[test]
fn encoding_diagnostic_info() {
    serialize_test(DiagnosticInfo::null());
    let diagnostic_info = DiagnosticInfo {
        symbolic_id: Some(10),
        namespace_uri: Some(11),
        locale: Some(12),
        localized_text: Some(13),
        additional_info: Some(UAString::from("additional")),
        inner_status_code: Some(StatusCode::BadNotFound),
        inner_diagnostic_info: Some(Box::new(DiagnosticInfo {
            symbolic_id: Some(99),
            ..DiagnosticInfo::null()
        })),
    };
    serialize_test(diagnostic_info);
}

#[test]
fn decode_diagnostic_info_depth_limit() {
    // Build a diagnostic info nested deeper than the decoder permits
    let mut diagnostic_info = DiagnosticInfo::null();
    for _ in 0..crate::constants::MAX_DECODING_DEPTH + 1 {
        diagnostic_info = DiagnosticInfo {
            inner_diagnostic_info: Some(Box::new(diagnostic_info)),
            ..DiagnosticInfo::null()
        };
    }
    let mut stream = serialize_as_stream(diagnostic_info);
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        DiagnosticInfo::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadEncodingLimitsExceeded
    );
}

#[test]
fn encoding_array() {
    // Null array and empty array are distinct on the wire and after a round trip
    let null_array: Option<Vec<u32>> = None;
    let empty_array: Option<Vec<u32>> = Some(vec![]);
    let array: Option<Vec<u32>> = Some(vec![10, 20, 30]);

    let decoding_options = DecodingOptions::test();
    for value in [null_array, empty_array, array] {
        let mut stream = Cursor::new(Vec::new());
        let _ = write_array(&mut stream, &value).unwrap();
        stream.set_position(0);
        let decoded: Option<Vec<u32>> = read_array(&mut stream, &decoding_options).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn encoding_null_array_sentinel() {
    let null_array: Option<Vec<u32>> = None;
    let mut stream = Cursor::new(Vec::new());
    let _ = write_array(&mut stream, &null_array).unwrap();
    assert_eq!(stream.into_inner(), vec![0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn decode_array_length_limit() {
    let decoding_options = DecodingOptions {
        max_array_length: 2,
        ..Default::default()
    };
    let mut stream = Cursor::new(Vec::new());
    let value: Option<Vec<u32>> = Some(vec![1, 2, 3]);
    let _ = write_array(&mut stream, &value).unwrap();
    stream.set_position(0);
    let result: EncodingResult<Option<Vec<u32>>> = read_array(&mut stream, &decoding_options);
    assert_eq!(result.unwrap_err(), StatusCode::BadEncodingLimitsExceeded);
}

#[test]
fn depth_gauge_unwinds() {
    let dg = Arc::new(Mutex::new(DepthGauge::default()));
    let max_depth = dg.lock().max_depth();

    // Iterate the depth
    {
        let mut locks = Vec::new();
        for _ in 0..max_depth {
            locks.push(crate::encoding::DepthLock::obtain(dg.clone()).unwrap());
        }
        // Depth is now at the limit, one more errors
        let result = crate::encoding::DepthLock::obtain(dg.clone());
        assert_eq!(result.unwrap_err(), StatusCode::BadEncodingLimitsExceeded);
    }

    // The drops unwound the gauge back to zero
    assert_eq!(dg.lock().current_depth(), 0);
}

#[test]
fn encoding_data_value() {
    serialize_test(DataValue::null());
    serialize_test(DataValue::value_only(Variant::from(123u32)));
    let data_value = DataValue {
        value: Some(Variant::from("hello")),
        status: Some(StatusCode::GoodClamped),
        source_timestamp: Some(DateTime::ymd(2020, 1, 2)),
        source_picoseconds: Some(100),
        server_timestamp: Some(DateTime::ymd(2020, 1, 2)),
        server_picoseconds: Some(200),
    };
    serialize_test(data_value);
}

#[test]
fn encoding_enums() {
    serialize_test(NodeClass::Variable);
    serialize_test(IdType::Opaque);

    // Enums are Int32 on the wire and unknown discriminants are rejected
    let bytes = [0x37, 0x00, 0x00, 0x00];
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    assert_eq!(
        NodeClass::decode(&mut stream, &decoding_options).unwrap_err(),
        StatusCode::BadDecodingError
    );
}
