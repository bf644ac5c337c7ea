// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use std::io::Cursor;

use crate::binary_codec::SupportedStructure;
use crate::extension_object::ExtensionObjectEncoding;
use crate::tests::*;

fn sample_argument() -> Argument {
    Argument {
        name: UAString::from("Pressure"),
        data_type: DataTypeId::Double.into(),
        value_rank: -1,
        array_dimensions: None,
        description: LocalizedText::new("en", "Pressure in hPa"),
    }
}

#[test]
fn encoding_argument() {
    serialize_test(sample_argument());
    // An argument with dimensions matching its value rank
    serialize_test(Argument {
        name: UAString::from("Matrix"),
        data_type: DataTypeId::Double.into(),
        value_rank: 2,
        array_dimensions: Some(vec![3, 3]),
        description: LocalizedText::null(),
    });
}

#[test]
fn encoding_argument_bad_dimensions() {
    let argument = Argument {
        name: UAString::from("Broken"),
        data_type: DataTypeId::Double.into(),
        value_rank: 2,
        array_dimensions: Some(vec![3]),
        description: LocalizedText::null(),
    };
    let mut stream = Cursor::new(vec![0u8; argument.byte_len()]);
    assert_eq!(
        argument.encode(&mut stream).unwrap_err(),
        StatusCode::BadDataEncodingInvalid
    );
}

#[test]
fn encoding_range() {
    serialize_test(Range::new(0.0, 100.0));
}

#[test]
fn encoding_eu_information() {
    serialize_test(EUInformation {
        namespace_uri: UAString::from("http://www.opcfoundation.org/UA/units/un/cefact"),
        unit_id: 4408652,
        display_name: LocalizedText::new("", "°C"),
        description: LocalizedText::new("en", "degree Celsius"),
    });
}

#[test]
fn codec_envelope_carries_binary_encoding_id() {
    let value = SupportedStructure::from(sample_argument());
    assert_eq!(value.data_type_id(), DataTypeId::Argument);

    let object = value.to_extension_object();
    // The envelope is tagged with Argument_Encoding_DefaultBinary = 298
    assert_eq!(object.node_id, NodeId::new(0, 298u32));

    // The first thing decoded off the encoded bytes is that same node id
    let bytes = object.encode_to_vec();
    let mut stream = Cursor::new(bytes);
    let decoding_options = DecodingOptions::test();
    let envelope_id = NodeId::decode(&mut stream, &decoding_options).unwrap();
    assert_eq!(envelope_id, NodeId::new(0, 298u32));

    // And the directory leads from the encoding id back to the Argument data type
    assert_eq!(
        crate::encoding_directory::data_type_of_encoding_id(&envelope_id),
        Some(NodeId::new(0, 296u32))
    );
}

#[test]
fn codec_round_trip() {
    let decoding_options = DecodingOptions::test();
    let values = [
        SupportedStructure::from(sample_argument()),
        SupportedStructure::from(Range::new(-40.0, 85.0)),
        SupportedStructure::from(EUInformation {
            namespace_uri: UAString::null(),
            unit_id: 0,
            display_name: LocalizedText::null(),
            description: LocalizedText::null(),
        }),
    ];
    for value in values {
        let bytes = value.to_extension_object().encode_to_vec();
        let mut stream = Cursor::new(bytes);
        let decoded =
            SupportedStructure::decode_from_stream(&mut stream, None, &decoding_options).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn codec_expected_type() {
    let decoding_options = DecodingOptions::test();
    let object = SupportedStructure::from(sample_argument()).to_extension_object();

    // Matching expectation decodes
    let decoded = SupportedStructure::from_extension_object(
        &object,
        Some(DataTypeId::Argument),
        &decoding_options,
    )
    .unwrap();
    assert_eq!(decoded.data_type_id(), DataTypeId::Argument);

    // Mismatched expectation is refused before the body is parsed
    assert_eq!(
        SupportedStructure::from_extension_object(
            &object,
            Some(DataTypeId::Range),
            &decoding_options
        )
        .unwrap_err(),
        StatusCode::BadTypeMismatch
    );
}

#[test]
fn codec_unknown_encoding_id() {
    let decoding_options = DecodingOptions::test();
    let mut object = SupportedStructure::from(sample_argument()).to_extension_object();
    // Retag the envelope with an id the directory does not hold
    object.node_id = NodeId::new(0, 999999u32);
    assert_eq!(
        SupportedStructure::from_extension_object(&object, None, &decoding_options).unwrap_err(),
        StatusCode::BadDataTypeIdUnknown
    );
}

#[test]
fn codec_truncated_body() {
    let decoding_options = DecodingOptions::test();
    let mut object = SupportedStructure::from(sample_argument()).to_extension_object();
    // Chop the last byte off the body, so a field runs dry mid decode
    if let ExtensionObjectEncoding::ByteString(ref mut body) = object.body {
        let bytes = body.value.as_mut().unwrap();
        bytes.pop();
    } else {
        panic!("Expected a byte string body");
    }
    assert_eq!(
        SupportedStructure::from_extension_object(&object, None, &decoding_options).unwrap_err(),
        StatusCode::BadEndOfStream
    );
}

#[test]
fn codec_xml_body_unsupported() {
    let decoding_options = DecodingOptions::test();
    let object = ExtensionObject {
        node_id: ObjectId::Argument_Encoding_DefaultXml.into(),
        body: ExtensionObjectEncoding::XmlElement(XmlElement::from("<Argument/>")),
    };
    assert_eq!(
        SupportedStructure::from_extension_object(&object, None, &decoding_options).unwrap_err(),
        StatusCode::BadDataEncodingUnsupported
    );
}

#[test]
fn codec_empty_body() {
    let decoding_options = DecodingOptions::test();
    let object = ExtensionObject {
        node_id: ObjectId::Argument_Encoding_DefaultBinary.into(),
        body: ExtensionObjectEncoding::None,
    };
    assert_eq!(
        SupportedStructure::from_extension_object(&object, None, &decoding_options).unwrap_err(),
        StatusCode::BadDecodingError
    );
}

#[test]
fn encoding_extension_object() {
    serialize_test(ExtensionObject::null());
    serialize_test(SupportedStructure::from(sample_argument()).to_extension_object());
}
