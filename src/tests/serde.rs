// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use serde_json::json;

use crate::tests::*;

fn serde_json_round_trip<T>(value: T)
where
    T: ::serde::Serialize + ::serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let s = serde_json::to_string(&value).unwrap();
    println!("serialized = {}", s);
    let value2 = serde_json::from_str::<T>(&s).unwrap();
    assert_eq!(value, value2);
}

#[test]
fn serde_string() {
    serde_json_round_trip(UAString::null());
    serde_json_round_trip(UAString::from(""));
    serde_json_round_trip(UAString::from("水Boy"));

    // Null and empty remain distinct in JSON as well
    assert_eq!(serde_json::to_value(UAString::null()).unwrap(), json!(null));
    assert_eq!(serde_json::to_value(UAString::from("")).unwrap(), json!(""));
}

#[test]
fn serde_byte_string() {
    serde_json_round_trip(ByteString::null());
    serde_json_round_trip(ByteString::from(vec![1u8, 2, 3]));

    // Byte strings serialize to base64
    assert_eq!(
        serde_json::to_value(ByteString::from(b"Reboot")).unwrap(),
        json!("UmVib290")
    );
}

#[test]
fn serde_guid() {
    serde_json_round_trip(Guid::null());
    serde_json_round_trip(Guid::new());
}

#[test]
fn serde_date_time() {
    // A date time serializes as its tick count
    let dt = DateTime::ymd(1601, 1, 2);
    assert_eq!(
        serde_json::to_value(dt).unwrap(),
        json!(24i64 * 3600 * 10_000_000)
    );
    serde_json_round_trip(dt);
}

#[test]
fn serde_status_code() {
    serde_json_round_trip(StatusCode::Good);
    serde_json_round_trip(StatusCode::BadDecodingError);
    // Status codes serialize as their numeric form
    assert_eq!(
        serde_json::to_value(StatusCode::BadDecodingError).unwrap(),
        json!(0x8007_0000u32)
    );
}

#[test]
fn serde_node_id() {
    serde_json_round_trip(NodeId::null());
    serde_json_round_trip(NodeId::new(2, "Temperature"));
    serde_json_round_trip(NodeId::new(1, Guid::new()));
    serde_json_round_trip(ExpandedNodeId::from((
        NodeId::new(0, 85u32),
        "urn:mynamespace",
    )));
}

#[test]
fn serde_variant() {
    serde_json_round_trip(Variant::Empty);
    serde_json_round_trip(Variant::from(42u32));
    serde_json_round_trip(Variant::from(vec![1i32, 2, 3]));
}

#[test]
fn serde_data_value() {
    serde_json_round_trip(DataValue::null());
    serde_json_round_trip(DataValue {
        value: Some(Variant::from("x")),
        status: Some(StatusCode::Good),
        source_timestamp: Some(DateTime::ymd(2020, 5, 5)),
        source_picoseconds: Some(10),
        server_timestamp: None,
        server_picoseconds: None,
    });
}
