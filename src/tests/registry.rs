// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use std::str::FromStr;

use crate::{encoding_directory, registry};
use crate::tests::*;

#[test]
fn registry_lookup() {
    assert_eq!(registry::lookup("Server"), Some(NodeId::new(0, 2253u32)));
    assert_eq!(
        registry::lookup("Server_ServerStatus_CurrentTime"),
        Some(NodeId::new(0, 2258u32))
    );
    assert_eq!(
        registry::lookup("Argument_Encoding_DefaultBinary"),
        Some(NodeId::new(0, 298u32))
    );
    assert_eq!(registry::lookup("NoSuchIdentifier"), None);
}

#[test]
fn registry_reverse_lookup() {
    assert_eq!(
        registry::reverse_lookup(&NodeId::new(0, 2253u32)),
        Some("Server")
    );
    assert_eq!(
        registry::reverse_lookup(&NodeId::new(0, 2258u32)),
        Some("Server_ServerStatus_CurrentTime")
    );
    // Unknown ids are an expected outcome, not an error
    assert_eq!(registry::reverse_lookup(&NodeId::new(0, 0xdeadu32)), None);
    // The registry only covers namespace 0
    assert_eq!(registry::reverse_lookup(&NodeId::new(2, 2253u32)), None);
    assert_eq!(registry::reverse_lookup(&NodeId::new(0, "Server")), None);
}

#[test]
fn registry_parse_and_render() {
    // A parsed well known id renders symbolically
    let node_id = NodeId::from_str("i=2253").unwrap();
    assert_eq!(node_id, NodeId::new(0, 2253u32));
    assert_eq!(registry::reverse_lookup(&node_id), Some("Server"));
}

#[test]
fn registry_completeness() {
    // Every symbolic name reverse resolves to itself
    assert!(registry::len() > 100);
    for name in registry::names() {
        let node_id = registry::lookup(name).unwrap();
        assert_eq!(registry::reverse_lookup(&node_id), Some(name));
    }
}

#[test]
fn directory_lookup() {
    let argument: NodeId = DataTypeId::Argument.into();
    assert_eq!(
        encoding_directory::binary_encoding_id(&argument),
        Some(NodeId::new(0, 298u32))
    );
    assert_eq!(
        encoding_directory::xml_encoding_id(&argument),
        Some(NodeId::new(0, 297u32))
    );
    assert_eq!(
        encoding_directory::data_type_of_encoding_id(&NodeId::new(0, 298u32)),
        Some(NodeId::new(0, 296u32))
    );
    // The xml encoding id leads back to the same data type
    assert_eq!(
        encoding_directory::data_type_of_encoding_id(&NodeId::new(0, 297u32)),
        Some(NodeId::new(0, 296u32))
    );
    // A data type id is not an encoding id
    assert_eq!(
        encoding_directory::data_type_of_encoding_id(&argument),
        None
    );
    assert_eq!(
        encoding_directory::binary_encoding_id(&NodeId::new(0, 12345u32)),
        None
    );
}

#[test]
fn directory_bidirectional() {
    // For every supported data type the encoding ids map back to the type
    for data_type in [
        DataTypeId::Argument,
        DataTypeId::Range,
        DataTypeId::EUInformation,
    ] {
        let data_type: NodeId = data_type.into();
        let binary = encoding_directory::binary_encoding_id(&data_type).unwrap();
        let xml = encoding_directory::xml_encoding_id(&data_type).unwrap();
        assert_eq!(
            encoding_directory::data_type_of_encoding_id(&binary),
            Some(data_type.clone())
        );
        assert_eq!(
            encoding_directory::data_type_of_encoding_id(&xml),
            Some(data_type.clone())
        );
    }
}
