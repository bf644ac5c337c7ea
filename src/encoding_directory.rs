// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The directory associating structured data types with their default encoding ids.
//!
//! Every structured data type in the standard model has companion `_Encoding_DefaultBinary`
//! and `_Encoding_DefaultXml` object ids. Decoders meet the encoding id first - it is what
//! an `ExtensionObject` envelope carries - and need the data type behind it; encoders go the
//! other way. The association is held as an explicit generated table rather than inferred
//! from the `_Encoding_Default` naming convention, which would be fragile across revisions
//! of the specification.

use std::collections::HashMap;

use crate::{
    node_id::NodeId,
    node_ids::{DataTypeId, ObjectId},
};

/// (data type, default binary encoding, default xml encoding) for every structured type the
/// crate can decode. Generated alongside `node_ids.rs`.
const ENCODING_IDS: &[(DataTypeId, ObjectId, ObjectId)] = &[
    (
        DataTypeId::Argument,
        ObjectId::Argument_Encoding_DefaultBinary,
        ObjectId::Argument_Encoding_DefaultXml,
    ),
    (
        DataTypeId::Range,
        ObjectId::Range_Encoding_DefaultBinary,
        ObjectId::Range_Encoding_DefaultXml,
    ),
    (
        DataTypeId::EUInformation,
        ObjectId::EUInformation_Encoding_DefaultBinary,
        ObjectId::EUInformation_Encoding_DefaultXml,
    ),
];

lazy_static! {
    static ref BINARY_ENCODING_IDS: HashMap<NodeId, NodeId> = ENCODING_IDS
        .iter()
        .map(|row| (row.0.into(), row.1.into()))
        .collect();
    static ref XML_ENCODING_IDS: HashMap<NodeId, NodeId> = ENCODING_IDS
        .iter()
        .map(|row| (row.0.into(), row.2.into()))
        .collect();
    static ref DATA_TYPE_IDS: HashMap<NodeId, NodeId> = {
        let mut map = HashMap::new();
        for row in ENCODING_IDS {
            // Both encoding forms lead back to the one data type
            map.insert(row.1.into(), row.0.into());
            map.insert(row.2.into(), row.0.into());
        }
        map
    };
}

/// Returns the id of the default binary encoding of the data type, if the type is known.
pub fn binary_encoding_id(data_type: &NodeId) -> Option<NodeId> {
    BINARY_ENCODING_IDS.get(data_type).cloned()
}

/// Returns the id of the default XML encoding of the data type, if the type is known.
pub fn xml_encoding_id(data_type: &NodeId) -> Option<NodeId> {
    XML_ENCODING_IDS.get(data_type).cloned()
}

/// Returns the data type that an encoding id (binary or XML) belongs to, if the encoding id
/// is known. This is the direction a decoder needs - the envelope names the encoding, the
/// application wants the logical type.
pub fn data_type_of_encoding_id(encoding_id: &NodeId) -> Option<NodeId> {
    DATA_TYPE_IDS.get(encoding_id).cloned()
}
