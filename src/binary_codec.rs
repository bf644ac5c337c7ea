// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Defines all structured data types that the codec can pass through an `ExtensionObject`
//! envelope. The `SupportedStructure` enumeration contains a value for each of those types
//! enabling them to be passed around in an agnostic fashion, and the decode functions
//! dispatch on the envelope's encoding id to pick the right decoder.

use std::io::Read;

use crate::{
    argument::Argument,
    encoding::{BinaryEncoder, DecodingOptions, EncodingResult},
    encoding_directory,
    eu_information::EUInformation,
    extension_object::{ExtensionObject, ExtensionObjectEncoding},
    node_ids::{DataTypeId, ObjectId},
    range::Range,
    status_codes::StatusCode,
};

/// This macro helps avoid tedious repetition as new structures are added. Each structure
/// named here must be a data type with that exact name in `DataTypeId` and an entry in the
/// encoding directory. The first form just handles the trailing comma after the last entry
/// to save some pointless editing when new structures are added to the list.
macro_rules! supported_structures {
    [ $( $x:ident, ) * ] => (supported_structures![ $( $x ),* ];);
    [ $( $x:ident ), * ] => {
        /// A decoded structure of one of the supported data types.
        #[derive(Debug, PartialEq, Clone)]
        pub enum SupportedStructure {
            $( $x($x), )*
        }

        $(
            impl From<$x> for SupportedStructure {
                fn from(value: $x) -> Self {
                    SupportedStructure::$x(value)
                }
            }
        )*

        impl SupportedStructure {
            /// The id of the structure's data type.
            pub fn data_type_id(&self) -> DataTypeId {
                match self {
                    $( SupportedStructure::$x(_) => DataTypeId::$x, )*
                }
            }

            /// Wraps the structure in an extension object carrying its default binary
            /// encoding id. This is the wire form of the value.
            pub fn to_extension_object(&self) -> ExtensionObject {
                match self {
                    $(
                        SupportedStructure::$x(ref value) => {
                            // The directory holds an encoding id for every supported type
                            let encoding_id =
                                encoding_directory::binary_encoding_id(&DataTypeId::$x.into())
                                    .unwrap();
                            ExtensionObject::from_encodable(encoding_id, value)
                        }
                    )*
                }
            }
        }
    }
}

supported_structures![Argument, Range, EUInformation];

impl SupportedStructure {
    /// Decodes a structure out of an extension object envelope. The envelope's encoding id
    /// picks the decoder through the encoding directory. When `expected_type` is supplied the
    /// decode fails with `BadTypeMismatch` if the envelope holds some other data type -
    /// otherwise the concrete type comes purely from the encoding id.
    pub fn from_extension_object(
        object: &ExtensionObject,
        expected_type: Option<DataTypeId>,
        decoding_options: &DecodingOptions,
    ) -> EncodingResult<Self> {
        // The encoding id has to be one the directory knows
        let data_type = encoding_directory::data_type_of_encoding_id(&object.node_id)
            .ok_or_else(|| {
                debug!("Extension object encoding id {} is unknown", object.node_id);
                StatusCode::BadDataTypeIdUnknown
            })?;

        if let Some(expected_type) = expected_type {
            if data_type != crate::node_id::NodeId::from(expected_type) {
                debug!(
                    "Extension object holds {} but the caller expected {:?}",
                    data_type, expected_type
                );
                return Err(StatusCode::BadTypeMismatch);
            }
        }

        match object.body {
            ExtensionObjectEncoding::ByteString(_) => {}
            ExtensionObjectEncoding::XmlElement(_) => {
                // Only the binary form is decodable here
                return Err(StatusCode::BadDataEncodingUnsupported);
            }
            ExtensionObjectEncoding::None => {
                debug!("Extension object has no body to decode");
                return Err(StatusCode::BadDecodingError);
            }
        }

        // The object id is in the directory, so it is one of the generated ids
        let object_id = object
            .object_id()
            .map_err(|_| StatusCode::BadDataTypeIdUnknown)?;
        let decoded = match object_id {
            ObjectId::Argument_Encoding_DefaultBinary => {
                SupportedStructure::Argument(object.decode_inner::<Argument>(decoding_options)?)
            }
            ObjectId::Range_Encoding_DefaultBinary => {
                SupportedStructure::Range(object.decode_inner::<Range>(decoding_options)?)
            }
            ObjectId::EUInformation_Encoding_DefaultBinary => SupportedStructure::EUInformation(
                object.decode_inner::<EUInformation>(decoding_options)?,
            ),
            _ => {
                // An XML encoding id with a byte string body, or a directory entry with no
                // decoder arm - either way nothing can be done with it
                return Err(StatusCode::BadDataEncodingUnsupported);
            }
        };
        Ok(decoded)
    }

    /// Reads an extension object envelope off the stream and decodes the structure in it.
    pub fn decode_from_stream<S: Read>(
        stream: &mut S,
        expected_type: Option<DataTypeId>,
        decoding_options: &DecodingOptions,
    ) -> EncodingResult<Self> {
        let object = ExtensionObject::decode(stream, decoding_options)?;
        Self::from_extension_object(&object, expected_type, decoding_options)
    }
}
