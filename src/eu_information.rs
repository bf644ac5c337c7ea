// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the definition of `EUInformation`.

use std::io::{Read, Write};

use crate::{encoding::*, localized_text::LocalizedText, string::UAString};

/// Engineering unit information, from OPC UA Part 8. The unit id is a UNECE recommendation 20
/// common code when the namespace uri is the standard units namespace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EUInformation {
    /// Organization responsible for the unit definitions.
    pub namespace_uri: UAString,
    /// Identifier of the unit within the namespace.
    pub unit_id: i32,
    /// Display name of the unit, e.g. "°C".
    pub display_name: LocalizedText,
    /// Full name of the unit, e.g. "degree Celsius".
    pub description: LocalizedText,
}

impl BinaryEncoder<EUInformation> for EUInformation {
    fn byte_len(&self) -> usize {
        let mut size = 0;
        size += self.namespace_uri.byte_len();
        size += self.unit_id.byte_len();
        size += self.display_name.byte_len();
        size += self.description.byte_len();
        size
    }

    fn encode<S: Write>(&self, stream: &mut S) -> EncodingResult<usize> {
        let mut size = 0;
        size += self.namespace_uri.encode(stream)?;
        size += self.unit_id.encode(stream)?;
        size += self.display_name.encode(stream)?;
        size += self.description.encode(stream)?;
        assert_eq!(size, self.byte_len());
        Ok(size)
    }

    fn decode<S: Read>(stream: &mut S, decoding_options: &DecodingOptions) -> EncodingResult<Self> {
        let namespace_uri = UAString::decode(stream, decoding_options)?;
        let unit_id = i32::decode(stream, decoding_options)?;
        let display_name = LocalizedText::decode(stream, decoding_options)?;
        let description = LocalizedText::decode(stream, decoding_options)?;
        Ok(EUInformation {
            namespace_uri,
            unit_id,
            display_name,
            description,
        })
    }
}
