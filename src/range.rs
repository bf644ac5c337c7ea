// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the definition of `Range`.

use std::io::{Read, Write};

use crate::encoding::*;

/// A range of values, from OPC UA Part 8. Typically found in the EURange property of an
/// analog item to describe the span its value normally takes.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    /// Lowest value in the range.
    pub low: f64,
    /// Highest value in the range.
    pub high: f64,
}

impl BinaryEncoder<Range> for Range {
    fn byte_len(&self) -> usize {
        self.low.byte_len() + self.high.byte_len()
    }

    fn encode<S: Write>(&self, stream: &mut S) -> EncodingResult<usize> {
        let mut size = 0;
        size += self.low.encode(stream)?;
        size += self.high.encode(stream)?;
        assert_eq!(size, self.byte_len());
        Ok(size)
    }

    fn decode<S: Read>(stream: &mut S, decoding_options: &DecodingOptions) -> EncodingResult<Self> {
        let low = f64::decode(stream, decoding_options)?;
        let high = f64::decode(stream, decoding_options)?;
        Ok(Range { low, high })
    }
}

impl Range {
    pub fn new(low: f64, high: f64) -> Range {
        Range { low, high }
    }
}
