// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains simple data types that map onto primitives, plus the enumerations used by the
//! identifier model. All enumerations encode as Int32 per OPC UA Part 6.

use std::io::{Read, Write};

use crate::{date_time::DateTime, encoding::*, status_codes::StatusCode};

/// This primitive data type is a UInt32 that is used as an identifier, such as a handle.
/// All values, except for 0, are valid. IntegerId = 288,
pub type IntegerId = u32;

/// This Simple DataType is a Double that defines an interval of time in milliseconds (fractions
/// can be used to define sub-millisecond values). Negative values are generally invalid but may
/// have special meanings where the Duration is used. Duration = 290,
pub type Duration = f64;

/// UtcTime = 294,
pub type UtcTime = DateTime;

/// An identifier for a locale, e.g. "en-US". LocaleId = 295,
pub type LocaleId = crate::string::UAString;

/// The kind of identifier a node id carries. IdType = 256,
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdType {
    Numeric = 0,
    String = 1,
    Guid = 2,
    Opaque = 3,
}

impl BinaryEncoder<IdType> for IdType {
    fn byte_len(&self) -> usize {
        4
    }

    fn encode<S: Write>(&self, stream: &mut S) -> EncodingResult<usize> {
        write_i32(stream, *self as i32)
    }

    fn decode<S: Read>(stream: &mut S, _: &DecodingOptions) -> EncodingResult<Self> {
        let value = read_i32(stream)?;
        match value {
            0 => Ok(IdType::Numeric),
            1 => Ok(IdType::String),
            2 => Ok(IdType::Guid),
            3 => Ok(IdType::Opaque),
            _ => {
                error!("Don't know what id type {} is", value);
                Err(StatusCode::BadDecodingError)
            }
        }
    }
}

/// The class of a node in the address space. NodeClass = 257,
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeClass {
    Unspecified = 0,
    Object = 1,
    Variable = 2,
    Method = 4,
    ObjectType = 8,
    VariableType = 16,
    ReferenceType = 32,
    DataType = 64,
    View = 128,
}

impl BinaryEncoder<NodeClass> for NodeClass {
    fn byte_len(&self) -> usize {
        4
    }

    fn encode<S: Write>(&self, stream: &mut S) -> EncodingResult<usize> {
        write_i32(stream, *self as i32)
    }

    fn decode<S: Read>(stream: &mut S, _: &DecodingOptions) -> EncodingResult<Self> {
        let value = read_i32(stream)?;
        match value {
            0 => Ok(NodeClass::Unspecified),
            1 => Ok(NodeClass::Object),
            2 => Ok(NodeClass::Variable),
            4 => Ok(NodeClass::Method),
            8 => Ok(NodeClass::ObjectType),
            16 => Ok(NodeClass::VariableType),
            32 => Ok(NodeClass::ReferenceType),
            64 => Ok(NodeClass::DataType),
            128 => Ok(NodeClass::View),
            _ => {
                error!("Don't know what node class {} is", value);
                Err(StatusCode::BadDecodingError)
            }
        }
    }
}
