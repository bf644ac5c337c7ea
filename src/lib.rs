// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The OPC UA types crate. This holds the built-in data types of OPC UA Part 6, the
//! machine generated namespace zero node ids, and the binary encoding layer that clients
//! and servers use to put values on and off the wire.
//!
//! Most of what is here falls into one of these groups:
//!
//! * Implementations of the built-in data types - `NodeId`, `UAString`, `Guid`, `Variant`
//!   and so on - each implementing [`BinaryEncoder`](encoding::BinaryEncoder).
//! * The generated identifier enums in [`node_ids`] plus the symbolic name [`registry`]
//!   and the type / encoding id [`encoding_directory`] built over them.
//! * The [`NamespaceTable`](namespaces::NamespaceTable) which maps namespace indices to
//!   URIs for a session and resolves `ExpandedNodeId` values.
//! * The [`binary_codec`] dispatch which turns `ExtensionObject` envelopes into typed
//!   structures and back.
//!
//! Nothing in this crate performs I/O or blocks. Decoding is bounded by the limits in
//! [`DecodingOptions`](encoding::DecodingOptions) so malicious or corrupt input from a
//! peer cannot trigger unbounded allocation or recursion.

#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::float_cmp)]
#![allow(clippy::from_over_into)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate serde_derive;

/// Tracing macro for obtaining a lock on a `Mutex`. Sometimes deadlocks can happen in code,
/// and if they do, this macro is useful for finding out where they happened.
#[macro_export]
macro_rules! trace_lock {
    ( $x:expr ) => {{
        let v = $x.lock();
        v
    }};
}

/// Tracing macro for obtaining a read lock on a `RwLock`.
#[macro_export]
macro_rules! trace_read_lock {
    ( $x:expr ) => {{
        let v = $x.read();
        v
    }};
}

/// Tracing macro for obtaining a write lock on a `RwLock`.
#[macro_export]
macro_rules! trace_write_lock {
    ( $x:expr ) => {{
        let v = $x.write();
        v
    }};
}

pub mod constants {
    /// Default maximum size of a message in bytes. 0 would mean no limit.
    pub const MAX_MESSAGE_SIZE: usize = 327_675;
    /// Default maximum number of chunks in a message.
    pub const MAX_CHUNK_COUNT: usize = 5;
    /// Default maximum length in bytes of a string.
    pub const MAX_STRING_LENGTH: usize = 65_535;
    /// Default maximum length in bytes of a byte string.
    pub const MAX_BYTE_STRING_LENGTH: usize = 65_535;
    /// Default maximum number of elements in an array.
    pub const MAX_ARRAY_LENGTH: usize = 1000;
    /// Default maximum depth that recursive structures may decode to.
    pub const MAX_DECODING_DEPTH: usize = 10;
}

mod basic_types;

pub mod argument;
pub mod array;
pub mod binary_codec;
pub mod byte_string;
pub mod data_types;
pub mod data_value;
pub mod date_time;
pub mod diagnostic_info;
pub mod encoding;
pub mod encoding_directory;
pub mod eu_information;
pub mod expanded_node_id;
pub mod extension_object;
pub mod guid;
pub mod localized_text;
pub mod namespaces;
pub mod node_id;
pub mod node_ids;
pub mod qualified_name;
pub mod range;
pub mod registry;
pub mod status_code;
pub mod status_codes;
pub mod string;
pub mod variant;
pub mod variant_type_id;

#[cfg(test)]
mod tests;

pub use crate::{
    argument::Argument,
    array::Array,
    binary_codec::SupportedStructure,
    byte_string::ByteString,
    data_types::*,
    data_value::DataValue,
    date_time::DateTime,
    diagnostic_info::DiagnosticInfo,
    encoding::{BinaryEncoder, DecodingOptions, DepthGauge, EncodingResult},
    eu_information::EUInformation,
    expanded_node_id::ExpandedNodeId,
    extension_object::{ExtensionObject, ExtensionObjectEncoding},
    guid::Guid,
    localized_text::LocalizedText,
    namespaces::NamespaceTable,
    node_id::{Identifier, NodeId},
    node_ids::{
        DataTypeId, ObjectId, ObjectTypeId, ReferenceTypeId, VariableId, VariableTypeId,
    },
    qualified_name::QualifiedName,
    range::Range,
    status_codes::StatusCode,
    string::{UAString, XmlElement},
    variant::Variant,
    variant_type_id::VariantTypeId,
};
