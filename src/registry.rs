// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Symbolic name lookup over the generated namespace zero node ids.
//!
//! The tables in `node_ids.rs` associate every well known identifier with the symbolic name
//! it has in the specification's NodeIds.csv. This module folds those tables into one pair
//! of maps, built once on first use, so diagnostic and logging code can render a node id as
//! `Server` rather than `i=2253`, and tooling can go the other way.
//!
//! Lookups are total - an unknown name or id is an expected outcome (servers routinely see
//! ids from newer revisions of the standard than they were built against) and returns `None`
//! rather than an error.

use std::collections::HashMap;

use crate::{node_id::NodeId, node_ids::*};

lazy_static! {
    static ref NAME_TO_ID: HashMap<&'static str, NodeId> = {
        let mut map = HashMap::new();
        for table in TABLES {
            for (name, value) in *table {
                map.insert(*name, NodeId::new(0, *value));
            }
        }
        map
    };
    static ref ID_TO_NAME: HashMap<NodeId, &'static str> = {
        let mut map = HashMap::new();
        for table in TABLES {
            for (name, value) in *table {
                map.insert(NodeId::new(0, *value), *name);
            }
        }
        map
    };
}

const TABLES: &[&[(&str, u32)]] = &[
    DATA_TYPE_NAMES,
    REFERENCE_TYPE_NAMES,
    OBJECT_NAMES,
    OBJECT_TYPE_NAMES,
    VARIABLE_TYPE_NAMES,
    VARIABLE_NAMES,
];

/// Returns the namespace zero node id registered under the symbolic name.
pub fn lookup(name: &str) -> Option<NodeId> {
    NAME_TO_ID.get(name).cloned()
}

/// Returns the symbolic name of a well known namespace zero node id.
pub fn reverse_lookup(id: &NodeId) -> Option<&'static str> {
    ID_TO_NAME.get(id).copied()
}

/// The number of identifiers in the registry.
pub fn len() -> usize {
    NAME_TO_ID.len()
}

/// Iterates the symbolic names in the registry.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAME_TO_ID.keys().copied()
}
