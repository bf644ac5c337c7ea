// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `NamespaceTable`.

use std::collections::HashMap;

use crate::{
    encoding::EncodingResult, expanded_node_id::ExpandedNodeId, node_id::NodeId,
    status_codes::StatusCode,
};

/// The URI of the standard OPC UA namespace, always index 0 in every namespace table.
pub const OPC_UA_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

/// A table mapping namespace indices to namespace URIs for a session. Index 0 is always the
/// standard OPC UA namespace and index 1 the application's own URI. The table is append only -
/// an index refers to the same URI for as long as the table lives, because live node ids
/// reference namespaces by index.
///
/// The table itself is not synchronized. One table exists per connection / session and shared
/// use wraps it in an `RwLock` - registration happens during session setup under the write
/// lock while lookups take the read lock.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceTable {
    /// URIs in index order, i.e. insertion order
    namespaces: Vec<String>,
    /// Reverse lookup of uri to its index
    indices: HashMap<String, u16>,
}

impl Default for NamespaceTable {
    fn default() -> Self {
        let mut table = NamespaceTable {
            namespaces: Vec::new(),
            indices: HashMap::new(),
        };
        let _ = table.register(OPC_UA_NAMESPACE_URI);
        table
    }
}

impl NamespaceTable {
    /// Creates a table holding the OPC UA namespace at index 0 and the application uri at
    /// index 1.
    pub fn new(application_uri: &str) -> Self {
        let mut table = NamespaceTable::default();
        let _ = table.register(application_uri);
        table
    }

    /// The namespace URIs in index order, suitable for publishing as a NamespaceArray.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Returns the index of the namespace uri, if the table holds it.
    pub fn index_of(&self, uri: &str) -> Option<u16> {
        self.indices.get(uri).copied()
    }

    /// Returns the namespace uri registered at the index, if any.
    pub fn uri_of(&self, index: u16) -> Option<&str> {
        self.namespaces.get(index as usize).map(|ns| ns.as_str())
    }

    /// Registers the uri and returns its index. Registering a uri that is already in the
    /// table returns the existing index, so this is idempotent and the table never holds
    /// duplicates. Fails with `BadOutOfRange` when every u16 index is taken.
    pub fn register(&mut self, uri: &str) -> EncodingResult<u16> {
        if let Some(index) = self.index_of(uri) {
            return Ok(index);
        }
        if self.namespaces.len() > u16::MAX as usize {
            error!("Namespace table is full, cannot register {}", uri);
            return Err(StatusCode::BadOutOfRange);
        }
        let index = self.namespaces.len() as u16;
        self.namespaces.push(uri.to_string());
        self.indices.insert(uri.to_string(), index);
        Ok(index)
    }

    /// Resolves an expanded node id into a plain node id against this table. A node id
    /// carrying a namespace uri resolves through `index_of`; one without is returned as it
    /// is. Node ids belonging to another server (server index != 0) cannot be resolved
    /// locally and fail with `BadNodeIdUnknown`, as does a namespace uri the table does not
    /// hold.
    pub fn resolve(&self, id: &ExpandedNodeId) -> EncodingResult<NodeId> {
        if id.server_index != 0 {
            debug!(
                "Expanded node id {} belongs to server index {}, cannot resolve locally",
                id, id.server_index
            );
            return Err(StatusCode::BadNodeIdUnknown);
        }
        if !id.has_namespace_uri() {
            return Ok(id.node_id.clone());
        }
        match self.index_of(id.namespace_uri.as_ref()) {
            Some(namespace) => Ok(NodeId {
                namespace,
                identifier: id.node_id.identifier.clone(),
            }),
            None => {
                debug!("Namespace uri {} is not in the table", id.namespace_uri);
                Err(StatusCode::BadNodeIdUnknown)
            }
        }
    }

    /// Like [`Self::resolve`] except an unknown namespace uri is registered instead of being
    /// an error. This is the opt-in behaviour for clients building a table from a fresh
    /// import, where every uri encountered is new.
    pub fn resolve_or_register(&mut self, id: &ExpandedNodeId) -> EncodingResult<NodeId> {
        if id.server_index != 0 {
            return Err(StatusCode::BadNodeIdUnknown);
        }
        if !id.has_namespace_uri() {
            return Ok(id.node_id.clone());
        }
        let namespace = self.register(id.namespace_uri.as_ref())?;
        Ok(NodeId {
            namespace,
            identifier: id.node_id.identifier.clone(),
        })
    }
}
