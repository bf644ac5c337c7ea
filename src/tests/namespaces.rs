// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use parking_lot::RwLock;

use crate::namespaces::OPC_UA_NAMESPACE_URI;
use crate::tests::*;

#[test]
fn namespace_table_fixed_indices() {
    let table = NamespaceTable::new("urn:test:application");
    assert_eq!(table.uri_of(0), Some(OPC_UA_NAMESPACE_URI));
    assert_eq!(table.uri_of(1), Some("urn:test:application"));
    assert_eq!(table.uri_of(2), None);
    assert_eq!(table.index_of(OPC_UA_NAMESPACE_URI), Some(0));
    assert_eq!(table.index_of("urn:test:application"), Some(1));
    assert_eq!(table.index_of("urn:nope"), None);
}

#[test]
fn namespace_table_register_idempotent() {
    let mut table = NamespaceTable::new("urn:test:application");
    let idx1 = table.register("http://vendor.com/UA/").unwrap();
    let idx2 = table.register("http://vendor.com/UA/").unwrap();
    assert_eq!(idx1, 2);
    assert_eq!(idx1, idx2);
    assert_eq!(table.namespaces().len(), 3);

    // Registering an existing uri returns its index without growing the table
    assert_eq!(table.register(OPC_UA_NAMESPACE_URI).unwrap(), 0);
    assert_eq!(table.namespaces().len(), 3);
}

#[test]
fn namespace_table_indices_are_stable() {
    let mut table = NamespaceTable::new("urn:test:application");
    let idx = table.register("urn:a").unwrap();
    let _ = table.register("urn:b").unwrap();
    let _ = table.register("urn:c").unwrap();
    // Earlier indices still point where they did
    assert_eq!(table.uri_of(idx), Some("urn:a"));
    assert_eq!(table.index_of("urn:a"), Some(idx));
}

#[test]
fn namespace_table_capacity() {
    let mut table = NamespaceTable::new("urn:test:application");
    for i in 2..=u16::MAX as u32 {
        let idx = table.register(&format!("urn:ns:{}", i)).unwrap();
        assert_eq!(idx as u32, i);
    }
    // Every index is allocated, the next registration fails
    assert_eq!(
        table.register("urn:one:too:many").unwrap_err(),
        StatusCode::BadOutOfRange
    );
    // But re-registering an existing uri is still fine
    assert_eq!(table.register("urn:ns:2").unwrap(), 2);
}

#[test]
fn resolve_expanded_node_id() {
    let mut table = NamespaceTable::new("urn:test:application");
    let idx = table.register("http://vendor.com/UA/").unwrap();

    // A node id with a namespace uri resolves to the registered index
    let id = ExpandedNodeId::from((NodeId::new(0, "Pump"), "http://vendor.com/UA/"));
    let resolved = table.resolve(&id).unwrap();
    assert_eq!(resolved, NodeId::new(idx, "Pump"));

    // A node id without a namespace uri passes through unchanged
    let id = ExpandedNodeId::from(NodeId::new(7, 42u32));
    assert_eq!(table.resolve(&id).unwrap(), NodeId::new(7, 42u32));
}

#[test]
fn resolve_unknown_namespace() {
    let table = NamespaceTable::new("urn:test:application");
    let id = ExpandedNodeId::from((NodeId::new(0, "Pump"), "http://unknown.com/UA/"));
    assert_eq!(table.resolve(&id).unwrap_err(), StatusCode::BadNodeIdUnknown);
}

#[test]
fn resolve_remote_server_index() {
    let table = NamespaceTable::new("urn:test:application");
    // A node id on another server cannot be resolved against a local table
    let id = ExpandedNodeId::from((NodeId::new(0, 85u32), 3u32));
    assert_eq!(table.resolve(&id).unwrap_err(), StatusCode::BadNodeIdUnknown);
}

#[test]
fn resolve_or_register_auto_registers() {
    let mut table = NamespaceTable::new("urn:test:application");
    let id = ExpandedNodeId::from((NodeId::new(0, "Pump"), "http://vendor.com/UA/"));

    // Unknown to resolve, registered by resolve_or_register
    assert!(table.resolve(&id).is_err());
    let resolved = table.resolve_or_register(&id).unwrap();
    assert_eq!(resolved, NodeId::new(2, "Pump"));

    // After registration both paths agree
    assert_eq!(table.resolve(&id).unwrap(), resolved);
    assert_eq!(table.register("http://vendor.com/UA/").unwrap(), 2);
}

#[test]
fn resolve_round_trips_through_text() {
    // The uri form parsed from text resolves to the same node id it was created from
    let mut table = NamespaceTable::new("urn:test:application");
    let idx = table.register("urn:weather:station").unwrap();
    let id = ExpandedNodeId::from_str("svr=0;nsu=urn:weather:station;s=Humidity").unwrap();
    assert_eq!(table.resolve(&id).unwrap(), NodeId::new(idx, "Humidity"));
}

#[test]
fn namespace_table_shared_reads() {
    // One table per session behind an RwLock - register under the write lock, then read
    // concurrently
    let table = Arc::new(RwLock::new(NamespaceTable::new("urn:test:application")));
    {
        let mut table = trace_write_lock!(table);
        table.register("http://vendor.com/UA/").unwrap();
    }
    let mut handles = Vec::new();
    for _ in 0..4 {
        let table = table.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let table = trace_read_lock!(table);
                assert_eq!(table.index_of("http://vendor.com/UA/"), Some(2));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
