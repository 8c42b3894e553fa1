use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::errors::ResponseError;
use crate::fixture;
use crate::models::BroadcastResponse;
use crate::models::ByteSize;
use crate::models::ShardRoutingState;
use crate::models::ShardStatus;
use crate::settings::Settings;

use super::ClusterMetadata;
use super::IndicesStatusResponse;

/// Metadata lookup that records every index it is asked about.
struct RecordingMetadata {
    lookups: RefCell<Vec<String>>,
}

impl ClusterMetadata for RecordingMetadata {
    fn index_settings(&self, index: &str) -> Option<Settings> {
        self.lookups.borrow_mut().push(index.to_string());
        Some(Settings::new().put("index.name", index))
    }
}

#[test]
fn example_grouping() {
    let response = fixture::response();
    let indices = response.indices();
    let names: Vec<&str> = indices.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(indices["a"].shards().len(), 2);
    assert_eq!(indices["b"].shards().len(), 1);
}

#[test]
fn grouping_is_total() {
    let shards = vec![
        fixture::shard("b", 0, true, None),
        fixture::shard("a", 0, true, None),
        fixture::shard("b", 0, false, None),
        fixture::shard("a", 1, true, None),
        fixture::shard("b", 1, true, None),
    ];
    let response =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap();
    let grouped: usize = response
        .indices()
        .values()
        .map(|index| index.shards().len())
        .sum();
    assert_eq!(grouped, response.shards().len());
    for (name, index) in response.indices() {
        assert!(index.shards().iter().all(|shard| shard.index() == name));
    }
}

#[test]
fn grouping_keeps_shard_order() {
    let shards = vec![
        fixture::shard("a", 1, false, None),
        fixture::shard("b", 0, true, None),
        fixture::shard("a", 0, true, None),
        fixture::shard("a", 1, true, None),
    ];
    let response =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap();
    let order: Vec<(u32, bool)> = response.indices()["a"]
        .shards()
        .iter()
        .map(|shard| (shard.shard_id(), shard.primary()))
        .collect();
    assert_eq!(order, vec![(1, false), (0, true), (1, true)]);
}

#[test]
fn grouping_includes_every_state() {
    let mut unassigned = fixture::shard("a", 0, false, None);
    unassigned.routing.state = ShardRoutingState::Unassigned;
    unassigned.routing.current_node_id = None;
    unassigned.state = ShardRoutingState::Unassigned;
    let shards = vec![fixture::shard("a", 0, true, None), unassigned];
    let response =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap();
    assert_eq!(response.indices()["a"].shards().len(), 2);
}

#[test]
fn grouping_is_memoised() {
    let response = fixture::response();
    let first = response.indices() as *const _;
    let second = response.indices() as *const _;
    let third = response.indices() as *const _;
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn grouping_is_computed_once_across_threads() {
    let response = fixture::response();
    let shared = &response;
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || shared.indices() as *const _ as usize))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("reader thread panicked"))
            .collect()
    });
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(addresses[0], response.indices() as *const _ as usize);
}

#[test]
fn settings_looked_up_once_per_index() {
    let metadata = RecordingMetadata {
        lookups: RefCell::new(Vec::new()),
    };
    let shards = vec![
        fixture::shard("z", 0, true, None),
        fixture::shard("a", 0, true, None),
        fixture::shard("z", 1, true, None),
        fixture::shard("a", 0, false, None),
    ];
    let response =
        IndicesStatusResponse::from_shards(shards, &metadata, Default::default()).unwrap();
    assert_eq!(*metadata.lookups.borrow(), vec!["z".to_string(), "a".to_string()]);
    assert_eq!(response.indices_settings().len(), 2);
    assert_eq!(
        response.indices_settings()["z"].get("index.name"),
        Some("z")
    );
}

#[test]
fn missing_index_metadata() {
    let shards = vec![fixture::shard("unknown", 0, true, None)];
    let error =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap_err();
    match error.downcast_ref::<ResponseError>() {
        Some(ResponseError::IndexMetadataNotFound(index)) => assert_eq!(index, "unknown"),
        None => panic!("unexpected error: {:?}", error),
    }
}

#[test]
fn empty_response() {
    let response = IndicesStatusResponse::from_shards(
        Vec::new(),
        &BTreeMap::<String, Settings>::new(),
        BroadcastResponse::default(),
    )
    .unwrap();
    assert!(response.indices().is_empty());
    assert!(response.indices_settings().is_empty());
}

#[test]
fn accessors() {
    let response = fixture::response();
    assert_eq!(response.shard_at(2).map(ShardStatus::index), Some("b"));
    assert!(response.shard_at(3).is_none());
    assert_eq!(response.index("a").map(|index| index.index()), Some("a"));
    assert!(response.index("c").is_none());
    assert_eq!(response.broadcast().failed_shards, 1);
    assert_eq!(response.broadcast().shard_failures, vec![fixture::failure()]);
}

#[test]
fn index_aggregates() {
    let response = fixture::response();
    let index = response.index("a").unwrap();
    assert_eq!(index.store_size(), Some(ByteSize(3072)));
    assert_eq!(index.primary_store_size(), Some(ByteSize(1024)));
    assert_eq!(index.docs(), None);
    assert_eq!(index.translog_operations(), None);
    assert_eq!(index.merge_stats(), None);
}

#[test]
fn index_aggregates_from_primaries() {
    let shards = vec![
        fixture::detailed_shard("a", 0, true),
        fixture::detailed_shard("a", 0, false),
        fixture::detailed_shard("a", 1, true),
    ];
    let response =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap();
    let index = response.index("a").unwrap();
    assert_eq!(index.store_size(), Some(ByteSize(3 * 4096)));
    assert_eq!(index.primary_store_size(), Some(ByteSize(2 * 4096)));
    assert_eq!(index.translog_operations(), Some(84));
    let docs = index.docs().unwrap();
    assert_eq!((docs.num_docs, docs.max_doc, docs.deleted_docs), (20, 22, 2));
    let merges = index.merge_stats().unwrap();
    assert_eq!(merges.total, 9);
    assert_eq!(merges.total_size, ByteSize(3 * 8192));
}

#[test]
fn index_shard_groups() {
    let shards = vec![
        fixture::shard("a", 1, false, None),
        fixture::shard("a", 0, false, None),
        fixture::shard("a", 1, true, None),
    ];
    let response =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap();
    let groups = response.index("a").unwrap().shard_groups();
    let ids: Vec<u32> = groups.iter().map(|group| group.shard_id()).collect();
    assert_eq!(ids, vec![0, 1]);
    assert!(groups[0].primary().is_none());
    assert_eq!(groups[1].copies().len(), 2);
    assert!(!groups[1].copies()[0].primary());
    assert!(groups[1].primary().unwrap().primary());
}

#[test]
fn decoded_response_groups_lazily() {
    let original = fixture::response();
    let _ = original.indices();
    let bytes = original.encode().unwrap();
    let decoded = IndicesStatusResponse::decode(&bytes).unwrap();
    assert!(decoded.indices_status.get().is_none());
    assert_eq!(decoded.indices(), original.indices());
    assert!(decoded.indices_status.get().is_some());
}
