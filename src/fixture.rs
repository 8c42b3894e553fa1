//! Shard status records shared by unit tests.
use std::collections::BTreeMap;
use std::time::Duration;

use crate::models::BroadcastResponse;
use crate::models::ByteSize;
use crate::models::DocsStatus;
use crate::models::MergeStats;
use crate::models::RecoveryStage;
use crate::models::RecoveryStatus;
use crate::models::ShardOperationFailure;
use crate::models::ShardRouting;
use crate::models::ShardStatus;
use crate::models::SnapshotStage;
use crate::models::SnapshotStatus;
use crate::response::IndicesStatusResponse;
use crate::settings::Settings;

/// A started shard copy with an optional store size and nothing else.
pub fn shard(index: &str, shard_id: u32, primary: bool, store_size: Option<u64>) -> ShardStatus {
    let node = format!("node-{}", shard_id);
    let mut shard = ShardStatus::new(ShardRouting::started(index, shard_id, primary, node));
    shard.store_size = store_size.map(ByteSize);
    shard
}

/// A shard copy with every optional field populated except recovery reports.
pub fn detailed_shard(index: &str, shard_id: u32, primary: bool) -> ShardStatus {
    let mut shard = shard(index, shard_id, primary, Some(4096));
    shard.translog_id = Some(7);
    shard.translog_operations = Some(42);
    shard.docs = Some(DocsStatus {
        deleted_docs: 1,
        max_doc: 11,
        num_docs: 10,
    });
    shard.merge_stats = Some(MergeStats {
        current: 1,
        current_num_docs: 5,
        current_size: ByteSize(2048),
        total: 3,
        total_num_docs: 30,
        total_size: ByteSize(8192),
        total_time: Duration::from_millis(1500),
    });
    shard
}

pub fn recovery() -> RecoveryStatus {
    RecoveryStatus {
        index_size: ByteSize(1000),
        recovered_index_size: ByteSize(300),
        recovered_translog_operations: 12,
        reused_index_size: ByteSize(400),
        stage: RecoveryStage::Index,
        start_time: 1_300_000_000_000,
        time: Duration::from_millis(2500),
    }
}

pub fn snapshot() -> SnapshotStatus {
    SnapshotStatus {
        expected_number_of_operations: 77,
        index_size: ByteSize(2048),
        stage: SnapshotStage::Translog,
        start_time: 1_300_000_000_000,
        time: Duration::from_millis(300),
    }
}

/// Cluster metadata for indices `a` and `b`.
pub fn metadata() -> BTreeMap<String, Settings> {
    let mut metadata = BTreeMap::new();
    metadata.insert(
        "a".to_string(),
        Settings::new()
            .put("index.number_of_shards", "2")
            .put("index.aliases.0", "alias-a")
            .put("index.secret", "s3cr3t"),
    );
    metadata.insert(
        "b".to_string(),
        Settings::new().put("index.number_of_shards", "1"),
    );
    metadata
}

/// Two shards of index `a` and one of index `b`.
pub fn response() -> IndicesStatusResponse {
    let shards = vec![
        shard("a", 0, true, Some(1024)),
        shard("a", 1, false, Some(2048)),
        shard("b", 0, true, Some(512)),
    ];
    let broadcast = BroadcastResponse::new(4, 3, 1, vec![failure()]);
    IndicesStatusResponse::from_shards(shards, &metadata(), broadcast)
        .expect("fixture response to build")
}

pub fn failure() -> ShardOperationFailure {
    ShardOperationFailure {
        index: Some("b".to_string()),
        reason: "node disconnected".to_string(),
        shard_id: 1,
    }
}
