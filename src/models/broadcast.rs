use serde::Deserialize;
use serde::Serialize;

/// Outcome of a request fanned out to many shards.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BroadcastResponse {
    pub failed_shards: u32,
    pub shard_failures: Vec<ShardOperationFailure>,
    pub successful_shards: u32,
    pub total_shards: u32,
}

impl BroadcastResponse {
    pub fn new(
        total_shards: u32,
        successful_shards: u32,
        failed_shards: u32,
        shard_failures: Vec<ShardOperationFailure>,
    ) -> BroadcastResponse {
        BroadcastResponse {
            failed_shards,
            shard_failures,
            successful_shards,
            total_shards,
        }
    }
}

/// A shard that could not be queried as part of a broadcast request.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct ShardOperationFailure {
    pub index: Option<String>,
    pub reason: String,
    pub shard_id: i32,
}
