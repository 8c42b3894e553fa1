use std::collections::BTreeMap;

use crate::models::ByteSize;
use crate::models::DocsStatus;
use crate::models::MergeStats;
use crate::models::ShardStatus;
use crate::settings::Settings;

/// Status of all the shard copies of an index.
///
/// Aggregated values are computed once, when the status is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexStatus {
    docs: Option<DocsStatus>,
    index: String,
    merge_stats: Option<MergeStats>,
    primary_store_size: Option<ByteSize>,
    settings: Settings,
    shards: Vec<ShardStatus>,
    store_size: Option<ByteSize>,
    translog_operations: Option<u64>,
}

impl IndexStatus {
    /// Aggregate the given shard copies, all belonging to the `index`.
    pub fn new<S: Into<String>>(index: S, settings: Settings, shards: Vec<ShardStatus>) -> Self {
        let primaries = || shards.iter().filter(|shard| shard.primary());
        let store_size = shards
            .iter()
            .filter_map(|shard| shard.store_size)
            .reduce(|total, size| total + size);
        let primary_store_size = primaries()
            .filter_map(|shard| shard.store_size)
            .reduce(|total, size| total + size);
        let docs = primaries()
            .filter_map(|shard| shard.docs)
            .reduce(|total, docs| total + docs);
        let translog_operations = primaries()
            .filter_map(|shard| shard.translog_operations)
            .reduce(|total, operations| total.saturating_add(operations));
        let merge_stats = shards
            .iter()
            .filter_map(|shard| shard.merge_stats.as_ref())
            .fold(None, |total: Option<MergeStats>, stats| {
                let mut total = total.unwrap_or_default();
                total.add(stats);
                Some(total)
            });
        IndexStatus {
            docs,
            index: index.into(),
            merge_stats,
            primary_store_size,
            settings,
            shards,
            store_size,
            translog_operations,
        }
    }

    /// Document counts summed over the primary copies.
    pub fn docs(&self) -> Option<&DocsStatus> {
        self.docs.as_ref()
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Merge activity summed over all copies.
    pub fn merge_stats(&self) -> Option<&MergeStats> {
        self.merge_stats.as_ref()
    }

    /// Store size summed over the primary copies.
    pub fn primary_store_size(&self) -> Option<ByteSize> {
        self.primary_store_size
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shard copies of the index, in the order they were reported in.
    pub fn shards(&self) -> &[ShardStatus] {
        &self.shards
    }

    /// Group the shard copies by shard ordinal, in ascending ordinal order.
    pub fn shard_groups(&self) -> Vec<IndexShardStatus<'_>> {
        let mut groups: BTreeMap<u32, Vec<&ShardStatus>> = BTreeMap::new();
        for shard in &self.shards {
            groups.entry(shard.shard_id()).or_default().push(shard);
        }
        groups
            .into_iter()
            .map(|(shard_id, copies)| IndexShardStatus { copies, shard_id })
            .collect()
    }

    /// Store size summed over all copies.
    pub fn store_size(&self) -> Option<ByteSize> {
        self.store_size
    }

    /// Translog operations summed over the primary copies.
    pub fn translog_operations(&self) -> Option<u64> {
        self.translog_operations
    }
}

/// All the copies of one shard of an index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexShardStatus<'a> {
    copies: Vec<&'a ShardStatus>,
    shard_id: u32,
}

impl<'a> IndexShardStatus<'a> {
    /// Shard copies in the order they were reported in.
    pub fn copies(&self) -> &[&'a ShardStatus] {
        &self.copies
    }

    /// The primary copy of the shard, if it was reported.
    pub fn primary(&self) -> Option<&'a ShardStatus> {
        self.copies.iter().copied().find(|shard| shard.primary())
    }

    pub fn shard_id(&self) -> u32 {
        self.shard_id
    }
}
