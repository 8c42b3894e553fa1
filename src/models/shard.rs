use std::ops::Add;

use serde::Deserialize;
use serde::Serialize;

use super::ByteSize;
use super::MergeStats;
use super::RecoveryReport;
use super::RecoveryStatus;
use super::ShardRouting;
use super::ShardRoutingState;
use super::SnapshotStatus;

/// Document counts of a shard copy.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct DocsStatus {
    pub deleted_docs: u32,
    pub max_doc: u32,
    pub num_docs: u32,
}

impl Add for DocsStatus {
    type Output = DocsStatus;

    fn add(self, other: DocsStatus) -> DocsStatus {
        DocsStatus {
            deleted_docs: self.deleted_docs.saturating_add(other.deleted_docs),
            max_doc: self.max_doc.saturating_add(other.max_doc),
            num_docs: self.num_docs.saturating_add(other.num_docs),
        }
    }
}

/// Status of one physical copy of a shard.
///
/// Values are captured by the node hosting the copy and are never changed afterwards.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct ShardStatus {
    pub docs: Option<DocsStatus>,
    pub gateway_recovery: Option<RecoveryStatus>,
    pub gateway_snapshot: Option<SnapshotStatus>,
    pub merge_stats: Option<MergeStats>,
    pub peer_recovery: Option<RecoveryStatus>,
    pub routing: ShardRouting,
    pub state: ShardRoutingState,
    pub store_size: Option<ByteSize>,
    pub translog_id: Option<u64>,
    pub translog_operations: Option<u64>,
}

impl ShardStatus {
    /// Status of a shard copy with nothing but its routing known.
    pub fn new(routing: ShardRouting) -> ShardStatus {
        ShardStatus {
            docs: None,
            gateway_recovery: None,
            gateway_snapshot: None,
            merge_stats: None,
            peer_recovery: None,
            state: routing.state,
            routing,
            store_size: None,
            translog_id: None,
            translog_operations: None,
        }
    }

    /// Name of the index this shard copy belongs to.
    pub fn index(&self) -> &str {
        &self.routing.index
    }

    pub fn shard_id(&self) -> u32 {
        self.routing.shard_id
    }

    pub fn primary(&self) -> bool {
        self.routing.primary
    }

    /// The recovery report to show for this copy, if any.
    ///
    /// At most one report is expected to be set at a time.
    /// If more are, peer recoveries win over gateway recoveries which win over snapshots.
    pub fn recovery(&self) -> Option<RecoveryReport<'_>> {
        if let Some(status) = &self.peer_recovery {
            return Some(RecoveryReport::Peer(status));
        }
        if let Some(status) = &self.gateway_recovery {
            return Some(RecoveryReport::Gateway(status));
        }
        self.gateway_snapshot.as_ref().map(RecoveryReport::Snapshot)
    }
}
