//! Progress reports for shard copies being recovered or snapshotted.
use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use super::ByteSize;

/// Stage of a peer or gateway recovery.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecoveryStage {
    Init,
    Index,
    Translog,
    Finalize,
    Done,
}

impl fmt::Display for RecoveryStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RecoveryStage::Init => "INIT",
            RecoveryStage::Index => "INDEX",
            RecoveryStage::Translog => "TRANSLOG",
            RecoveryStage::Finalize => "FINALIZE",
            RecoveryStage::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// Stage of a gateway snapshot.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotStage {
    None,
    Index,
    Translog,
    Finalize,
    Done,
}

impl fmt::Display for SnapshotStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SnapshotStage::None => "NONE",
            SnapshotStage::Index => "INDEX",
            SnapshotStage::Translog => "TRANSLOG",
            SnapshotStage::Finalize => "FINALIZE",
            SnapshotStage::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// Progress of a shard copy recovering its data.
///
/// The same information is tracked for recoveries from a peer node
/// and for recoveries from the durable gateway storage.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct RecoveryStatus {
    pub index_size: ByteSize,
    pub recovered_index_size: ByteSize,
    pub recovered_translog_operations: u64,
    pub reused_index_size: ByteSize,
    pub stage: RecoveryStage,
    /// Epoch time, in milliseconds, the recovery started at.
    pub start_time: u64,
    pub time: Duration,
}

impl RecoveryStatus {
    /// Portion of the index that has to be copied over because it could not be reused.
    pub fn expected_recovered_index_size(&self) -> ByteSize {
        ByteSize(self.index_size.0.saturating_sub(self.reused_index_size.0))
    }

    /// Percentage of the expected index data recovered so far.
    pub fn index_recovery_progress(&self) -> u64 {
        if self.recovered_index_size.0 == 0 {
            let fully_reused = self.index_size.0 != 0 && self.index_size == self.reused_index_size;
            return if fully_reused { 100 } else { 0 };
        }
        let expected = self.expected_recovered_index_size().0;
        if expected == 0 {
            return 100;
        }
        let progress = self.recovered_index_size.0 as f64 / expected as f64 * 100.0;
        (progress as u64).min(100)
    }
}

/// Progress of a shard copy being snapshotted to the gateway storage.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct SnapshotStatus {
    pub expected_number_of_operations: u32,
    pub index_size: ByteSize,
    pub stage: SnapshotStage,
    /// Epoch time, in milliseconds, the snapshot started at.
    pub start_time: u64,
    pub time: Duration,
}

/// The one recovery (or snapshot) report rendered for a shard copy.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RecoveryReport<'a> {
    Peer(&'a RecoveryStatus),
    Gateway(&'a RecoveryStatus),
    Snapshot(&'a SnapshotStatus),
}
