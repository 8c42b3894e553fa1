use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use super::ByteSize;

/// Counters describing background segment merging on a shard copy.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct MergeStats {
    pub current: u64,
    pub current_num_docs: u64,
    pub current_size: ByteSize,
    pub total: u64,
    pub total_num_docs: u64,
    pub total_size: ByteSize,
    pub total_time: Duration,
}

impl MergeStats {
    /// Accumulate the counters of another set of stats into these.
    pub fn add(&mut self, other: &MergeStats) {
        self.current += other.current;
        self.current_num_docs += other.current_num_docs;
        self.current_size = self.current_size + other.current_size;
        self.total += other.total;
        self.total_num_docs += other.total_num_docs;
        self.total_size = self.total_size + other.total_size;
        self.total_time += other.total_time;
    }
}
