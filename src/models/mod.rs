//! Shard level status records gathered from the cluster.
mod broadcast;
mod merge;
mod recovery;
mod routing;
mod shard;
mod size;

pub use self::broadcast::BroadcastResponse;
pub use self::broadcast::ShardOperationFailure;
pub use self::merge::MergeStats;
pub use self::recovery::RecoveryReport;
pub use self::recovery::RecoveryStage;
pub use self::recovery::RecoveryStatus;
pub use self::recovery::SnapshotStage;
pub use self::recovery::SnapshotStatus;
pub use self::routing::ShardRouting;
pub use self::routing::ShardRoutingState;
pub use self::shard::DocsStatus;
pub use self::shard::ShardStatus;
pub use self::size::human_duration;
pub use self::size::ByteSize;
