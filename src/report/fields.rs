//! Field names used in rendered documents.
pub const ALIASES: &str = "aliases";
pub const DELETED_DOCS: &str = "deleted_docs";
pub const DOCS: &str = "docs";
pub const EXPECTED_OPERATIONS: &str = "expected_operations";
pub const EXPECTED_RECOVERED_SIZE: &str = "expected_recovered_size";
pub const EXPECTED_RECOVERED_SIZE_IN_BYTES: &str = "expected_recovered_size_in_bytes";
pub const GATEWAY_RECOVERY: &str = "gateway_recovery";
pub const GATEWAY_SNAPSHOT: &str = "gateway_snapshot";
pub const ID: &str = "id";
pub const INDEX: &str = "index";
pub const INDICES: &str = "indices";
pub const MAX_DOC: &str = "max_doc";
pub const NODE: &str = "node";
pub const NUM_DOCS: &str = "num_docs";
pub const OPERATIONS: &str = "operations";
pub const PEER_RECOVERY: &str = "peer_recovery";
pub const PRIMARY: &str = "primary";
pub const PRIMARY_SIZE: &str = "primary_size";
pub const PRIMARY_SIZE_IN_BYTES: &str = "primary_size_in_bytes";
pub const PROGRESS: &str = "progress";
pub const RECOVERED: &str = "recovered";
pub const RECOVERED_SIZE: &str = "recovered_size";
pub const RECOVERED_SIZE_IN_BYTES: &str = "recovered_size_in_bytes";
pub const RELOCATING_NODE: &str = "relocating_node";
pub const REUSED_SIZE: &str = "reused_size";
pub const REUSED_SIZE_IN_BYTES: &str = "reused_size_in_bytes";
pub const ROUTING: &str = "routing";
pub const SETTINGS: &str = "settings";
pub const SHARD: &str = "shard";
pub const SHARDS: &str = "shards";
pub const SIZE: &str = "size";
pub const SIZE_IN_BYTES: &str = "size_in_bytes";
pub const STAGE: &str = "stage";
pub const START_TIME_IN_MILLIS: &str = "start_time_in_millis";
pub const STATE: &str = "state";
pub const TIME: &str = "time";
pub const TIME_IN_MILLIS: &str = "time_in_millis";
pub const TRANSLOG: &str = "translog";

// Merge statistics.
pub const CURRENT: &str = "current";
pub const CURRENT_DOCS: &str = "current_docs";
pub const CURRENT_SIZE: &str = "current_size";
pub const CURRENT_SIZE_IN_BYTES: &str = "current_size_in_bytes";
pub const MERGES: &str = "merges";
pub const TOTAL: &str = "total";
pub const TOTAL_DOCS: &str = "total_docs";
pub const TOTAL_SIZE: &str = "total_size";
pub const TOTAL_SIZE_IN_BYTES: &str = "total_size_in_bytes";
pub const TOTAL_TIME: &str = "total_time";
pub const TOTAL_TIME_IN_MILLIS: &str = "total_time_in_millis";
