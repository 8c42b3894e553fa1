use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Lifecycle state of a shard copy as seen by the cluster routing table.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShardRoutingState {
    Unassigned,
    Initializing,
    Started,
    Relocating,
}

impl ShardRoutingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShardRoutingState::Unassigned => "UNASSIGNED",
            ShardRoutingState::Initializing => "INITIALIZING",
            ShardRoutingState::Started => "STARTED",
            ShardRoutingState::Relocating => "RELOCATING",
        }
    }
}

impl fmt::Display for ShardRoutingState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of a shard copy in the cluster.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct ShardRouting {
    pub current_node_id: Option<String>,
    pub index: String,
    pub primary: bool,
    pub relocating_node_id: Option<String>,
    pub shard_id: u32,
    pub state: ShardRoutingState,
}

impl ShardRouting {
    /// Routing for a copy started on a node.
    pub fn started<S1, S2>(index: S1, shard_id: u32, primary: bool, node: S2) -> ShardRouting
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        ShardRouting {
            current_node_id: Some(node.into()),
            index: index.into(),
            primary,
            relocating_node_id: None,
            shard_id,
            state: ShardRoutingState::Started,
        }
    }

    /// Routing for a copy not yet assigned to any node.
    pub fn unassigned<S: Into<String>>(index: S, shard_id: u32, primary: bool) -> ShardRouting {
        ShardRouting {
            current_node_id: None,
            index: index.into(),
            primary,
            relocating_node_id: None,
            shard_id,
            state: ShardRoutingState::Unassigned,
        }
    }
}
