//! Indices status response: shard status records grouped by the index they belong to.
//!
//! The flat list of [`ShardStatus`] records is the source of truth.
//! Settings for each index are captured when the response is created and the
//! per-index view is derived from these two on first access and cached from then on.
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::Read;
use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use once_cell::sync::OnceCell;

use crate::errors::ResponseError;
use crate::errors::WireError;
use crate::metrics::GROUPING_DURATION;
use crate::models::BroadcastResponse;
use crate::models::ShardStatus;
use crate::settings::Settings;
use crate::wire::read_vec;
use crate::wire::write_slice;
use crate::wire::Readable;
use crate::wire::WireReader;
use crate::wire::WireWriter;
use crate::wire::Writeable;

mod index;

#[cfg(test)]
mod tests;

pub use self::index::IndexShardStatus;
pub use self::index::IndexStatus;

/// Lookup index settings from the cluster metadata.
pub trait ClusterMetadata {
    /// Settings of the given index, if the index is known to the cluster.
    fn index_settings(&self, index: &str) -> Option<Settings>;
}

impl ClusterMetadata for BTreeMap<String, Settings> {
    fn index_settings(&self, index: &str) -> Option<Settings> {
        self.get(index).cloned()
    }
}

impl ClusterMetadata for HashMap<String, Settings> {
    fn index_settings(&self, index: &str) -> Option<Settings> {
        self.get(index).cloned()
    }
}

/// Status of shard copies across the cluster, with per-index grouping.
#[derive(Clone, Debug)]
pub struct IndicesStatusResponse {
    broadcast: BroadcastResponse,
    indices_settings: BTreeMap<String, Settings>,
    indices_status: OnceCell<BTreeMap<String, IndexStatus>>,
    shards: Vec<ShardStatus>,
}

impl IndicesStatusResponse {
    /// Build a response from the shard copies collected across the cluster.
    ///
    /// Settings are looked up once for each index, in the order indices are first seen.
    pub fn from_shards(
        shards: Vec<ShardStatus>,
        metadata: &dyn ClusterMetadata,
        broadcast: BroadcastResponse,
    ) -> Result<IndicesStatusResponse> {
        let mut indices_settings = BTreeMap::new();
        for shard in &shards {
            let index = shard.index();
            if indices_settings.contains_key(index) {
                continue;
            }
            let settings = match metadata.index_settings(index) {
                Some(settings) => settings,
                None => anyhow::bail!(ResponseError::IndexMetadataNotFound(index.to_string())),
            };
            indices_settings.insert(index.to_string(), settings);
        }
        Ok(IndicesStatusResponse {
            broadcast,
            indices_settings,
            indices_status: OnceCell::new(),
            shards,
        })
    }

    /// Counts and failures of the shard level requests that produced this response.
    pub fn broadcast(&self) -> &BroadcastResponse {
        &self.broadcast
    }

    /// Decode a response encoded with [`IndicesStatusResponse::encode`].
    ///
    /// The buffer must contain exactly one response and nothing else.
    pub fn decode(bytes: &[u8]) -> Result<IndicesStatusResponse> {
        let mut reader = WireReader::new(bytes);
        let response = IndicesStatusResponse::read_from(&mut reader)
            .context("unable to decode indices status response")?;
        let remaining = reader.into_inner().len();
        if remaining != 0 {
            let error = anyhow::anyhow!(WireError::TrailingBytes(remaining));
            return Err(error.context("unable to decode indices status response"));
        }
        Ok(response)
    }

    /// Encode the response into a new buffer.
    ///
    /// The per-index grouping is never encoded: decoded responses derive it again when needed.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut writer = WireWriter::new(Vec::new());
        self.write_to(&mut writer)
            .context("unable to encode indices status response")?;
        Ok(writer.into_inner())
    }

    /// Status of the named index, if any of its shards are in the response.
    pub fn index(&self, index: &str) -> Option<&IndexStatus> {
        self.indices().get(index)
    }

    /// Shard copies grouped by the index they belong to.
    ///
    /// The grouping is computed on first access only, even with concurrent callers.
    pub fn indices(&self) -> &BTreeMap<String, IndexStatus> {
        self.indices_status.get_or_init(|| self.group_by_index())
    }

    /// Settings of every index with shards in the response.
    pub fn indices_settings(&self) -> &BTreeMap<String, Settings> {
        &self.indices_settings
    }

    /// Shard copy at the given position in the response.
    pub fn shard_at(&self, position: usize) -> Option<&ShardStatus> {
        self.shards.get(position)
    }

    /// All shard copies, in the order they were collected in.
    pub fn shards(&self) -> &[ShardStatus] {
        &self.shards
    }

    fn group_by_index(&self) -> BTreeMap<String, IndexStatus> {
        let _timer = GROUPING_DURATION.start_timer();
        let mut partitions: HashMap<&str, Vec<ShardStatus>> = HashMap::new();
        for shard in &self.shards {
            partitions
                .entry(shard.index())
                .or_default()
                .push(shard.clone());
        }
        self.indices_settings
            .iter()
            .map(|(index, settings)| {
                let shards = partitions.remove(index.as_str()).unwrap_or_default();
                let status = IndexStatus::new(index.clone(), settings.clone(), shards);
                (index.clone(), status)
            })
            .collect()
    }
}

impl PartialEq for IndicesStatusResponse {
    fn eq(&self, other: &Self) -> bool {
        self.broadcast == other.broadcast
            && self.shards == other.shards
            && self.indices_settings == other.indices_settings
    }
}

impl Writeable for IndicesStatusResponse {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        self.broadcast.write_to(out)?;
        write_slice(out, &self.shards)?;
        out.write_len(self.indices_settings.len())?;
        for (index, settings) in &self.indices_settings {
            out.write_string(index)?;
            settings.write_to(out)?;
        }
        Ok(())
    }
}

impl Readable for IndicesStatusResponse {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let broadcast = BroadcastResponse::read_from(input)?;
        let shards: Vec<ShardStatus> = read_vec(input)?;
        let len = input.read_len()?;
        let mut indices_settings = BTreeMap::new();
        for _ in 0..len {
            let index = input.read_string()?;
            if indices_settings.contains_key(&index) {
                return Err(WireError::DuplicateKey(index));
            }
            let settings = Settings::read_from(input)?;
            indices_settings.insert(index, settings);
        }
        if let Some(shard) = shards
            .iter()
            .find(|shard| !indices_settings.contains_key(shard.index()))
        {
            return Err(WireError::UnknownIndex(shard.index().to_string()));
        }
        Ok(IndicesStatusResponse {
            broadcast,
            indices_settings,
            indices_status: OnceCell::new(),
            shards,
        })
    }
}
