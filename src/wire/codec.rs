//! Binary encoding of shard status models.
use std::io::Read;
use std::io::Write;
use std::time::Duration;

use super::stream::MAX_PREALLOC;
use super::Readable;
use super::WireReader;
use super::WireWriter;
use super::Writeable;
use crate::errors::WireError;
use crate::models::BroadcastResponse;
use crate::models::ByteSize;
use crate::models::DocsStatus;
use crate::models::MergeStats;
use crate::models::RecoveryStage;
use crate::models::RecoveryStatus;
use crate::models::ShardOperationFailure;
use crate::models::ShardRouting;
use crate::models::ShardRoutingState;
use crate::models::ShardStatus;
use crate::models::SnapshotStage;
use crate::models::SnapshotStatus;
use crate::settings::Settings;

/// Translog fields use `-1` on the wire when not applicable.
const TRANSLOG_ABSENT: i64 = -1;

fn write_millis<W: Write>(out: &mut WireWriter<W>, time: &Duration) -> Result<(), WireError> {
    let millis = time.as_millis();
    let millis = u64::try_from(millis).map_err(|_| WireError::ValueTooLarge(u64::MAX))?;
    out.write_vlong(millis)
}

fn read_millis<R: Read>(input: &mut WireReader<R>) -> Result<Duration, WireError> {
    input.read_vlong().map(Duration::from_millis)
}

fn write_translog<W: Write>(out: &mut WireWriter<W>, value: Option<u64>) -> Result<(), WireError> {
    let value = match value {
        None => TRANSLOG_ABSENT,
        Some(value) => i64::try_from(value).map_err(|_| WireError::ValueTooLarge(value))?,
    };
    out.write_i64(value)
}

fn read_translog<R: Read>(input: &mut WireReader<R>) -> Result<Option<u64>, WireError> {
    match input.read_i64()? {
        TRANSLOG_ABSENT => Ok(None),
        value if value < 0 => Err(WireError::NegativeValue(value)),
        value => Ok(Some(value as u64)),
    }
}

/// Decode a sequence of items prefixed by their count.
pub fn read_vec<R, T>(input: &mut WireReader<R>) -> Result<Vec<T>, WireError>
where
    R: Read,
    T: Readable,
{
    let len = input.read_len()?;
    let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
    for _ in 0..len {
        items.push(T::read_from(input)?);
    }
    Ok(items)
}

/// Encode a sequence of items prefixed by their count.
pub fn write_slice<W, T>(out: &mut WireWriter<W>, items: &[T]) -> Result<(), WireError>
where
    W: Write,
    T: Writeable,
{
    out.write_len(items.len())?;
    for item in items {
        item.write_to(out)?;
    }
    Ok(())
}

impl Writeable for ShardRoutingState {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        let value = match self {
            ShardRoutingState::Unassigned => 1,
            ShardRoutingState::Initializing => 2,
            ShardRoutingState::Started => 3,
            ShardRoutingState::Relocating => 4,
        };
        out.write_u8(value)
    }
}

impl Readable for ShardRoutingState {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        match input.read_u8()? {
            1 => Ok(ShardRoutingState::Unassigned),
            2 => Ok(ShardRoutingState::Initializing),
            3 => Ok(ShardRoutingState::Started),
            4 => Ok(ShardRoutingState::Relocating),
            other => Err(WireError::UnknownRoutingState(other)),
        }
    }
}

impl Writeable for RecoveryStage {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        let value = match self {
            RecoveryStage::Init => 0,
            RecoveryStage::Index => 1,
            RecoveryStage::Translog => 2,
            RecoveryStage::Finalize => 3,
            RecoveryStage::Done => 4,
        };
        out.write_u8(value)
    }
}

impl Readable for RecoveryStage {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        match input.read_u8()? {
            0 => Ok(RecoveryStage::Init),
            1 => Ok(RecoveryStage::Index),
            2 => Ok(RecoveryStage::Translog),
            3 => Ok(RecoveryStage::Finalize),
            4 => Ok(RecoveryStage::Done),
            other => Err(WireError::UnknownStage(other)),
        }
    }
}

impl Writeable for SnapshotStage {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        let value = match self {
            SnapshotStage::None => 0,
            SnapshotStage::Index => 1,
            SnapshotStage::Translog => 2,
            SnapshotStage::Finalize => 3,
            SnapshotStage::Done => 4,
        };
        out.write_u8(value)
    }
}

impl Readable for SnapshotStage {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        match input.read_u8()? {
            0 => Ok(SnapshotStage::None),
            1 => Ok(SnapshotStage::Index),
            2 => Ok(SnapshotStage::Translog),
            3 => Ok(SnapshotStage::Finalize),
            4 => Ok(SnapshotStage::Done),
            other => Err(WireError::UnknownStage(other)),
        }
    }
}

impl Writeable for ShardRouting {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        out.write_string(&self.index)?;
        out.write_vint(self.shard_id)?;
        out.write_optional(self.current_node_id.as_ref(), |out, node| out.write_string(node))?;
        out.write_optional(self.relocating_node_id.as_ref(), |out, node| {
            out.write_string(node)
        })?;
        out.write_bool(self.primary)?;
        self.state.write_to(out)
    }
}

impl Readable for ShardRouting {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let index = input.read_string()?;
        let shard_id = input.read_vint()?;
        let current_node_id = input.read_optional(|input| input.read_string())?;
        let relocating_node_id = input.read_optional(|input| input.read_string())?;
        let primary = input.read_bool()?;
        let state = ShardRoutingState::read_from(input)?;
        Ok(ShardRouting {
            current_node_id,
            index,
            primary,
            relocating_node_id,
            shard_id,
            state,
        })
    }
}

impl Writeable for DocsStatus {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        out.write_vint(self.num_docs)?;
        out.write_vint(self.max_doc)?;
        out.write_vint(self.deleted_docs)
    }
}

impl Readable for DocsStatus {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let num_docs = input.read_vint()?;
        let max_doc = input.read_vint()?;
        let deleted_docs = input.read_vint()?;
        Ok(DocsStatus {
            deleted_docs,
            max_doc,
            num_docs,
        })
    }
}

impl Writeable for RecoveryStatus {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        self.stage.write_to(out)?;
        out.write_vlong(self.start_time)?;
        write_millis(out, &self.time)?;
        out.write_vlong(self.index_size.bytes())?;
        out.write_vlong(self.reused_index_size.bytes())?;
        out.write_vlong(self.recovered_index_size.bytes())?;
        out.write_vlong(self.recovered_translog_operations)
    }
}

impl Readable for RecoveryStatus {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let stage = RecoveryStage::read_from(input)?;
        let start_time = input.read_vlong()?;
        let time = read_millis(input)?;
        let index_size = ByteSize(input.read_vlong()?);
        let reused_index_size = ByteSize(input.read_vlong()?);
        let recovered_index_size = ByteSize(input.read_vlong()?);
        let recovered_translog_operations = input.read_vlong()?;
        Ok(RecoveryStatus {
            index_size,
            recovered_index_size,
            recovered_translog_operations,
            reused_index_size,
            stage,
            start_time,
            time,
        })
    }
}

impl Writeable for SnapshotStatus {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        self.stage.write_to(out)?;
        out.write_vlong(self.start_time)?;
        write_millis(out, &self.time)?;
        out.write_vlong(self.index_size.bytes())?;
        out.write_vint(self.expected_number_of_operations)
    }
}

impl Readable for SnapshotStatus {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let stage = SnapshotStage::read_from(input)?;
        let start_time = input.read_vlong()?;
        let time = read_millis(input)?;
        let index_size = ByteSize(input.read_vlong()?);
        let expected_number_of_operations = input.read_vint()?;
        Ok(SnapshotStatus {
            expected_number_of_operations,
            index_size,
            stage,
            start_time,
            time,
        })
    }
}

impl Writeable for MergeStats {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        out.write_vlong(self.total)?;
        write_millis(out, &self.total_time)?;
        out.write_vlong(self.total_num_docs)?;
        out.write_vlong(self.total_size.bytes())?;
        out.write_vlong(self.current)?;
        out.write_vlong(self.current_num_docs)?;
        out.write_vlong(self.current_size.bytes())
    }
}

impl Readable for MergeStats {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let total = input.read_vlong()?;
        let total_time = read_millis(input)?;
        let total_num_docs = input.read_vlong()?;
        let total_size = ByteSize(input.read_vlong()?);
        let current = input.read_vlong()?;
        let current_num_docs = input.read_vlong()?;
        let current_size = ByteSize(input.read_vlong()?);
        Ok(MergeStats {
            current,
            current_num_docs,
            current_size,
            total,
            total_num_docs,
            total_size,
            total_time,
        })
    }
}

impl Writeable for ShardStatus {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        self.routing.write_to(out)?;
        self.state.write_to(out)?;
        out.write_optional(self.store_size.as_ref(), |out, size| {
            out.write_vlong(size.bytes())
        })?;
        write_translog(out, self.translog_id)?;
        write_translog(out, self.translog_operations)?;
        out.write_optional(self.docs.as_ref(), |out, docs| docs.write_to(out))?;
        out.write_optional(self.peer_recovery.as_ref(), |out, status| status.write_to(out))?;
        out.write_optional(self.gateway_recovery.as_ref(), |out, status| {
            status.write_to(out)
        })?;
        out.write_optional(self.gateway_snapshot.as_ref(), |out, status| {
            status.write_to(out)
        })?;
        out.write_optional(self.merge_stats.as_ref(), |out, stats| stats.write_to(out))
    }
}

impl Readable for ShardStatus {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let routing = ShardRouting::read_from(input)?;
        let state = ShardRoutingState::read_from(input)?;
        let store_size = input.read_optional(|input| input.read_vlong().map(ByteSize))?;
        let translog_id = read_translog(input)?;
        let translog_operations = read_translog(input)?;
        let docs = input.read_optional(DocsStatus::read_from)?;
        let peer_recovery = input.read_optional(RecoveryStatus::read_from)?;
        let gateway_recovery = input.read_optional(RecoveryStatus::read_from)?;
        let gateway_snapshot = input.read_optional(SnapshotStatus::read_from)?;
        let merge_stats = input.read_optional(MergeStats::read_from)?;
        Ok(ShardStatus {
            docs,
            gateway_recovery,
            gateway_snapshot,
            merge_stats,
            peer_recovery,
            routing,
            state,
            store_size,
            translog_id,
            translog_operations,
        })
    }
}

impl Writeable for ShardOperationFailure {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        out.write_optional(self.index.as_ref(), |out, index| out.write_string(index))?;
        out.write_i32(self.shard_id)?;
        out.write_string(&self.reason)
    }
}

impl Readable for ShardOperationFailure {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let index = input.read_optional(|input| input.read_string())?;
        let shard_id = input.read_i32()?;
        let reason = input.read_string()?;
        Ok(ShardOperationFailure {
            index,
            reason,
            shard_id,
        })
    }
}

impl Writeable for BroadcastResponse {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        out.write_vint(self.total_shards)?;
        out.write_vint(self.successful_shards)?;
        out.write_vint(self.failed_shards)?;
        write_slice(out, &self.shard_failures)
    }
}

impl Readable for BroadcastResponse {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let total_shards = input.read_vint()?;
        let successful_shards = input.read_vint()?;
        let failed_shards = input.read_vint()?;
        let shard_failures = read_vec(input)?;
        Ok(BroadcastResponse {
            failed_shards,
            shard_failures,
            successful_shards,
            total_shards,
        })
    }
}

impl Writeable for Settings {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError> {
        out.write_len(self.len())?;
        for (key, value) in self.iter() {
            out.write_string(key)?;
            out.write_string(value)?;
        }
        Ok(())
    }
}

impl Readable for Settings {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError> {
        let len = input.read_len()?;
        let mut settings = Settings::new();
        for _ in 0..len {
            let key = input.read_string()?;
            let value = input.read_string()?;
            if settings.get(&key).is_some() {
                return Err(WireError::DuplicateKey(key));
            }
            settings = settings.put(key, value);
        }
        Ok(settings)
    }
}
