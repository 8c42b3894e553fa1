//! Render indices status responses as nested documents for API consumers.
//!
//! Documents are emitted with a fixed field order: consumers may parse them as a stream.
//! Optional sections are left out entirely when the data for them is not available.
use std::borrow::Cow;
use std::time::Duration;

use anyhow::Result;
use serde_json::Value as Json;

use crate::errors::BuilderError;
use crate::models::human_duration;
use crate::models::ByteSize;
use crate::models::DocsStatus;
use crate::models::MergeStats;
use crate::models::RecoveryReport;
use crate::models::RecoveryStatus;
use crate::models::ShardStatus;
use crate::models::SnapshotStatus;
use crate::response::IndexStatus;
use crate::response::IndicesStatusResponse;
use crate::settings::SettingsFilter;

mod builder;
pub mod fields;


pub use self::builder::DocumentBuilder;

use self::fields::*;

/// Settings key listing the aliases of an index.
const ALIASES_SETTING: &str = "index.aliases";

type BuildResult = std::result::Result<(), BuilderError>;

impl IndicesStatusResponse {
    /// Render the response as a complete document.
    pub fn render(&self, filter: Option<&dyn SettingsFilter>) -> Result<Json> {
        let mut builder = DocumentBuilder::new();
        builder.start_object()?;
        self.to_document(&mut builder, filter)?;
        builder.end_object()?;
        let document = builder.build()?;
        Ok(document)
    }

    /// Add the `indices` section of the response to an open object.
    ///
    /// When a filter is given index settings are passed through it before they are rendered.
    pub fn to_document(
        &self,
        builder: &mut DocumentBuilder,
        filter: Option<&dyn SettingsFilter>,
    ) -> BuildResult {
        builder.start_named_object(INDICES)?;
        for index in self.indices().values() {
            index_to_document(builder, index, filter)?;
        }
        builder.end_object()?;
        Ok(())
    }
}

fn index_to_document(
    builder: &mut DocumentBuilder,
    index: &IndexStatus,
    filter: Option<&dyn SettingsFilter>,
) -> BuildResult {
    builder.start_named_object(index.index())?;

    builder.start_named_array(ALIASES)?;
    for alias in index.settings().get_as_array(ALIASES_SETTING) {
        builder.value(alias)?;
    }
    builder.end_array()?;

    let settings = match filter {
        Some(filter) => Cow::Owned(filter.filter_settings(index.settings())),
        None => Cow::Borrowed(index.settings()),
    };
    builder.start_named_object(SETTINGS)?;
    for (key, value) in settings.iter() {
        builder.field(key, value.as_str())?;
    }
    builder.end_object()?;

    builder.start_named_object(INDEX)?;
    if let Some(store_size) = index.store_size() {
        let primary_size = index.primary_store_size().unwrap_or_default();
        builder
            .field(PRIMARY_SIZE, primary_size.to_string())?
            .field(PRIMARY_SIZE_IN_BYTES, primary_size.bytes())?
            .field(SIZE, store_size.to_string())?
            .field(SIZE_IN_BYTES, store_size.bytes())?;
    }
    builder.end_object()?;

    if let Some(operations) = index.translog_operations() {
        builder
            .start_named_object(TRANSLOG)?
            .field(OPERATIONS, operations)?
            .end_object()?;
    }
    if let Some(docs) = index.docs() {
        docs_to_document(builder, docs)?;
    }
    if let Some(stats) = index.merge_stats() {
        merge_stats_to_document(builder, stats)?;
    }

    builder.start_named_object(SHARDS)?;
    for group in index.shard_groups() {
        builder.start_named_array(&group.shard_id().to_string())?;
        for shard in group.copies() {
            shard_to_document(builder, shard)?;
        }
        builder.end_array()?;
    }
    builder.end_object()?;

    builder.end_object()?;
    Ok(())
}

fn shard_to_document(builder: &mut DocumentBuilder, shard: &ShardStatus) -> BuildResult {
    builder.start_object()?;

    let routing = &shard.routing;
    builder
        .start_named_object(ROUTING)?
        .field(STATE, routing.state.as_str())?
        .field(PRIMARY, routing.primary)?;
    if let Some(node) = &routing.current_node_id {
        builder.field(NODE, node.as_str())?;
    }
    if let Some(node) = &routing.relocating_node_id {
        builder.field(RELOCATING_NODE, node.as_str())?;
    }
    builder
        .field(SHARD, routing.shard_id)?
        .field(INDEX, routing.index.as_str())?
        .end_object()?;

    builder.field(STATE, shard.state.as_str())?;
    if let Some(size) = shard.store_size {
        builder.start_named_object(INDEX)?;
        size_fields(builder, SIZE, SIZE_IN_BYTES, size)?;
        builder.end_object()?;
    }
    if let Some(id) = shard.translog_id {
        builder.start_named_object(TRANSLOG)?.field(ID, id)?;
        if let Some(operations) = shard.translog_operations {
            builder.field(OPERATIONS, operations)?;
        }
        builder.end_object()?;
    }
    if let Some(docs) = &shard.docs {
        docs_to_document(builder, docs)?;
    }
    if let Some(stats) = &shard.merge_stats {
        merge_stats_to_document(builder, stats)?;
    }
    match shard.recovery() {
        Some(RecoveryReport::Peer(status)) => recovery_to_document(builder, PEER_RECOVERY, status)?,
        Some(RecoveryReport::Gateway(status)) => {
            recovery_to_document(builder, GATEWAY_RECOVERY, status)?
        }
        Some(RecoveryReport::Snapshot(status)) => snapshot_to_document(builder, status)?,
        None => (),
    }

    builder.end_object()?;
    Ok(())
}

fn docs_to_document(builder: &mut DocumentBuilder, docs: &DocsStatus) -> BuildResult {
    builder
        .start_named_object(DOCS)?
        .field(NUM_DOCS, docs.num_docs)?
        .field(MAX_DOC, docs.max_doc)?
        .field(DELETED_DOCS, docs.deleted_docs)?
        .end_object()?;
    Ok(())
}

fn merge_stats_to_document(builder: &mut DocumentBuilder, stats: &MergeStats) -> BuildResult {
    builder
        .start_named_object(MERGES)?
        .field(CURRENT, stats.current)?
        .field(CURRENT_DOCS, stats.current_num_docs)?;
    size_fields(builder, CURRENT_SIZE, CURRENT_SIZE_IN_BYTES, stats.current_size)?;
    builder.field(TOTAL, stats.total)?;
    time_fields(builder, TOTAL_TIME, TOTAL_TIME_IN_MILLIS, &stats.total_time)?;
    builder.field(TOTAL_DOCS, stats.total_num_docs)?;
    size_fields(builder, TOTAL_SIZE, TOTAL_SIZE_IN_BYTES, stats.total_size)?;
    builder.end_object()?;
    Ok(())
}

fn recovery_to_document(
    builder: &mut DocumentBuilder,
    name: &str,
    status: &RecoveryStatus,
) -> BuildResult {
    builder
        .start_named_object(name)?
        .field(STAGE, status.stage.to_string())?
        .field(START_TIME_IN_MILLIS, status.start_time)?;
    time_fields(builder, TIME, TIME_IN_MILLIS, &status.time)?;

    builder
        .start_named_object(INDEX)?
        .field(PROGRESS, status.index_recovery_progress())?;
    size_fields(builder, SIZE, SIZE_IN_BYTES, status.index_size)?;
    size_fields(
        builder,
        REUSED_SIZE,
        REUSED_SIZE_IN_BYTES,
        status.reused_index_size,
    )?;
    size_fields(
        builder,
        EXPECTED_RECOVERED_SIZE,
        EXPECTED_RECOVERED_SIZE_IN_BYTES,
        status.expected_recovered_index_size(),
    )?;
    size_fields(
        builder,
        RECOVERED_SIZE,
        RECOVERED_SIZE_IN_BYTES,
        status.recovered_index_size,
    )?;
    builder.end_object()?;

    builder
        .start_named_object(TRANSLOG)?
        .field(RECOVERED, status.recovered_translog_operations)?
        .end_object()?;

    builder.end_object()?;
    Ok(())
}

fn snapshot_to_document(builder: &mut DocumentBuilder, status: &SnapshotStatus) -> BuildResult {
    builder
        .start_named_object(GATEWAY_SNAPSHOT)?
        .field(STAGE, status.stage.to_string())?
        .field(START_TIME_IN_MILLIS, status.start_time)?;
    time_fields(builder, TIME, TIME_IN_MILLIS, &status.time)?;

    builder.start_named_object(INDEX)?;
    size_fields(builder, SIZE, SIZE_IN_BYTES, status.index_size)?;
    builder.end_object()?;

    builder
        .start_named_object(TRANSLOG)?
        .field(EXPECTED_OPERATIONS, status.expected_number_of_operations)?
        .end_object()?;

    builder.end_object()?;
    Ok(())
}

/// Emit a size as a human readable string followed by the raw number of bytes.
fn size_fields(
    builder: &mut DocumentBuilder,
    human: &str,
    raw: &str,
    size: ByteSize,
) -> BuildResult {
    builder
        .field(human, size.to_string())?
        .field(raw, size.bytes())?;
    Ok(())
}

/// Emit a duration as a human readable string followed by the raw number of milliseconds.
fn time_fields(
    builder: &mut DocumentBuilder,
    human: &str,
    raw: &str,
    time: &Duration,
) -> BuildResult {
    let millis = u64::try_from(time.as_millis()).unwrap_or(u64::MAX);
    builder
        .field(human, human_duration(time))?
        .field(raw, millis)?;
    Ok(())
}
