use crate::errors::WireError;
use crate::fixture;
use crate::models::BroadcastResponse;
use crate::models::RecoveryStage;
use crate::models::ShardRouting;
use crate::models::ShardRoutingState;
use crate::models::ShardStatus;
use crate::response::IndicesStatusResponse;
use crate::settings::Settings;

use super::Readable;
use super::WireReader;
use super::WireWriter;
use super::Writeable;

fn detailed_response() -> IndicesStatusResponse {
    let mut peer = fixture::detailed_shard("a", 0, true);
    peer.peer_recovery = Some(fixture::recovery());
    let mut gateway = fixture::detailed_shard("a", 0, false);
    let mut recovery = fixture::recovery();
    recovery.stage = RecoveryStage::Finalize;
    gateway.gateway_recovery = Some(recovery);
    let mut snapshot = fixture::shard("b", 0, true, None);
    snapshot.gateway_snapshot = Some(fixture::snapshot());
    snapshot.translog_operations = Some(3);

    let mut relocating = ShardStatus::new(ShardRouting {
        current_node_id: Some("node-1".into()),
        index: "b".into(),
        primary: false,
        relocating_node_id: Some("node-2".into()),
        shard_id: 0,
        state: ShardRoutingState::Relocating,
    });
    relocating.translog_id = Some(0);
    let unassigned = ShardStatus::new(ShardRouting::unassigned("b", 1, false));

    let shards = vec![peer, gateway, snapshot, relocating, unassigned];
    let broadcast = BroadcastResponse::new(6, 5, 1, vec![fixture::failure()]);
    IndicesStatusResponse::from_shards(shards, &fixture::metadata(), broadcast).unwrap()
}

#[test]
fn response_round_trip() {
    let original = detailed_response();
    let bytes = original.encode().unwrap();
    let decoded = IndicesStatusResponse::decode(&bytes).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.shards(), original.shards());
    assert_eq!(decoded.indices_settings(), original.indices_settings());
    assert_eq!(decoded.broadcast(), original.broadcast());
    assert_eq!(decoded.indices(), original.indices());
}

#[test]
fn absent_translog_is_not_zero() {
    let original = detailed_response();
    let decoded = IndicesStatusResponse::decode(&original.encode().unwrap()).unwrap();
    let snapshot = decoded.shard_at(2).unwrap();
    assert_eq!(snapshot.translog_id, None);
    assert_eq!(snapshot.translog_operations, Some(3));
    let relocating = decoded.shard_at(3).unwrap();
    assert_eq!(relocating.translog_id, Some(0));
    assert_eq!(relocating.translog_operations, None);
}

#[test]
fn absent_translog_encoded_as_minus_one() {
    let shard = ShardStatus::new(ShardRouting::unassigned("a", 0, true));
    let mut writer = WireWriter::new(Vec::new());
    shard.write_to(&mut writer).unwrap();
    let bytes = writer.into_inner();
    // index name, shard id, two absent nodes, primary flag, routing state, state, store size.
    let offset = 2 + 1 + 1 + 1 + 1 + 1 + 1 + 1;
    assert_eq!(&bytes[offset..offset + 16], &[0xff; 16]);
}

#[test]
fn broadcast_is_encoded_first() {
    let response = fixture::response();
    let bytes = response.encode().unwrap();
    assert_eq!(&bytes[..4], &[4, 3, 1, 1]);
}

#[test]
fn truncated_stream_fails() {
    let bytes = detailed_response().encode().unwrap();
    for len in 0..bytes.len() {
        let error = IndicesStatusResponse::decode(&bytes[..len])
            .expect_err("decoding a truncated stream must fail");
        match error.downcast_ref::<WireError>() {
            Some(WireError::Truncated) => (),
            _ => panic!("unexpected error at length {}: {:?}", len, error),
        }
    }
}

#[test]
fn trailing_bytes_fail() {
    let mut bytes = fixture::response().encode().unwrap();
    bytes.push(0);
    let error = IndicesStatusResponse::decode(&bytes).unwrap_err();
    match error.downcast_ref::<WireError>() {
        Some(WireError::TrailingBytes(1)) => (),
        _ => panic!("unexpected error: {:?}", error),
    }
}

#[test]
fn shard_for_unknown_index_fails() {
    let mut writer = WireWriter::new(Vec::new());
    BroadcastResponse::default().write_to(&mut writer).unwrap();
    writer.write_len(1).unwrap();
    fixture::shard("ghost", 0, true, None)
        .write_to(&mut writer)
        .unwrap();
    writer.write_len(0).unwrap();
    let error = IndicesStatusResponse::decode(&writer.into_inner()).unwrap_err();
    match error.downcast_ref::<WireError>() {
        Some(WireError::UnknownIndex(index)) => assert_eq!(index, "ghost"),
        _ => panic!("unexpected error: {:?}", error),
    }
}

#[test]
fn unknown_routing_state_fails() {
    let mut writer = WireWriter::new(Vec::new());
    writer.write_string("a").unwrap();
    writer.write_vint(0).unwrap();
    writer.write_bool(false).unwrap();
    writer.write_bool(false).unwrap();
    writer.write_bool(true).unwrap();
    writer.write_u8(9).unwrap();
    let bytes = writer.into_inner();
    let mut reader = WireReader::new(bytes.as_slice());
    match ShardRouting::read_from(&mut reader) {
        Err(WireError::UnknownRoutingState(9)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn settings_keep_key_value_pairing() {
    let settings = Settings::new()
        .put("index.refresh_interval", "1s")
        .put("index.number_of_replicas", "2")
        .put("index.aliases.0", "logs");
    let mut writer = WireWriter::new(Vec::new());
    settings.write_to(&mut writer).unwrap();
    let bytes = writer.into_inner();
    let decoded = Settings::read_from(&mut WireReader::new(bytes.as_slice())).unwrap();
    assert_eq!(decoded, settings);
    assert_eq!(decoded.get("index.number_of_replicas"), Some("2"));
}

#[test]
fn duplicate_index_entries_fail() {
    let mut writer = WireWriter::new(Vec::new());
    BroadcastResponse::default().write_to(&mut writer).unwrap();
    writer.write_len(0).unwrap();
    writer.write_len(2).unwrap();
    writer.write_string("a").unwrap();
    Settings::new().put("k", "first").write_to(&mut writer).unwrap();
    writer.write_string("a").unwrap();
    Settings::new().put("k", "second").write_to(&mut writer).unwrap();
    let error = IndicesStatusResponse::decode(&writer.into_inner()).unwrap_err();
    match error.downcast_ref::<WireError>() {
        Some(WireError::DuplicateKey(key)) => assert_eq!(key, "a"),
        _ => panic!("unexpected error: {:?}", error),
    }
}

#[test]
fn duplicate_settings_keys_fail() {
    let mut writer = WireWriter::new(Vec::new());
    writer.write_len(2).unwrap();
    writer.write_string("index.secret").unwrap();
    writer.write_string("first").unwrap();
    writer.write_string("index.secret").unwrap();
    writer.write_string("second").unwrap();
    let bytes = writer.into_inner();
    match Settings::read_from(&mut WireReader::new(bytes.as_slice())) {
        Err(WireError::DuplicateKey(key)) => assert_eq!(key, "index.secret"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn translog_values_round_trip_exactly() {
    let mut shard = fixture::shard("a", 0, true, None);
    shard.translog_id = Some(i64::MAX as u64);
    shard.translog_operations = Some(0);
    let shards = vec![shard];
    let original =
        IndicesStatusResponse::from_shards(shards, &fixture::metadata(), Default::default())
            .unwrap();
    let decoded = IndicesStatusResponse::decode(&original.encode().unwrap()).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.shard_at(0).unwrap().translog_id, Some(i64::MAX as u64));
    assert_eq!(decoded.shard_at(0).unwrap().translog_operations, Some(0));
    assert_eq!(decoded.render(None).unwrap(), original.render(None).unwrap());
}

#[test]
fn translog_value_too_large_to_encode() {
    let mut shard = ShardStatus::new(ShardRouting::unassigned("a", 0, true));
    shard.translog_id = Some(u64::MAX);
    let mut writer = WireWriter::new(Vec::new());
    match shard.write_to(&mut writer) {
        Err(WireError::ValueTooLarge(value)) => assert_eq!(value, u64::MAX),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn negative_translog_other_than_absent_fails() {
    let shard = ShardStatus::new(ShardRouting::unassigned("a", 0, true));
    let mut writer = WireWriter::new(Vec::new());
    shard.write_to(&mut writer).unwrap();
    let mut bytes = writer.into_inner();
    // Translog id follows the routing, state and store size flag.
    let offset = 2 + 1 + 1 + 1 + 1 + 1 + 1 + 1;
    bytes[offset..offset + 8].copy_from_slice(&(-2i64).to_be_bytes());
    match ShardStatus::read_from(&mut WireReader::new(bytes.as_slice())) {
        Err(WireError::NegativeValue(-2)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}
