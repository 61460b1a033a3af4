//! Contract Test: Periodic Ping
//!
//! Constraints verified:
//! - Create performs exactly one post-create read
//! - Interval survives the integer -> string -> integer conversion exactly
//! - Read treats a missing remote record as absence, not failure
//! - Read errors carry the gateway name
//! - Create -> Delete -> Read ends with absence
//! - Invalid records never reach the controller

mod common;

use common::*;
use ctrlprov_core::traits::{Resource, ResourceState};
use ctrlprov_core::{Error, MemoryResourceState};
use ctrlprov_resources::PeriodicPingResource;

#[tokio::test]
async fn create_reads_back_exactly_once() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");

    PeriodicPingResource.create(&client, &mut state).await.unwrap();

    assert_eq!(client.calls(Op::CreatePeriodicPing), 1);
    assert_eq!(
        client.calls(Op::GetPeriodicPing),
        1,
        "Post-create read must run exactly once"
    );
}

#[tokio::test]
async fn create_reads_back_once_even_when_read_fails() {
    let client = RecordingClient::new("10.0.0.1");
    client.fail(Op::GetPeriodicPing);
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");

    let err = PeriodicPingResource.create(&client, &mut state).await.unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
    assert_eq!(client.calls(Op::GetPeriodicPing), 1);
    // The remote record exists; the identifier is kept so it can be refreshed later
    assert_eq!(state.id(), "gw1");
}

#[tokio::test]
async fn create_failure_surfaces_as_creation_failure() {
    let client = RecordingClient::new("10.0.0.1");
    client.fail(Op::CreatePeriodicPing);
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");

    let err = PeriodicPingResource.create(&client, &mut state).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RemoteOperation { ref operation, .. } if operation == "create periodic ping"
    ));
    assert!(state.id().is_empty());
    assert_eq!(client.calls(Op::GetPeriodicPing), 0);
}

#[tokio::test]
async fn invalid_record_never_reaches_controller() {
    let client = RecordingClient::new("10.0.0.1");

    let cases = [
        periodic_ping_state("gw1", 30, "10.0.0.256"),
        periodic_ping_state("gw1", -5, "10.0.0.1"),
        periodic_ping_state("gw1", i64::from(i32::MAX) + 1, "10.0.0.1"),
        periodic_ping_state("", 30, "10.0.0.1"),
        MemoryResourceState::with_fields([("gw_name", "gw1")]),
    ];

    for mut state in cases {
        let err = PeriodicPingResource.create(&client, &mut state).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "got {:?}", err);
    }

    assert_eq!(client.total_calls(), 0);
}

#[tokio::test]
async fn interval_round_trips_exactly() {
    let intervals = [0_i64, 1, 30, 3_600, 1 << 20, i64::from(i32::MAX) - 1, i64::from(i32::MAX)];

    for (n, interval) in intervals.into_iter().enumerate() {
        let client = RecordingClient::new("10.0.0.1");
        let gw_name = format!("gw{}", n);
        let mut state = periodic_ping_state(&gw_name, interval, "10.0.0.1");

        PeriodicPingResource.create(&client, &mut state).await.unwrap();

        let stored = client.controller().periodic_ping(&gw_name).await.unwrap();
        assert_eq!(stored.interval, interval.to_string());

        let mut fresh = MemoryResourceState::new();
        fresh.set_id(&gw_name);
        PeriodicPingResource.read(&client, &mut fresh).await.unwrap();
        assert_eq!(fresh.get_int("interval"), Some(interval));
    }
}

#[tokio::test]
async fn interval_round_trips_across_range() {
    let client = RecordingClient::new("10.0.0.1");
    let stride = 1_usize << 24;
    let intervals = (0..=i64::from(i32::MAX))
        .step_by(stride)
        .chain([i64::from(i32::MAX)]);

    for interval in intervals {
        let gw_name = format!("gw-{}", interval);
        let mut state = periodic_ping_state(&gw_name, interval, "10.0.0.1");
        PeriodicPingResource.create(&client, &mut state).await.unwrap();

        let mut fresh = MemoryResourceState::new();
        fresh.set_id(&gw_name);
        PeriodicPingResource.read(&client, &mut fresh).await.unwrap();
        assert_eq!(fresh.get_int("interval"), Some(interval), "interval {}", interval);

        PeriodicPingResource.delete(&client, &mut state).await.unwrap();
    }

    assert_eq!(client.controller().periodic_ping_count().await, 0);
}

#[tokio::test]
async fn ipv6_target_is_accepted() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = periodic_ping_state("gw1", 10, "2001:db8::1");

    PeriodicPingResource.create(&client, &mut state).await.unwrap();

    assert_eq!(state.get_string("ip_address"), Some("2001:db8::1".to_string()));
}

#[tokio::test]
async fn read_not_found_clears_identifier() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");
    state.set_id("gw1");

    PeriodicPingResource.read(&client, &mut state).await.unwrap();

    assert!(state.id().is_empty());
}

#[tokio::test]
async fn read_failure_names_gateway() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = periodic_ping_state("gw-east-1", 30, "10.0.0.1");
    PeriodicPingResource.create(&client, &mut state).await.unwrap();

    client.fail(Op::GetPeriodicPing);
    let err = PeriodicPingResource.read(&client, &mut state).await.unwrap_err();

    assert!(err.to_string().contains("gw-east-1"), "got: {}", err);
    assert_eq!(state.id(), "gw-east-1");
}

#[tokio::test]
async fn delete_failure_surfaces_as_deletion_failure() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");
    PeriodicPingResource.create(&client, &mut state).await.unwrap();

    client.fail(Op::DeletePeriodicPing);
    let err = PeriodicPingResource.delete(&client, &mut state).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RemoteOperation { ref operation, .. } if operation == "delete periodic ping"
    ));
    assert!(client.controller().periodic_ping("gw1").await.is_some());
}

#[tokio::test]
async fn update_never_calls_controller() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");
    PeriodicPingResource.create(&client, &mut state).await.unwrap();
    state.commit();
    let before = client.total_calls();

    PeriodicPingResource.update(&client, &mut state).await.unwrap();

    state.set_string("ip_address", "10.0.0.9");
    assert!(PeriodicPingResource.requires_replacement(&state));
    let err = PeriodicPingResource.update(&client, &mut state).await.unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));

    assert_eq!(client.total_calls(), before);
}

#[tokio::test]
async fn import_missing_gateway_is_not_found() {
    let client = RecordingClient::new("10.0.0.1");
    let mut state = MemoryResourceState::new();

    let err = PeriodicPingResource
        .import("gw-missing", &client, &mut state)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(state.id().is_empty());
}

#[tokio::test]
async fn scenario_create_read_delete_read() {
    let client = RecordingClient::new("10.0.0.1");

    // Create(gw_name="gw1", interval=30, ip_address="10.0.0.1")
    let mut state = periodic_ping_state("gw1", 30, "10.0.0.1");
    PeriodicPingResource.create(&client, &mut state).await.unwrap();
    assert!(client.controller().periodic_ping("gw1").await.is_some());
    state.commit();

    // Read("gw1") from a fresh import-style state
    let mut imported = MemoryResourceState::new();
    PeriodicPingResource
        .import("gw1", &client, &mut imported)
        .await
        .unwrap();
    assert_eq!(imported.get_string("ip_address"), Some("10.0.0.1".to_string()));
    assert_eq!(imported.get_int("interval"), Some(30));
    assert_eq!(imported.id(), "gw1");

    // Delete
    PeriodicPingResource.delete(&client, &mut state).await.unwrap();
    assert_eq!(client.controller().periodic_ping_count().await, 0);

    // Read("gw1") -> absent, no error
    PeriodicPingResource.read(&client, &mut state).await.unwrap();
    assert!(state.id().is_empty());
}
