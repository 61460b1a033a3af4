//! Test doubles and common utilities for handler contract tests
//!
//! This module provides a controller client that counts every call and can
//! be told to fail specific operations.

#![allow(dead_code)]

use ctrlprov_core::error::{Error, Result};
use ctrlprov_core::traits::{ControllerClient, RemotePeriodicPing, ResourceState};
use ctrlprov_core::{MemoryControllerClient, MemoryResourceState};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Controller client operations, for counting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    EnablePrivateOob,
    DisablePrivateOob,
    GetPrivateOobState,
    CreatePeriodicPing,
    GetPeriodicPing,
    DeletePeriodicPing,
}

const ALL_OPS: [Op; 6] = [
    Op::EnablePrivateOob,
    Op::DisablePrivateOob,
    Op::GetPrivateOobState,
    Op::CreatePeriodicPing,
    Op::GetPeriodicPing,
    Op::DeletePeriodicPing,
];

/// A controller client that records calls
///
/// Delegates to a [`MemoryControllerClient`] unless the operation was
/// marked as failing.
pub struct RecordingClient {
    inner: MemoryControllerClient,
    /// One counter per `Op`, indexed by `ALL_OPS` position
    counts: Arc<[AtomicUsize; 6]>,
    /// Operations that fail with a controller error
    failing: Arc<Mutex<HashSet<Op>>>,
}

impl RecordingClient {
    pub fn new(address: &str) -> Self {
        Self::wrap(MemoryControllerClient::new(address))
    }

    pub fn wrap(inner: MemoryControllerClient) -> Self {
        Self {
            inner,
            counts: Arc::new(Default::default()),
            failing: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// The backing in-memory controller
    pub fn controller(&self) -> &MemoryControllerClient {
        &self.inner
    }

    /// Make an operation fail until `recover` is called
    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Stop failing an operation
    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    /// Number of calls made for an operation
    pub fn calls(&self, op: Op) -> usize {
        self.counts[index(op)].load(Ordering::SeqCst)
    }

    /// Number of calls made across all operations
    pub fn total_calls(&self) -> usize {
        ALL_OPS.iter().map(|op| self.calls(*op)).sum()
    }

    fn record(&self, op: Op) -> Result<()> {
        self.counts[index(op)].fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(Error::controller(format!("injected failure for {:?}", op)));
        }
        Ok(())
    }
}

fn index(op: Op) -> usize {
    ALL_OPS
        .iter()
        .position(|candidate| *candidate == op)
        .expect("every Op is listed in ALL_OPS")
}

#[async_trait::async_trait]
impl ControllerClient for RecordingClient {
    fn controller_address(&self) -> &str {
        self.inner.controller_address()
    }

    async fn enable_private_oob(&self) -> Result<()> {
        self.record(Op::EnablePrivateOob)?;
        self.inner.enable_private_oob().await
    }

    async fn disable_private_oob(&self) -> Result<()> {
        self.record(Op::DisablePrivateOob)?;
        self.inner.disable_private_oob().await
    }

    async fn get_private_oob_state(&self) -> Result<bool> {
        self.record(Op::GetPrivateOobState)?;
        self.inner.get_private_oob_state().await
    }

    async fn create_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<()> {
        self.record(Op::CreatePeriodicPing)?;
        self.inner.create_periodic_ping(ping).await
    }

    async fn get_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<RemotePeriodicPing> {
        self.record(Op::GetPeriodicPing)?;
        self.inner.get_periodic_ping(ping).await
    }

    async fn delete_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<()> {
        self.record(Op::DeletePeriodicPing)?;
        self.inner.delete_periodic_ping(ping).await
    }

    fn client_name(&self) -> &'static str {
        "recording"
    }
}

/// Helper to create the desired state of a periodic ping
pub fn periodic_ping_state(gw_name: &str, interval: i64, ip_address: &str) -> MemoryResourceState {
    let mut state = MemoryResourceState::new();
    state.set_string("gw_name", gw_name);
    state.set_int("interval", interval);
    state.set_string("ip_address", ip_address);
    state
}

/// Helper to create the desired state of the private OOB toggle
pub fn private_oob_state(enabled: bool) -> MemoryResourceState {
    MemoryResourceState::with_fields([("enable_private_oob", enabled)])
}
