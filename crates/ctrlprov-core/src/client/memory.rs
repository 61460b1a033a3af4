// # Memory Controller Client
//
// In-memory implementation of ControllerClient.
//
// ## Purpose
//
// Emulates the controller's management API without a network:
// - Private OOB is a single flag that starts disabled, or can start absent
// - Periodic pings are stored per gateway with their interval as a string
//
// Absent records are reported with `Error::NotFound`, the same sentinel a
// network client returns.
//
// ## When to Use
//
// - Testing environments
// - Dry runs of a configuration before pointing it at a real controller

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::traits::controller_client::{ControllerClient, RemotePeriodicPing};
use crate::Error;

/// Controller state held by the memory client
#[derive(Debug, Default)]
struct ControllerState {
    /// `None` when the controller has no private OOB record
    private_oob: Option<bool>,
    /// Periodic pings keyed by gateway name
    periodic_pings: HashMap<String, RemotePeriodicPing>,
}

/// In-memory controller client
///
/// Clones share the same controller state.
///
/// # Example
///
/// ```rust,no_run
/// use ctrlprov_core::client::MemoryControllerClient;
/// use ctrlprov_core::traits::ControllerClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MemoryControllerClient::new("10.0.0.1");
///
///     client.enable_private_oob().await?;
///     assert!(client.get_private_oob_state().await?);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryControllerClient {
    address: String,
    inner: Arc<RwLock<ControllerState>>,
}

impl MemoryControllerClient {
    /// Create a controller with private OOB disabled and no periodic pings
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner: Arc::new(RwLock::new(ControllerState {
                private_oob: Some(false),
                periodic_pings: HashMap::new(),
            })),
        }
    }

    /// Create a controller that has no private OOB record at all
    pub fn without_private_oob(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner: Arc::new(RwLock::new(ControllerState::default())),
        }
    }

    /// Current private OOB flag, `None` if the record is absent
    pub async fn private_oob(&self) -> Option<bool> {
        self.inner.read().await.private_oob
    }

    /// Remove the private OOB record
    pub async fn clear_private_oob(&self) {
        self.inner.write().await.private_oob = None;
    }

    /// Stored periodic ping for a gateway
    pub async fn periodic_ping(&self, gw_name: &str) -> Option<RemotePeriodicPing> {
        self.inner.read().await.periodic_pings.get(gw_name).cloned()
    }

    /// Store a periodic ping as-is, bypassing creation checks
    pub async fn insert_periodic_ping(&self, ping: RemotePeriodicPing) {
        self.inner
            .write()
            .await
            .periodic_pings
            .insert(ping.gw_name.clone(), ping);
    }

    /// Number of periodic pings stored
    pub async fn periodic_ping_count(&self) -> usize {
        self.inner.read().await.periodic_pings.len()
    }
}

#[async_trait]
impl ControllerClient for MemoryControllerClient {
    fn controller_address(&self) -> &str {
        &self.address
    }

    async fn enable_private_oob(&self) -> Result<(), Error> {
        debug!("Enabling private OOB on {}", self.address);
        self.inner.write().await.private_oob = Some(true);
        Ok(())
    }

    async fn disable_private_oob(&self) -> Result<(), Error> {
        debug!("Disabling private OOB on {}", self.address);
        self.inner.write().await.private_oob = Some(false);
        Ok(())
    }

    async fn get_private_oob_state(&self) -> Result<bool, Error> {
        self.inner
            .read()
            .await
            .private_oob
            .ok_or_else(|| Error::not_found("private OOB state"))
    }

    async fn create_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        if guard.periodic_pings.contains_key(&ping.gw_name) {
            return Err(Error::controller(format!(
                "periodic ping already exists on gateway {}",
                ping.gw_name
            )));
        }

        debug!(
            "Creating periodic ping on {} -> {} every {}s",
            ping.gw_name, ping.ip_address, ping.interval
        );
        guard
            .periodic_pings
            .insert(ping.gw_name.clone(), ping.clone());
        Ok(())
    }

    async fn get_periodic_ping(
        &self,
        ping: &RemotePeriodicPing,
    ) -> Result<RemotePeriodicPing, Error> {
        self.inner
            .read()
            .await
            .periodic_pings
            .get(&ping.gw_name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("periodic ping on gateway {}", ping.gw_name)))
    }

    async fn delete_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<(), Error> {
        debug!("Deleting periodic ping on {}", ping.gw_name);
        self.inner
            .write()
            .await
            .periodic_pings
            .remove(&ping.gw_name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("periodic ping on gateway {}", ping.gw_name)))
    }

    fn client_name(&self) -> &'static str {
        "memory"
    }
}
