// # Controller Client Trait
//
// Defines the interface for calls against the controller management API.
//
// ## Implementations
//
// - In-memory: `ctrlprov_core::client::MemoryControllerClient`
// - Network clients live outside this workspace
//
// ## Usage
//
// ```rust,ignore
// use ctrlprov_core::ControllerClient;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let client = /* ControllerClient implementation */;
//
//     client.enable_private_oob().await?;
//     assert!(client.get_private_oob_state().await?);
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Periodic ping record as the controller API stores it
///
/// The controller keeps `interval` as a decimal string. Handlers convert
/// to and from their integer representation at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemotePeriodicPing {
    /// Gateway the check runs on
    pub gw_name: String,
    /// Interval in seconds, as a decimal string
    #[serde(default)]
    pub interval: String,
    /// Target address of the ping
    #[serde(default)]
    pub ip_address: String,
}

impl RemotePeriodicPing {
    /// Create a partial record that only carries the gateway name
    ///
    /// This is the lookup key accepted by [`ControllerClient::get_periodic_ping`].
    pub fn key(gw_name: impl Into<String>) -> Self {
        Self {
            gw_name: gw_name.into(),
            ..Self::default()
        }
    }
}

/// Trait for controller API client implementations
///
/// Clients perform exactly one API round trip per call.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Errors
///
/// - Absent records are reported with [`crate::Error::NotFound`]. Handlers
///   rely on this sentinel to tell absence apart from failure.
/// - Any other failure is returned as-is; handlers wrap it with the
///   operation that failed.
///
/// Retry, backoff and timeouts are the client's concern. Handlers never
/// retry a failed call.
#[async_trait]
pub trait ControllerClient: Send + Sync {
    /// Management address of the controller this client talks to
    ///
    /// Resource identifiers for controller-scoped singletons are derived
    /// from this value (see [`crate::ControllerIdentity`]).
    fn controller_address(&self) -> &str;

    /// Enable the private out-of-band management feature
    async fn enable_private_oob(&self) -> Result<(), crate::Error>;

    /// Disable the private out-of-band management feature
    async fn disable_private_oob(&self) -> Result<(), crate::Error>;

    /// Get whether private out-of-band management is enabled
    ///
    /// # Returns
    ///
    /// - `Ok(bool)`: The current feature state
    /// - `Err(Error::NotFound)`: The controller has no record of the feature
    /// - `Err(Error)`: The request failed
    async fn get_private_oob_state(&self) -> Result<bool, crate::Error>;

    /// Create a periodic ping on a gateway
    async fn create_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<(), crate::Error>;

    /// Get the periodic ping configured on a gateway
    ///
    /// # Parameters
    ///
    /// - `ping`: Partial record; only `gw_name` is used as the key
    ///
    /// # Returns
    ///
    /// - `Ok(RemotePeriodicPing)`: The stored record
    /// - `Err(Error::NotFound)`: No periodic ping on that gateway
    /// - `Err(Error)`: The request failed
    async fn get_periodic_ping(
        &self,
        ping: &RemotePeriodicPing,
    ) -> Result<RemotePeriodicPing, crate::Error>;

    /// Delete the periodic ping configured on a gateway
    async fn delete_periodic_ping(&self, ping: &RemotePeriodicPing) -> Result<(), crate::Error>;

    /// Get the client name (for logging/debugging)
    fn client_name(&self) -> &'static str;
}
