// # Periodic Ping Resource
//
// Manages a recurring ping check configured on a gateway.
//
// ## Identity
//
// The resource identifier is the gateway name. Every field is fixed at
// creation: changing `gw_name`, `ip_address` or `interval` means delete +
// create, never an in-place update.
//
// ## Field Marshalling
//
// The controller stores `interval` as a decimal string while the
// declarative state holds an integer. Conversion is exact in both
// directions; a remote value that is not a plain integer in range is a
// read failure, never rounded.
//
// ## Post-Create Read
//
// `create` refreshes the state from the controller exactly once, even
// though both the normal return path and the cleanup path ask for it. A
// `OneShot` token scoped to the create call enforces this.

use std::net::IpAddr;

use async_trait::async_trait;
use ctrlprov_core::config::MAX_PERIODIC_PING_INTERVAL;
use ctrlprov_core::traits::{ControllerClient, RemotePeriodicPing, Resource, ResourceState};
use ctrlprov_core::{Error, Result};
use tracing::{debug, info, warn};

use crate::once::OneShot;

/// Field holding the gateway name
pub const GW_NAME: &str = "gw_name";
/// Field holding the target address
pub const IP_ADDRESS: &str = "ip_address";
/// Field holding the interval in seconds
pub const INTERVAL: &str = "interval";

const REPLACE_ON_CHANGE: &[&str] = &[GW_NAME, IP_ADDRESS, INTERVAL];

/// A validated periodic ping record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicPing {
    /// Gateway the check runs on
    pub gw_name: String,
    /// Interval in seconds, within `[0, 2^31-1]`
    pub interval: u32,
    /// Target address, a valid IPv4 or IPv6 address
    pub ip_address: String,
}

impl PeriodicPing {
    /// Create a validated record
    pub fn new(
        gw_name: impl Into<String>,
        interval: i64,
        ip_address: impl Into<String>,
    ) -> Result<Self> {
        let gw_name = gw_name.into();
        let ip_address = ip_address.into();

        if gw_name.is_empty() {
            return Err(Error::invalid_input("periodic ping gw_name is required"));
        }

        let interval = interval_from_int(interval)?;

        if ip_address.parse::<IpAddr>().is_err() {
            return Err(Error::invalid_input(format!(
                "periodic ping ip_address is not a valid IPv4/IPv6 address: '{}'",
                ip_address
            )));
        }

        Ok(Self {
            gw_name,
            interval,
            ip_address,
        })
    }

    /// Read the desired record from the declarative state
    ///
    /// All three fields are required.
    pub fn from_state(state: &dyn ResourceState) -> Result<Self> {
        let gw_name = state
            .get_string(GW_NAME)
            .ok_or_else(|| Error::invalid_input("periodic ping gw_name is required"))?;
        let interval = state
            .get_int(INTERVAL)
            .ok_or_else(|| Error::invalid_input("periodic ping interval is required"))?;
        let ip_address = state
            .get_string(IP_ADDRESS)
            .ok_or_else(|| Error::invalid_input("periodic ping ip_address is required"))?;

        Self::new(gw_name, interval, ip_address)
    }

    /// Parse a record returned by the controller
    pub fn from_remote(remote: &RemotePeriodicPing) -> Result<Self> {
        if remote.ip_address.parse::<IpAddr>().is_err() {
            return Err(Error::controller(format!(
                "periodic ping ip_address is not a valid IPv4/IPv6 address: '{}'",
                remote.ip_address
            )));
        }

        Ok(Self {
            gw_name: remote.gw_name.clone(),
            interval: interval_from_remote(&remote.interval)?,
            ip_address: remote.ip_address.clone(),
        })
    }

    /// Convert to the controller's wire representation
    pub fn to_remote(&self) -> RemotePeriodicPing {
        RemotePeriodicPing {
            gw_name: self.gw_name.clone(),
            interval: self.interval.to_string(),
            ip_address: self.ip_address.clone(),
        }
    }

    /// Write the record into the declarative state and set the identifier
    pub fn write_to(&self, state: &mut dyn ResourceState) {
        state.set_string(GW_NAME, &self.gw_name);
        state.set_string(IP_ADDRESS, &self.ip_address);
        state.set_int(INTERVAL, i64::from(self.interval));
        state.set_id(&self.gw_name);
    }
}

fn interval_from_int(interval: i64) -> Result<u32> {
    if !(0..=MAX_PERIODIC_PING_INTERVAL).contains(&interval) {
        return Err(Error::invalid_input(format!(
            "periodic ping interval must be between 0 and {}. Got: {}",
            MAX_PERIODIC_PING_INTERVAL, interval
        )));
    }

    u32::try_from(interval)
        .map_err(|e| Error::invalid_input(format!("periodic ping interval {}: {}", interval, e)))
}

fn interval_from_remote(interval: &str) -> Result<u32> {
    if interval.is_empty() || !interval.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::controller(format!(
            "periodic ping interval is not an integer: '{}'",
            interval
        )));
    }

    let value: i64 = interval.parse().map_err(|e| {
        Error::controller(format!("periodic ping interval '{}': {}", interval, e))
    })?;
    interval_from_int(value)
}

/// Handler for the `periodic_ping` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicPingResource;

impl PeriodicPingResource {
    /// Refresh the state unless this operation already did
    async fn read_if_required(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
        read_once: &mut OneShot,
    ) -> Result<()> {
        if !read_once.take() {
            return Ok(());
        }
        self.read(client, state).await
    }

    /// Build the wire record for delete from whatever the state holds
    fn remote_from_state(state: &dyn ResourceState) -> RemotePeriodicPing {
        let gw_name = state
            .get_string(GW_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| state.id());

        RemotePeriodicPing {
            gw_name,
            interval: state
                .get_int(INTERVAL)
                .map(|i| i.to_string())
                .unwrap_or_default(),
            ip_address: state.get_string(IP_ADDRESS).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Resource for PeriodicPingResource {
    fn type_name(&self) -> &'static str {
        "periodic_ping"
    }

    async fn create(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        let ping = PeriodicPing::from_state(state)?;

        info!(
            "Creating periodic ping on {} -> {} every {}s via {}",
            ping.gw_name,
            ping.ip_address,
            ping.interval,
            client.client_name()
        );
        client
            .create_periodic_ping(&ping.to_remote())
            .await
            .map_err(|e| Error::remote("create periodic ping", e))?;

        state.set_id(&ping.gw_name);

        let mut read_once = OneShot::new();
        let result = self.read_if_required(client, state, &mut read_once).await;

        // Cleanup path: refresh if the primary path did not get to it
        if read_once.has_fired() {
            debug!("Periodic ping {} already refreshed after create", ping.gw_name);
        } else if let Err(e) = self.read_if_required(client, state, &mut read_once).await {
            warn!("Failed to refresh periodic ping {} after create: {}", ping.gw_name, e);
        }

        result
    }

    async fn read(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        let mut gw_name = state.get_string(GW_NAME).unwrap_or_default();
        if gw_name.is_empty() {
            // Import by identifier: the identifier is the gateway name
            gw_name = state.id();
            debug!("Looking up periodic ping by ID: {}", gw_name);
            state.set_string(GW_NAME, &gw_name);
        }

        let context = format!("periodic ping on gateway {}", gw_name);

        let remote = match client
            .get_periodic_ping(&RemotePeriodicPing::key(&gw_name))
            .await
        {
            Ok(remote) => remote,
            Err(e) if e.is_not_found() => {
                warn!("Periodic ping on {} not found, removing from state", gw_name);
                state.set_id("");
                return Ok(());
            }
            Err(e) => return Err(Error::read(context, e)),
        };

        let mut ping = PeriodicPing::from_remote(&remote).map_err(|e| Error::read(&context, e))?;
        // The lookup key is authoritative for the identity
        ping.gw_name = gw_name;

        debug!(
            "Periodic ping on {} -> {} every {}s",
            ping.gw_name, ping.ip_address, ping.interval
        );
        ping.write_to(state);
        Ok(())
    }

    async fn update(
        &self,
        _client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        if self.requires_replacement(state) {
            return Err(Error::unsupported(format!(
                "periodic ping on {} cannot be updated in place; gw_name, ip_address and interval require delete and create",
                state.id()
            )));
        }

        debug!("Periodic ping {} unchanged, skipping update", state.id());
        Ok(())
    }

    async fn delete(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        let remote = Self::remote_from_state(state);

        info!(
            "Deleting periodic ping on {} via {}",
            remote.gw_name,
            client.client_name()
        );
        client
            .delete_periodic_ping(&remote)
            .await
            .map_err(|e| Error::remote("delete periodic ping", e))
    }

    fn replace_on_change(&self) -> &'static [&'static str] {
        REPLACE_ON_CHANGE
    }
}
