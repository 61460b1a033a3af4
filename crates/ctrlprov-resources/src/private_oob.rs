//! Private out-of-band management toggle
//!
//! A controller-wide boolean with a fixed identity: the resource identifier
//! is always the controller address with `.` replaced by `-`, whether the
//! feature is enabled or not.
//!
//! ## Remote Calls
//!
//! | Operation | desired = true | desired = false |
//! |-----------|----------------|-----------------|
//! | create    | enable         | none            |
//! | update    | enable         | disable         |
//! | delete    | disable        | disable         |
//!
//! `update` calls nothing when the field is unchanged since the last apply.

use async_trait::async_trait;
use ctrlprov_core::traits::{ControllerClient, Resource, ResourceState};
use ctrlprov_core::{ControllerIdentity, Error, Result};
use tracing::{debug, info, warn};

/// Field holding the desired feature state
pub const ENABLE_PRIVATE_OOB: &str = "enable_private_oob";

/// Handler for the `controller_private_oob` resource
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivateOobResource;

impl PrivateOobResource {
    async fn set_private_oob(client: &dyn ControllerClient, enabled: bool) -> Result<()> {
        if enabled {
            client.enable_private_oob().await
        } else {
            client.disable_private_oob().await
        }
    }
}

#[async_trait]
impl Resource for PrivateOobResource {
    fn type_name(&self) -> &'static str {
        "controller_private_oob"
    }

    async fn create(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        let identity = ControllerIdentity::of(client);
        let desired = state.get_bool(ENABLE_PRIVATE_OOB).unwrap_or(false);

        if desired {
            info!(
                "Enabling private OOB on controller {} via {}",
                identity,
                client.client_name()
            );
            client
                .enable_private_oob()
                .await
                .map_err(|e| Error::remote("enable private OOB", e))?;
        } else {
            // The controller default is disabled
            debug!("Private OOB not requested on controller {}, nothing to enable", identity);
        }

        state.set_id(&identity.resource_id());
        Ok(())
    }

    async fn read(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        let identity = ControllerIdentity::of(client);
        identity.verify(&state.id())?;

        let enabled = match client.get_private_oob_state().await {
            Ok(enabled) => enabled,
            Err(e) if e.is_not_found() => {
                warn!(
                    "Private OOB state not found on controller {}, removing from state",
                    identity
                );
                state.set_id("");
                return Ok(());
            }
            Err(e) => {
                return Err(Error::read(
                    format!("private OOB state of controller {}", identity),
                    e,
                ));
            }
        };

        debug!("Private OOB on controller {} is {}", identity, enabled);
        state.set_bool(ENABLE_PRIVATE_OOB, enabled);
        state.set_id(&identity.resource_id());
        Ok(())
    }

    async fn update(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<()> {
        if !state.has_change(ENABLE_PRIVATE_OOB) {
            debug!("Private OOB unchanged, skipping update");
            return Ok(());
        }

        let desired = state.get_bool(ENABLE_PRIVATE_OOB).unwrap_or(false);
        let operation = if desired {
            "enable private OOB during update"
        } else {
            "disable private OOB during update"
        };

        info!(
            "Updating private OOB on controller {} -> {} via {}",
            client.controller_address(),
            desired,
            client.client_name()
        );
        Self::set_private_oob(client, desired)
            .await
            .map_err(|e| Error::remote(operation, e))
    }

    async fn delete(
        &self,
        client: &dyn ControllerClient,
        _state: &mut dyn ResourceState,
    ) -> Result<()> {
        info!(
            "Disabling private OOB on controller {} via {}",
            client.controller_address(),
            client.client_name()
        );
        client
            .disable_private_oob()
            .await
            .map_err(|e| Error::remote("disable private OOB", e))
    }
}
