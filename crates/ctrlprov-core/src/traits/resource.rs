// # Resource Trait
//
// Defines the four-operation lifecycle every resource handler implements.
//
// ## Implementations
//
// - `controller_private_oob`: `ctrlprov-resources` crate
// - `periodic_ping`: `ctrlprov-resources` crate
//
// ## Usage
//
// ```rust,ignore
// use ctrlprov_core::{MemoryResourceState, Resource};
//
// let handler = /* Resource implementation */;
// let mut state = MemoryResourceState::new();
// state.set_bool("enable_private_oob", true);
//
// handler.create(&client, &mut state).await?;
// handler.read(&client, &mut state).await?;
// ```

use async_trait::async_trait;

use crate::traits::{ControllerClient, ResourceState};

/// Trait for resource handler implementations
///
/// Handlers are stateless. The controller client and the declarative state
/// accessor are passed into every call; nothing is cached between calls.
///
/// # Contract
///
/// - Every operation is all-or-nothing from the caller's point of view
/// - Handlers never retry; a failed remote call is returned wrapped with
///   the operation that failed
/// - `read` treats a remote "not found" as absence: it clears the
///   identifier and returns `Ok(())`
/// - The caller guarantees at most one in-flight operation per identifier
#[async_trait]
pub trait Resource: Send + Sync {
    /// The resource type name (e.g. "periodic_ping")
    fn type_name(&self) -> &'static str;

    /// Create the remote object described by `state` and set its identifier
    async fn create(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<(), crate::Error>;

    /// Refresh `state` from the remote object
    ///
    /// Leaves an empty identifier if the remote object no longer exists.
    async fn read(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<(), crate::Error>;

    /// Apply changed fields to the remote object in place
    async fn update(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<(), crate::Error>;

    /// Delete the remote object
    async fn delete(
        &self,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<(), crate::Error>;

    /// Fields whose change cannot be applied in place
    ///
    /// A change to any of these must be carried out as delete + create.
    fn replace_on_change(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether the pending changes in `state` require delete + create
    fn requires_replacement(&self, state: &dyn ResourceState) -> bool {
        self.replace_on_change()
            .iter()
            .any(|field| state.has_change(field))
    }

    /// Adopt an existing remote object by identifier
    ///
    /// Sets the identifier and reads the remote object into `state`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The object exists and `state` reflects it
    /// - `Err(Error::NotFound)`: Nothing to import under `id`
    /// - `Err(Error)`: The read failed
    async fn import(
        &self,
        id: &str,
        client: &dyn ControllerClient,
        state: &mut dyn ResourceState,
    ) -> Result<(), crate::Error> {
        state.set_id(id);
        self.read(client, state).await?;

        if state.id().is_empty() {
            return Err(crate::Error::not_found(format!(
                "{} '{}' does not exist",
                self.type_name(),
                id
            )));
        }

        Ok(())
    }
}
