// # ctrlprov-resources
//
// Resource handlers for controller-managed features.
//
// ## Resources
//
// - `controller_private_oob`: [`PrivateOobResource`], a controller-wide
//   boolean toggle for private out-of-band management
// - `periodic_ping`: [`PeriodicPingResource`], a recurring ping check
//   configured on a gateway
//
// Both handlers are stateless unit structs. Every operation receives the
// controller client and the declarative state accessor as parameters and
// performs at most one round trip per remote call it needs.

pub mod once;
pub mod periodic_ping;
pub mod private_oob;

pub use once::OneShot;
pub use periodic_ping::{PeriodicPing, PeriodicPingResource};
pub use private_oob::PrivateOobResource;

use ctrlprov_core::ResourceRegistry;
use std::sync::Arc;

/// Register the built-in resource handlers with a registry
///
/// # Example
///
/// ```rust
/// use ctrlprov_core::ResourceRegistry;
///
/// let registry = ResourceRegistry::new();
/// ctrlprov_resources::register(&registry);
/// assert!(registry.has_resource("periodic_ping"));
/// ```
pub fn register(registry: &ResourceRegistry) {
    registry.register_resource(Arc::new(PrivateOobResource));
    registry.register_resource(Arc::new(PeriodicPingResource));
}

/// Create a registry with the built-in resource handlers
pub fn registry() -> ResourceRegistry {
    let registry = ResourceRegistry::new();
    register(&registry);
    registry
}
