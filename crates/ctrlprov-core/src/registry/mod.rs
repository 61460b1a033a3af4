//! Plugin-based resource registry
//!
//! The registry maps resource type names to their handlers, so callers can
//! dispatch a [`ResourceConfig`] without hardcoded match arms.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ctrlprov_core::ResourceRegistry;
//!
//! let registry = ResourceRegistry::new();
//! ctrlprov_resources::register(&registry);
//!
//! let handler = registry.resource_for(&resource_config)?;
//! handler.create(&client, &mut state).await?;
//! ```

use crate::config::ResourceConfig;
use crate::error::{Error, Result};
use crate::traits::Resource;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry of resource handlers keyed by type name
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes. Handlers are shared as `Arc<dyn Resource>`.
#[derive(Default)]
pub struct ResourceRegistry {
    resources: RwLock<HashMap<String, Arc<dyn Resource>>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource handler under its type name
    ///
    /// A handler registered under an existing name replaces the old one.
    pub fn register_resource(&self, resource: Arc<dyn Resource>) {
        let name = resource.type_name().to_string();
        let mut resources = self
            .resources
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        resources.insert(name, resource);
    }

    /// Get the handler for a resource type
    ///
    /// # Returns
    ///
    /// - `Ok(Arc<dyn Resource>)`: The registered handler
    /// - `Err(Error)`: If the type is not registered
    pub fn resource(&self, type_name: &str) -> Result<Arc<dyn Resource>> {
        let resources = self
            .resources
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        resources
            .get(type_name)
            .cloned()
            .ok_or_else(|| Error::config(format!("Unknown resource type: {}", type_name)))
    }

    /// Get the handler for a resource configuration
    pub fn resource_for(&self, config: &ResourceConfig) -> Result<Arc<dyn Resource>> {
        self.resource(config.type_name())
    }

    /// List all registered resource types
    pub fn list_resources(&self) -> Vec<String> {
        let resources = self
            .resources
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        resources.keys().cloned().collect()
    }

    /// Check if a resource type is registered
    pub fn has_resource(&self, type_name: &str) -> bool {
        let resources = self
            .resources
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        resources.contains_key(type_name)
    }
}
