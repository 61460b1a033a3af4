//! Configuration types for the resource handlers
//!
//! This module defines the provider configuration and the desired
//! configuration of each managed resource.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::state::MemoryResourceState;
use crate::traits::ResourceState;

/// Largest interval accepted for a periodic ping, in seconds
pub const MAX_PERIODIC_PING_INTERVAL: i64 = i32::MAX as i64;

/// Main provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Management address of the controller
    pub controller_ip: String,

    /// Controller account name
    #[serde(default)]
    pub username: String,

    /// Controller account password
    /// ⚠️ NEVER log this value
    #[serde(default)]
    pub password: String,

    /// Resources to manage
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("controller_ip", &self.controller_ip)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("resources", &self.resources)
            .finish()
    }
}

impl ProviderConfig {
    /// Create a new configuration for a controller with no resources
    pub fn new(controller_ip: impl Into<String>) -> Self {
        Self {
            controller_ip: controller_ip.into(),
            username: String::new(),
            password: String::new(),
            resources: Vec::new(),
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a resource to manage
    pub fn with_resource(mut self, resource: ResourceConfig) -> Self {
        self.resources.push(resource);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.controller_ip.is_empty() {
            return Err(crate::Error::config("Controller IP cannot be empty"));
        }

        if self.controller_ip.chars().any(char::is_whitespace) {
            return Err(crate::Error::config(format!(
                "Controller IP contains whitespace: '{}'",
                self.controller_ip
            )));
        }

        let singletons = self
            .resources
            .iter()
            .filter(|r| matches!(r, ResourceConfig::ControllerPrivateOob { .. }))
            .count();
        if singletons > 1 {
            return Err(crate::Error::config(
                "controller_private_oob can only be declared once per controller",
            ));
        }

        let mut gateways = std::collections::HashSet::new();
        for resource in &self.resources {
            resource.validate()?;

            if let ResourceConfig::PeriodicPing { gw_name, .. } = resource
                && !gateways.insert(gw_name.as_str())
            {
                return Err(crate::Error::config(format!(
                    "Duplicate periodic_ping for gateway '{}'",
                    gw_name
                )));
            }
        }

        Ok(())
    }
}

/// Desired configuration of one managed resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceConfig {
    /// Private out-of-band management toggle
    ControllerPrivateOob {
        /// Whether the feature should be enabled
        enable_private_oob: bool,
    },

    /// Periodic ping check on a gateway
    PeriodicPing {
        /// Gateway to run the check on
        gw_name: String,
        /// Interval in seconds
        interval: i64,
        /// Address to ping
        ip_address: String,
    },
}

impl ResourceConfig {
    /// Get the resource type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceConfig::ControllerPrivateOob { .. } => "controller_private_oob",
            ResourceConfig::PeriodicPing { .. } => "periodic_ping",
        }
    }

    /// Validate the resource configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ResourceConfig::ControllerPrivateOob { .. } => Ok(()),
            ResourceConfig::PeriodicPing {
                gw_name,
                interval,
                ip_address,
            } => {
                if gw_name.is_empty() {
                    return Err(crate::Error::config("periodic_ping gw_name cannot be empty"));
                }
                if !(0..=MAX_PERIODIC_PING_INTERVAL).contains(interval) {
                    return Err(crate::Error::config(format!(
                        "periodic_ping interval must be between 0 and {}. Got: {}",
                        MAX_PERIODIC_PING_INTERVAL, interval
                    )));
                }
                if ip_address.parse::<IpAddr>().is_err() {
                    return Err(crate::Error::config(format!(
                        "periodic_ping ip_address is not a valid IPv4/IPv6 address: '{}'",
                        ip_address
                    )));
                }
                Ok(())
            }
        }
    }

    /// Build the desired state a handler is given on create
    pub fn desired_state(&self) -> MemoryResourceState {
        let mut state = MemoryResourceState::new();
        match self {
            ResourceConfig::ControllerPrivateOob { enable_private_oob } => {
                state.set_bool("enable_private_oob", *enable_private_oob);
            }
            ResourceConfig::PeriodicPing {
                gw_name,
                interval,
                ip_address,
            } => {
                state.set_string("gw_name", gw_name);
                state.set_int("interval", *interval);
                state.set_string("ip_address", ip_address);
            }
        }
        state
    }
}
