//! Core traits for the resource handlers
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`ControllerClient`]: Calls against the controller management API
//! - [`ResourceState`]: Declarative state of a single managed resource
//! - [`Resource`]: Create/read/update/delete contract implemented per resource type

pub mod controller_client;
pub mod resource_state;
pub mod resource;

pub use controller_client::{ControllerClient, RemotePeriodicPing};
pub use resource_state::{ResourceState, FieldValue};
pub use resource::Resource;
