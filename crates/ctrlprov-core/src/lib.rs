// # ctrlprov-core
//
// Core library for declarative controller resource handlers.
//
// ## Architecture Overview
//
// This library provides the contracts shared by every resource handler:
// - **ControllerClient**: Trait for calls against the controller management API
// - **ResourceState**: Trait for the declarative state of one managed resource
// - **Resource**: The four-operation (create/read/update/delete) handler contract
// - **ResourceRegistry**: Plugin-based registry mapping resource types to handlers
// - **ControllerIdentity**: Deterministic resource identifiers derived from the controller address
//
// ## Design Principles
//
// 1. **Stateless handlers**: Handlers receive the client and state accessor per call
// 2. **No local retries**: Retry and timeout policy belongs to the client
// 3. **Absence is not failure**: A remote "not found" clears local state on read
// 4. **Library-First**: The orchestration engine lives outside this workspace

pub mod traits;
pub mod registry;
pub mod config;
pub mod error;
pub mod identity;
pub mod state;
pub mod client;

// Re-export core types for convenience
pub use traits::{ControllerClient, RemotePeriodicPing, Resource, ResourceState, FieldValue};
pub use registry::ResourceRegistry;
pub use config::{ProviderConfig, ResourceConfig};
pub use error::{Error, Result};
pub use identity::ControllerIdentity;
pub use state::MemoryResourceState;
pub use client::MemoryControllerClient;
