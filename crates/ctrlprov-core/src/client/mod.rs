// # Controller Client Implementations
//
// This module provides implementations of the ControllerClient trait that
// ship with the core library. Network clients live in their own crates.

pub mod memory;

pub use memory::MemoryControllerClient;
