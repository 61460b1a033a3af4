// # Resource State Implementations
//
// This module provides implementations of the ResourceState trait.

pub mod memory;

pub use memory::MemoryResourceState;
