// # Resource State Trait
//
// Defines the accessor a handler uses to read desired configuration and
// write observed state for one managed resource.
//
// ## Purpose
//
// The declarative engine owns persistence and diffing. Handlers only see:
// - Named scalar fields (string, bool, int)
// - The resource's opaque identifier (empty string means "absent")
// - Whether a field changed since the last apply
//
// ## Implementations
//
// - In-memory: `ctrlprov_core::state::MemoryResourceState`

use serde::{Deserialize, Serialize};

/// A scalar field value held in the declarative state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean field
    Bool(bool),
    /// Integer field
    Int(i64),
    /// String field
    String(String),
}

impl FieldValue {
    /// Get the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a bool, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// Trait for declarative state accessors
///
/// Handlers receive a fresh `&mut dyn ResourceState` per operation and
/// never keep it across calls.
///
/// Getters return `None` for unset fields or fields of another type.
pub trait ResourceState: Send + Sync {
    /// The resource identifier; empty when the resource is absent
    fn id(&self) -> String;

    /// Set the resource identifier
    ///
    /// Setting an empty identifier marks the resource as deleted.
    fn set_id(&mut self, id: &str);

    /// Get a string field
    fn get_string(&self, key: &str) -> Option<String>;

    /// Set a string field
    fn set_string(&mut self, key: &str, value: &str);

    /// Get a bool field
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Set a bool field
    fn set_bool(&mut self, key: &str, value: bool);

    /// Get an integer field
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Set an integer field
    fn set_int(&mut self, key: &str, value: i64);

    /// Whether a field differs from its value at the last apply
    fn has_change(&self, key: &str) -> bool;
}
