// # Memory Resource State
//
// In-memory implementation of ResourceState.
//
// ## Purpose
//
// Holds the declarative state of one resource: its identifier, its current
// field values, and the field values recorded at the last apply. The
// orchestration engine (or a test) calls `commit()` after a successful
// operation; `has_change` compares the current values against that record.
//
// ## When to Use
//
// - Embedding the handlers in a custom engine
// - Testing environments

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::traits::resource_state::{FieldValue, ResourceState};

/// In-memory declarative state for a single resource
///
/// # Example
///
/// ```rust
/// use ctrlprov_core::state::MemoryResourceState;
/// use ctrlprov_core::traits::ResourceState;
///
/// let mut state = MemoryResourceState::new();
/// state.set_bool("enable_private_oob", true);
/// assert!(state.has_change("enable_private_oob"));
///
/// state.commit();
/// assert!(!state.has_change("enable_private_oob"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryResourceState {
    /// Resource identifier; empty when absent
    #[serde(default)]
    id: String,

    /// Current field values
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,

    /// Field values at the last apply
    #[serde(default)]
    prior: BTreeMap<String, FieldValue>,
}

impl MemoryResourceState {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from desired field values with no prior apply
    pub fn with_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            id: String::new(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            prior: BTreeMap::new(),
        }
    }

    /// Record the current field values as the last applied state
    pub fn commit(&mut self) {
        self.prior = self.fields.clone();
    }

    /// Check if the resource is absent (empty identifier)
    pub fn is_absent(&self) -> bool {
        self.id.is_empty()
    }

    /// Number of fields currently set
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are set
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ResourceState for MemoryResourceState {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .and_then(FieldValue::as_str)
            .map(str::to_string)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.into());
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(FieldValue::as_bool)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.fields.insert(key.to_string(), value.into());
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(FieldValue::as_int)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.fields.insert(key.to_string(), value.into());
    }

    fn has_change(&self, key: &str) -> bool {
        self.fields.get(key) != self.prior.get(key)
    }
}
