//! Controller identity
//!
//! Controller-scoped singleton resources have no generated identifier.
//! Their identifier is the controller's management address with every `.`
//! replaced by `-` (e.g. `10.0.0.1` becomes `10-0-0-1`).

use crate::error::{Error, Result};

/// Identity of the controller a client is connected to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerIdentity {
    address: String,
}

impl ControllerIdentity {
    /// Create an identity from a management address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// Create the identity of the controller behind `client`
    pub fn of(client: &dyn crate::ControllerClient) -> Self {
        Self::new(client.controller_address())
    }

    /// The deterministic resource identifier for this controller
    pub fn resource_id(&self) -> String {
        self.address.replace('.', "-")
    }

    /// Check that `id` was derived from this controller's address
    ///
    /// A mismatch means the state belongs to another controller. It is
    /// never treated as drift.
    pub fn verify(&self, id: &str) -> Result<()> {
        let expected = self.resource_id();
        if id != expected {
            return Err(Error::identity_mismatch(id, expected));
        }
        Ok(())
    }
}

impl std::fmt::Display for ControllerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}
