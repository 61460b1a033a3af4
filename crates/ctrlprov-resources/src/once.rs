//! Single-use token for work that must run at most once per operation
//!
//! A handler that can reach the same follow-up step from more than one path
//! (the normal return path and a cleanup path) creates one token per
//! logical operation and asks it before doing the work.

/// Token that grants exactly one run
#[derive(Debug, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Create an unused token
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the token
    ///
    /// Returns `true` the first time it is called and `false` afterwards.
    pub fn take(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    /// Whether the token has been claimed
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
