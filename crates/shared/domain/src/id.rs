//! Identifier generation.

use crate::user::UserId;

/// Source of fresh user identifiers.
///
/// Injected into the user service so tests can pin the ids they expect.
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier that has never been handed out before.
    fn next_id(&self) -> UserId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> UserId {
        UserId::generate()
    }
}
