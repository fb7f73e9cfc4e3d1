//! Driving port for the claim use-case.

use async_trait::async_trait;

use crate::domain::{ClaimEvent, ClaimPoints, Error, User, UserId};

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Points awarded, exactly as persisted.
    pub points: ClaimPoints,
    /// The user with the updated total.
    pub user: User,
    /// The appended history record.
    pub event: ClaimEvent,
}

/// Award a random number of points to a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimCommand: Send + Sync {
    /// Claim points for `user_id`. Unknown users yield a not-found error
    /// and leave no trace in the ledger.
    async fn claim(&self, user_id: &UserId) -> Result<ClaimOutcome, Error>;
}
