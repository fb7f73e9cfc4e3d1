//! Port for the claim ledger: the atomic "credit and append" unit of work
//! plus per-user history reads.

use async_trait::async_trait;

use crate::domain::{ClaimEvent, PendingClaim, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by claim ledger adapters.
    pub enum ClaimLedgerError {
        /// The claimed-for user does not exist; nothing was written.
        UnknownUser { user_id: String } => "user {user_id} does not exist",
        /// Ledger connection could not be established.
        Connection { message: String } => "claim ledger connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "claim ledger query failed: {message}",
    }
}

/// A committed claim: the credited user and the appended event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedClaim {
    /// The user with the updated total.
    pub user: User,
    /// The history record, stamped at commit.
    pub event: ClaimEvent,
}

/// Driven port recording claims.
///
/// `record_claim` must increment the user's total and append the stamped
/// event as a single atomic unit: either both writes land or neither does,
/// and concurrent claims for the same user never lose an increment. The
/// timestamp is read once the user is held, so one user's history is
/// stamped in commit order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimLedger: Send + Sync {
    /// Credit `claim.points` to the user and append the stamped event.
    async fn record_claim(&self, claim: PendingClaim) -> Result<RecordedClaim, ClaimLedgerError>;

    /// Return every event for `user_id`, newest first. Events sharing a
    /// timestamp are listed in reverse commit order.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ClaimEvent>, ClaimLedgerError>;
}
