//! Driving port for leaderboard and history reads.
//!
//! Reads are never cached: every call reflects all claims committed before
//! it started.

use async_trait::async_trait;

use crate::domain::{ClaimEvent, Error, HistorySummary, HistoryWindow, RankedUser, User, UserId};

/// Read side of the leaderboard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// Every user in leaderboard order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The first `limit` users in leaderboard order with 1-based ranks.
    async fn top_users(&self, limit: usize) -> Result<Vec<RankedUser>, Error>;

    /// A user's claim events, newest first.
    async fn list_history(&self, user_id: &UserId) -> Result<Vec<ClaimEvent>, Error>;

    /// Aggregate statistics over a user's claims inside `window`.
    async fn history_summary(
        &self,
        user_id: &UserId,
        window: HistoryWindow,
    ) -> Result<HistorySummary, Error>;
}
