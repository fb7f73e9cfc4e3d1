//! Read-side services: leaderboard ranking and claim history.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;

use crate::domain::claim_service::map_ledger_error;
use crate::domain::ports::{ClaimLedger, LeaderboardQuery, UserPersistenceError, UserRepository};
use crate::domain::{
    ClaimEvent, Error, HistorySummary, HistoryWindow, RankedUser, TOP_USERS_MAX, User, UserId,
    summarise, with_ranks,
};

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user repository unavailable");
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            warn!(%message, "user repository query failed");
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Leaderboard service implementing [`LeaderboardQuery`].
#[derive(Clone)]
pub struct LeaderboardService {
    users: Arc<dyn UserRepository>,
    ledger: Arc<dyn ClaimLedger>,
    clock: Arc<dyn Clock>,
}

impl LeaderboardService {
    /// Create a query service over the user and claim stores.
    pub fn new(
        users: Arc<dyn UserRepository>,
        ledger: Arc<dyn ClaimLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            ledger,
            clock,
        }
    }

    async fn require_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))
    }
}

#[async_trait]
impl LeaderboardQuery for LeaderboardService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list_ranked(None)
            .await
            .map_err(map_user_persistence_error)
    }

    async fn top_users(&self, limit: usize) -> Result<Vec<RankedUser>, Error> {
        if !(1..=TOP_USERS_MAX).contains(&limit) {
            return Err(Error::invalid_request(format!(
                "limit must be between 1 and {TOP_USERS_MAX}"
            ))
            .with_details(serde_json::json!({ "field": "limit" })));
        }
        let users = self
            .users
            .list_ranked(Some(limit))
            .await
            .map_err(map_user_persistence_error)?;
        Ok(with_ranks(users))
    }

    async fn list_history(&self, user_id: &UserId) -> Result<Vec<ClaimEvent>, Error> {
        self.require_user(user_id).await?;
        self.ledger
            .list_for_user(user_id)
            .await
            .map_err(map_ledger_error)
    }

    async fn history_summary(
        &self,
        user_id: &UserId,
        window: HistoryWindow,
    ) -> Result<HistorySummary, Error> {
        let events = self.list_history(user_id).await?;
        Ok(summarise(&events, window, self.clock.utc()))
    }
}

#[cfg(test)]
#[path = "leaderboard_service_tests.rs"]
mod tests;
