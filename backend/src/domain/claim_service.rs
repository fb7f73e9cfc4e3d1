//! Claim use-case: draw an award, credit it atomically and announce it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    ClaimCommand, ClaimLedger, ClaimLedgerError, ClaimNotifier, ClaimOutcome, PointsSource,
    RecordedClaim,
};
use crate::domain::{ClaimNotice, Error, PendingClaim, TraceId, UserId};

pub(crate) fn map_ledger_error(error: ClaimLedgerError) -> Error {
    match error {
        ClaimLedgerError::UnknownUser { user_id } => {
            Error::not_found(format!("user {user_id} not found"))
        }
        ClaimLedgerError::Connection { message } => {
            warn!(%message, "claim ledger unavailable");
            Error::service_unavailable(format!("claim ledger unavailable: {message}"))
        }
        ClaimLedgerError::Query { message } => {
            warn!(%message, "claim ledger query failed");
            Error::internal(format!("claim ledger error: {message}"))
        }
    }
}

/// Claim service implementing [`ClaimCommand`].
#[derive(Clone)]
pub struct ClaimService {
    ledger: Arc<dyn ClaimLedger>,
    points: Arc<dyn PointsSource>,
    notifier: Arc<dyn ClaimNotifier>,
}

impl ClaimService {
    /// Create a claim service. Timestamps come from the ledger, which stamps
    /// each claim as it commits.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// use leaderboard::domain::ClaimService;
    /// use leaderboard::outbound::memory::InMemoryStore;
    /// use leaderboard::outbound::notifier::BroadcastClaimNotifier;
    /// use leaderboard::outbound::points::RandomPointsSource;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let service = ClaimService::new(
    ///     store,
    ///     Arc::new(RandomPointsSource::default()),
    ///     Arc::new(BroadcastClaimNotifier::new(16)),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(
        ledger: Arc<dyn ClaimLedger>,
        points: Arc<dyn PointsSource>,
        notifier: Arc<dyn ClaimNotifier>,
    ) -> Self {
        Self {
            ledger,
            points,
            notifier,
        }
    }
}

#[async_trait]
impl ClaimCommand for ClaimService {
    async fn claim(&self, user_id: &UserId) -> Result<ClaimOutcome, Error> {
        let points = self.points.draw();
        let RecordedClaim { user, event } = self
            .ledger
            .record_claim(PendingClaim::new(*user_id, points))
            .await
            .map_err(map_ledger_error)?;

        let trace_id = TraceId::current()
            .map(|id| id.to_string())
            .unwrap_or_default();
        info!(
            user_id = %user_id,
            points = points.get(),
            total_points = user.total_points().get(),
            %trace_id,
            "claim recorded"
        );

        self.notifier.publish(ClaimNotice {
            user_id: *user_id,
            points_claimed: points,
            total_points: user.total_points(),
            timestamp: event.timestamp(),
        });

        Ok(ClaimOutcome {
            points,
            user,
            event,
        })
    }
}

#[cfg(test)]
#[path = "claim_service_tests.rs"]
mod tests;
