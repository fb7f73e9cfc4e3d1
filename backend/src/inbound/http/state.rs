//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ClaimCommand, LeaderboardQuery, UserRegistration};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub claims: Arc<dyn ClaimCommand>,
    pub leaderboard: Arc<dyn LeaderboardQuery>,
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use leaderboard::domain::{ClaimService, LeaderboardService, RegistrationService};
    /// use leaderboard::inbound::http::state::HttpState;
    /// use leaderboard::outbound::memory::InMemoryStore;
    /// use leaderboard::outbound::notifier::BroadcastClaimNotifier;
    /// use leaderboard::outbound::points::RandomPointsSource;
    /// use mockable::{Clock, DefaultClock};
    ///
    /// let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    /// let store = Arc::new(InMemoryStore::new(clock.clone()));
    /// let state = HttpState::new(
    ///     Arc::new(ClaimService::new(
    ///         store.clone(),
    ///         Arc::new(RandomPointsSource::default()),
    ///         Arc::new(BroadcastClaimNotifier::new(16)),
    ///     )),
    ///     Arc::new(LeaderboardService::new(store.clone(), store.clone(), clock.clone())),
    ///     Arc::new(RegistrationService::new(store, clock)),
    /// );
    /// # let _ = state;
    /// ```
    pub fn new(
        claims: Arc<dyn ClaimCommand>,
        leaderboard: Arc<dyn LeaderboardQuery>,
        registration: Arc<dyn UserRegistration>,
    ) -> Self {
        Self {
            claims,
            leaderboard,
            registration,
        }
    }
}
