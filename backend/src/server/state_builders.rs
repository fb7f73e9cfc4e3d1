//! Builders wiring domain services onto the configured storage adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use leaderboard::domain::ports::{ClaimLedger, ClaimNotifier, UserRepository};
use leaderboard::domain::{ClaimService, LeaderboardService, RegistrationService};
use leaderboard::inbound::http::state::HttpState;
use leaderboard::inbound::ws::state::WsState;
use leaderboard::outbound::memory::InMemoryStore;
use leaderboard::outbound::notifier::BroadcastClaimNotifier;
use leaderboard::outbound::persistence::{DbPool, DieselClaimLedger, DieselUserRepository};
use leaderboard::outbound::points::RandomPointsSource;

use super::ServerConfig;

/// Adapter state shared by every worker.
#[derive(Clone)]
pub(crate) struct AppStates {
    pub(crate) http: web::Data<HttpState>,
    pub(crate) ws: web::Data<WsState>,
}

fn build_storage(
    pool: Option<&DbPool>,
    clock: &Arc<dyn Clock>,
) -> (Arc<dyn UserRepository>, Arc<dyn ClaimLedger>) {
    match pool {
        Some(pool) => {
            info!("using PostgreSQL storage");
            let users: Arc<dyn UserRepository> = Arc::new(DieselUserRepository::new(pool.clone()));
            let ledger: Arc<dyn ClaimLedger> =
                Arc::new(DieselClaimLedger::new(pool.clone(), clock.clone()));
            (users, ledger)
        }
        None => {
            info!("no database configured; using in-memory storage");
            let store = Arc::new(InMemoryStore::new(clock.clone()));
            let users: Arc<dyn UserRepository> = store.clone();
            let ledger: Arc<dyn ClaimLedger> = store;
            (users, ledger)
        }
    }
}

/// Build HTTP and WebSocket state from the server configuration.
pub(crate) fn build_states(config: &ServerConfig) -> AppStates {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let (users, ledger) = build_storage(config.db_pool.as_ref(), &clock);
    let notifier: Arc<dyn ClaimNotifier> =
        Arc::new(BroadcastClaimNotifier::new(config.feed_capacity));

    let claims = ClaimService::new(
        ledger.clone(),
        Arc::new(RandomPointsSource::default()),
        notifier.clone(),
    );
    let queries = LeaderboardService::new(users.clone(), ledger, clock.clone());
    let registration = RegistrationService::new(users, clock);

    AppStates {
        http: web::Data::new(HttpState::new(
            Arc::new(claims),
            Arc::new(queries),
            Arc::new(registration),
        )),
        ws: web::Data::new(WsState::new(notifier)),
    }
}
