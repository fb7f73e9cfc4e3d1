//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::claims::claim;
use super::error::{json_config, path_config, query_config};
use super::history::{history_summary, list_history};
use super::leaderboard::top_users;
use super::state::HttpState;
use super::users::{add_user, list_users};
use crate::domain::ports::{FixedPointsSource, FixtureClaimNotifier};
use crate::domain::{ClaimPoints, ClaimService, LeaderboardService, RegistrationService};
use crate::outbound::memory::InMemoryStore;
use crate::test_support::fixture_clock;

/// Services wired over a fresh in-memory store.
///
/// Every claim awards `points`, and the clock is pinned to the shared
/// fixture timestamp.
pub fn memory_state(points: ClaimPoints) -> HttpState {
    let clock = fixture_clock();
    let store = Arc::new(InMemoryStore::new(clock.clone()));
    HttpState::new(
        Arc::new(ClaimService::new(
            store.clone(),
            Arc::new(FixedPointsSource(points)),
            Arc::new(FixtureClaimNotifier),
        )),
        Arc::new(LeaderboardService::new(
            store.clone(),
            store.clone(),
            clock.clone(),
        )),
        Arc::new(RegistrationService::new(store, clock)),
    )
}

/// Application exposing every `/api` handler over `state`.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .service(list_users)
                .service(add_user)
                .service(claim)
                .service(list_history)
                .service(history_summary)
                .service(top_users),
        )
}
