//! Shared wiring for integration tests.
//!
//! Builds the production services over the in-memory store with a seeded
//! random source and a clock that advances one second per reading, so claim
//! timestamps are strictly increasing.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use leaderboard::Trace;
use leaderboard::domain::ports::ClaimNotifier;
use leaderboard::domain::{ClaimService, LeaderboardService, RegistrationService};
use leaderboard::inbound::http::claims::claim;
use leaderboard::inbound::http::history::{history_summary, list_history};
use leaderboard::inbound::http::leaderboard::top_users;
use leaderboard::inbound::http::state::HttpState;
use leaderboard::inbound::http::users::{add_user, list_users};
use leaderboard::inbound::http::{json_config, path_config, query_config};
use leaderboard::inbound::ws;
use leaderboard::inbound::ws::state::WsState;
use leaderboard::outbound::memory::InMemoryStore;
use leaderboard::outbound::notifier::BroadcastClaimNotifier;
use leaderboard::outbound::points::RandomPointsSource;

/// Clock returning `start`, `start + 1s`, `start + 2s`, ...
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(
            Utc.with_ymd_and_hms(2025, 7, 21, 9, 30, 0)
                .single()
                .expect("valid start instant"),
        )
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

/// Adapter state over one shared in-memory store.
#[derive(Clone)]
pub struct TestStates {
    pub http: HttpState,
    pub ws: WsState,
    pub notifier: Arc<BroadcastClaimNotifier>,
}

pub fn memory_states(seed: u64) -> TestStates {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let store = Arc::new(InMemoryStore::new(clock.clone()));
    let notifier = Arc::new(BroadcastClaimNotifier::new(16));
    let notifier_port: Arc<dyn ClaimNotifier> = notifier.clone();

    let http = HttpState::new(
        Arc::new(ClaimService::new(
            store.clone(),
            Arc::new(RandomPointsSource::seeded(seed)),
            notifier_port.clone(),
        )),
        Arc::new(LeaderboardService::new(
            store.clone(),
            store.clone(),
            clock.clone(),
        )),
        Arc::new(RegistrationService::new(store, clock)),
    );

    TestStates {
        http,
        ws: WsState::new(notifier_port),
        notifier,
    }
}

/// Full application as served by the binary, minus docs and metrics.
pub fn leaderboard_app(
    states: TestStates,
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
        .app_data(web::Data::new(states.http))
        .app_data(web::Data::new(states.ws))
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(
            web::scope("/api")
                .service(list_users)
                .service(add_user)
                .service(claim)
                .service(list_history)
                .service(history_summary)
                .service(top_users),
        )
        .service(ws::claims_feed)
}
