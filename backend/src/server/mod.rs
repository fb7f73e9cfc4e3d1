//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{AppStates, build_states};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use leaderboard::Trace;
#[cfg(debug_assertions)]
use leaderboard::doc::ApiDoc;
use leaderboard::inbound::http::claims::claim;
use leaderboard::inbound::http::health::{HealthState, live, ready};
use leaderboard::inbound::http::history::{history_summary, list_history};
use leaderboard::inbound::http::leaderboard::top_users;
use leaderboard::inbound::http::users::{add_user, list_users};
use leaderboard::inbound::http::{json_config, path_config, query_config};
use leaderboard::inbound::ws;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    states: AppStates,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_users)
        .service(add_user)
        .service(claim)
        .service(list_history)
        .service(history_summary)
        .service(top_users);

    let app = App::new()
        .app_data(health_state)
        .app_data(states.http)
        .app_data(states.ws)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(api)
        .service(ws::claims_feed)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let states = build_states(&config);
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
        ..
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = match prometheus {
        Some(prometheus) => prometheus,
        None => metrics::make_metrics().map_err(std::io::Error::other)?,
    };

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), states.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
