//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (users,
//! claims, history, leaderboard, feed and health) together with the domain
//! schemas they exchange. The document backs Swagger UI in debug builds and
//! is exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{
    ClaimEvent, ClaimNotice, Error, ErrorCode, HistorySummary, HistoryWindow, RankedUser, User,
};
use crate::inbound::http::claims::{ClaimRequest, ClaimResponse};
use crate::inbound::http::users::{AddUserRequest, AddUserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leaderboard backend API",
        description = "Users claim random points and compete on a shared leaderboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::add_user,
        crate::inbound::http::claims::claim,
        crate::inbound::http::history::list_history,
        crate::inbound::http::history::history_summary,
        crate::inbound::http::leaderboard::top_users,
        crate::inbound::ws::claims_feed,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        RankedUser,
        ClaimEvent,
        ClaimNotice,
        HistorySummary,
        HistoryWindow,
        Error,
        ErrorCode,
        AddUserRequest,
        AddUserResponse,
        ClaimRequest,
        ClaimResponse,
    )),
    tags(
        (name = "users", description = "Registering and listing users"),
        (name = "claims", description = "Claiming points and the live claim feed"),
        (name = "history", description = "Per-user claim history"),
        (name = "leaderboard", description = "Ranked views of the leaderboard"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
