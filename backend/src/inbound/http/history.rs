//! Claim history handlers.
//!
//! ```text
//! GET /api/history/{userId}
//! GET /api/history/{userId}/summary?window=week
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{ClaimEvent, Error, HistorySummary, HistoryWindow};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, USER_ID_FIELD, ValidationCode, field_error, parse_user_id,
};

const WINDOW_FIELD: FieldName = FieldName::new("window");

/// Query parameters for the history summary.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// One of `all`, `today`, `week` or `month`. Defaults to `all`.
    #[param(example = "week")]
    pub window: Option<String>,
}

fn parse_window(raw: Option<&str>) -> Result<HistoryWindow, Error> {
    raw.map_or(Ok(HistoryWindow::default()), |value| {
        value.parse().map_err(|err: crate::domain::UnknownHistoryWindow| {
            field_error(WINDOW_FIELD.as_str(), ValidationCode::InvalidValue, err.to_string())
        })
    })
}

/// A user's claims, newest first.
#[utoipa::path(
    get,
    path = "/api/history/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Claim history", body = [ClaimEvent]),
        (status = 400, description = "Invalid user id", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["history"],
    operation_id = "listHistory"
)]
#[get("/history/{userId}")]
pub async fn list_history(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ClaimEvent>>> {
    let user_id = parse_user_id(&path.into_inner(), USER_ID_FIELD)?;
    let events = state.leaderboard.list_history(&user_id).await?;
    Ok(web::Json(events))
}

/// Aggregate statistics over a user's claims inside a time window.
#[utoipa::path(
    get,
    path = "/api/history/{userId}/summary",
    params(("userId" = String, Path, description = "User identifier"), SummaryQuery),
    responses(
        (status = 200, description = "History summary", body = HistorySummary),
        (status = 400, description = "Invalid user id or window", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["history"],
    operation_id = "historySummary"
)]
#[get("/history/{userId}/summary")]
pub async fn history_summary(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<SummaryQuery>,
) -> ApiResult<web::Json<HistorySummary>> {
    let user_id = parse_user_id(&path.into_inner(), USER_ID_FIELD)?;
    let window = parse_window(query.window.as_deref())?;
    let summary = state.leaderboard.history_summary(&user_id, window).await?;
    Ok(web::Json(summary))
}
