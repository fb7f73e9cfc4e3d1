//! Claim handler.
//!
//! ```text
//! POST /api/claim {"userId":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClaimPoints, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{USER_ID_FIELD, missing_field_error, parse_user_id};

/// Request body for `POST /api/claim`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: Option<String>,
}

/// Points awarded by a claim.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ClaimResponse {
    #[schema(value_type = u8, minimum = 1, maximum = 10, example = 7)]
    pub points: ClaimPoints,
}

/// Award the user a random number of points between 1 and 10.
///
/// The user's total and claim history are updated atomically; the new total
/// is visible to every subsequent read.
#[utoipa::path(
    post,
    path = "/api/claim",
    request_body = ClaimRequest,
    responses(
        (status = 200, description = "Points awarded", body = ClaimResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["claims"],
    operation_id = "claimPoints"
)]
#[post("/claim")]
pub async fn claim(
    state: web::Data<HttpState>,
    payload: web::Json<ClaimRequest>,
) -> ApiResult<web::Json<ClaimResponse>> {
    let raw = payload
        .into_inner()
        .user_id
        .ok_or_else(|| missing_field_error(USER_ID_FIELD))?;
    let user_id = parse_user_id(&raw, USER_ID_FIELD)?;
    let outcome = state.claims.claim(&user_id).await?;
    Ok(web::Json(ClaimResponse {
        points: outcome.points,
    }))
}
