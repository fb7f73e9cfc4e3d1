//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! POST /api/add-user {"name":"Alice"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{NAME_FIELD, missing_field_error};

/// Confirmation message returned by `POST /api/add-user`.
pub const USER_CREATED_MESSAGE: &str = "User created";

/// Request body for `POST /api/add-user`.
///
/// Example JSON: `{"name":"Alice"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    #[schema(value_type = String, example = "Alice")]
    pub name: Option<String>,
}

/// Response body for `POST /api/add-user`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddUserResponse {
    #[schema(example = "User created")]
    pub message: String,
    pub user: User,
}

/// List every user, highest total first.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use leaderboard::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users in leaderboard order", body = [User]),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.leaderboard.list_users().await?;
    Ok(web::Json(users))
}

/// Register a user with zero points.
#[utoipa::path(
    post,
    path = "/api/add-user",
    request_body = AddUserRequest,
    responses(
        (status = 200, description = "User created", body = AddUserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/add-user")]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<AddUserRequest>,
) -> ApiResult<web::Json<AddUserResponse>> {
    let name = payload
        .into_inner()
        .name
        .ok_or_else(|| missing_field_error(NAME_FIELD))?;
    let user = state.registration.register(&name).await?;
    Ok(web::Json(AddUserResponse {
        message: USER_CREATED_MESSAGE.to_owned(),
        user,
    }))
}
