//! Top performers handler.
//!
//! ```text
//! GET /api/leaderboard/top?limit=3
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, RankedUser, TOP_USERS_DEFAULT};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /api/leaderboard/top`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopUsersQuery {
    /// Number of users to return, 1 to 100. Defaults to 3.
    #[param(minimum = 1, maximum = 100, example = 3)]
    pub limit: Option<usize>,
}

/// The highest-ranked users with 1-based ranks.
#[utoipa::path(
    get,
    path = "/api/leaderboard/top",
    params(TopUsersQuery),
    responses(
        (status = 200, description = "Top users", body = [RankedUser]),
        (status = 400, description = "Limit out of range", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["leaderboard"],
    operation_id = "topUsers"
)]
#[get("/leaderboard/top")]
pub async fn top_users(
    state: web::Data<HttpState>,
    query: web::Query<TopUsersQuery>,
) -> ApiResult<web::Json<Vec<RankedUser>>> {
    let limit = query.limit.unwrap_or(TOP_USERS_DEFAULT);
    let ranked = state.leaderboard.top_users(limit).await?;
    Ok(web::Json(ranked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockClaimCommand, MockLeaderboardQuery, MockUserRegistration};
    use crate::domain::with_ranks;
    use crate::inbound::http::test_utils::{api_app, memory_state};
    use crate::test_support::{points, user_with_points};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    fn state_expecting(limit: usize) -> HttpState {
        let ranked = with_ranks(vec![
            user_with_points("Carol", 30),
            user_with_points("Alice", 20),
        ]);
        let mut leaderboard = MockLeaderboardQuery::new();
        leaderboard
            .expect_top_users()
            .with(eq(limit))
            .times(1)
            .return_once(move |_| Ok(ranked));
        HttpState::new(
            Arc::new(MockClaimCommand::new()),
            Arc::new(leaderboard),
            Arc::new(MockUserRegistration::new()),
        )
    }

    #[rstest]
    #[case("/api/leaderboard/top", TOP_USERS_DEFAULT)]
    #[case("/api/leaderboard/top?limit=2", 2)]
    #[actix_web::test]
    async fn forwards_limit_and_returns_ranks(#[case] uri: &str, #[case] limit: usize) {
        let app = actix_test::init_service(api_app(state_expecting(limit))).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body[0]["rank"], 1);
        assert_eq!(body[0]["name"], "Carol");
        assert_eq!(body[0]["totalPoints"], 30);
        assert_eq!(body[1]["rank"], 2);
    }

    #[rstest]
    #[case("/api/leaderboard/top?limit=0")]
    #[case("/api/leaderboard/top?limit=101")]
    #[case("/api/leaderboard/top?limit=many")]
    #[actix_web::test]
    async fn rejects_bad_limits(#[case] uri: &str) {
        let app = actix_test::init_service(api_app(memory_state(points(1)))).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
    }
}
