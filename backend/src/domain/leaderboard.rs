//! Leaderboard ordering and ranked projections.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// Default number of users in the top performers list.
pub const TOP_USERS_DEFAULT: usize = 3;
/// Largest accepted top performers limit.
pub const TOP_USERS_MAX: usize = 100;

/// Leaderboard order: most points first, then oldest registration, then id.
pub fn leaderboard_order(a: &User, b: &User) -> Ordering {
    b.total_points()
        .cmp(&a.total_points())
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Sort users into leaderboard order in place.
pub fn rank_users(users: &mut [User]) {
    users.sort_by(leaderboard_order);
}

/// A user together with their 1-based leaderboard position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    #[schema(example = 1)]
    pub rank: u32,
    #[serde(flatten)]
    pub user: User,
}

/// Attach 1-based ranks to users already in leaderboard order.
pub fn with_ranks(users: Vec<User>) -> Vec<RankedUser> {
    users
        .into_iter()
        .zip(1..)
        .map(|(user, rank)| RankedUser { rank, user })
        .collect()
}
