//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; conversions into domain types
//! re-validate every column so a corrupt row surfaces as a query error.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    ClaimEvent, ClaimEventId, ClaimPoints, TotalPoints, User, UserId, UserName,
};

use super::schema::{claim_events, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

/// Row inserted into `users`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

/// Row read from `claim_events`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = claim_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClaimEventRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub points_claimed: i16,
    pub claimed_at: DateTime<Utc>,
}

/// Row inserted into `claim_events`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = claim_events)]
pub(crate) struct NewClaimEventRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub points_claimed: i16,
    pub claimed_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let name = UserName::new(row.name).map_err(|err| format!("stored user name: {err}"))?;
        let total = u64::try_from(row.total_points)
            .map_err(|_| format!("stored total is negative: {}", row.total_points))?;
        Ok(User::restore(
            UserId::from_uuid(row.id),
            name,
            TotalPoints::new(total),
            row.created_at,
        ))
    }
}

impl TryFrom<ClaimEventRow> for ClaimEvent {
    type Error = String;

    fn try_from(row: ClaimEventRow) -> Result<Self, Self::Error> {
        let points = ClaimPoints::new(row.points_claimed)
            .map_err(|err| format!("stored claim points: {err}"))?;
        Ok(ClaimEvent::new(
            ClaimEventId::from_uuid(row.id),
            UserId::from_uuid(row.user_id),
            points,
            row.claimed_at,
        ))
    }
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            total_points: i64::try_from(user.total_points().get()).unwrap_or(i64::MAX),
            created_at: user.created_at(),
        }
    }
}

impl From<&ClaimEvent> for NewClaimEventRow {
    fn from(event: &ClaimEvent) -> Self {
        Self {
            id: *event.id().as_uuid(),
            user_id: *event.user_id().as_uuid(),
            points_claimed: i16::from(event.points_claimed().get()),
            claimed_at: event.timestamp(),
        }
    }
}
