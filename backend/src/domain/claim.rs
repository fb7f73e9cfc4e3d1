//! Claim events: the append-only record of every points award.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{TotalPoints, UserId};

/// Smallest award a single claim may grant.
pub const CLAIM_POINTS_MIN: u8 = 1;
/// Largest award a single claim may grant.
pub const CLAIM_POINTS_MAX: u8 = 10;

/// Validation errors for claim values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimValidationError {
    /// The award fell outside the accepted range.
    #[error("claimed points must be between {min} and {max}, got {actual}")]
    PointsOutOfRange {
        /// Lower bound (inclusive).
        min: u8,
        /// Upper bound (inclusive).
        max: u8,
        /// Rejected value.
        actual: i64,
    },
}

/// Points awarded by a single claim, always within
/// [`CLAIM_POINTS_MIN`]..=[`CLAIM_POINTS_MAX`].
///
/// # Examples
/// ```
/// use leaderboard::domain::ClaimPoints;
///
/// assert_eq!(ClaimPoints::new(7).map(ClaimPoints::get), Ok(7));
/// assert!(ClaimPoints::new(0).is_err());
/// assert!(ClaimPoints::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ClaimPoints(u8);

impl ClaimPoints {
    /// Validate and wrap a claim value.
    pub fn new(value: impl Into<i64>) -> Result<Self, ClaimValidationError> {
        let value = value.into();
        match u8::try_from(value) {
            Ok(points) if (CLAIM_POINTS_MIN..=CLAIM_POINTS_MAX).contains(&points) => Ok(Self(points)),
            _ => Err(ClaimValidationError::PointsOutOfRange {
                min: CLAIM_POINTS_MIN,
                max: CLAIM_POINTS_MAX,
                actual: value,
            }),
        }
    }

    /// Clamp an arbitrary draw into the accepted range.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(CLAIM_POINTS_MIN, CLAIM_POINTS_MAX))
    }

    /// Raw value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<ClaimPoints> for u8 {
    fn from(value: ClaimPoints) -> Self {
        value.0
    }
}

impl TryFrom<i64> for ClaimPoints {
    type Error = ClaimValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ClaimPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a claim event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimEventId(Uuid);

impl ClaimEventId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read from a trusted store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ClaimEventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable record of one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEvent {
    #[schema(value_type = String, example = "0b6f7c1e-2d35-4a8e-9b4f-6f1f0e4b1c2d")]
    id: ClaimEventId,
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    user_id: UserId,
    #[schema(value_type = u8, minimum = 1, maximum = 10, example = 7)]
    points_claimed: ClaimPoints,
    #[schema(value_type = String, format = DateTime, example = "2025-07-21T09:30:00Z")]
    timestamp: DateTime<Utc>,
}

impl ClaimEvent {
    /// Build a claim event. The timestamp keeps microsecond precision, the
    /// resolution PostgreSQL stores.
    pub fn new(
        id: ClaimEventId,
        user_id: UserId,
        points_claimed: ClaimPoints,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            points_claimed,
            timestamp: timestamp.trunc_subsecs(6),
        }
    }

    /// Event identifier.
    pub fn id(&self) -> &ClaimEventId {
        &self.id
    }

    /// User the points were awarded to.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Points awarded.
    pub fn points_claimed(&self) -> ClaimPoints {
        self.points_claimed
    }

    /// Instant of the claim.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Display order for history: newest first.
///
/// The sort is stable, so events sharing a timestamp keep the order they
/// arrive in. Ledgers pass them most recently appended first.
pub fn sort_newest_first(events: &mut [ClaimEvent]) {
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// A claim whose award is drawn but not yet committed.
///
/// Ledgers stamp it with [`PendingClaim::stamp`] inside the unit of work
/// that credits the user, so timestamps follow commit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClaim {
    /// Identifier the committed event will carry.
    pub id: ClaimEventId,
    /// User to credit.
    pub user_id: UserId,
    /// Award to credit.
    pub points: ClaimPoints,
}

impl PendingClaim {
    /// Prepare a claim of `points` for `user_id` under a fresh identifier.
    pub fn new(user_id: UserId, points: ClaimPoints) -> Self {
        Self {
            id: ClaimEventId::random(),
            user_id,
            points,
        }
    }

    /// Fix the claim at `at`, producing the history record.
    pub fn stamp(self, at: DateTime<Utc>) -> ClaimEvent {
        ClaimEvent::new(self.id, self.user_id, self.points, at)
    }
}

/// Notice published to live subscribers after a claim is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimNotice {
    #[schema(value_type = String)]
    pub user_id: UserId,
    #[schema(value_type = u8)]
    pub points_claimed: ClaimPoints,
    #[schema(value_type = u64)]
    pub total_points: TotalPoints,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 21, 9, minute, 0)
            .single()
            .expect("valid timestamp")
    }

    fn event(minute: u32, points: u8) -> ClaimEvent {
        ClaimEvent::new(
            ClaimEventId::random(),
            UserId::random(),
            ClaimPoints::new(points).expect("in range"),
            at(minute),
        )
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(10)]
    fn accepts_values_in_range(#[case] value: i64) {
        assert!(ClaimPoints::new(value).is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(-1)]
    #[case(256)]
    fn rejects_values_out_of_range(#[case] value: i64) {
        let error = ClaimPoints::new(value).expect_err("out of range");
        assert_eq!(
            error,
            ClaimValidationError::PointsOutOfRange {
                min: 1,
                max: 10,
                actual: value
            }
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(7, 7)]
    #[case(200, 10)]
    fn clamped_stays_within_range(#[case] raw: u8, #[case] expected: u8) {
        assert_eq!(ClaimPoints::clamped(raw).get(), expected);
    }

    #[rstest]
    fn deserialising_points_validates_range() {
        assert!(serde_json::from_str::<ClaimPoints>("11").is_err());
        assert_eq!(
            serde_json::from_str::<ClaimPoints>("4").map(ClaimPoints::get).ok(),
            Some(4)
        );
    }

    #[rstest]
    fn sort_newest_first_orders_by_timestamp_descending() {
        let mut events = vec![event(0, 1), event(30, 2), event(15, 3)];
        sort_newest_first(&mut events);

        let points: Vec<u8> = events.iter().map(|e| e.points_claimed().get()).collect();
        assert_eq!(points, vec![2, 3, 1]);
        assert!(
            events
                .windows(2)
                .all(|pair| pair[0].timestamp() >= pair[1].timestamp())
        );
    }

    #[rstest]
    fn sort_newest_first_keeps_arrival_order_on_ties() {
        let mut events = vec![event(10, 2), event(0, 9), event(10, 1)];
        sort_newest_first(&mut events);

        let points: Vec<u8> = events.iter().map(|e| e.points_claimed().get()).collect();
        assert_eq!(points, vec![2, 1, 9]);
    }

    #[rstest]
    fn timestamps_drop_sub_microsecond_precision() {
        let precise = at(0) + chrono::Duration::nanoseconds(1_234_567);
        let stamped = PendingClaim::new(UserId::random(), ClaimPoints::clamped(3)).stamp(precise);

        assert_eq!(
            stamped.timestamp(),
            at(0) + chrono::Duration::microseconds(1_234)
        );
    }

    #[rstest]
    fn serialises_with_wire_field_names() {
        let claim = event(0, 7);
        let value = serde_json::to_value(&claim).expect("event serialises");
        assert_eq!(value.get("pointsClaimed"), Some(&serde_json::json!(7)));
        assert!(value.get("userId").is_some());
        assert!(value.get("timestamp").is_some());
    }
}
