//! Shared helpers for unit tests inside the crate.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{ClaimPoints, User, UserId, UserName};

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixtureClock {
    pub(crate) utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Instant every fixture clock reports unless told otherwise.
pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 21, 9, 30, 0)
        .single()
        .expect("fixture timestamp is valid")
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn points(value: u8) -> ClaimPoints {
    ClaimPoints::new(value).expect("fixture points in range")
}

/// Registered user with `total` points already credited.
pub(crate) fn user_with_points(name: &str, total: u64) -> User {
    User::restore(
        UserId::random(),
        UserName::new(name).expect("fixture name is valid"),
        crate::domain::TotalPoints::new(total),
        fixture_timestamp(),
    )
}
