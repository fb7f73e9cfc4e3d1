//! Windowed aggregate statistics over a user's claim history.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ClaimEvent;

/// Time window applied to a history summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HistoryWindow {
    /// Every recorded claim.
    #[default]
    All,
    /// Claims less than one day old.
    Today,
    /// Claims less than seven days old.
    Week,
    /// Claims less than thirty days old.
    Month,
}

/// Raised when a window name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown history window `{0}`; expected all, today, week or month")]
pub struct UnknownHistoryWindow(pub String);

impl HistoryWindow {
    fn max_age(self) -> Option<Duration> {
        match self {
            Self::All => None,
            Self::Today => Some(Duration::days(1)),
            Self::Week => Some(Duration::days(7)),
            Self::Month => Some(Duration::days(30)),
        }
    }

    /// Whether a claim made at `at` falls inside the window ending at `now`.
    pub fn contains(self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.max_age().is_none_or(|max_age| now - at < max_age)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryWindow {
    type Err = UnknownHistoryWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(UnknownHistoryWindow(other.to_owned())),
        }
    }
}

/// Aggregate statistics for the claims inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub window: HistoryWindow,
    #[schema(example = 4)]
    pub claim_count: u64,
    #[schema(example = 23)]
    pub total_points: u64,
    /// Mean award rounded half up; zero when the window is empty.
    #[schema(example = 6)]
    pub average_points: u64,
    #[schema(example = 9)]
    pub best_claim: Option<u8>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_claimed_at: Option<DateTime<Utc>>,
}

/// Summarise `events` restricted to `window` as observed at `now`.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use leaderboard::domain::{HistoryWindow, summarise};
///
/// let summary = summarise(&[], HistoryWindow::Week, Utc::now());
/// assert_eq!(summary.claim_count, 0);
/// assert_eq!(summary.average_points, 0);
/// assert!(summary.best_claim.is_none());
/// ```
pub fn summarise(events: &[ClaimEvent], window: HistoryWindow, now: DateTime<Utc>) -> HistorySummary {
    let in_window = || {
        events
            .iter()
            .filter(move |event| window.contains(event.timestamp(), now))
    };

    let claim_count = u64::try_from(in_window().count()).unwrap_or(u64::MAX);
    let total_points: u64 = in_window()
        .map(|event| u64::from(event.points_claimed().get()))
        .sum();
    let average_points = total_points
        .saturating_mul(2)
        .saturating_add(claim_count)
        .checked_div(claim_count.saturating_mul(2))
        .unwrap_or(0);

    HistorySummary {
        window,
        claim_count,
        total_points,
        average_points,
        best_claim: in_window().map(|event| event.points_claimed().get()).max(),
        last_claimed_at: in_window().map(ClaimEvent::timestamp).max(),
    }
}
