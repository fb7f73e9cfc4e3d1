//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed leaderboard entities used by the API and
//! persistence layers, plus the services implementing the driving ports.
//! Types are immutable; invariants and serialisation contracts are
//! documented on each type.
//!
//! Public surface:
//! - `User`, `UserId`, `UserName`, `TotalPoints`: leaderboard participants.
//! - `ClaimEvent`, `ClaimPoints`, `ClaimNotice`: the claim ledger.
//! - `HistorySummary`, `HistoryWindow`: windowed history statistics.
//! - `Error`, `ErrorCode`: transport agnostic failures.
//! - `ClaimService`, `LeaderboardService`, `RegistrationService`: use-cases.

pub mod claim;
mod claim_service;
pub mod error;
pub mod history_summary;
pub mod leaderboard;
mod leaderboard_service;
pub mod ports;
mod registration_service;
pub mod trace_id;
pub mod user;

pub use self::claim::{
    CLAIM_POINTS_MAX, CLAIM_POINTS_MIN, ClaimEvent, ClaimEventId, ClaimNotice, ClaimPoints,
    ClaimValidationError, PendingClaim, sort_newest_first,
};
pub use self::claim_service::ClaimService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::history_summary::{HistorySummary, HistoryWindow, UnknownHistoryWindow, summarise};
pub use self::leaderboard::{
    RankedUser, TOP_USERS_DEFAULT, TOP_USERS_MAX, leaderboard_order, rank_users, with_ranks,
};
pub use self::leaderboard_service::LeaderboardService;
pub use self::registration_service::RegistrationService;
pub use self::trace_id::TraceId;
pub use self::user::{TotalPoints, USER_NAME_MAX, User, UserId, UserName, UserValidationError};
