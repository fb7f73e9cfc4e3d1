//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `ClaimLedger`, `PointsSource`,
//! `ClaimNotifier`) are implemented by outbound adapters. Driving ports
//! (`ClaimCommand`, `LeaderboardQuery`, `UserRegistration`) are implemented
//! by domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod claim_command;
mod claim_ledger;
mod claim_notifier;
mod leaderboard_query;
mod points_source;
mod user_registration;
mod user_repository;

pub use claim_command::{ClaimCommand, ClaimOutcome};
#[cfg(test)]
pub use claim_command::MockClaimCommand;
pub use claim_ledger::{ClaimLedger, ClaimLedgerError, RecordedClaim};
#[cfg(test)]
pub use claim_ledger::MockClaimLedger;
pub use claim_notifier::{ClaimNotifier, FixtureClaimNotifier};
#[cfg(test)]
pub use claim_notifier::MockClaimNotifier;
pub use leaderboard_query::LeaderboardQuery;
#[cfg(test)]
pub use leaderboard_query::MockLeaderboardQuery;
pub use points_source::{FixedPointsSource, PointsSource};
#[cfg(test)]
pub use points_source::MockPointsSource;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
