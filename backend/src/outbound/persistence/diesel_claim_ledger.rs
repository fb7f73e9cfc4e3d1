//! PostgreSQL-backed `ClaimLedger`.
//!
//! A claim runs as one transaction: an in-place
//! `UPDATE users SET total_points = total_points + n ... RETURNING` followed
//! by the `INSERT` into `claim_events`. The row lock taken by the update
//! serialises concurrent claims for the same user, and a missing user rolls
//! the transaction back before anything is written.
//!
//! The event is stamped after the row lock is taken, and `claim_events.seq`
//! is drawn on insert, so for one user both follow commit order. History
//! reads order by `claimed_at` then `seq`, newest first.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use mockable::Clock;

use crate::domain::ports::{ClaimLedger, ClaimLedgerError, RecordedClaim};
use crate::domain::{ClaimEvent, PendingClaim, User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ClaimEventRow, NewClaimEventRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{claim_events, users};

/// Diesel implementation of the claim ledger.
#[derive(Clone)]
pub struct DieselClaimLedger {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselClaimLedger {
    /// Create a ledger over `pool` stamping claims with `clock`.
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

enum RecordFailure {
    UnknownUser,
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for RecordFailure {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn map_pool_error(error: PoolError) -> ClaimLedgerError {
    map_basic_pool_error(error, ClaimLedgerError::connection)
}

fn map_diesel_error(error: &diesel::result::Error) -> ClaimLedgerError {
    map_basic_diesel_error(error, ClaimLedgerError::query, ClaimLedgerError::connection)
}

#[async_trait]
impl ClaimLedger for DieselClaimLedger {
    async fn record_claim(&self, claim: PendingClaim) -> Result<RecordedClaim, ClaimLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let clock = Arc::clone(&self.clock);
        let user_uuid = *claim.user_id.as_uuid();
        let increment = i64::from(claim.points.get());

        let (row, event) = conn
            .transaction::<(UserRow, ClaimEvent), RecordFailure, _>(|conn| {
                async move {
                    let credited = diesel::update(users::table.find(user_uuid))
                        .set(users::total_points.eq(users::total_points + increment))
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await
                        .optional()?;
                    let Some(credited) = credited else {
                        return Err(RecordFailure::UnknownUser);
                    };

                    let event = claim.stamp(clock.utc());
                    diesel::insert_into(claim_events::table)
                        .values(NewClaimEventRow::from(&event))
                        .execute(conn)
                        .await?;

                    Ok((credited, event))
                }
                .scope_boxed()
            })
            .await
            .map_err(|failure| match failure {
                RecordFailure::UnknownUser => {
                    ClaimLedgerError::unknown_user(claim.user_id.to_string())
                }
                RecordFailure::Diesel(error) => map_diesel_error(&error),
            })?;

        let user = User::try_from(row).map_err(ClaimLedgerError::query)?;
        Ok(RecordedClaim { user, event })
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ClaimEvent>, ClaimLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ClaimEventRow> = claim_events::table
            .filter(claim_events::user_id.eq(*user_id.as_uuid()))
            .select(ClaimEventRow::as_select())
            .order_by((claim_events::claimed_at.desc(), claim_events::seq.desc()))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        rows.into_iter()
            .map(|row| ClaimEvent::try_from(row).map_err(ClaimLedgerError::query))
            .collect()
    }
}
