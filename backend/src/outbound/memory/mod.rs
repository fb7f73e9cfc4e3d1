//! In-memory store backing both user and claim ports.
//!
//! Used when no database URL is configured and by tests. A single mutex
//! guards both collections so a claim's increment and its event append are
//! observed together. Claims are stamped while the mutex is held and events
//! are kept in append order, which breaks timestamp ties in history.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tokio::sync::Mutex;

use crate::domain::ports::{
    ClaimLedger, ClaimLedgerError, RecordedClaim, UserPersistenceError, UserRepository,
};
use crate::domain::{ClaimEvent, PendingClaim, User, UserId, rank_users, sort_newest_first};

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<UserId, User>,
    events: Vec<ClaimEvent>,
}

/// Process-local leaderboard store.
pub struct InMemoryStore {
    inner: Mutex<Collections>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    /// Empty store stamping claims with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Collections::default()),
            clock,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut guard = self.inner.lock().await;
        if guard.users.contains_key(user.id()) {
            return Err(UserPersistenceError::query(format!(
                "user {} already exists",
                user.id()
            )));
        }
        guard.users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.inner.lock().await.users.get(id).cloned())
    }

    async fn list_ranked(&self, limit: Option<usize>) -> Result<Vec<User>, UserPersistenceError> {
        let mut users: Vec<User> = self.inner.lock().await.users.values().cloned().collect();
        rank_users(&mut users);
        if let Some(limit) = limit {
            users.truncate(limit);
        }
        Ok(users)
    }
}

#[async_trait]
impl ClaimLedger for InMemoryStore {
    async fn record_claim(&self, claim: PendingClaim) -> Result<RecordedClaim, ClaimLedgerError> {
        let mut guard = self.inner.lock().await;
        let Some(user) = guard.users.remove(&claim.user_id) else {
            return Err(ClaimLedgerError::unknown_user(claim.user_id.to_string()));
        };
        let credited = user.credited(claim.points);
        let event = claim.stamp(self.clock.utc());
        guard.users.insert(*credited.id(), credited.clone());
        guard.events.push(event.clone());
        Ok(RecordedClaim {
            user: credited,
            event,
        })
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ClaimEvent>, ClaimLedgerError> {
        let mut events: Vec<ClaimEvent> = self
            .inner
            .lock()
            .await
            .events
            .iter()
            .rev()
            .filter(|event| event.user_id() == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut events);
        Ok(events)
    }
}
