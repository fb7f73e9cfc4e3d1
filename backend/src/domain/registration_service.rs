//! User registration service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::leaderboard_service::map_user_persistence_error;
use crate::domain::ports::{UserRegistration, UserRepository};
use crate::domain::{Error, User, UserId, UserName};

/// Registration service implementing [`UserRegistration`].
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    /// Create a registration service over the user store.
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }
}

#[async_trait]
impl UserRegistration for RegistrationService {
    async fn register(&self, name: &str) -> Result<User, Error> {
        let name = UserName::new(name).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
        })?;
        let user = User::register(UserId::random(), name, self.clock.utc());

        self.users
            .create(&user)
            .await
            .map_err(map_user_persistence_error)?;

        info!(user_id = %user.id(), name = %user.name(), "user registered");
        Ok(user)
    }
}
