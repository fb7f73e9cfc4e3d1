//! Driving port for registering new users.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Register a user with zero points.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate `name` and store a new user. Names need not be unique.
    async fn register(&self, name: &str) -> Result<User, Error>;
}
