//! HTTP inbound adapter exposing REST endpoints.

pub mod claims;
pub mod error;
pub mod health;
pub mod history;
pub mod leaderboard;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::{ApiResult, json_config, path_config, query_config};
