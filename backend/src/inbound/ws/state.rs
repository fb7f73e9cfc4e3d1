//! Shared WebSocket adapter state.
//!
//! The feed endpoint depends on the `ClaimNotifier` port rather than a
//! concrete channel, so tests can drive it with any notifier.

use std::sync::Arc;

use crate::domain::ports::ClaimNotifier;

/// Dependency bundle for WebSocket handlers.
#[derive(Clone)]
pub struct WsState {
    pub notifier: Arc<dyn ClaimNotifier>,
}

impl WsState {
    /// Construct state from explicit port implementations.
    pub fn new(notifier: Arc<dyn ClaimNotifier>) -> Self {
        Self { notifier }
    }
}
