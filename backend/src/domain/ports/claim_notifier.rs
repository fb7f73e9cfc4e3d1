//! Port fanning committed claims out to live subscribers.

use tokio::sync::broadcast;

use crate::domain::ClaimNotice;

/// Publish/subscribe channel for [`ClaimNotice`]s.
///
/// Publishing never blocks and never fails the claim that produced the
/// notice. Subscribers that fall behind skip the notices they missed.
#[cfg_attr(test, mockall::automock)]
pub trait ClaimNotifier: Send + Sync {
    /// Broadcast a committed claim.
    fn publish(&self, notice: ClaimNotice);

    /// Receive every notice published after this call.
    fn subscribe(&self) -> broadcast::Receiver<ClaimNotice>;
}

/// Notifier that drops every notice; subscribers observe a closed channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClaimNotifier;

impl ClaimNotifier for FixtureClaimNotifier {
    fn publish(&self, _notice: ClaimNotice) {}

    fn subscribe(&self) -> broadcast::Receiver<ClaimNotice> {
        let (_sender, receiver) = broadcast::channel(1);
        receiver
    }
}
