//! Claim notifier backed by a tokio broadcast channel.

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::ClaimNotice;
use crate::domain::ports::ClaimNotifier;

/// Fan-out of claim notices to WebSocket subscribers.
#[derive(Debug, Clone)]
pub struct BroadcastClaimNotifier {
    sender: broadcast::Sender<ClaimNotice>,
}

impl BroadcastClaimNotifier {
    /// Create a notifier buffering up to `capacity` notices per subscriber.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }
}

impl ClaimNotifier for BroadcastClaimNotifier {
    fn publish(&self, notice: ClaimNotice) {
        if let Ok(receivers) = self.sender.send(notice) {
            debug!(receivers, "claim notice broadcast");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<ClaimNotice> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TotalPoints, UserId};
    use crate::test_support::{fixture_timestamp, points};
    use rstest::rstest;

    fn notice(value: u8) -> ClaimNotice {
        ClaimNotice {
            user_id: UserId::random(),
            points_claimed: points(value),
            total_points: TotalPoints::new(u64::from(value)),
            timestamp: fixture_timestamp(),
        }
    }

    #[rstest]
    fn publishing_without_subscribers_is_silent() {
        BroadcastClaimNotifier::new(4).publish(notice(1));
    }

    #[rstest]
    #[tokio::test]
    async fn subscribers_receive_later_notices() {
        let notifier = BroadcastClaimNotifier::new(4);
        notifier.publish(notice(1));
        let mut receiver = notifier.subscribe();
        notifier.publish(notice(2));

        let received = receiver.recv().await.expect("notice delivered");
        assert_eq!(received.points_claimed.get(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn lagging_subscribers_skip_missed_notices() {
        let notifier = BroadcastClaimNotifier::new(1);
        let mut receiver = notifier.subscribe();
        notifier.publish(notice(1));
        notifier.publish(notice(2));

        assert!(matches!(
            receiver.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
        let received = receiver.recv().await.expect("latest notice kept");
        assert_eq!(received.points_claimed.get(), 2);
    }
}
