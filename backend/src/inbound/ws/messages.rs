//! Wire-level message definitions for the claim feed.
//!
//! Domain notices are transformed into these payloads before being
//! serialised to JSON and sent to connected clients.

use serde::{Deserialize, Serialize};

use crate::domain::ClaimNotice;

/// Frame pushed to feed subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FeedMessage {
    /// A claim was committed.
    ClaimRecorded(ClaimNotice),
    /// The subscriber fell behind and `skipped` notices were dropped.
    FeedLagged { skipped: u64 },
}

impl From<ClaimNotice> for FeedMessage {
    fn from(value: ClaimNotice) -> Self {
        Self::ClaimRecorded(value)
    }
}
