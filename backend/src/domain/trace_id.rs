//! Correlation identifier for one HTTP request.
//!
//! The [`Trace`](crate::Trace) middleware installs a fresh [`TraceId`] in
//! task-local storage; error constructors and claim logging read it back
//! with [`TraceId::current`]. Task locals do not follow `tokio::spawn`, so
//! spawned work re-enters [`TraceId::scope`] when it needs the identifier.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Request correlation identifier, rendered as a hyphenated UUID.
///
/// ```
/// use leaderboard::TraceId;
///
/// async fn log_claim() {
///     let trace_id = TraceId::current().map(|id| id.to_string()).unwrap_or_default();
///     tracing::info!(%trace_id, "claim recorded");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    ///
    /// ```
    /// use leaderboard::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let trace_id: TraceId = "6f1c2a4e-8d3b-4c55-9a10-2b7e5d9c0f31".parse().expect("uuid");
    /// let seen = TraceId::scope(trace_id, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
