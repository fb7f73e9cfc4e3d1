//! Per-connection claim feed handler.
//!
//! Forwards claim notices from the broadcast subscription to the client and
//! keeps framing and heartbeats at the edge. The public contract pings every
//! 5s and considers a connection idle after 10s without client traffic. Tests
//! shorten these intervals.

use std::time::{Duration, Instant};

use crate::domain::ClaimNotice;
use crate::inbound::ws::messages::FeedMessage;
use actix_ws::{CloseCode, CloseReason, Closed, Message, MessageStream, ProtocolError, Session};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time;
use tracing::{debug, warn};

/// Time between heartbeats to the client (5s in production, shorter in tests).
#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client (10s in production, shorter in tests).
#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(150);

pub(super) async fn handle_feed_session(
    notices: broadcast::Receiver<ClaimNotice>,
    session: Session,
    stream: MessageStream,
) {
    FeedSession::new(notices).run(session, stream).await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    FeedClosed,
    Protocol(ProtocolError),
    Network(Closed),
}

enum CloseAction {
    None,
    Close(Option<CloseReason>),
}

struct FeedSession {
    notices: broadcast::Receiver<ClaimNotice>,
}

impl FeedSession {
    fn new(notices: broadcast::Receiver<ClaimNotice>) -> Self {
        Self { notices }
    }

    async fn run(mut self, mut session: Session, mut stream: MessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    handle_heartbeat_tick(&mut session, &last_heartbeat).await
                }
                message = stream.recv() => {
                    handle_stream_message(&mut session, &mut last_heartbeat, message).await
                }
                notice = self.notices.recv() => {
                    handle_notice(&mut session, notice).await
                }
            };

            if let Err(error) = result {
                log_shutdown_reason(&error);
                close_session_if_needed(session, close_action_for(&error)).await;
                return;
            }
        }
    }
}

async fn handle_heartbeat_tick(
    session: &mut Session,
    last_heartbeat: &Instant,
) -> Result<(), SessionError> {
    if Instant::now().duration_since(*last_heartbeat) > CLIENT_TIMEOUT {
        return Err(SessionError::HeartbeatTimeout);
    }

    session.ping(b"").await.map_err(SessionError::Network)
}

async fn handle_stream_message(
    session: &mut Session,
    last_heartbeat: &mut Instant,
    message: Option<Result<Message, ProtocolError>>,
) -> Result<(), SessionError> {
    let Some(message) = message else {
        return Err(SessionError::StreamClosed);
    };

    match message {
        Ok(Message::Ping(payload)) => {
            *last_heartbeat = Instant::now();
            session.pong(&payload).await.map_err(SessionError::Network)
        }
        Ok(Message::Close(reason)) => Err(SessionError::ClientClosed(reason)),
        // The feed is push-only; any other client frame only proves liveness.
        Ok(_) => {
            *last_heartbeat = Instant::now();
            Ok(())
        }
        Err(error) => Err(SessionError::Protocol(error)),
    }
}

async fn handle_notice(
    session: &mut Session,
    notice: Result<ClaimNotice, RecvError>,
) -> Result<(), SessionError> {
    let message = match notice {
        Ok(notice) => FeedMessage::from(notice),
        Err(RecvError::Lagged(skipped)) => {
            debug!(skipped, "claim feed subscriber lagged");
            FeedMessage::FeedLagged { skipped }
        }
        Err(RecvError::Closed) => return Err(SessionError::FeedClosed),
    };
    send_json(session, &message)
        .await
        .map_err(SessionError::Network)
}

async fn send_json(session: &mut Session, payload: &FeedMessage) -> Result<(), Closed> {
    match serde_json::to_string(payload) {
        Ok(body) => session.text(body).await,
        Err(error) => {
            warn!(error = %error, "Failed to serialize claim feed payload");
            Ok(())
        }
    }
}

fn log_shutdown_reason(error: &SessionError) {
    match error {
        SessionError::HeartbeatTimeout => {
            warn!("claim feed heartbeat timeout; closing connection");
        }
        SessionError::Protocol(error) => {
            warn!(error = %error, "claim feed protocol error");
        }
        SessionError::Network(error) => {
            warn!(error = %error, "claim feed send failed; closing connection");
        }
        SessionError::FeedClosed => {
            debug!("claim notifier dropped; closing connection");
        }
        SessionError::ClientClosed(_) | SessionError::StreamClosed => {}
    }
}

fn close_action_for(error: &SessionError) -> CloseAction {
    match error {
        SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Normal,
            description: Some("heartbeat timeout".to_owned()),
        })),
        SessionError::FeedClosed => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Away,
            description: Some("feed closed".to_owned()),
        })),
        SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Protocol,
            description: Some("protocol error".to_owned()),
        })),
        SessionError::ClientClosed(reason) => CloseAction::Close(reason.clone()),
        SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
    }
}

async fn close_session_if_needed(session: Session, close_action: CloseAction) {
    if let CloseAction::Close(reason) = close_action {
        if let Err(error) = session.close(reason).await {
            warn!(error = %error, "Failed to close claim feed session");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
