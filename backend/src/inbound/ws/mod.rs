//! WebSocket inbound adapter pushing claim notices to clients.
//!
//! Responsibilities:
//! - upgrade `/ws/claims` requests and subscribe them to the claim notifier
//! - run one feed session per connection on the actix runtime
//! - keep WebSocket-specific concerns at the edge of the system

use actix_web::web::{self, Payload};
use actix_web::{HttpRequest, HttpResponse, get};
use tracing::{debug, error};

mod session;

pub mod messages;
pub mod state;

/// Upgrade to a WebSocket streaming every committed claim.
///
/// Each text frame is a JSON [`messages::FeedMessage`], for example
/// `{"type":"claimRecorded","userId":"…","pointsClaimed":7,"totalPoints":19,"timestamp":"…"}`.
#[utoipa::path(
    get,
    path = "/ws/claims",
    tags = ["claims"],
    responses(
        (status = 101, description = "Switching protocols to the claim feed"),
        (status = 400, description = "Not a WebSocket upgrade request")
    ),
    operation_id = "claimFeed"
)]
#[get("/ws/claims")]
pub async fn claims_feed(
    state: web::Data<state::WsState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, messages) = actix_ws::handle(&req, stream).map_err(|error| {
        error!(error = %error, "claim feed upgrade failed");
        error
    })?;

    // Subscribe before answering so no notice committed after the upgrade is missed.
    let notices = state.notifier.subscribe();
    debug!("claim feed subscriber connected");
    actix_web::rt::spawn(session::handle_feed_session(notices, session, messages));
    Ok(response)
}
