//! Claim feed session tests.

use super::*;
use crate::domain::ports::ClaimNotifier;
use crate::domain::{ClaimPoints, TotalPoints, UserId};
use crate::inbound::ws;
use crate::inbound::ws::state::WsState;
use crate::outbound::notifier::BroadcastClaimNotifier;
use crate::test_support::fixture_timestamp;
use actix_web::{App, HttpServer, dev::Server, dev::ServerHandle};
use awc::{BoxedSocket, ws::Codec, ws::Frame};
use futures_util::{SinkExt, StreamExt};
use rstest::{fixture, rstest};
use serde_json::Value;
use std::sync::Arc;

type Socket = actix_codec::Framed<BoxedSocket, Codec>;

#[fixture]
fn notifier() -> Arc<BroadcastClaimNotifier> {
    Arc::new(BroadcastClaimNotifier::new(16))
}

fn start_ws_server(notifier: Arc<BroadcastClaimNotifier>) -> (String, Server) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let ws_state = WsState::new(notifier);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(ws_state.clone()))
            .service(ws::claims_feed)
    })
    .listen(listener)
    .expect("bind test server")
    .disable_signals()
    .workers(1)
    .run();
    (format!("http://{addr}"), server)
}

async fn connect(notifier: Arc<BroadcastClaimNotifier>) -> (Socket, ServerHandle) {
    let (url, server) = start_ws_server(notifier);
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let (_resp, socket) = awc::Client::default()
        .ws(format!("{url}/ws/claims"))
        .connect()
        .await
        .expect("websocket connect");
    (socket, handle)
}

fn notice(points: u8, total: u64) -> ClaimNotice {
    ClaimNotice {
        user_id: UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .expect("static test UUID must be valid"),
        points_claimed: ClaimPoints::new(points).expect("points in range"),
        total_points: TotalPoints::new(total),
        timestamp: fixture_timestamp(),
    }
}

async fn next_text_frame(socket: &mut Socket) -> Value {
    loop {
        let frame = socket.next().await.expect("response frame").expect("frame");
        match frame {
            Frame::Text(bytes) => return serde_json::from_slice(&bytes).expect("json frame"),
            Frame::Ping(_) | Frame::Pong(_) => continue,
            other => panic!("expected text frame, got {other:?}"),
        }
    }
}

#[rstest]
#[actix_rt::test]
async fn forwards_published_notices_in_order(notifier: Arc<BroadcastClaimNotifier>) {
    let (mut socket, server) = connect(notifier.clone()).await;

    notifier.publish(notice(4, 4));
    notifier.publish(notice(9, 13));

    let first = next_text_frame(&mut socket).await;
    assert_eq!(first["type"], "claimRecorded");
    assert_eq!(first["pointsClaimed"], 4);
    assert_eq!(first["totalPoints"], 4);
    let second = next_text_frame(&mut socket).await;
    assert_eq!(second["pointsClaimed"], 9);
    assert_eq!(second["totalPoints"], 13);

    server.stop(false).await;
}

#[rstest]
#[actix_rt::test]
async fn answers_client_pings(notifier: Arc<BroadcastClaimNotifier>) {
    let (mut socket, server) = connect(notifier).await;
    socket
        .send(awc::ws::Message::Ping("hello".into()))
        .await
        .expect("send ping");

    loop {
        match socket.next().await.expect("frame").expect("frame") {
            Frame::Pong(payload) => {
                assert_eq!(payload.as_ref(), b"hello");
                break;
            }
            Frame::Ping(_) => continue,
            other => panic!("expected pong, got {other:?}"),
        }
    }

    server.stop(false).await;
}

#[rstest]
#[actix_rt::test]
async fn closes_after_timeout_without_client_messages(notifier: Arc<BroadcastClaimNotifier>) {
    use std::time::Duration;

    let (mut socket, _server) = connect(notifier).await;

    let reason = tokio::time::timeout(Duration::from_secs(2), async {
        while let Some(frame) = socket.next().await {
            match frame.expect("frame") {
                Frame::Ping(_) | Frame::Pong(_) => continue,
                Frame::Close(reason) => return reason,
                other => panic!("unexpected frame before close: {other:?}"),
            }
        }
        None
    })
    .await
    .expect("close frame missing within timeout")
    .expect("close reason present");

    assert_eq!(reason.code, CloseCode::Normal);
    assert_eq!(reason.description.as_deref(), Some("heartbeat timeout"));
}
