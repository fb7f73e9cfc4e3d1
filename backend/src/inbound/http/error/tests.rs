//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}))
}

async fn body_json(error: &Error) -> Value {
    let response = error.error_response();
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: Error) {
    let response = internal_error.error_response();
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(TRACE_ID)
    );

    let body = body_json(&internal_error).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "name"}));
    let response = error.error_response();
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = body_json(&error).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "bad");
    assert_eq!(body["details"]["field"], "name");
}

#[rstest]
#[case("missing field `name` at line 1 column 2", Some("name"))]
#[case("unknown field `nmae`, expected `name`", Some("nmae"))]
#[case("expected value at line 1 column 1", None)]
fn offending_field_extracts_serde_field(#[case] message: &str, #[case] expected: Option<&str>) {
    assert_eq!(offending_field(message), expected);
}

#[derive(Debug, Deserialize)]
struct NamedBody {
    #[expect(dead_code, reason = "deserialisation target only")]
    name: String,
}

async fn accept_named(_body: web::Json<NamedBody>) -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[rstest]
#[case(r#"{}"#, Some("missing_field"))]
#[case(r#"{"name": 7}"#, None)]
#[case("not json", None)]
#[actix_web::test]
async fn json_extractor_failures_become_invalid_request(
    #[case] payload: &'static str,
    #[case] reason: Option<&'static str>,
) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(accept_named)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    if let Some(reason) = reason {
        assert_eq!(body["details"]["field"], "name");
        assert_eq!(body["details"]["code"], reason);
    }
}

#[rstest]
#[actix_web::test]
async fn non_json_content_type_is_rejected() {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(accept_named)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "text/plain"))
        .set_payload("name=Ada")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "request body must be application/json");
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    #[expect(dead_code, reason = "deserialisation target only")]
    limit: u32,
}

async fn accept_limit(_query: web::Query<LimitQuery>) -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[rstest]
#[actix_web::test]
async fn query_extractor_failures_become_invalid_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(query_config())
            .route("/", web::get().to(accept_limit)),
    )
    .await;
    let request = actix_test::TestRequest::get()
        .uri("/?limit=many")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}
