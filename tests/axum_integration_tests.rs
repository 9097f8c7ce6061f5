#![cfg(feature = "axum")]

mod common;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    response::Response,
    routing::post,
};
use common::{legacy_session, test_engine};
use legacy_session_hook::{
    AuthResponse, HookEngine, SET_PERSISTENT_COOKIE_NODE, into_axum_error, into_axum_response,
};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

/// Stand-in for the host's "login complete" endpoint.
async fn complete_login(State(engine): State<Arc<HookEngine>>) -> Response {
    let session = legacy_session("SMSESSION=abc123", ".example.com");
    let mut response = AuthResponse::new(302)
        .with_header("location", "/console")
        .with_header("set-cookie", "iPlanetDirectoryPro=tok; Path=/");

    match engine.after_login(SET_PERSISTENT_COOKIE_NODE, &session, &mut response) {
        Ok(()) => into_axum_response(response),
        Err(err) => into_axum_error(err),
    }
}

fn create_test_router() -> Router {
    let (engine, _logger) = test_engine();
    Router::new()
        .route("/login/complete", post(complete_login))
        .with_state(Arc::new(engine))
}

#[tokio::test]
async fn test_login_response_carries_both_cookies() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login/complete")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/console"
    );

    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(
        cookies,
        vec![
            "iPlanetDirectoryPro=tok; Path=/".to_string(),
            "SMSESSION=abc123; Path=/; Domain=.example.com; secure; httpOnly;".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_relay_writes_directly_into_axum_headers() {
    let (engine, _logger) = test_engine();
    let session = legacy_session("abc123", "example.com");
    let mut response = Response::new(Body::empty());

    engine
        .after_login(SET_PERSISTENT_COOKIE_NODE, &session, response.headers_mut())
        .unwrap();

    assert_eq!(
        response.headers().get(header::SET_COOKIE).unwrap(),
        "abc123; Path=/; Domain=example.com; secure; httpOnly;"
    );
}
