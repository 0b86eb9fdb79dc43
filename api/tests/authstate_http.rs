//! Fetches the auth state from a real HTTP server bound to an ephemeral port.

use api::{ApiError, AppConfig, AuthStateClient, AuthStateSource};
use axum::{http::StatusCode, routing::get, Router};
use shared::Integration;

/// Serve `router` on 127.0.0.1 and return its origin.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(origin: &str) -> AuthStateClient {
    AuthStateClient::new(&AppConfig::default().with_origin(origin)).unwrap()
}

#[tokio::test]
async fn fetches_snapshot() {
    let router = Router::new().route(
        "/api/authstate",
        get(|| async {
            (
                [("content-type", "application/json")],
                r#"{"fitbit":{"has_token":false,"client_id":"abc","redirect_uri":"https://x/cb","scopes":"activity"},"google":{"has_token":true}}"#,
            )
        }),
    );
    let origin = serve(router).await;

    let snapshot = client_for(&origin).fetch_auth_state().await.unwrap();

    assert!(!snapshot.is_authorized(Integration::Fitbit));
    assert!(snapshot.is_authorized(Integration::Google));
    let fitbit = snapshot.fitbit.unwrap();
    assert_eq!(fitbit.client_id.as_deref(), Some("abc"));
    assert_eq!(fitbit.redirect_uri.as_deref(), Some("https://x/cb"));
    assert_eq!(fitbit.scopes.as_deref(), Some("activity"));
}

#[tokio::test]
async fn server_error_is_reported() {
    let router = Router::new().route(
        "/api/authstate",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "config.json missing") }),
    );
    let origin = serve(router).await;

    let err = client_for(&origin).fetch_auth_state().await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "config.json missing");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_route_is_reported() {
    let origin = serve(Router::new()).await;

    let err = client_for(&origin).fetch_auth_state().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let router = Router::new().route("/api/authstate", get(|| async { "not json" }));
    let origin = serve(router).await;

    let err = client_for(&origin).fetch_auth_state().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn unreachable_server_is_reported() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}"))
        .fetch_auth_state()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
}
