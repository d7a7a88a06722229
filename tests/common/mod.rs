use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use team_api::{router, TeamStore};
use tower::ServiceExt;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "Secret123";

/// A fresh in-memory database with the schema and one known user.
pub async fn test_app() -> (Router, TeamStore) {
    // One connection, otherwise every pooled connection gets its own memory db
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let store = TeamStore::new(pool);
    store.create_schema().await.unwrap();

    sqlx::query(r#"INSERT INTO "user" (name, password) VALUES (?, ?)"#)
        .bind(USERNAME)
        .bind(PASSWORD)
        .execute(store.pool())
        .await
        .unwrap();

    (router(store.clone()), store)
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

pub fn valid_auth() -> String {
    basic_auth(USERNAME, PASSWORD)
}

pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> RawResponse {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        request = request.header(header::AUTHORIZATION, auth);
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    RawResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Sends a request and parses the body as JSON (non-JSON bodies come back
/// as a JSON string).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send_raw(app, method, uri, auth, body).await;
    let json = if response.body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&response.body).unwrap_or(Value::String(response.body))
    };

    (response.status, json)
}

pub fn hawks() -> Value {
    serde_json::json!({
        "name": "Hawks",
        "city": "Atlanta",
        "league": "NBA",
        "division": "Southeast"
    })
}
