#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tenancy_api::{routes::create_router, AppState, Config};
use tenancy_shared::{InMemoryDirectory, TenantDirectory};
use tower::ServiceExt;

/// App state over the seeded in-memory directory
pub fn demo_state() -> AppState {
    state_with(Arc::new(InMemoryDirectory::with_demo_tenants()))
}

pub fn state_with(directory: Arc<dyn TenantDirectory>) -> AppState {
    AppState::new(Config::default(), directory)
}

pub fn demo_app() -> Router {
    create_router(demo_state())
}

pub async fn json_body(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: &Router, host: &str, uri: &str) -> (StatusCode, Value) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("host", host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    (status, json_body(res).await)
}

pub async fn post_json(app: &Router, host: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("host", host)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    (status, json_body(res).await)
}
