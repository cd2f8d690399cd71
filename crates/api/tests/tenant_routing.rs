mod common;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode, Uri},
    middleware, Json, Router,
};
use serde_json::{json, Value};
use tenancy_api::routing::{tenant_routing_middleware, TenantContext};

use common::{demo_app, demo_state, get, post_json};

/// Reports what the downstream layer received after routing
async fn echo(
    uri: Uri,
    headers: HeaderMap,
    context: Option<Extension<TenantContext>>,
) -> Json<Value> {
    Json(json!({
        "uri": uri.to_string(),
        "x_tenant": headers.get("x-tenant").and_then(|v| v.to_str().ok()),
        "context": context.map(|Extension(c)| c.subdomain),
    }))
}

fn echo_app() -> Router {
    let inner = Router::new().fallback(echo);
    Router::new()
        .fallback_service(inner)
        .layer(middleware::from_fn_with_state(
            demo_state(),
            tenant_routing_middleware,
        ))
}

#[tokio::test]
async fn tenant_subdomain_is_rewritten() {
    let (status, body) = get(&echo_app(), "tenant1.example.com", "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uri"], "/tenant/dashboard");
    assert_eq!(body["x_tenant"], "tenant1");
    assert_eq!(body["context"], "tenant1");
}

#[tokio::test]
async fn root_path_is_rewritten_with_trailing_slash() {
    let (_, body) = get(&echo_app(), "acme.example.com:3000", "/").await;
    assert_eq!(body["uri"], "/tenant/");
    assert_eq!(body["context"], "acme");
}

#[tokio::test]
async fn query_string_survives_rewrite() {
    let (_, body) = get(
        &echo_app(),
        "tenant1.example.com",
        "/dashboard/reports?tab=users&page=2",
    )
    .await;
    assert_eq!(body["uri"], "/tenant/dashboard/reports?tab=users&page=2");
}

#[tokio::test]
async fn deep_host_uses_first_label() {
    let (_, body) = get(&echo_app(), "a.b.example.com", "/x").await;
    assert_eq!(body["uri"], "/tenant/x");
    assert_eq!(body["context"], "a");
}

#[tokio::test]
async fn non_tenant_hosts_pass_through() {
    let cases = [
        ("www.example.com", "/"),
        ("example.com", "/"),
        ("localhost:3000", "/anything"),
        ("192.168.1.1", "/x"),
        ("999.999.999.999", "/x"),
        ("", "/"),
    ];

    for (host, path) in cases {
        let (status, body) = get(&echo_app(), host, path).await;
        assert_eq!(status, StatusCode::OK, "host {:?}", host);
        assert_eq!(body["uri"], path, "host {:?}", host);
        assert_eq!(body["context"], Value::Null, "host {:?}", host);
        assert_eq!(body["x_tenant"], Value::Null, "host {:?}", host);
    }
}

#[tokio::test]
async fn excluded_paths_are_not_rewritten() {
    for path in ["/api/tenants", "/_next/static/app.js", "/favicon.ico", "/health"] {
        let (_, body) = get(&echo_app(), "tenant1.example.com", path).await;
        assert_eq!(body["uri"], path);
        assert_eq!(body["context"], Value::Null);
    }
}

#[tokio::test]
async fn tenant_host_serves_tenant_home() {
    let (status, body) = get(&demo_app(), "tenant1.example.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["section"], "home");
    assert_eq!(body["name"], "Acme Corp");
    assert_eq!(body["subdomain"], "tenant1");
    assert_eq!(body["host"], "tenant1.yourdomain.com");
    assert_eq!(body["metadata"]["title"], "Acme Corp Dashboard");
    assert_eq!(body["metadata"]["site_name"], "Acme Corp");
    assert_eq!(body["theme"]["--tenant-primary"], "#3B82F6");
}

#[tokio::test]
async fn tenant_host_serves_dashboard() {
    let (status, body) = get(&demo_app(), "docs.example.com", "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["section"], "dashboard");
    assert_eq!(body["name"], "Documentation");
    assert_eq!(body["theme"]["--tenant-primary"], "#10B981");
}

#[tokio::test]
async fn unknown_tenant_is_not_found() {
    let (status, body) = get(&demo_app(), "nobody.example.com", "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["metadata"]["title"], "Tenant Not Found");
}

#[tokio::test]
async fn reserved_words_other_than_www_fail_lookup() {
    let (status, _) = get(&demo_app(), "admin.example.com", "/dashboard").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bare_domain_serves_landing() {
    let (status, body) = get(&demo_app(), "www.example.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    let tenants = body["tenants"].as_array().unwrap();
    assert_eq!(tenants.len(), 3);
    assert_eq!(tenants[0]["subdomain"], "blog");
    assert_eq!(tenants[0]["url"], "https://blog.yourdomain.com");
}

#[tokio::test]
async fn spoofed_header_does_not_select_tenant() {
    let app = demo_app();
    let res = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/tenant/dashboard")
            .header("host", "example.com")
            .header("x-tenant", "tenant1")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = common::json_body(res).await;
    assert_eq!(body["metadata"]["title"], "Tenant Not Found");
}

#[tokio::test]
async fn tenant_created_after_miss_becomes_visible() {
    let app = demo_app();

    let (status, _) = get(&app, "nova.example.com", "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post_json(
        &app,
        "example.com",
        "/api/tenants",
        r#"{"name":"Nova","subdomain":"nova"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "nova.example.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["title"], "Nova Dashboard");
}
