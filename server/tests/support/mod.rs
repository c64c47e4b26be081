#![allow(dead_code)]
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use roledash_server::{app::build_router, config::Config, state::AppState};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"roledash\"></div></body></html>";
pub const BACKEND_URL: &str = "https://api.roledash.test/api/v1";

/// Built-frontend stand-in: `index.html` plus one asset.
pub fn static_site() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
    fs::write(dir.path().join("app.js"), "console.log('roledash');").expect("write asset");
    dir
}

pub fn test_config(site: &TempDir) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        static_dir: site.path().to_path_buf(),
        backend_url: BACKEND_URL.into(),
    }
}

pub fn test_router(site: &TempDir) -> Router {
    build_router(AppState::new(test_config(site)))
}

pub fn token_for(claims: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

pub fn admin_token() -> String {
    token_for(json!({ "id": "a1", "name": "Admin", "email": "admin@example.com", "role": "admin" }))
}

pub fn user_token() -> String {
    token_for(json!({ "id": "u1", "name": "User", "email": "user@example.com", "role": "user" }))
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("theme=light; accessToken={}", token));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    String::from_utf8_lossy(&bytes).into_owned()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}
