#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pokedex_api::{app, cors_layer, open, AppState, Pokemon, PokemonStore};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// A router over a fresh file-backed database. Keep `_dir` alive for the test's duration.
pub struct TestApp {
    pub _dir: TempDir,
    pub store: PokemonStore,
    pub router: Router,
}

pub async fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("pokemon.db"), 5).await.unwrap();
    let router = app(AppState::new(store.clone()), cors_layer(TEST_ORIGIN).unwrap());
    TestApp {
        _dir: dir,
        store,
        router,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("body is not JSON ({}): {}", e, String::from_utf8_lossy(&self.body))
        })
    }

    pub fn pokemon(&self) -> Pokemon {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn error_kind(&self) -> String {
        self.json()["error"]["kind"].as_str().unwrap().to_string()
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(router, req).await
}

pub async fn send_request(router: &Router, req: Request<Body>) -> TestResponse {
    let resp = router.clone().oneshot(req).await.unwrap();
    let (parts, body) = resp.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body: body.to_vec(),
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, body: Value) -> TestResponse {
    send(router, Method::POST, "/pokemon", Some(body)).await
}

pub async fn patch(router: &Router, uri: &str, body: Value) -> TestResponse {
    send(router, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::DELETE, uri, None).await
}
