//! Common test utilities for API integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use fleet_api::{AppState, create_router};
use fleet_common::{AppConfig, RecordStore, models::SessionPolicy};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// A router wired to a store the test can inspect directly
pub struct TestApp {
    pub router: Router,
    pub store: RecordStore,
}

impl TestApp {
    pub fn new(store: RecordStore, config: AppConfig) -> Self {
        let router = create_router(AppState::new(store.clone(), config));
        Self { router, store }
    }

    /// Send a request and decode the JSON response body
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a prebuilt request and decode the JSON response body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, None, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, None, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None, None).await
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/login",
                json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }
}

/// App backed by the demo data set
pub async fn seeded_app() -> TestApp {
    let store = RecordStore::seeded(SessionPolicy::NeverExpires)
        .await
        .expect("Failed to seed store");
    TestApp::new(store, AppConfig::default())
}

/// App backed by an empty store
pub fn empty_app() -> TestApp {
    TestApp::new(RecordStore::default(), AppConfig::default())
}

/// Identifier of a seeded user looked up by username
pub async fn user_id(app: &TestApp, username: &str) -> String {
    app.store
        .users
        .get_by_username(username)
        .await
        .expect("user is seeded")
        .id
        .to_string()
}
