//! Common test utilities for integration tests
//!
//! These suites need a real PostgreSQL database; point DATABASE_URL at
//! one and run with: cargo test --features integration -- --ignored

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sprout_backend::{config::AppConfig, routes, state::AppState};
use sqlx::PgPool;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: PgPool,
}

impl TestApp {
    /// Create a new test application against a real database
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }

        let pool = PgPool::connect(&config.database.url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), config);
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request, optionally with a bearer token
    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Make a POST request with a JSON body, optionally with a bearer token
    pub async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Register a user and log in, returning the profile and token
    pub async fn register_and_login(
        &self,
        email: &str,
        password: &str,
    ) -> (serde_json::Value, String) {
        let body = serde_json::json!({"username": email, "password": password});

        let (status, _) = self.post("/api/register", &body, None).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, response) = self.post("/api/login", &body, None).await;
        assert_eq!(status, StatusCode::OK);

        let token = response["token"].as_str().unwrap().to_string();
        (response["user"].clone(), token)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }
}

/// A unique email per test run, so suites can re-run against the same
/// database without colliding on the unique index.
pub fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}
