//! Route definitions for the Sprout API
//!
//! Organizes all API routes and applies middleware. Post routes are
//! grouped behind the auth gate via `route_layer`, so the gate runs
//! before handler dispatch for every protected operation and nothing
//! is admitted without a resolved identity.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod health;
mod posts;
mod reports;
mod users;

#[cfg(test)]
mod gate_tests;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/:id/like", post(posts::like_post))
        .route("/posts/:id/comment", post(posts::comment_post))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::auth::require_auth,
        ));

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users", get(users::list_users))
        .route("/report", post(reports::submit_report))
        .merge(protected)
}
