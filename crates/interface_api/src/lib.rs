//! HTTP API Layer
//!
//! This crate provides the REST API for the settlement engine using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers over the policy registry port
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(registry, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_store::InMemoryPolicyRegistry;

use crate::config::ApiConfig;
use crate::handlers::{health, policy};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<InMemoryPolicyRegistry>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `registry` - Policy store shared by all handlers
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(registry: Arc<InMemoryPolicyRegistry>, config: ApiConfig) -> Router {
    let state = AppState { registry, config };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Policy routes
    let policy_routes = Router::new()
        .route("/", post(policy::create_policy))
        .route("/:id", get(policy::get_policy))
        .route("/:id/state", get(policy::get_state))
        .route("/:id/measures/:index", put(policy::set_threshold))
        .route("/:id/measures/:index", get(policy::get_threshold))
        .route("/:id/submit", post(policy::submit_policy))
        .route("/:id/conditions", post(policy::report_conditions))
        .route("/:id/facts", get(policy::get_facts));

    let api_routes = Router::new()
        .nest("/policies", policy_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
