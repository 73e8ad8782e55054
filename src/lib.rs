//! B2B Portal API.
//!
//! This is the backend of a financial B2B portal. Authenticated company
//! users can view account balances, browse deposit/withdrawal history,
//! submit deposit and withdrawal requests, and look up payment receivers.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx; business rules live in stored
//!   procedures the routes invoke
//! - **Authentication**: Bearer session tokens with SHA-256 hashing and
//!   login-email normalization
//! - **Upstream**: A third-party payments API (receiver lookups) reached
//!   through a shared reqwest client
//! - **Notifications**: Best-effort email and chat messages on submissions
//! - **Format**: JSON requests/responses

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router.
///
/// # Route Groups
///
/// - Public: health check and the signature-authenticated payments webhook
/// - Authenticated (`/api/v1`): everything else, behind the session
///   middleware
///
/// The portal UI is a browser application served from another origin, so a
/// permissive CORS layer is applied; authentication is bearer-token based,
/// not cookie based.
pub fn app(state: Arc<AppState>) -> Router {
    // Create authenticated routes (API endpoints)
    let authenticated_routes = Router::new()
        // Balance routes
        .route("/api/v1/accounts", get(handlers::accounts::list_accounts))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        // Deposit request routes
        .route("/api/v1/deposits", post(handlers::deposits::create_deposit))
        .route("/api/v1/deposits", get(handlers::deposits::list_deposits))
        // Withdrawal request routes
        .route(
            "/api/v1/withdrawals",
            post(handlers::withdrawals::create_withdrawal),
        )
        .route(
            "/api/v1/withdrawals",
            get(handlers::withdrawals::list_withdrawals),
        )
        // Withdrawal limits
        .route("/api/v1/limits", get(handlers::limits::get_limits))
        // Payments API proxies
        .route(
            "/api/v1/payments/receiver",
            get(handlers::payments::lookup_receiver),
        )
        .route(
            "/api/v1/payments/deposit-receiver",
            get(handlers::payments::deposit_receiver),
        )
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine authenticated routes with public routes
    Router::new()
        // Public routes (no session required)
        .route("/health", get(handlers::health::health_check))
        .route(
            "/webhooks/payments",
            post(handlers::webhooks::payments_webhook),
        )
        // Merge authenticated routes
        .merge(authenticated_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // The portal UI runs on another origin
        .layer(CorsLayer::permissive())
        // Share application state with all handlers via State extraction
        .with_state(state)
}
