//! Full application router: planner routes, static assets and middleware.

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::planner::{planner_router, PlannerAppState};

/// Builds the router served by the binary.
///
/// `/static/*` is served from `server.static_dir`. Every request is traced
/// and bounded by `server.request_timeout_secs`.
pub fn app_router(state: PlannerAppState, server: &ServerConfig) -> Router {
    planner_router()
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}
