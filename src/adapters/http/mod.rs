//! HTTP adapters - axum request handling.
//!
//! The planner module owns the endpoints; `app_router` adds static assets
//! and the middleware stack.

mod app;
pub mod planner;

// Re-export key types for convenience
pub use app::app_router;
pub use planner::{planner_router, PlannerApiError, PlannerAppState};
