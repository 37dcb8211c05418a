//! Route configuration for planner endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_plan, explore_destination, health, home, quick_ideas, update_plan, PlannerAppState,
};

/// Creates the planner router with all endpoints.
///
/// Routes:
/// - `GET /` - Landing page
/// - `POST /create-plan` - Generate a travel plan
/// - `POST /update-plan` - Revise a travel plan
/// - `GET /explore-destination/:destination` - Destination guide
/// - `GET /quick-ideas/:destination/:interest` - Activity ideas
/// - `GET /health` - Liveness check
pub fn planner_router() -> Router<PlannerAppState> {
    Router::new()
        .route("/", get(home))
        .route("/create-plan", post(create_plan))
        .route("/update-plan", post(update_plan))
        .route("/explore-destination/:destination", get(explore_destination))
        .route("/quick-ideas/:destination/:interest", get(quick_ideas))
        .route("/health", get(health))
}
