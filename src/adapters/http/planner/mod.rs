//! HTTP adapter for the planner.
//!
//! # Endpoints
//!
//! - `GET /` - Landing page with the trip form
//! - `POST /create-plan` - Form-encoded trip parameters, returns the plan page
//! - `POST /update-plan` - Form-encoded plan and instruction, returns the revised plan
//! - `GET /explore-destination/{destination}` - Destination guide page
//! - `GET /quick-ideas/{destination}/{interest}` - Activity ideas page
//! - `GET /health` - JSON liveness check

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{PlannerApiError, PlannerAppState};
pub use routes::planner_router;
