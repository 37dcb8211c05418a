//! Application layer - Command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each planner operation is a handler that owns validation, prompt
//! construction, generation and page rendering for one request.

pub mod handlers;

pub use handlers::planner::{
    ContentGenerator, CreatePlanHandler, ExploreDestinationHandler, PlannerError,
    QuickIdeasHandler, UpdatePlanHandler,
};
