//! Planner command handlers.
//!
//! One handler per operation, all sharing the [`ContentGenerator`] pipeline:
//! validate the request, build the prompt, generate, render the page.

mod create_plan;
mod error;
mod explore_destination;
mod generation;
mod quick_ideas;
mod update_plan;

pub use create_plan::CreatePlanHandler;
pub use error::PlannerError;
pub use explore_destination::{ExploreDestinationHandler, SUGGESTED_INTERESTS};
pub use generation::ContentGenerator;
pub use quick_ideas::QuickIdeasHandler;
pub use update_plan::UpdatePlanHandler;
