//! Domain layer containing request types and prompt construction.
//!
//! # Module Organization
//!
//! - `trip` - Transient request types, field validation and generated content
//! - `prompt` - Fixed prompt templates for each planner operation

pub mod prompt;
pub mod trip;

pub use trip::{
    validate_destination, FieldError, GeneratedContent, IdeasRequest, TripRequest, UpdateRequest,
};
