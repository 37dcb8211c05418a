//! Trip-planning request types.
//!
//! Every type here lives for exactly one request/response cycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A required input field was present but blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

fn require(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Blank(field))
    } else {
        Ok(())
    }
}

/// Parameters for a new travel plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub interests: String,
    pub budget: String,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("destination", &self.destination)?;
        require("start_date", &self.start_date)?;
        require("end_date", &self.end_date)?;
        require("interests", &self.interests)?;
        require("budget", &self.budget)?;
        Ok(())
    }
}

/// A previously generated plan plus the user's revision instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub current_plan: String,
    pub update_instruction: String,
}

impl UpdateRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("current_plan", &self.current_plan)?;
        require("update_request", &self.update_instruction)?;
        Ok(())
    }
}

/// Inputs for a short list of activity ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeasRequest {
    pub destination: String,
    pub interest: String,
}

impl IdeasRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        require("destination", &self.destination)?;
        require("interest", &self.interest)?;
        Ok(())
    }
}

/// Validates a bare destination name.
pub fn validate_destination(destination: &str) -> Result<(), FieldError> {
    require("destination", destination)
}

/// Model output: the markdown as returned and its HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub markdown: String,
    pub html: String,
}
